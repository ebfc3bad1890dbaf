//! Component tree: PROJECT → DIRECTORY → FILE (or the views hierarchy).
//!
//! Nodes live in an arena indexed by position; each node keeps the indexes of
//! its children in document order. The tree is built once through
//! [`ComponentBuilder`] and is read-only afterwards.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentType {
    Project,
    Directory,
    File,
    View,
    Subview,
    ProjectView,
}

impl ComponentType {
    /// Types of a project analysis report
    pub fn is_report_type(self) -> bool {
        matches!(
            self,
            ComponentType::Project | ComponentType::Directory | ComponentType::File
        )
    }

    /// Types of a portfolio (views) hierarchy
    pub fn is_views_type(self) -> bool {
        !self.is_report_type()
    }

    /// Types that can be the root of a tree
    pub fn is_root_type(self) -> bool {
        matches!(self, ComponentType::Project | ComponentType::View)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentType::Project => "PROJECT",
            ComponentType::Directory => "DIRECTORY",
            ComponentType::File => "FILE",
            ComponentType::View => "VIEW",
            ComponentType::Subview => "SUBVIEW",
            ComponentType::ProjectView => "PROJECT_VIEW",
        };
        f.write_str(name)
    }
}

/// Per-file attributes supplied by the report reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FileAttributes {
    #[serde(default)]
    pub is_unit_test: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub lines: u32,
}

impl FileAttributes {
    pub fn new(is_unit_test: bool, language: Option<&str>, lines: u32) -> Self {
        Self {
            is_unit_test,
            language: language.map(str::to_string),
            lines,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Component {
    reference: u32,
    component_type: ComponentType,
    key: String,
    uuid: String,
    file_attributes: Option<FileAttributes>,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl Component {
    /// Stable per-analysis identifier
    pub fn reference(&self) -> u32 {
        self.reference
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn file_attributes(&self) -> Option<&FileAttributes> {
        self.file_attributes.as_ref()
    }

    pub fn is_file(&self) -> bool {
        self.component_type == ComponentType::File
    }

    pub fn is_test_file(&self) -> bool {
        self.is_file()
            && self
                .file_attributes
                .as_ref()
                .is_some_and(|attributes| attributes.is_unit_test)
    }

    pub fn language(&self) -> Option<&str> {
        self.file_attributes
            .as_ref()
            .and_then(|attributes| attributes.language.as_deref())
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Arena-backed, immutable component tree
#[derive(Debug, Clone)]
pub struct ComponentTree {
    nodes: Vec<Component>,
    by_ref: HashMap<u32, usize>,
}

#[allow(clippy::len_without_is_empty)]
impl ComponentTree {
    pub fn build(root: ComponentBuilder) -> Result<Self> {
        let mut tree = ComponentTree {
            nodes: Vec::new(),
            by_ref: HashMap::new(),
        };
        tree.insert(root, None)?;
        Ok(tree)
    }

    fn insert(&mut self, builder: ComponentBuilder, parent: Option<usize>) -> Result<usize> {
        let ComponentBuilder {
            reference,
            component_type,
            key,
            uuid,
            file_attributes,
            children,
        } = builder;

        if self.by_ref.contains_key(&reference) {
            return Err(Error::invalid_value(format!(
                "component ref {reference} is used more than once"
            )));
        }
        if file_attributes.is_some() && component_type != ComponentType::File {
            return Err(Error::invalid_value(format!(
                "component {reference} of type {component_type} cannot have file attributes"
            )));
        }
        let key = key.ok_or(Error::NullArgument("key"))?;
        let uuid = uuid.ok_or(Error::NullArgument("uuid"))?;

        let index = self.nodes.len();
        self.nodes.push(Component {
            reference,
            component_type,
            key,
            uuid,
            file_attributes,
            parent,
            children: Vec::with_capacity(children.len()),
        });
        self.by_ref.insert(reference, index);

        for child in children {
            let child_index = self.insert(child, Some(index))?;
            self.nodes[index].children.push(child_index);
        }
        Ok(index)
    }

    pub fn root(&self) -> &Component {
        &self.nodes[0]
    }

    pub fn get(&self, reference: u32) -> Option<&Component> {
        self.by_ref.get(&reference).map(|&index| &self.nodes[index])
    }

    pub fn component(&self, reference: u32) -> Result<&Component> {
        self.get(reference)
            .ok_or(Error::UnknownComponent(reference))
    }

    pub fn children<'a>(&'a self, component: &'a Component) -> impl Iterator<Item = &'a Component> + 'a {
        component.children.iter().map(move |&index| &self.nodes[index])
    }

    pub fn parent(&self, component: &Component) -> Option<&Component> {
        component.parent.map(|index| &self.nodes[index])
    }

    /// Number of components; never 0, a built tree always has its root
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Components in depth-first pre-order (parents before children)
    pub fn pre_order(&self) -> Vec<&Component> {
        let mut ordered = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![0usize];
        while let Some(index) = stack.pop() {
            let component = &self.nodes[index];
            ordered.push(component);
            stack.extend(component.children.iter().rev());
        }
        ordered
    }

    /// Components in depth-first post-order (children before parents)
    pub fn post_order(&self) -> Vec<&Component> {
        let mut ordered = Vec::with_capacity(self.nodes.len());
        self.collect_post_order(0, &mut ordered);
        ordered
    }

    fn collect_post_order<'a>(&'a self, index: usize, ordered: &mut Vec<&'a Component>) {
        let component = &self.nodes[index];
        for &child in &component.children {
            self.collect_post_order(child, ordered);
        }
        ordered.push(component);
    }
}

/// Nested builder used by report readers and tests to assemble a tree
#[derive(Debug, Clone)]
pub struct ComponentBuilder {
    reference: u32,
    component_type: ComponentType,
    key: Option<String>,
    uuid: Option<String>,
    file_attributes: Option<FileAttributes>,
    children: Vec<ComponentBuilder>,
}

impl ComponentBuilder {
    pub fn new(component_type: ComponentType, reference: u32) -> Self {
        Self {
            reference,
            component_type,
            key: None,
            uuid: None,
            file_attributes: None,
            children: Vec::new(),
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }

    pub fn file_attributes(mut self, attributes: FileAttributes) -> Self {
        self.file_attributes = Some(attributes);
        self
    }

    pub fn child(mut self, child: ComponentBuilder) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ComponentBuilder>) -> Self {
        self.children.extend(children);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(component_type: ComponentType, reference: u32) -> ComponentBuilder {
        ComponentBuilder::new(component_type, reference)
            .key(format!("key-{reference}"))
            .uuid(format!("uuid-{reference}"))
    }

    fn sample_tree() -> ComponentTree {
        ComponentTree::build(
            node(ComponentType::Project, 1).child(
                node(ComponentType::Directory, 11)
                    .child(node(ComponentType::File, 111))
                    .child(node(ComponentType::File, 112)),
            ),
        )
        .unwrap()
    }

    #[test]
    fn orders_follow_document_order() {
        let tree = sample_tree();
        let pre: Vec<u32> = tree.pre_order().iter().map(|c| c.reference()).collect();
        let post: Vec<u32> = tree.post_order().iter().map(|c| c.reference()).collect();
        assert_eq!(pre, vec![1, 11, 111, 112]);
        assert_eq!(post, vec![111, 112, 11, 1]);
    }

    #[test]
    fn root_only_tree_has_one_component() {
        let tree = ComponentTree::build(node(ComponentType::Project, 1)).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.parent(tree.root()).is_none());
    }

    #[test]
    fn navigation_by_ref() {
        let tree = sample_tree();
        let file = tree.component(112).unwrap();
        assert_eq!(tree.parent(file).unwrap().reference(), 11);
        assert_eq!(tree.root().reference(), 1);
        assert!(matches!(tree.component(9), Err(Error::UnknownComponent(9))));
    }

    #[test]
    fn duplicate_refs_are_rejected() {
        let result = ComponentTree::build(
            node(ComponentType::Project, 1).child(node(ComponentType::File, 1)),
        );
        assert!(matches!(result, Err(Error::InvalidValue(_))));
    }

    #[test]
    fn missing_key_is_a_null_argument() {
        let result = ComponentTree::build(ComponentBuilder::new(ComponentType::Project, 1));
        assert!(matches!(result, Err(Error::NullArgument("key"))));
    }

    #[test]
    fn file_attributes_only_on_files() {
        let result = ComponentTree::build(
            node(ComponentType::Directory, 2).file_attributes(FileAttributes::default()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_file_flag_requires_file_attributes() {
        let tree = ComponentTree::build(
            node(ComponentType::Project, 1)
                .child(
                    node(ComponentType::File, 2)
                        .file_attributes(FileAttributes::new(true, Some("rust"), 10)),
                )
                .child(node(ComponentType::File, 3)),
        )
        .unwrap();
        assert!(tree.component(2).unwrap().is_test_file());
        assert!(!tree.component(3).unwrap().is_test_file());
        assert_eq!(tree.component(2).unwrap().language(), Some("rust"));
    }
}
