// Test utility module for qualityrate integration tests
#![allow(dead_code)]

use qualityrate::component::{ComponentBuilder, ComponentTree, ComponentType, FileAttributes};
use qualityrate::config::RatingSettings;
use qualityrate::crawler::CrawlContext;
use qualityrate::issue::{Issue, IssueRepository};
use qualityrate::measure::{Measure, MeasureRepository};
use qualityrate::metrics::MetricCatalog;
use qualityrate::newcode::{InMemoryNewLines, PeriodIssueClassifier};
use qualityrate::{compute_measures, Rating};

pub const ROOT_REF: u32 = 1;
pub const DIRECTORY_REF: u32 = 2;
pub const FILE_1_REF: u32 = 3;
pub const FILE_2_REF: u32 = 4;

pub fn project(reference: u32) -> ComponentBuilder {
    ComponentBuilder::new(ComponentType::Project, reference)
        .key(format!("project-{reference}"))
        .uuid(format!("uuid-{reference}"))
}

pub fn directory(reference: u32) -> ComponentBuilder {
    ComponentBuilder::new(ComponentType::Directory, reference)
        .key(format!("dir-{reference}"))
        .uuid(format!("uuid-{reference}"))
}

pub fn file(reference: u32, language: Option<&str>) -> ComponentBuilder {
    ComponentBuilder::new(ComponentType::File, reference)
        .key(format!("file-{reference}"))
        .uuid(format!("uuid-{reference}"))
        .file_attributes(FileAttributes::new(false, language, 100))
}

/// PROJECT(1) > DIRECTORY(2) > {FILE(3), FILE(4)}
pub fn simple_tree() -> ComponentTree {
    ComponentTree::build(
        project(ROOT_REF).child(
            directory(DIRECTORY_REF)
                .child(file(FILE_1_REF, Some("java")))
                .child(file(FILE_2_REF, Some("java"))),
        ),
    )
    .expect("valid tree")
}

/// Everything one crawl needs, owned in one place
pub struct Fixture {
    pub tree: ComponentTree,
    pub catalog: MetricCatalog,
    pub settings: RatingSettings,
    pub measures: MeasureRepository,
    pub issues: IssueRepository,
    pub classifier: PeriodIssueClassifier,
    pub new_lines: InMemoryNewLines,
}

impl Fixture {
    pub fn new(tree: ComponentTree) -> Self {
        Self {
            tree,
            catalog: MetricCatalog::core(),
            settings: RatingSettings::default(),
            measures: MeasureRepository::new(),
            issues: IssueRepository::new(),
            classifier: PeriodIssueClassifier::disabled(),
            new_lines: InMemoryNewLines::unavailable(),
        }
    }

    pub fn with_settings(mut self, settings: RatingSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_classifier(mut self, classifier: PeriodIssueClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_new_lines(mut self, new_lines: InMemoryNewLines) -> Self {
        self.new_lines = new_lines;
        self
    }

    pub fn raw(&mut self, reference: u32, key: &str, measure: Measure) -> &mut Self {
        let component = self.tree.component(reference).expect("known component");
        let metric = self.catalog.get(key).expect("known metric");
        self.measures
            .load_raw(component, metric, measure)
            .expect("raw measure accepted");
        self
    }

    pub fn issue(&mut self, reference: u32, issue: Issue) -> &mut Self {
        self.issues.add(reference, issue);
        self
    }

    pub fn context(&mut self) -> CrawlContext<'_> {
        CrawlContext {
            tree: &self.tree,
            catalog: &self.catalog,
            measures: &mut self.measures,
            issues: &self.issues,
            settings: &self.settings,
            new_issues: &self.classifier,
            new_lines: &self.new_lines,
        }
    }

    pub fn compute(&mut self) {
        compute_measures(&mut self.context()).expect("crawl succeeds");
    }

    pub fn added(&self, reference: u32, key: &str) -> Option<&Measure> {
        let component = self.tree.component(reference).expect("known component");
        let metric = self.catalog.get(key).expect("known metric");
        self.measures.get_added_measure(component, metric)
    }

    pub fn rating(&self, reference: u32, key: &str) -> Option<Rating> {
        self.added(reference, key)
            .and_then(Measure::int_value)
            .map(|index| Rating::from_index(index).expect("valid rating index"))
    }

    pub fn double(&self, reference: u32, key: &str) -> Option<f64> {
        self.added(reference, key).and_then(Measure::double_value)
    }

    pub fn int(&self, reference: u32, key: &str) -> Option<i32> {
        self.added(reference, key).and_then(Measure::int_value)
    }

    pub fn long(&self, reference: u32, key: &str) -> Option<i64> {
        self.added(reference, key).and_then(Measure::long_value)
    }
}
