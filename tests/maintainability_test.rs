mod common;

use common::*;
use pretty_assertions::assert_eq;
use qualityrate::component::{ComponentBuilder, ComponentTree, ComponentType, FileAttributes};
use qualityrate::config::{DebtRatingGrid, RatingSettings};
use qualityrate::measure::Measure;
use qualityrate::metrics::keys;
use qualityrate::newcode::{InMemoryNewLines, PeriodIssueClassifier};
use qualityrate::Rating;

#[test]
fn debt_ratio_of_a_single_file() {
    let mut fixture = Fixture::new(simple_tree());
    fixture
        .raw(FILE_1_REF, keys::NCLOC, Measure::int(10))
        .raw(FILE_1_REF, keys::TECHNICAL_DEBT, Measure::long(100));
    fixture.compute();

    assert_eq!(fixture.long(FILE_1_REF, keys::DEVELOPMENT_COST), Some(300));
    assert_eq!(fixture.double(FILE_1_REF, keys::SQALE_DEBT_RATIO), Some(33.3));
    assert_eq!(fixture.rating(FILE_1_REF, keys::MAINTAINABILITY_RATING), Some(Rating::D));
    assert_eq!(
        fixture.long(FILE_1_REF, keys::EFFORT_TO_REACH_MAINTAINABILITY_RATING_A),
        Some(85)
    );
}

#[test]
fn development_cost_is_summed_up_the_tree() {
    let mut fixture = Fixture::new(simple_tree());
    fixture
        .raw(FILE_1_REF, keys::NCLOC, Measure::int(10))
        .raw(FILE_2_REF, keys::NCLOC, Measure::int(20))
        .raw(FILE_1_REF, keys::TECHNICAL_DEBT, Measure::long(100))
        .raw(DIRECTORY_REF, keys::TECHNICAL_DEBT, Measure::long(100))
        .raw(ROOT_REF, keys::TECHNICAL_DEBT, Measure::long(100));
    fixture.compute();

    assert_eq!(fixture.long(DIRECTORY_REF, keys::DEVELOPMENT_COST), Some(900));
    assert_eq!(fixture.long(ROOT_REF, keys::DEVELOPMENT_COST), Some(900));
    assert_eq!(fixture.double(ROOT_REF, keys::SQALE_DEBT_RATIO), Some(11.1));
    assert_eq!(fixture.rating(ROOT_REF, keys::MAINTAINABILITY_RATING), Some(Rating::C));
    assert_eq!(
        fixture.long(ROOT_REF, keys::EFFORT_TO_REACH_MAINTAINABILITY_RATING_A),
        Some(55)
    );
    // file 2 has no debt at all
    assert_eq!(fixture.double(FILE_2_REF, keys::SQALE_DEBT_RATIO), Some(0.0));
    assert_eq!(fixture.rating(FILE_2_REF, keys::MAINTAINABILITY_RATING), Some(Rating::A));
}

#[test]
fn language_specific_cost_applies_per_file() {
    let tree = ComponentTree::build(
        project(ROOT_REF)
            .child(file(2, Some("java")))
            .child(file(3, Some("xoo"))),
    )
    .unwrap();
    let settings = RatingSettings::default().with_language_cost("xoo", 10).unwrap();
    let mut fixture = Fixture::new(tree).with_settings(settings);
    fixture
        .raw(2, keys::NCLOC, Measure::int(10))
        .raw(3, keys::NCLOC, Measure::int(10));
    fixture.compute();

    assert_eq!(fixture.long(2, keys::DEVELOPMENT_COST), Some(300));
    assert_eq!(fixture.long(3, keys::DEVELOPMENT_COST), Some(100));
    assert_eq!(fixture.long(ROOT_REF, keys::DEVELOPMENT_COST), Some(400));
}

#[test]
fn unit_test_files_have_no_development_cost() {
    let test_file = ComponentBuilder::new(ComponentType::File, 2)
        .key("test-file")
        .uuid("test-uuid")
        .file_attributes(FileAttributes::new(true, Some("java"), 40));
    let tree = ComponentTree::build(project(ROOT_REF).child(test_file)).unwrap();
    let mut fixture = Fixture::new(tree);
    fixture
        .raw(2, keys::NCLOC, Measure::int(40))
        .raw(2, keys::TECHNICAL_DEBT, Measure::long(60));
    fixture.compute();

    assert_eq!(fixture.long(2, keys::DEVELOPMENT_COST), Some(0));
    assert_eq!(fixture.double(2, keys::SQALE_DEBT_RATIO), Some(0.0));
    assert_eq!(fixture.rating(2, keys::MAINTAINABILITY_RATING), Some(Rating::A));
}

#[test]
fn new_debt_ratio_counts_new_code_lines_only() {
    let settings = RatingSettings::new(DebtRatingGrid::parse("0.1,0.2,0.5,1").unwrap(), 30).unwrap();
    let new_lines = InMemoryNewLines::available().with_new_lines(FILE_1_REF, [1, 2, 5]);
    let mut fixture = Fixture::new(simple_tree())
        .with_settings(settings)
        .with_classifier(PeriodIssueClassifier::pull_request())
        .with_new_lines(new_lines);
    fixture
        .raw(FILE_1_REF, keys::NCLOC_DATA, Measure::string("1=1;2=1;3=1;4=1;5=0"))
        .raw(FILE_1_REF, keys::NEW_TECHNICAL_DEBT, Measure::long(50));
    fixture.compute();

    assert_eq!(fixture.long(FILE_1_REF, keys::NEW_DEVELOPMENT_COST), Some(60));
    assert_eq!(fixture.double(FILE_1_REF, keys::NEW_SQALE_DEBT_RATIO), Some(83.3));
    assert_eq!(
        fixture.rating(FILE_1_REF, keys::NEW_MAINTAINABILITY_RATING),
        Some(Rating::D)
    );
    // file 2 has no new lines: nothing new to develop
    assert_eq!(fixture.long(FILE_2_REF, keys::NEW_DEVELOPMENT_COST), Some(0));
    assert_eq!(fixture.double(ROOT_REF, keys::NEW_SQALE_DEBT_RATIO), Some(83.3));
    assert_eq!(fixture.rating(ROOT_REF, keys::NEW_MAINTAINABILITY_RATING), Some(Rating::D));
}

#[test]
fn new_maintainability_absent_when_new_lines_unknown() {
    let mut fixture =
        Fixture::new(simple_tree()).with_classifier(PeriodIssueClassifier::pull_request());
    fixture
        .raw(FILE_1_REF, keys::NCLOC_DATA, Measure::string("1=1"))
        .raw(FILE_1_REF, keys::NEW_TECHNICAL_DEBT, Measure::long(50));
    fixture.compute();

    assert!(fixture.added(FILE_1_REF, keys::NEW_DEVELOPMENT_COST).is_none());
    assert!(fixture.added(ROOT_REF, keys::NEW_SQALE_DEBT_RATIO).is_none());
    assert!(fixture.added(ROOT_REF, keys::NEW_MAINTAINABILITY_RATING).is_none());
}

#[test]
fn new_maintainability_absent_without_new_code_reference() {
    let new_lines = InMemoryNewLines::available().with_new_lines(FILE_1_REF, [1, 2]);
    let mut fixture = Fixture::new(simple_tree()).with_new_lines(new_lines);
    fixture
        .raw(FILE_1_REF, keys::NCLOC_DATA, Measure::string("1=1;2=1"))
        .raw(FILE_1_REF, keys::NEW_TECHNICAL_DEBT, Measure::long(50));
    fixture.compute();

    for reference in [ROOT_REF, DIRECTORY_REF, FILE_1_REF] {
        assert!(fixture.added(reference, keys::NEW_DEVELOPMENT_COST).is_none());
        assert!(fixture.added(reference, keys::NEW_SQALE_DEBT_RATIO).is_none());
        assert!(fixture.added(reference, keys::NEW_MAINTAINABILITY_RATING).is_none());
    }
}
