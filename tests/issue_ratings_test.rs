mod common;

use chrono::{TimeZone, Utc};
use common::*;
use pretty_assertions::assert_eq;
use qualityrate::issue::{ImpactSeverity, Issue, IssueStatus, IssueType, Severity, SoftwareQuality};
use qualityrate::measure::Measure;
use qualityrate::metrics::keys;
use qualityrate::newcode::{InMemoryNewLines, Period, PeriodIssueClassifier};
use qualityrate::Rating;

fn bug(key: &str, severity: Severity) -> Issue {
    Issue::new(key, IssueType::Bug, severity)
}

#[test]
fn directory_takes_worst_rating_of_its_files() {
    let mut fixture = Fixture::new(simple_tree());
    fixture
        .issue(FILE_1_REF, bug("i1", Severity::Major))
        .issue(FILE_2_REF, bug("i2", Severity::Critical))
        .issue(FILE_2_REF, bug("i3", Severity::Minor));
    fixture.compute();

    assert_eq!(fixture.rating(FILE_1_REF, keys::RELIABILITY_RATING), Some(Rating::C));
    assert_eq!(fixture.rating(FILE_2_REF, keys::RELIABILITY_RATING), Some(Rating::D));
    assert_eq!(fixture.rating(DIRECTORY_REF, keys::RELIABILITY_RATING), Some(Rating::D));
    assert_eq!(fixture.rating(ROOT_REF, keys::RELIABILITY_RATING), Some(Rating::D));
    // no vulnerability anywhere
    assert_eq!(fixture.rating(ROOT_REF, keys::SECURITY_RATING), Some(Rating::A));
}

#[test]
fn vulnerabilities_drive_security_rating_only() {
    let mut fixture = Fixture::new(simple_tree());
    fixture.issue(
        FILE_1_REF,
        Issue::new("v1", IssueType::Vulnerability, Severity::Blocker),
    );
    fixture.compute();

    assert_eq!(fixture.rating(ROOT_REF, keys::SECURITY_RATING), Some(Rating::E));
    assert_eq!(fixture.rating(ROOT_REF, keys::RELIABILITY_RATING), Some(Rating::A));
}

#[test]
fn resolved_issues_and_code_smells_do_not_count() {
    let mut fixture = Fixture::new(simple_tree());
    fixture
        .issue(
            FILE_1_REF,
            bug("fixed", Severity::Blocker)
                .with_status(IssueStatus::Closed)
                .with_resolution("FIXED"),
        )
        .issue(
            FILE_2_REF,
            Issue::new("smell", IssueType::CodeSmell, Severity::Blocker),
        );
    fixture.compute();

    assert_eq!(fixture.rating(ROOT_REF, keys::RELIABILITY_RATING), Some(Rating::A));
    assert_eq!(fixture.rating(FILE_1_REF, keys::RELIABILITY_RATING), Some(Rating::A));
}

#[test]
fn software_quality_ratings_follow_impacts() {
    let mut fixture = Fixture::new(simple_tree());
    fixture
        .issue(
            FILE_1_REF,
            Issue::new("smell", IssueType::CodeSmell, Severity::Info)
                .with_impact(SoftwareQuality::Reliability, ImpactSeverity::High),
        )
        .issue(
            FILE_2_REF,
            bug("b", Severity::Info).with_impact(SoftwareQuality::Security, ImpactSeverity::Low),
        );
    fixture.compute();

    assert_eq!(
        fixture.rating(ROOT_REF, keys::SOFTWARE_QUALITY_RELIABILITY_RATING),
        Some(Rating::D)
    );
    assert_eq!(
        fixture.rating(ROOT_REF, keys::SOFTWARE_QUALITY_SECURITY_RATING),
        Some(Rating::B)
    );
    // legacy family ignores impacts: INFO bug is still A
    assert_eq!(fixture.rating(ROOT_REF, keys::RELIABILITY_RATING), Some(Rating::A));
}

#[test]
fn new_code_ratings_absent_without_period() {
    let new_lines = InMemoryNewLines::available().with_new_lines(FILE_1_REF, [1]);
    let mut fixture = Fixture::new(simple_tree()).with_new_lines(new_lines);
    fixture
        .raw(FILE_1_REF, keys::NCLOC_DATA, Measure::string("1=1"))
        .issue(FILE_1_REF, bug("i1", Severity::Blocker));
    fixture.compute();

    for key in [
        keys::NEW_RELIABILITY_RATING,
        keys::NEW_SECURITY_RATING,
        keys::NEW_SOFTWARE_QUALITY_RELIABILITY_RATING,
        keys::NEW_SOFTWARE_QUALITY_SECURITY_RATING,
        keys::NEW_SECURITY_REVIEW_RATING,
        keys::NEW_SECURITY_HOTSPOTS_REVIEWED,
        keys::NEW_DEVELOPMENT_COST,
        keys::NEW_SQALE_DEBT_RATIO,
        keys::NEW_MAINTAINABILITY_RATING,
    ] {
        assert!(fixture.added(ROOT_REF, key).is_none(), "{key} should be absent");
    }
}

#[test]
fn new_code_ratings_only_count_issues_after_period() {
    let period_date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut fixture = Fixture::new(simple_tree()).with_classifier(PeriodIssueClassifier::new(
        Some(Period::since("previous_version", period_date)),
        false,
    ));
    fixture
        .issue(
            FILE_1_REF,
            bug("old", Severity::Blocker).created_at(Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap()),
        )
        .issue(
            FILE_2_REF,
            bug("new", Severity::Major).created_at(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
        );
    fixture.compute();

    assert_eq!(fixture.rating(ROOT_REF, keys::RELIABILITY_RATING), Some(Rating::E));
    assert_eq!(fixture.rating(ROOT_REF, keys::NEW_RELIABILITY_RATING), Some(Rating::C));
    assert_eq!(fixture.rating(FILE_1_REF, keys::NEW_RELIABILITY_RATING), Some(Rating::A));
}

#[test]
fn every_issue_is_new_on_pull_request() {
    let mut fixture =
        Fixture::new(simple_tree()).with_classifier(PeriodIssueClassifier::pull_request());
    fixture.issue(FILE_1_REF, bug("old", Severity::Critical));
    fixture.compute();

    assert_eq!(fixture.rating(ROOT_REF, keys::NEW_RELIABILITY_RATING), Some(Rating::D));
}
