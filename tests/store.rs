use ghactivity::error::GhActivityError;
use ghactivity::model::{Contribution, ContributionKind, Period};
use ghactivity::store;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn sample_records() -> Vec<Contribution> {
    vec![
        Contribution {
            period: Period(2021, 5),
            user: "alice".to_string(),
            kind: ContributionKind::Issue,
        },
        Contribution {
            period: Period(2021, 5),
            user: "bob".to_string(),
            kind: ContributionKind::PullRequest,
        },
        Contribution {
            period: Period(2021, 6),
            user: "alice".to_string(),
            kind: ContributionKind::Issue,
        },
    ]
}

#[test]
fn round_trip_preserves_order_and_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.ndjson");

    let records = sample_records();
    store::save(&records, &path).unwrap();
    let loaded = store::load(&path).unwrap();

    assert_eq!(loaded, records);
}

#[test]
fn saved_format_is_one_object_per_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.ndjson");

    store::save(&sample_records(), &path).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        r#"{"date":[2021,5],"user":"alice","type":"issue"}"#
    );
    assert_eq!(lines[1], r#"{"date":[2021,5],"user":"bob","type":"pr"}"#);
}

#[test]
fn corrupt_line_reports_its_line_number() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.ndjson");
    fs::write(
        &path,
        "{\"date\":[2021,5],\"user\":\"alice\",\"type\":\"issue\"}\nnot json\n",
    )
    .unwrap();

    match store::load(&path) {
        Err(GhActivityError::StoreCorrupt { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected StoreCorrupt, got {other:?}"),
    }
}

#[test]
fn out_of_range_month_is_corrupt() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.ndjson");
    fs::write(&path, "{\"date\":[2021,13],\"user\":\"alice\",\"type\":\"issue\"}\n").unwrap();

    match store::load(&path) {
        Err(GhActivityError::StoreCorrupt { line, .. }) => assert_eq!(line, 1),
        other => panic!("expected StoreCorrupt, got {other:?}"),
    }
}
