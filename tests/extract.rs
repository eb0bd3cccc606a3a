use ghactivity::error::GhActivityError;
use ghactivity::extract::extract;
use ghactivity::model::{ContributionKind, Period};
use serde_json::json;

#[test]
fn plain_item_is_an_issue() {
    let item = json!({"created_at": "2019-03-07T16:20:00Z", "user": {"login": "carol"}});
    let record = extract(&item).unwrap();

    assert_eq!(record.period, Period(2019, 3));
    assert_eq!(record.user, "carol");
    assert_eq!(record.kind, ContributionKind::Issue);
}

#[test]
fn pull_request_marker_sets_the_kind() {
    let item = json!({
        "created_at": "2019-03-07T16:20:00Z",
        "user": {"login": "carol"},
        "pull_request": {"url": "https://api.test/pulls/1"}
    });
    let record = extract(&item).unwrap();

    assert_eq!(record.kind, ContributionKind::PullRequest);
}

#[test]
fn missing_login_is_malformed() {
    let item = json!({"created_at": "2019-03-07T16:20:00Z", "user": {}});
    let err = extract(&item).unwrap_err();
    assert!(matches!(err, GhActivityError::MalformedItem(_)));
}

#[test]
fn empty_login_is_malformed() {
    let item = json!({"created_at": "2019-03-07T16:20:00Z", "user": {"login": ""}});
    let err = extract(&item).unwrap_err();
    assert!(matches!(err, GhActivityError::MalformedItem(_)));
}

#[test]
fn unparseable_date_is_malformed() {
    let item = json!({"created_at": "last tuesday", "user": {"login": "carol"}});
    let err = extract(&item).unwrap_err();
    assert!(matches!(err, GhActivityError::MalformedItem(_)));
}

#[test]
fn missing_created_at_is_malformed() {
    let item = json!({"user": {"login": "carol"}});
    let err = extract(&item).unwrap_err();
    assert!(matches!(err, GhActivityError::MalformedItem(_)));
}
