use crate::error::{GhActivityError, Result};
use crate::model::{Contribution, ContributionKind, Period};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

#[derive(Deserialize)]
struct RawUser {
    login: Option<String>,
}

#[derive(Deserialize)]
struct RawItem {
    created_at: Option<String>,
    user: Option<RawUser>,
    // Presence of the field marks a pull request; its contents are irrelevant.
    pull_request: Option<serde_json::Value>,
}

/// Normalize one raw API item into a `Contribution`. Pure; fails if the
/// creation timestamp lacks a `YYYY-MM-DD` prefix or the user login is
/// absent or empty. The kind is resolved here, once, and never re-derived
/// downstream.
pub fn extract(raw: &serde_json::Value) -> Result<Contribution> {
    let item: RawItem = serde_json::from_value(raw.clone())
        .map_err(|e| GhActivityError::MalformedItem(e.to_string()))?;

    let created_at = item
        .created_at
        .ok_or_else(|| GhActivityError::MalformedItem("missing created_at".to_string()))?;
    let prefix = created_at.get(..10).ok_or_else(|| {
        GhActivityError::MalformedItem(format!("unparseable created_at: {created_at}"))
    })?;
    let date = NaiveDate::parse_from_str(prefix, "%Y-%m-%d").map_err(|_| {
        GhActivityError::MalformedItem(format!("unparseable created_at: {created_at}"))
    })?;

    let user = item
        .user
        .and_then(|u| u.login)
        .filter(|login| !login.is_empty())
        .ok_or_else(|| GhActivityError::MalformedItem("missing user.login".to_string()))?;

    let kind = if item.pull_request.is_some() {
        ContributionKind::PullRequest
    } else {
        ContributionKind::Issue
    };

    Ok(Contribution {
        period: Period(date.year(), date.month()),
        user,
        kind,
    })
}
