use crate::error::{GhActivityError, Result};
use std::collections::HashMap;

/// Parse a pagination ("Link") header value into a rel-name → URL map.
/// Entries are comma-separated, each of the form `<URL>; rel="name"`.
pub fn parse_link_header(value: &str) -> Result<HashMap<String, String>> {
    let mut links = HashMap::new();
    for entry in value.split(',') {
        let entry = entry.trim();
        let (url_part, rel_part) = entry
            .split_once(';')
            .ok_or_else(|| GhActivityError::MalformedLinkHeader(entry.to_string()))?;
        let url = url_part
            .trim()
            .strip_prefix('<')
            .and_then(|s| s.strip_suffix('>'))
            .ok_or_else(|| GhActivityError::MalformedLinkHeader(entry.to_string()))?;
        let rel = rel_part
            .trim()
            .strip_prefix("rel=\"")
            .and_then(|s| s.strip_suffix('"'))
            .ok_or_else(|| GhActivityError::MalformedLinkHeader(entry.to_string()))?;
        links.insert(rel.to_string(), url.to_string());
    }
    Ok(links)
}

/// The two relations the fetch loop navigates by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    pub next: Option<String>,
    pub last: Option<String>,
}

impl PageLinks {
    pub fn from_header(value: &str) -> Result<Self> {
        let mut links = parse_link_header(value)?;
        Ok(Self {
            next: links.remove("next"),
            last: links.remove("last"),
        })
    }
}

/// Pagination modeled as an explicit state machine rather than ad hoc
/// header checks inside the fetch loop. `final_page` records whether the
/// page `next` points at is the last one, decided by URL equality before
/// that page is fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    HasMore { next: String, final_page: bool },
    Done,
}

impl PageState {
    pub fn from_links(links: Option<&PageLinks>) -> Self {
        match links {
            Some(PageLinks {
                next: Some(next),
                last: Some(last),
            }) => PageState::HasMore {
                final_page: next == last,
                next: next.clone(),
            },
            _ => PageState::Done,
        }
    }
}
