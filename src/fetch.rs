use crate::error::{GhActivityError, Result};
use crate::link::{PageLinks, PageState};
use reqwest::header;

/// One page response, reduced to the pieces the fetch loop needs.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub status: u16,
    pub link_header: Option<String>,
    pub body: String,
}

/// Source of raw pages. The production implementation is `GithubSource`;
/// tests substitute an in-memory map of canned responses.
pub trait PageSource {
    fn get(&self, url: &str) -> Result<PageResponse>;
}

/// Blocking HTTP source. No timeout is configured: a hung endpoint blocks
/// the run until the caller imposes an external deadline.
pub struct GithubSource {
    client: reqwest::blocking::Client,
}

impl GithubSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("ghactivity/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl PageSource for GithubSource {
    fn get(&self, url: &str) -> Result<PageResponse> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()?;
        let status = response.status().as_u16();
        let link_header = response
            .headers()
            .get(header::LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.text()?;
        Ok(PageResponse {
            status,
            link_header,
            body,
        })
    }
}

/// Pages fetched so far plus the error that stopped the fetch, if any.
/// Pages are independent units of work and are never discarded because a
/// later page failed.
#[derive(Debug)]
pub struct FetchOutcome {
    pub pages: Vec<Vec<serde_json::Value>>,
    pub error: Option<GhActivityError>,
}

pub struct Fetcher<'a> {
    source: &'a dyn PageSource,
    token: Option<&'a str>,
}

impl<'a> Fetcher<'a> {
    pub fn new(source: &'a dyn PageSource, token: Option<&'a str>) -> Self {
        Self { source, token }
    }

    /// Follow `next` links from `base_url` until the page whose URL equaled
    /// `last` has been fetched. The first request carries `state=all` and
    /// `direction=asc`; ascending order is required because aggregation
    /// assumes chronologically ordered input.
    pub fn fetch(&self, base_url: &str) -> FetchOutcome {
        let mut pages = Vec::new();

        let url = self.page_url(base_url, true);
        let mut state = match self.fetch_page(&url, 0) {
            Ok((items, links)) => {
                pages.push(items);
                PageState::from_links(links.as_ref())
            }
            Err(err) => return FetchOutcome { pages, error: Some(err) },
        };

        while let PageState::HasMore { next, final_page } = state {
            let url = self.page_url(&next, false);
            match self.fetch_page(&url, pages.len()) {
                Ok((items, links)) => {
                    pages.push(items);
                    state = if final_page {
                        PageState::Done
                    } else {
                        PageState::from_links(links.as_ref())
                    };
                }
                Err(err) => return FetchOutcome { pages, error: Some(err) },
            }
        }

        FetchOutcome { pages, error: None }
    }

    fn fetch_page(
        &self,
        url: &str,
        page: usize,
    ) -> Result<(Vec<serde_json::Value>, Option<PageLinks>)> {
        let response = self.source.get(url)?;
        if !(200..300).contains(&response.status) {
            return Err(GhActivityError::FetchFailed {
                page,
                status: response.status,
            });
        }

        // A body that is not a JSON list is a fetch-level failure, not a
        // serialization one.
        let body: serde_json::Value =
            serde_json::from_str(&response.body).map_err(|_| GhActivityError::FetchFailed {
                page,
                status: response.status,
            })?;
        let items = body
            .as_array()
            .cloned()
            .ok_or(GhActivityError::FetchFailed {
                page,
                status: response.status,
            })?;

        let links = match &response.link_header {
            Some(value) => Some(PageLinks::from_header(value)?),
            None => None,
        };

        log::debug!("fetched page {page} with {} items", items.len());
        Ok((items, links))
    }

    fn page_url(&self, url: &str, first: bool) -> String {
        let mut url = url.to_string();
        if first {
            push_param(&mut url, "state=all");
            push_param(&mut url, "direction=asc");
        }
        if let Some(token) = self.token {
            if !url.contains("access_token=") {
                push_param(&mut url, &format!("access_token={token}"));
            }
        }
        url
    }
}

fn push_param(url: &mut String, param: &str) {
    url.push(if url.contains('?') { '&' } else { '?' });
    url.push_str(param);
}
