// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTTP search client and stale-response guard.
//!
//! One blocking request per (resource, term) pair against
//! `GET {base}/{resource}/?search={term}`; only the first page is
//! consumed. Transport errors, non-success statuses, and malformed
//! bodies are indistinguishable to callers — all collapse to one
//! generic pt-BR message. No retry, no pagination traversal.

use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::types::{ResourceType, SearchPage};

/// Public SWAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// The one error message callers ever see for a failed fetch.
pub const FETCH_ERROR: &str = "Erro ao carregar os dados";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking search client over a SWAPI-compatible API.
pub struct SearchClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl SearchClient {
    /// Build a client against the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| anyhow!("failed to build HTTP client: {err}"))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the first result page for a resource and search term.
    pub fn search(&self, resource: ResourceType, term: &str) -> Result<SearchPage> {
        let url = format!("{}/{}/", self.base_url, resource.token());
        let response = self
            .client
            .get(&url)
            .query(&[("search", term)])
            .send()
            .map_err(|_| anyhow!(FETCH_ERROR))?;

        if !response.status().is_success() {
            return Err(anyhow!(FETCH_ERROR));
        }

        response.json::<SearchPage>().map_err(|_| anyhow!(FETCH_ERROR))
    }
}

/// Generation counter guarding against stale responses.
///
/// Interactive callers fire a new request every time the resource or
/// term changes; responses can complete out of order. Each request is
/// tagged with the generation handed out by [`begin`](Self::begin), and
/// [`accept`](Self::accept) stores a page only while its generation is
/// still the latest — a slow response for an old query can never
/// overwrite the state of a newer one.
#[derive(Debug, Default)]
pub struct SearchSession {
    latest: u64,
    page: Option<SearchPage>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating all previous generations.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether a generation is still the latest.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }

    /// Store a completed page if its generation is still current.
    ///
    /// Returns whether the page was accepted.
    pub fn accept(&mut self, generation: u64, page: SearchPage) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.page = Some(page);
        true
    }

    /// The most recently accepted page, if any.
    pub fn page(&self) -> Option<&SearchPage> {
        self.page.as_ref()
    }
}
