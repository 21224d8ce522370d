//! Reference data used by the application form.
//!
//! Queries are sequenced: every search takes a generation number and replies
//! from superseded generations are dropped, so a slow stale response can never
//! overwrite a fresher list.

use serde_json::Value;
use strsim::jaro_winkler;

use crate::api::{endpoints, ApiClient};
use crate::domain::Country;
use crate::errors::ApiError;
use crate::ui::Notifier;

const LOAD_FAILED: &str = "Failed to load countries. Please refresh the page.";
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// One issued search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryQuery {
    pub generation: u64,
    pub term: String,
}

#[derive(Debug, Default)]
pub struct CountryDirectory {
    countries: Vec<Country>,
    catalogue: Vec<Country>,
    term: String,
    issued: u64,
    loading: bool,
    last_error: Option<String>,
}

impl CountryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new search term and returns the query to run.
    pub fn begin(&mut self, term: &str) -> CountryQuery {
        self.issued += 1;
        self.term = term.trim().to_string();
        self.loading = true;
        CountryQuery {
            generation: self.issued,
            term: self.term.clone(),
        }
    }

    /// Issues the countries request for `query`.
    pub fn fetch(client: &ApiClient, query: &CountryQuery) -> Result<Vec<Country>, ApiError> {
        let mut params = vec![("with_paginate", "0")];
        if !query.term.is_empty() {
            params.push(("q", query.term.as_str()));
        }
        let response = client.get_with_query(endpoints::COUNTRIES, &params)?;
        parse_countries(response)
    }

    /// Applies a reply. Returns `false` when the reply belongs to a superseded
    /// query and was discarded.
    pub fn apply(
        &mut self,
        query: &CountryQuery,
        result: Result<Vec<Country>, ApiError>,
        notifier: &dyn Notifier,
    ) -> bool {
        if query.generation != self.issued {
            tracing::debug!(
                generation = query.generation,
                latest = self.issued,
                "discarding stale country response"
            );
            return false;
        }
        self.loading = false;
        match result {
            Ok(countries) => {
                if query.term.is_empty() {
                    self.catalogue = countries.clone();
                }
                self.countries = countries;
                self.last_error = None;
            }
            Err(err) => {
                tracing::warn!(error = %err, term = %query.term, "country lookup failed");
                self.countries.clear();
                self.last_error = Some(LOAD_FAILED.into());
                notifier.error(LOAD_FAILED);
            }
        }
        true
    }

    /// Runs a search end to end and returns the visible matches.
    pub fn search(
        &mut self,
        client: &ApiClient,
        term: &str,
        notifier: &dyn Notifier,
    ) -> Vec<&Country> {
        let query = self.begin(term);
        let result = Self::fetch(client, &query);
        self.apply(&query, result, notifier);
        self.filtered()
    }

    /// Current list narrowed locally by the active term, in case the server
    /// ignored the filter.
    pub fn filtered(&self) -> Vec<&Country> {
        self.countries
            .iter()
            .filter(|country| country.matches(&self.term))
            .collect()
    }

    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn find(&self, id: &str) -> Option<&Country> {
        self.countries
            .iter()
            .chain(self.catalogue.iter())
            .find(|country| country.id == id)
    }

    /// Closest known country name for a term that matched nothing.
    pub fn suggestion(&self, term: &str) -> Option<&Country> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.catalogue
            .iter()
            .map(|country| (country, jaro_winkler(&needle, &country.name.to_lowercase())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(country, _)| country)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

/// Accepts a bare array or a `{data: [...]}` envelope.
fn parse_countries(response: Value) -> Result<Vec<Country>, ApiError> {
    let list = match response {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Value::Array(items),
            _ => return Err(ApiError::Decode("countries response has no list".into())),
        },
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ApiError::Decode(format!(
                "unexpected countries response: {}",
                other
            )))
        }
    };
    Ok(serde_json::from_value(list)?)
}
