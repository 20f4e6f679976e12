//! Listing pipeline: search filter, then sort
//!
//! Both steps run over the full in-memory collection on every call.

use serde::{Deserialize, Serialize};

use super::errors::RosterResult;
use super::filters::SearchFilter;
use super::sorter::{RosterSorter, SortDirection, SortField, SortSpec};
use crate::student::StudentRecord;

/// What the listing view shows: a search term and a sort
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: SortSpec,
}

impl RosterQuery {
    pub fn new(search: impl Into<String>, sort: SortSpec) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }

    /// Builds a query from loosely typed parameters (query string, CLI flags).
    ///
    /// Missing sort defaults to last name; missing direction to ascending.
    pub fn parse(
        search: Option<&str>,
        sort: Option<&str>,
        direction: Option<&str>,
    ) -> RosterResult<Self> {
        let field = match sort {
            Some(s) if !s.is_empty() => s.parse::<SortField>()?,
            _ => SortSpec::default().field,
        };
        let direction = match direction {
            Some(d) if !d.is_empty() => d.parse::<SortDirection>()?,
            _ => SortDirection::Asc,
        };
        Ok(Self::new(
            search.unwrap_or_default(),
            SortSpec { field, direction },
        ))
    }

    /// Filters then sorts. The input is left untouched.
    pub fn apply(&self, records: &[StudentRecord]) -> Vec<StudentRecord> {
        let mut visible = SearchFilter::filter(records, &self.search);
        RosterSorter::sort(&mut visible, &self.sort);
        visible
    }
}
