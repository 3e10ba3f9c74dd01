//! Shared model and client plumbing for the Turntable admin panel.
//!
//! Everything here is platform independent: the frontend compiles it to
//! wasm32, tests run it natively under tokio.

use serde::{Deserialize, Serialize};

pub mod bridge;
pub mod client;
pub mod control;
pub mod error;
pub mod placeholder;
pub mod surface;

pub use bridge::FormBridge;
pub use client::{AdminClient, AdminConfig, Endpoint};
pub use control::{ControlId, ControlSet, ControlState};
pub use error::AdminError;
pub use placeholder::{Focus, PlaceholderField};
pub use surface::FormSurface;

/// A query definition as submitted from the form.
///
/// Built fresh from the form fields on every `add` click and never retained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySpec {
    /// Saved query name, conventionally `query:name`.
    pub name: String,
    /// Query text.
    pub query: String,
    /// Target database.
    pub db: String,
    /// Schedule expression, e.g. `{:minute [0 15 30 45]}`.
    pub period: String,
}

/// Body of a test run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    /// Query text.
    pub query: String,
    /// Target database.
    pub db: String,
}

impl RunRequest {
    /// Build a run request for `query` against `db`.
    pub fn new(db: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            db: db.into(),
        }
    }
}

/// Name and target database of a saved query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedQueryOpts {
    /// Saved query name.
    pub name: String,
    /// Target database.
    #[serde(default)]
    pub db: String,
}

/// One entry of the saved-query tree, as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedQuery {
    /// Query text.
    pub query: String,
    /// Schedule expression.
    #[serde(default)]
    pub period: String,
    /// Name and database.
    pub opts: SavedQueryOpts,
}

impl SavedQuery {
    /// Saved query name.
    pub fn name(&self) -> &str {
        &self.opts.name
    }

    /// Part of the name before the first `:`, empty when there is none.
    pub fn namespace(&self) -> &str {
        self.opts
            .name
            .split_once(':')
            .map(|(namespace, _)| namespace)
            .unwrap_or("")
    }
}

/// Group tree entries by [`SavedQuery::namespace`], keeping the order in
/// which namespaces and entries first appear.
pub fn group_by_namespace(entries: &[SavedQuery]) -> Vec<(String, Vec<SavedQuery>)> {
    let mut groups: Vec<(String, Vec<SavedQuery>)> = Vec::new();
    for entry in entries {
        let namespace = entry.namespace();
        match groups.iter_mut().find(|(name, _)| name == namespace) {
            Some((_, members)) => members.push(entry.clone()),
            None => groups.push((namespace.to_string(), vec![entry.clone()])),
        }
    }
    groups
}

/// The three form fields overwritten when a tree entry is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditableFields {
    /// Name field.
    pub name: String,
    /// Query field.
    pub query: String,
    /// Period field.
    pub period: String,
}

impl From<&SavedQuery> for EditableFields {
    fn from(entry: &SavedQuery) -> Self {
        EditableFields {
            name: entry.opts.name.clone(),
            query: entry.query.clone(),
            period: entry.period.clone(),
        }
    }
}
