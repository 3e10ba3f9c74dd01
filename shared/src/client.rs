//! The remote admin service, seen from the panel.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{error::AdminError, QuerySpec, RunRequest, SavedQuery};

/// Remote operations the panel relies on.
///
/// Futures are not `Send`: the browser client runs on the single-threaded
/// event loop.
#[async_trait(?Send)]
pub trait AdminClient {
    /// Save a new scheduled query.
    async fn add_query(&self, spec: &QuerySpec) -> Result<(), AdminError>;

    /// Run a query once and return the service's textual result.
    async fn run_query(&self, request: &RunRequest) -> Result<String, AdminError>;

    /// Delete the saved query called `name`.
    async fn remove_query(&self, name: &str) -> Result<(), AdminError>;

    /// All saved queries, for the tree.
    async fn list_queries(&self) -> Result<Vec<SavedQuery>, AdminError>;

    /// Choices for one option, e.g. `"db"`.
    async fn list_options(&self, option: &str) -> Result<Vec<String>, AdminError>;
}

/// Service endpoints addressed by [`AdminConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Save a query.
    Add,
    /// Run a query once.
    Run,
    /// Delete a saved query.
    Remove,
    /// List saved queries.
    Queries,
    /// List option choices.
    Options,
}

fn default_run_path() -> String {
    "stage".to_string()
}

fn default_add_path() -> String {
    "add".to_string()
}

fn default_remove_path() -> String {
    "remove".to_string()
}

fn default_queries_path() -> String {
    "queries".to_string()
}

fn default_opts_path() -> String {
    "opts".to_string()
}

/// Where the admin service lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Service root, with or without a trailing slash.
    pub base_url: String,
    /// Test-run path.
    #[serde(default = "default_run_path")]
    pub run_path: String,
    /// Add path.
    #[serde(default = "default_add_path")]
    pub add_path: String,
    /// Remove path.
    #[serde(default = "default_remove_path")]
    pub remove_path: String,
    /// Saved-query listing path.
    #[serde(default = "default_queries_path")]
    pub queries_path: String,
    /// Option listing path; the option name is appended as a segment.
    #[serde(default = "default_opts_path")]
    pub opts_path: String,
}

impl AdminConfig {
    /// Config with default paths under `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            run_path: default_run_path(),
            add_path: default_add_path(),
            remove_path: default_remove_path(),
            queries_path: default_queries_path(),
            opts_path: default_opts_path(),
        }
    }

    fn path(&self, endpoint: Endpoint) -> &str {
        match endpoint {
            Endpoint::Add => &self.add_path,
            Endpoint::Run => &self.run_path,
            Endpoint::Remove => &self.remove_path,
            Endpoint::Queries => &self.queries_path,
            Endpoint::Options => &self.opts_path,
        }
    }

    /// Absolute URL of `endpoint`.
    pub fn url(&self, endpoint: Endpoint) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.path(endpoint).trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// URL listing the choices of `option`.
    pub fn options_url(&self, option: &str) -> String {
        format!("{}/{}", self.url(Endpoint::Options), urlencoding::encode(option))
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use serde_json::json;

    use super::{AdminConfig, Endpoint};

    #[test]
    fn joins_base_and_path_with_one_slash() {
        let config = AdminConfig::new("http://localhost:8080/turntable/");
        assert_eq!(config.url(Endpoint::Run), "http://localhost:8080/turntable/stage");
        assert_eq!(config.url(Endpoint::Add), "http://localhost:8080/turntable/add");

        let config = AdminConfig {
            remove_path: "/remove".to_string(),
            ..AdminConfig::new("/api")
        };
        assert_eq!(config.url(Endpoint::Remove), "/api/remove");
    }

    #[test]
    fn options_url_encodes_option_name() {
        let config = AdminConfig::new("/api");
        assert_eq!(config.options_url("db"), "/api/opts/db");
        assert_eq!(config.options_url("a b"), "/api/opts/a%20b");
    }

    #[test]
    fn deserializes_with_default_paths() -> Result<()> {
        let config: AdminConfig = serde_json::from_value(json!({
            "base_url": "/turntable",
            "run_path": "run",
        }))?;
        assert_eq!(config.url(Endpoint::Run), "/turntable/run");
        assert_eq!(config.url(Endpoint::Queries), "/turntable/queries");
        assert_eq!(config, AdminConfig {
            run_path: "run".to_string(),
            ..AdminConfig::new("/turntable")
        });
        Ok(())
    }
}
