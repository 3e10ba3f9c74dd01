#[cfg(feature = "mock")]
use std::cell::RefCell;

use async_trait::async_trait;
#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, Response};
#[cfg(not(feature = "mock"))]
use js_sys::Date;
#[cfg(not(feature = "mock"))]
use serde::Serialize;
#[cfg(not(feature = "mock"))]
use turntable_shared::{AdminConfig, Endpoint};
use turntable_shared::{AdminClient, AdminError, QuerySpec, RunRequest, SavedQuery};

#[cfg(feature = "mock")]
use crate::models;

#[cfg(not(feature = "mock"))]
#[derive(Debug, Serialize)]
struct RemoveQueryRequest<'a> {
    name: &'a str,
}

/// Admin service client used by the panel.
///
/// With the `mock` feature every call is answered from an in-memory list
/// seeded with sample queries.
pub struct AdminApi {
    #[cfg(not(feature = "mock"))]
    config: AdminConfig,
    #[cfg(feature = "mock")]
    saved: RefCell<Vec<SavedQuery>>,
}

impl AdminApi {
    /// Client for the configured service.
    pub fn new() -> Self {
        #[cfg(feature = "mock")]
        {
            Self {
                saved: RefCell::new(models::get_mock_saved_queries()),
            }
        }

        #[cfg(not(feature = "mock"))]
        {
            Self {
                config: crate::config::admin_config(),
            }
        }
    }
}

impl Default for AdminApi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(feature = "mock"))]
async fn ensure_ok(response: Response) -> Result<Response, AdminError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(AdminError::Http { status, body })
}

#[cfg(not(feature = "mock"))]
fn no_cache(url: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{}{}_ts={}", url, sep, Date::now() as u64)
}

#[cfg(not(feature = "mock"))]
async fn post_json<T: Serialize>(url: &str, body: &T) -> Result<Response, AdminError> {
    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| AdminError::Parse(format!("Serialize error: {:?}", e)))?
        .send()
        .await
        .map_err(|e| AdminError::Network(format!("{:?}", e)))?;
    ensure_ok(response).await
}

#[cfg(not(feature = "mock"))]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, AdminError> {
    let response = Request::get(&no_cache(url))
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(|e| AdminError::Network(format!("{:?}", e)))?;

    ensure_ok(response)
        .await?
        .json()
        .await
        .map_err(|e| AdminError::Parse(format!("{:?}", e)))
}

#[async_trait(?Send)]
impl AdminClient for AdminApi {
    async fn add_query(&self, spec: &QuerySpec) -> Result<(), AdminError> {
        #[cfg(feature = "mock")]
        {
            let mut saved = self.saved.borrow_mut();
            saved.retain(|entry| entry.name() != spec.name);
            saved.push(models::saved_query_from_spec(spec));
            return Ok(());
        }

        #[cfg(not(feature = "mock"))]
        {
            post_json(&self.config.url(Endpoint::Add), spec).await?;
            Ok(())
        }
    }

    async fn run_query(&self, request: &RunRequest) -> Result<String, AdminError> {
        #[cfg(feature = "mock")]
        {
            return Ok(models::mock_run_output(request));
        }

        #[cfg(not(feature = "mock"))]
        {
            post_json(&self.config.url(Endpoint::Run), request)
                .await?
                .text()
                .await
                .map_err(|e| AdminError::Parse(format!("{:?}", e)))
        }
    }

    async fn remove_query(&self, name: &str) -> Result<(), AdminError> {
        #[cfg(feature = "mock")]
        {
            self.saved.borrow_mut().retain(|entry| entry.name() != name);
            return Ok(());
        }

        #[cfg(not(feature = "mock"))]
        {
            post_json(&self.config.url(Endpoint::Remove), &RemoveQueryRequest {
                name,
            })
            .await?;
            Ok(())
        }
    }

    async fn list_queries(&self) -> Result<Vec<SavedQuery>, AdminError> {
        #[cfg(feature = "mock")]
        {
            return Ok(self.saved.borrow().clone());
        }

        #[cfg(not(feature = "mock"))]
        {
            get_json(&self.config.url(Endpoint::Queries)).await
        }
    }

    async fn list_options(&self, option: &str) -> Result<Vec<String>, AdminError> {
        #[cfg(feature = "mock")]
        {
            return models::get_mock_options(option).ok_or_else(|| AdminError::Http {
                status: 404,
                body: format!("unknown option `{}`", option),
            });
        }

        #[cfg(not(feature = "mock"))]
        {
            get_json(&self.config.options_url(option)).await
        }
    }
}
