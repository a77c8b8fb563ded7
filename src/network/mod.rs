pub mod error;

use std::sync::{Mutex, MutexGuard};

use reqwest::Client;
use serde_json::Value;

use crate::config::ServiceConfig;
pub use error::{FailureKind, RequestFailure};

/// Header the backend uses to report when it produced the response.
pub const FETCH_TIME_HEADER: &str = "Fetch-Time";

/// The three collections served by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Shows,
    Movies,
    Webcomics,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Shows, Route::Movies, Route::Webcomics];

    pub fn path(self) -> &'static str {
        match self {
            Route::Shows => "/shows",
            Route::Movies => "/movies",
            Route::Webcomics => "/webcomics",
        }
    }
}

/// Body and `Fetch-Time` of a single response.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched {
    pub body: Value,
    pub fetch_time: String,
}

/// Fetches catalog collections from the backend and remembers the
/// `Fetch-Time` of the last successful response.
///
/// `last_fetch_time` is advisory: with several requests in flight it holds
/// the header of whichever response resolved last, not the one issued last.
pub struct FetchService {
    client: Client,
    base_url: String,
    last_fetch_time: Mutex<String>,
}

impl FetchService {
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ServiceConfig) -> Self {
        FetchService {
            client,
            base_url: config.base_url,
            last_fetch_time: Mutex::new(String::new()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value of `Fetch-Time` from the most recently completed request, or
    /// empty if none succeeded yet or the header was missing.
    pub fn last_fetch_time(&self) -> String {
        self.fetch_time_slot().clone()
    }

    pub fn url_for(&self, route: Route) -> String {
        format!("{}{}", self.base_url, route.path())
    }

    pub async fn get_show(&self) -> Result<Value, RequestFailure> {
        Ok(self.fetch(Route::Shows).await?.body)
    }

    pub async fn get_movie(&self) -> Result<Value, RequestFailure> {
        Ok(self.fetch(Route::Movies).await?.body)
    }

    pub async fn get_webcomic(&self) -> Result<Value, RequestFailure> {
        Ok(self.fetch(Route::Webcomics).await?.body)
    }

    /// GETs `route` and returns its body together with that response's
    /// `Fetch-Time`. On success the shared `last_fetch_time` is overwritten;
    /// on failure it is left as it was.
    pub async fn fetch(&self, route: Route) -> Result<Fetched, RequestFailure> {
        let url = self.url_for(route);
        tracing::debug!(%url, "fetching");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RequestFailure::new(&url, FailureKind::Transport(e)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "backend returned error status");
            return Err(RequestFailure::new(&url, FailureKind::Status(status.as_u16())));
        }

        let fetch_time = match response.headers().get(FETCH_TIME_HEADER) {
            Some(value) => value
                .to_str()
                .map_err(|e| RequestFailure::new(&url, FailureKind::Header(e)))?
                .to_string(),
            None => String::new(),
        };

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| RequestFailure::new(&url, FailureKind::Body(e.to_string())))?;

        *self.fetch_time_slot() = fetch_time.clone();
        tracing::debug!(%url, %fetch_time, "fetched");

        Ok(Fetched { body, fetch_time })
    }

    fn fetch_time_slot(&self) -> MutexGuard<'_, String> {
        // A poisoned lock still holds a complete String.
        self.last_fetch_time
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
