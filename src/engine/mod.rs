use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::{self, Movie, Show, Webcomic};
use crate::network::{FailureKind, FetchService, RequestFailure, Route};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub shows: Vec<Show>,
    pub movies: Vec<Movie>,
    pub webcomics: Vec<Webcomic>,
    pub fetch_time: String,
}

pub struct CatalogEngine {
    fetch_service: FetchService,
}

impl CatalogEngine {
    pub fn new(fetch_service: FetchService) -> Self {
        CatalogEngine { fetch_service }
    }

    pub fn fetch_service(&self) -> &FetchService {
        &self.fetch_service
    }

    /// Loads shows, movies and webcomics one after another. The snapshot's
    /// `fetch_time` is the service's last fetch time once all three are in.
    pub async fn load_all(&self) -> Result<CatalogSnapshot, RequestFailure> {
        tracing::info!(base_url = self.fetch_service.base_url(), "CatalogEngine: loading catalog");

        let body = self.fetch_service.get_show().await?;
        let shows = self.typed(Route::Shows, &body, catalog::decode_shows)?;
        tracing::debug!("CatalogEngine: {} shows", shows.len());

        let body = self.fetch_service.get_movie().await?;
        let movies = self.typed(Route::Movies, &body, catalog::decode_movies)?;
        tracing::debug!("CatalogEngine: {} movies", movies.len());

        let body = self.fetch_service.get_webcomic().await?;
        let webcomics = self.typed(Route::Webcomics, &body, catalog::decode_webcomics)?;
        tracing::debug!("CatalogEngine: {} webcomics", webcomics.len());

        Ok(CatalogSnapshot {
            shows,
            movies,
            webcomics,
            fetch_time: self.fetch_service.last_fetch_time(),
        })
    }

    fn typed<T>(
        &self,
        route: Route,
        body: &Value,
        decode: fn(&Value) -> serde_json::Result<Vec<T>>,
    ) -> Result<Vec<T>, RequestFailure> {
        decode(body).map_err(|e| {
            RequestFailure::new(self.fetch_service.url_for(route), FailureKind::Body(e.to_string()))
        })
    }
}
