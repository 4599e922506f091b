use tracing::instrument;

use crate::api;
use crate::error::Result;
use crate::model::*;

/// The main entry point for talking to the Drunken TowerFall backend.
///
/// `TowerfallClient` wraps a [`reqwest::Client`] and a base URL and returns
/// typed [`Tournament`] and [`Match`] records.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> drunkenfall::Result<()> {
/// use drunkenfall::{MatchKind, TowerfallClient};
///
/// let client = TowerfallClient::new();
/// let semi = client.get_match("df17", &MatchKind::Semi, 0).await?;
/// if semi.can_end() {
///     println!("{semi} can be ended");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TowerfallClient {
    http: reqwest::Client,
    base_url: String,
}

impl TowerfallClient {
    /// Create a new client for the public site with default settings.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: api::BASE_URL.to_string(),
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            base_url: api::BASE_URL.to_string(),
        }
    }

    /// Point the client at another backend, e.g. a local development server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every tournament the backend knows about.
    #[instrument(skip(self))]
    pub async fn get_tournaments(&self) -> Result<Vec<Tournament>> {
        api::tournaments::get_tournaments(&self.http, &self.base_url).await
    }

    /// Fetch a single tournament by ID.
    #[instrument(skip(self))]
    pub async fn get_tournament(&self, id: &str) -> Result<Tournament> {
        api::tournaments::get_tournament(&self.http, &self.base_url, id).await
    }

    /// Fetch one match of a tournament by kind and index.
    #[instrument(skip(self))]
    pub async fn get_match(
        &self,
        tournament: &str,
        kind: &MatchKind,
        index: usize,
    ) -> Result<Match> {
        api::matches::get_match(&self.http, &self.base_url, tournament, kind, index).await
    }

    /// Sign `name` up for a tournament with their preferred archer color.
    #[instrument(skip(self))]
    pub async fn join_tournament(&self, tournament: &str, name: &str, color: &str) -> Result<()> {
        api::tournaments::join_tournament(&self.http, &self.base_url, tournament, name, color)
            .await
    }
}

impl Default for TowerfallClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url() {
        assert_eq!(TowerfallClient::new().base_url(), "https://drunkenfall.com");
        let local = TowerfallClient::default().with_base_url("http://localhost:42001");
        assert_eq!(local.base_url(), "http://localhost:42001");
    }

    #[tokio::test]
    async fn test_get_tournament_through_client() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/api/towerfall/tournament/df17/")
            .with_status(200)
            .with_body(r#"{"name": "DrunkenFall 2017", "id": "df17", "opened": "2017-06-11T18:00:00Z"}"#)
            .create_async()
            .await;

        let client =
            TowerfallClient::with_client(reqwest::Client::new()).with_base_url(server.url());
        let tournament = client.get_tournament("df17").await.unwrap();
        assert_eq!(tournament.name, "DrunkenFall 2017");
        assert!(tournament.is_joinable());
        assert_eq!(tournament.path(), "/towerfall/df17/");
    }
}
