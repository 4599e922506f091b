use serde::Deserialize;
use tracing::{debug, instrument};

use crate::api::{self, endpoint};
use crate::error::Result;
use crate::model::Tournament;

#[derive(Deserialize)]
struct TournamentsResponse {
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    tournaments: Vec<Tournament>,
}

#[instrument(skip(client))]
pub(crate) async fn get_tournaments(
    client: &reqwest::Client,
    base: &str,
) -> Result<Vec<Tournament>> {
    let url = endpoint(base, "/api/towerfall/tournament/");
    let response: TournamentsResponse = api::get_json(client, &url).await?;
    debug!(count = response.tournaments.len(), "parsed tournaments");
    Ok(response.tournaments)
}

#[instrument(skip(client))]
pub(crate) async fn get_tournament(
    client: &reqwest::Client,
    base: &str,
    id: &str,
) -> Result<Tournament> {
    let url = endpoint(base, &format!("/api/towerfall/tournament/{id}/"));
    let tournament: Tournament = api::get_json(client, &url).await?;
    debug!(
        id,
        players = tournament.players.len(),
        matches = tournament.matches().count(),
        "parsed tournament"
    );
    Ok(tournament)
}

#[instrument(skip(client))]
pub(crate) async fn join_tournament(
    client: &reqwest::Client,
    base: &str,
    id: &str,
    name: &str,
    color: &str,
) -> Result<()> {
    let url = endpoint(base, &format!("/api/towerfall/{id}/join/"));
    api::post_form(client, &url, &[("name", name), ("color", color)]).await?;
    debug!(id, name, "joined tournament");
    Ok(())
}
