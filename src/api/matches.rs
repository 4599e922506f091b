use tracing::{debug, instrument};

use crate::api::tournaments;
use crate::error::{Result, TowerfallError};
use crate::model::{Match, MatchKind};

/// The backend has no per-match endpoint: fetch the tournament and pick the
/// match out of it.
#[instrument(skip(client))]
pub(crate) async fn get_match(
    client: &reqwest::Client,
    base: &str,
    tournament: &str,
    kind: &MatchKind,
    index: usize,
) -> Result<Match> {
    let fetched = tournaments::get_tournament(client, base, tournament).await?;
    let found = fetched
        .get_match(kind, index)
        .cloned()
        .ok_or_else(|| TowerfallError::MatchNotFound {
            tournament: tournament.to_owned(),
            kind: kind.to_string(),
            index,
        })?;

    debug!(
        match_name = %found,
        running = found.is_running(),
        can_end = found.can_end(),
        "parsed match"
    );
    Ok(found)
}
