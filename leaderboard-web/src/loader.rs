use crate::leaderboard_state::LeaderboardState;
use crate::scores_client::ScoresClient;
use actix_web::web;
use tracing::Instrument;

/// Starts one fetch of the students list in the background. The state goes
/// to `Loading` right away and to `Ready` or `Error` once the fetch settles.
pub fn start_load(state: web::Data<LeaderboardState>, client: web::Data<ScoresClient>) {
    let ticket = state.begin_load();
    let span = tracing::info_span!("Loading the leaderboard", load_id = %ticket.load_id());
    tokio::spawn(
        async move {
            let outcome = client.fetch_students().await;
            state.complete(ticket, outcome);
        }
        .instrument(span),
    );
}
