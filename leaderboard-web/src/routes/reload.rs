use crate::leaderboard_state::LeaderboardState;
use crate::loader::start_load;
use crate::scores_client::ScoresClient;
use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, web};

/// Equivalent of reloading the page: the students list is fetched again
/// from scratch and the browser is sent back to the leaderboard.
#[tracing::instrument(name = "Reloading the leaderboard", skip(state, client))]
pub async fn reload(
    state: web::Data<LeaderboardState>,
    client: web::Data<ScoresClient>,
) -> HttpResponse {
    start_load(state, client);
    HttpResponse::SeeOther()
        .insert_header((LOCATION, "/"))
        .finish()
}
