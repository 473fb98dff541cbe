use super::ApiError;
use crate::leaderboard_state::{LeaderboardState, LoadState};
use crate::render::{error_view, leaderboard_view, loading_view, page, rewards_banner};
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use maud::html;
use standings::SearchTerm;

const LOADING_REFRESH_SECONDS: u32 = 2;

#[derive(serde::Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    q: String,
}

#[tracing::instrument(
    name = "Rendering the leaderboard page",
    skip(query, state),
    fields(search = %query.q)
)]
pub async fn leaderboard_page(
    query: web::Query<PageQuery>,
    state: web::Data<LeaderboardState>,
) -> Result<HttpResponse, ApiError> {
    let search = SearchTerm::parse(query.into_inner().q).map_err(ApiError::ValidationError)?;

    let markup = match state.snapshot() {
        LoadState::Loading => page(loading_view(), Some(LOADING_REFRESH_SECONDS)),
        LoadState::Error(message) => page(error_view(&message), None),
        LoadState::Ready { ranked, .. } => {
            let subset = ranked.display_subset(search.as_ref());
            page(
                html! {
                    (leaderboard_view(&subset, search.as_ref()))
                    (rewards_banner())
                },
                None,
            )
        }
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(markup.into_string()))
}
