use super::ApiError;
use crate::leaderboard_state::{LeaderboardState, LoadState};
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, web};
use anyhow::Context;
use standings::{RankIcon, RankedEntry, SearchTerm, Student, Tier};

#[derive(serde::Deserialize)]
pub struct StandingsQuery {
    #[serde(default)]
    q: String,
}

#[derive(serde::Serialize)]
struct EntryView<'a> {
    rank: usize,
    tier: Tier,
    tier_label: &'static str,
    icon: RankIcon,
    podium: bool,
    show_avatar: bool,
    #[serde(flatten)]
    student: &'a Student,
}

impl<'a> From<&RankedEntry<'a>> for EntryView<'a> {
    fn from(entry: &RankedEntry<'a>) -> Self {
        Self {
            rank: entry.display_rank(),
            tier: entry.tier(),
            tier_label: entry.tier().label(),
            icon: entry.icon(),
            podium: entry.is_podium(),
            show_avatar: entry.shows_avatar(),
            student: entry.student,
        }
    }
}

#[derive(serde::Serialize)]
struct StandingsBody<'a> {
    searching: bool,
    entries: Vec<EntryView<'a>>,
}

/// JSON rendition of the leaderboard: the same display subset the page shows.
#[tracing::instrument(
    name = "Requesting the displayed standings",
    skip(query, state),
    fields(search = %query.q)
)]
pub async fn request_standings(
    query: web::Query<StandingsQuery>,
    state: web::Data<LeaderboardState>,
) -> Result<HttpResponse, ApiError> {
    let search = SearchTerm::parse(query.into_inner().q).map_err(ApiError::ValidationError)?;

    let ranked = match state.snapshot() {
        LoadState::Ready { ranked, .. } => ranked,
        LoadState::Loading => return Err(ApiError::NotReady),
        LoadState::Error(message) => return Err(ApiError::LoadFailed(message)),
    };

    let subset = ranked.display_subset(search.as_ref());
    let body = StandingsBody {
        searching: subset.searching,
        entries: subset.entries.iter().map(EntryView::from).collect(),
    };
    let json = serde_json::to_string(&body).context("Failed to serialize the standings")?;
    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(json))
}
