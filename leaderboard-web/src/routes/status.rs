use crate::leaderboard_state::{LeaderboardState, LoadState};
use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};

#[derive(serde::Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
enum StatusBody {
    Loading,
    Ready {
        students: usize,
        loaded_at: DateTime<Utc>,
    },
    Error {
        message: String,
    },
}

pub async fn load_status(state: web::Data<LeaderboardState>) -> HttpResponse {
    let body = match state.snapshot() {
        LoadState::Loading => StatusBody::Loading,
        LoadState::Ready { ranked, loaded_at } => StatusBody::Ready {
            students: ranked.len(),
            loaded_at,
        },
        LoadState::Error(message) => StatusBody::Error { message },
    };
    HttpResponse::Ok().json(body)
}
