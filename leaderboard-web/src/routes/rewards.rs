use actix_web::HttpResponse;
use standings::{REWARDS, REWARDS_TITLE};

pub async fn rewards() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "title": REWARDS_TITLE,
        "rewards": REWARDS,
    }))
}
