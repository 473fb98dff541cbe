mod error;
mod health_check;
mod leaderboard_page;
mod reload;
mod rewards;
mod standings_api;
mod status;

pub use error::ApiError;
pub use health_check::health_check;
pub use leaderboard_page::leaderboard_page;
pub use reload::reload;
pub use rewards::rewards;
pub use standings_api::request_standings;
pub use status::load_status;
