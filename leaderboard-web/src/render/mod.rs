mod leaderboard;
mod page;
mod rewards;
mod status;

pub use leaderboard::leaderboard_view;
pub use page::page;
pub use rewards::rewards_banner;
pub use status::{error_view, loading_view};
