pub mod configuration;
pub mod leaderboard_state;
pub mod loader;
pub mod render;
pub mod routes;
pub mod scores_client;
pub mod startup;
pub mod telemetry;
