use anyhow::Context;
use leaderboard_web::configuration::get_configuration;
use leaderboard_web::startup::Application;
use leaderboard_web::telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Set up tracing telemetry.
    let subscriber = get_subscriber("leaderboard-web".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    // Get config settings
    let configuration = get_configuration().context("Failed to read configuration.")?;
    tracing::info!(
        scores_url = %configuration.scores_api.students_url(),
        "Serving the leaderboard on {}:{}",
        configuration.application.host,
        configuration.application.port
    );

    // Bind the socket and kick off the first load
    let application = Application::build(&configuration)
        .await
        .context("Failed to build the application.")?;

    application.run_until_stopped().await?;
    Ok(())
}
