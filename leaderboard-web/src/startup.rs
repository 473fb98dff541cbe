use crate::configuration::Settings;
use crate::leaderboard_state::LeaderboardState;
use crate::loader::start_load;
use crate::routes::{
    health_check, leaderboard_page, load_status, reload, request_standings, rewards,
};
use crate::scores_client::ScoresClient;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: &Settings) -> Result<Self, std::io::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let client = ScoresClient::new(&configuration.scores_api);
        let server = run(listener, client)?;
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Starts the first load of the students list, then serves the page.
pub fn run(listener: TcpListener, client: ScoresClient) -> Result<Server, std::io::Error> {
    let state = web::Data::new(LeaderboardState::new());
    let client = web::Data::new(client);
    start_load(state.clone(), client.clone());

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(leaderboard_page))
            .route("/reload", web::post().to(reload))
            .route("/health_check", web::get().to(health_check))
            .route("/api/status", web::get().to(load_status))
            .route("/api/leaderboard", web::get().to(request_standings))
            .route("/api/rewards", web::get().to(rewards))
            .app_data(state.clone())
            .app_data(client.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
