use ev_planner::config::AppConfig;
use ev_planner::google::GoogleClient;
use ev_planner::ocm::OcmClient;
use ev_planner::planner::TripPlanner;
use ev_planner::session::MokaSessionStore;
use ev_planner::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ev_planner=info")),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    // One Google client serves directions, station search and amenities
    let google = GoogleClient::new(config.google_config()).expect("Failed to create Google client");
    let ocm = OcmClient::new(config.ocm_config()).expect("Failed to create Open Charge Map client");

    let planner = TripPlanner::new(google.clone(), google, ocm, config.planner_config());
    let sessions = MokaSessionStore::new(&config.session_config());

    let app = create_router(AppState::new(planner, sessions));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("Failed to bind address");
    info!(addr = %config.addr, "EV trip planner listening");
    info!("  GET  /health     - Health check");
    info!("  GET  /vehicles   - Supported vehicles");
    info!("  POST /search     - Search routes and charging stations");
    info!("  GET  /amenities  - Amenities near a station");

    axum::serve(listener, app).await.expect("Server error");
}
