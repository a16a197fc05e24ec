use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fitplan::config::Config;
use fitplan::handlers::{auth, best_scores, history, home, proxy, workout};
use fitplan::models::ActiveSessions;
use fitplan::routes;
use fitplan::session::SessionKey;
use fitplan::store::StoreClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitplan=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Using store endpoint: {}", config.store_url);

    // One HTTP client, shared by the store client and the proxy
    let http = reqwest::Client::new();
    let store = StoreClient::new(http.clone(), config.store_url.clone());

    // Transient in-progress workouts
    let sessions = ActiveSessions::new();

    // Generate session key
    let session_key = SessionKey::generate();

    // Create handler states
    let home_state = home::HomeState {
        store: store.clone(),
    };
    let workout_state = workout::WorkoutState {
        store: store.clone(),
        sessions,
    };
    let history_state = history::HistoryState {
        store: store.clone(),
    };
    let best_scores_state = best_scores::BestScoresState { store };
    let proxy_state = proxy::ProxyState {
        http,
        store_url: config.store_url.clone(),
    };
    let auth_state = auth::AuthState {
        auth_url: config.auth_url.clone(),
    };

    // Build router
    let app = routes::create_router(
        home_state,
        workout_state,
        history_state,
        best_scores_state,
        proxy_state,
        auth_state,
        session_key,
    );

    // Start server
    let addr = config.server_addr();
    tracing::info!("Starting server at http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
