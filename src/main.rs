use chicago::{
    api,
    event::{EventBus, EventSubscription, NotificationHandler, TracingEmitter},
    persistence::{FileStore, HttpRemoteArchive},
    AppConfig, AppState, GameService,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chicago=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    info!(
        data_dir = %config.data_dir.display(),
        remote_archive = config.archive_url.is_some(),
        "Starting Chicago score keeper"
    );

    // Notices are routed to the log until a display is attached
    let event_bus = EventBus::default();
    EventSubscription::new(
        Arc::new(NotificationHandler::new(Arc::new(TracingEmitter))),
        event_bus.clone(),
    )
    .start();

    let mut builder = GameService::builder(Arc::new(FileStore::new(&config.data_dir)))
        .with_event_bus(event_bus)
        .with_notice_durations(config.notice_durations);
    if let Some(url) = &config.archive_url {
        builder = builder.with_remote_archive(Arc::new(HttpRemoteArchive::new(url.clone())));
    }
    let game_service = Arc::new(builder.load().await?);

    let app = api::router(AppState::new(game_service)).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
