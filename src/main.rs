use article_board::application::{ports::time::Clock, services::ServiceContext};
use article_board::config::AppConfig;
use article_board::domain::article::ArticleStore;
use article_board::infrastructure::{
    database,
    repositories::{InMemoryArticleStore, SqliteArticleStore},
    time::SystemClock,
};
use article_board::presentation::http::{
    routes::build_router, state::HttpState, views::ViewRenderer,
};
use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let store: Arc<dyn ArticleStore> = if config.uses_memory_store() {
        tracing::warn!("using in-memory article store; articles are lost on exit");
        Arc::new(InMemoryArticleStore::new(Arc::clone(&clock)))
    } else {
        let pool = database::init_pool(config.database_url(), config.max_connections()).await?;
        database::run_migrations(&pool).await?;
        tracing::info!(database_url = config.database_url(), "database ready");
        Arc::new(SqliteArticleStore::new(Arc::new(pool), Arc::clone(&clock)))
    };

    let services = Arc::new(ServiceContext::new(store));
    let views = Arc::new(ViewRenderer::new()?);
    let app = build_router(HttpState::new(services, views));

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
