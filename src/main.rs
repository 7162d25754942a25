//! # Quran Bot Main Entry Point
//!
//! Initializes logging, loads configuration, connects to the verse database,
//! then runs the Discord client and the health check server side by side.

use anyhow::Result;
use serenity::all::GatewayIntents;
use serenity::Client;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quran_bot::bot::context::BotContext;
use quran_bot::bot::handlers::BotHandler;
use quran_bot::config::Config;
use quran_bot::database::connection::DatabaseManager;
use quran_bot::database::store::VerseStore;
use quran_bot::services::health::HealthService;
use quran_bot::services::verses::VerseService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quran_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Quran Bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - Edition: {}, HTTP Port: {}, Daily channel: #{}",
        config.edition, config.http_port, config.daily_channel);

    // Initialize database
    info!("Initializing database connection...");
    let store: Arc<dyn VerseStore> = Arc::new(DatabaseManager::new(&config.database_url).await?);
    info!("Database initialized successfully");

    let verses = VerseService::new(Arc::clone(&store), config.edition.clone(), config.max_message_len);
    let handler = BotHandler::new(BotContext::new(verses, &config));

    // Initialize bot
    info!("Initializing Discord client...");
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;
    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create Discord client: {}", e))?;
    info!("Discord client initialized successfully");

    // Initialize health service
    let health_service = HealthService::new(store);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    let shard_manager = Arc::clone(&client.shard_manager);

    let bot_task = tokio::spawn(async move {
        if let Err(e) = client.start().await {
            tracing::error!("Discord client error: {}", e);
        }
    });

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    // Wait for either task to complete (which would indicate shutdown)
    tokio::select! {
        result1 = bot_task => {
            if let Err(e) = result1 {
                tracing::error!("Bot task error: {}", e);
            }
        }
        result2 = health_task => {
            if let Err(e) = result2 {
                tracing::error!("Health task error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl-C, shutting down");
        }
    }

    shard_manager.shutdown_all().await;

    info!("Application stopped");
    Ok(())
}
