pub mod config;
pub mod console;
pub mod error;
pub mod services;
pub mod session;

use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordgame_core::{StaticWordSource, WordSource};

use crate::config::AgentConfig;
use crate::services::conversation::IdleConversation;
use crate::services::notify::{LogNotifier, NotificationChannel};
use crate::services::supabase::SupabaseWordSource;
use crate::session::{SessionContext, SessionController};

pub async fn run() -> anyhow::Result<()> {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();

    // Replies go to stdout, so logs go to stderr.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AgentConfig::from_env()?;
    let source = build_source(&config)?;

    let ctx = SessionContext::new(source)
        .with_notifier(NotificationChannel::new().with(Arc::new(LogNotifier)))
        .with_conversation(Arc::new(IdleConversation))
        .with_language(config.language.clone())
        .with_settings(config.settings.clone());
    let mut session = SessionController::new(ctx);

    tracing::info!(session = %session.id(), language = %config.language, "Session ready");

    let stdin = BufReader::new(tokio::io::stdin());
    console::run_console(&mut session, stdin, tokio::io::stdout()).await?;

    tracing::info!(session = %session.id(), "Session closed");
    Ok(())
}

/// Supabase when configured, otherwise the built-in word list.
pub fn build_source(config: &AgentConfig) -> error::Result<Arc<dyn WordSource>> {
    match &config.supabase {
        Some(supabase) => {
            tracing::info!("Supabase word source initialized");
            Ok(Arc::new(SupabaseWordSource::new(supabase)?))
        }
        None => {
            tracing::warn!(
                "SUPABASE_URL or SUPABASE_KEY not set. Word game will use fallback word list."
            );
            Ok(Arc::new(StaticWordSource))
        }
    }
}
