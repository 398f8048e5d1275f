//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Scripted and failing word sources
//! - A notifier that forwards events to the test
//! - Helpers for building seeded sessions

#![allow(dead_code)]

pub mod fixtures;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::mpsc;

use wordgame_agent::services::notify::{NotificationChannel, ScoreNotifier};
use wordgame_agent::session::{SessionContext, SessionController};
use wordgame_core::{GameEvent, GameSettings, SourceError, WordPair, WordSource};

/// Word source returning a fixed list and counting fetches.
pub struct ScriptedSource {
    pairs: Vec<WordPair>,
    fetches: AtomicUsize,
}

impl ScriptedSource {
    pub fn new(pairs: Vec<WordPair>) -> Self {
        Self {
            pairs,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WordSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch(&self, language: &str, limit: usize) -> wordgame_core::Result<Vec<WordPair>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .pairs
            .iter()
            .filter(|pair| pair.target_language == language)
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Word source that is always down.
pub struct FailingSource;

#[async_trait]
impl WordSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self, _language: &str, _limit: usize) -> wordgame_core::Result<Vec<WordPair>> {
        Err(SourceError::Status {
            status: 503,
            body: "service unavailable".to_string(),
        })
    }
}

/// Forwards every event to the test through a channel.
pub struct RecordingNotifier {
    tx: mpsc::UnboundedSender<GameEvent>,
}

impl RecordingNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<GameEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl ScoreNotifier for RecordingNotifier {
    fn name(&self) -> &str {
        "recording"
    }

    async fn notify(&self, event: &GameEvent) -> anyhow::Result<()> {
        self.tx.send(*event)?;
        Ok(())
    }
}

/// Notifier whose deliveries always fail.
pub struct BrokenNotifier;

#[async_trait]
impl ScoreNotifier for BrokenNotifier {
    fn name(&self) -> &str {
        "broken"
    }

    async fn notify(&self, _event: &GameEvent) -> anyhow::Result<()> {
        anyhow::bail!("observer disconnected")
    }
}

pub fn seeded_settings() -> GameSettings {
    GameSettings {
        shuffle_seed: Some(2024),
        ..GameSettings::default()
    }
}

/// Seeded session over `source`, reporting to `notifier`.
pub fn session_with(
    source: Arc<dyn WordSource>,
    notifier: NotificationChannel,
) -> SessionController {
    let ctx = SessionContext::new(source)
        .with_notifier(notifier)
        .with_settings(seeded_settings());
    SessionController::new(ctx)
}

/// Seeded Portuguese session plus a receiver of its score events.
pub fn recorded_session(
    source: Arc<dyn WordSource>,
) -> (SessionController, mpsc::UnboundedReceiver<GameEvent>) {
    let (notifier, rx) = RecordingNotifier::new();
    let channel = NotificationChannel::new().with(Arc::new(notifier));
    (session_with(source, channel), rx)
}
