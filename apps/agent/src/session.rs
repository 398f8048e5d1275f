//! Per-session controller.
//!
//! Owns one game and routes each utterance or control command through it.
//! Sessions share nothing: every controller has its own state, pool and
//! context.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use wordgame_core::{Game, GameSettings, GameState, TurnOutcome, WordSource, DEFAULT_LANGUAGE};

use crate::error::{AgentError, Result};
use crate::services::conversation::{ConversationHandler, IdleConversation};
use crate::services::notify::NotificationChannel;

/// Out-of-band command from the speech channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ControlCommand {
    Start {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    Stop,
    Skip,
}

impl ControlCommand {
    /// Build a command from its name and optional payload.
    pub fn parse(name: &str, payload: &str) -> Result<Self> {
        let payload = payload.trim();
        match name.trim().to_lowercase().as_str() {
            "start" | "start_game" => Ok(ControlCommand::Start {
                language: (!payload.is_empty()).then(|| payload.to_string()),
            }),
            "stop" | "stop_game" => Ok(ControlCommand::Stop),
            "skip" => Ok(ControlCommand::Skip),
            other => Err(AgentError::Command(other.to_string())),
        }
    }
}

impl FromStr for ControlCommand {
    type Err = AgentError;

    /// Parse "start spanish" style text.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, payload) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        Self::parse(name, payload)
    }
}

/// Collaborators and settings handed to a session at construction.
#[derive(Clone)]
pub struct SessionContext {
    pub id: Uuid,
    pub source: Arc<dyn WordSource>,
    pub notifier: NotificationChannel,
    pub conversation: Arc<dyn ConversationHandler>,
    pub language: String,
    pub settings: GameSettings,
}

impl SessionContext {
    pub fn new(source: Arc<dyn WordSource>) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            notifier: NotificationChannel::new(),
            conversation: Arc::new(IdleConversation),
            language: DEFAULT_LANGUAGE.to_string(),
            settings: GameSettings::default(),
        }
    }

    pub fn with_notifier(mut self, notifier: NotificationChannel) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_conversation(mut self, conversation: Arc<dyn ConversationHandler>) -> Self {
        self.conversation = conversation;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_settings(mut self, settings: GameSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Drives one game from speech-channel input.
pub struct SessionController {
    ctx: SessionContext,
    game: Game,
}

impl SessionController {
    pub fn new(ctx: SessionContext) -> Self {
        let game = Game::with_language(&ctx.language, ctx.settings.clone());
        Self { ctx, game }
    }

    pub fn id(&self) -> Uuid {
        self.ctx.id
    }

    pub fn state(&self) -> &GameState {
        self.game.state()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Handle a finished user turn. `None` means say nothing.
    #[instrument(skip_all, fields(session = %self.ctx.id))]
    pub async fn on_utterance(&mut self, text: &str) -> Option<String> {
        match self.game.submit_answer(text) {
            TurnOutcome::Ceded => self.ctx.conversation.handle(text).await,
            TurnOutcome::Silent => None,
            TurnOutcome::Reply(turn) => {
                info!(
                    word = %turn.resolved.english_word,
                    outcome = ?turn.outcome,
                    "Evaluated answer"
                );
                self.ctx.notifier.dispatch(turn.event);
                Some(turn.reply)
            }
        }
    }

    /// Handle start, stop and skip requests.
    #[instrument(skip_all, fields(session = %self.ctx.id, command = ?command))]
    pub async fn on_control_command(&mut self, command: ControlCommand) -> Option<String> {
        match command {
            ControlCommand::Start { language } => {
                let greeting = self
                    .game
                    .start(self.ctx.source.as_ref(), language.as_deref())
                    .await;
                self.ctx.notifier.dispatch(self.game.state().score_update());
                Some(greeting)
            }
            ControlCommand::Stop => Some(self.game.stop()),
            ControlCommand::Skip => match self.game.skip() {
                TurnOutcome::Reply(turn) => {
                    self.ctx.notifier.dispatch(turn.event);
                    Some(turn.reply)
                }
                TurnOutcome::Ceded | TurnOutcome::Silent => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wordgame_core::StaticWordSource;

    #[test]
    fn parse_start_with_language() {
        assert_eq!(
            ControlCommand::parse("start", " Spanish ").unwrap(),
            ControlCommand::Start {
                language: Some("Spanish".to_string())
            }
        );
        assert_eq!(
            ControlCommand::parse("START", "").unwrap(),
            ControlCommand::Start { language: None }
        );
    }

    #[test]
    fn parse_rejects_unknown_command() {
        assert!(matches!(
            ControlCommand::parse("dance", ""),
            Err(AgentError::Command(name)) if name == "dance"
        ));
    }

    #[test]
    fn from_str_splits_payload() {
        assert_eq!(
            "skip".parse::<ControlCommand>().ok(),
            Some(ControlCommand::Skip)
        );
        assert_eq!(
            "start pt".parse::<ControlCommand>().ok(),
            Some(ControlCommand::Start {
                language: Some("pt".to_string())
            })
        );
    }

    #[test]
    fn commands_deserialize_from_json() {
        let command: ControlCommand =
            serde_json::from_str(r#"{"command":"start","language":"es"}"#).unwrap();
        assert_eq!(
            command,
            ControlCommand::Start {
                language: Some("es".to_string())
            }
        );
        let command: ControlCommand = serde_json::from_str(r#"{"command":"stop"}"#).unwrap();
        assert_eq!(command, ControlCommand::Stop);
    }

    #[tokio::test]
    async fn skip_before_start_says_nothing() {
        let mut session = SessionController::new(SessionContext::new(Arc::new(StaticWordSource)));
        assert_eq!(session.on_control_command(ControlCommand::Skip).await, None);
        assert_eq!(session.state().total_attempts, 0);
    }

    #[tokio::test]
    async fn sessions_are_independent() {
        let source: Arc<dyn WordSource> = Arc::new(StaticWordSource);
        let mut a = SessionController::new(SessionContext::new(source.clone()));
        let b = SessionController::new(SessionContext::new(source));
        assert_ne!(a.id(), b.id());

        a.on_control_command(ControlCommand::Start { language: None }).await;
        assert!(a.state().is_active);
        assert!(!b.state().is_active);
    }
}
