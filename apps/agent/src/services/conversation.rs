//! Conversational fallback used while no game is running.

use async_trait::async_trait;

/// Answers utterances the game engine declines to handle.
#[async_trait]
pub trait ConversationHandler: Send + Sync {
    /// Reply to `utterance`; `None` produces no speech.
    async fn handle(&self, utterance: &str) -> Option<String>;
}

/// Points the speaker at the start command.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdleConversation;

pub const IDLE_REPLY: &str = "The game hasn't started yet. Say 'start game' to begin!";

#[async_trait]
impl ConversationHandler for IdleConversation {
    async fn handle(&self, utterance: &str) -> Option<String> {
        if utterance.trim().is_empty() {
            return None;
        }
        Some(IDLE_REPLY.to_string())
    }
}
