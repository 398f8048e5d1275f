//! Best-effort score notifications.
//!
//! Delivery is fire-and-forget. Each notifier has one worker task draining an
//! unbounded queue, so events reach every observer in dispatch order. Failures
//! are logged, never returned to the turn that caused them.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::{broadcast, mpsc};
use tracing::{info, warn};

use wordgame_core::GameEvent;

/// Receives score events.
#[async_trait]
pub trait ScoreNotifier: Send + Sync {
    fn name(&self) -> &str;

    async fn notify(&self, event: &GameEvent) -> anyhow::Result<()>;
}

/// Writes score events to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl ScoreNotifier for LogNotifier {
    fn name(&self) -> &str {
        "log"
    }

    async fn notify(&self, event: &GameEvent) -> anyhow::Result<()> {
        let GameEvent::ScoreUpdate { score, total } = *event;
        info!(score, total, "Score update");
        Ok(())
    }
}

/// Fans JSON-encoded events out to every subscribed observer.
#[derive(Debug, Clone)]
pub struct BroadcastNotifier {
    tx: broadcast::Sender<String>,
}

impl BroadcastNotifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Register an observer; it sees events sent after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }

    pub fn observer_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[async_trait]
impl ScoreNotifier for BroadcastNotifier {
    fn name(&self) -> &str {
        "broadcast"
    }

    async fn notify(&self, event: &GameEvent) -> anyhow::Result<()> {
        let payload = serde_json::to_string(event)?;
        // No observers is not a failure.
        let _ = self.tx.send(payload);
        Ok(())
    }
}

/// Queue feeding one notifier's worker task.
struct Delivery {
    notifier: Arc<dyn ScoreNotifier>,
    tx: mpsc::UnboundedSender<GameEvent>,
    /// Receiver waiting for a runtime to start the worker on.
    pending: Mutex<Option<mpsc::UnboundedReceiver<GameEvent>>>,
}

impl Delivery {
    fn new(notifier: Arc<dyn ScoreNotifier>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            notifier,
            tx,
            pending: Mutex::new(Some(rx)),
        }
    }

    fn ensure_worker(&self, handle: &tokio::runtime::Handle) {
        let Some(rx) = self.pending.lock().ok().and_then(|mut pending| pending.take()) else {
            return;
        };
        handle.spawn(run_worker(Arc::clone(&self.notifier), rx));
    }
}

async fn run_worker(notifier: Arc<dyn ScoreNotifier>, mut rx: mpsc::UnboundedReceiver<GameEvent>) {
    while let Some(event) = rx.recv().await {
        if let Err(e) = notifier.notify(&event).await {
            warn!(notifier = notifier.name(), error = %e, "Failed to deliver score update");
        }
    }
}

/// The set of notifiers a session reports to.
///
/// Clones share the same workers.
#[derive(Clone, Default)]
pub struct NotificationChannel {
    deliveries: Vec<Arc<Delivery>>,
}

impl NotificationChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, notifier: Arc<dyn ScoreNotifier>) -> Self {
        self.deliveries.push(Arc::new(Delivery::new(notifier)));
        self
    }

    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    /// Queue `event` for every notifier and return immediately.
    pub fn dispatch(&self, event: GameEvent) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!("No async runtime, dropping score update");
            return;
        };

        for delivery in &self.deliveries {
            delivery.ensure_worker(&handle);
            if delivery.tx.send(event).is_err() {
                warn!(notifier = delivery.notifier.name(), "Notifier worker stopped");
            }
        }
    }
}
