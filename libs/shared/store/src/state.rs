use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::debug;

use shared_config::AppConfig;
use shared_models::events::RealtimeEvent;

use crate::store::Store;

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Shared application state handed to every cell router.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<Store>,
    pub events: broadcast::Sender<RealtimeEvent>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            config: Arc::new(config),
            store: Arc::new(Store::new()),
            events,
        }
    }

    /// Publish a realtime update. With no portal connected the channel has
    /// no receivers; that is not an error for the originating request.
    pub fn publish(&self, event: RealtimeEvent) {
        if let Err(e) = self.events.send(event) {
            debug!("No realtime subscribers for event: {}", e);
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RealtimeEvent> {
        self.events.subscribe()
    }
}
