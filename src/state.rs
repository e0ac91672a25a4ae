use std::sync::Arc;
use tokio::sync::Mutex;

/// Holds the single announced identifier.
#[derive(Default)]
pub struct RelayState {
    latest_id: Mutex<Option<String>>,
}

pub type SharedState = Arc<RelayState>;

impl RelayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedState {
        Arc::new(Self::new())
    }

    pub async fn get(&self) -> Option<String> {
        self.latest_id.lock().await.clone()
    }

    /// Replaces whatever was stored before.
    pub async fn set(&self, id: String) {
        *self.latest_id.lock().await = Some(id);
    }

    pub async fn clear(&self) {
        *self.latest_id.lock().await = None;
    }
}
