use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{sync::watch, time::Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerMessage {
    pub kind: BannerKind,
    pub text: String,
    pub expires_at: Instant,
    id: u64,
}

#[derive(Debug, Clone, Copy)]
pub struct BannerConfig {
    pub success_duration: Duration,
    pub error_duration: Duration,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            success_duration: Duration::from_secs(5),
            error_duration: Duration::from_secs(10),
        }
    }
}

///
/// Success or error message shown on top of a view.
///
/// Message disappears by itself once its duration passed.
/// Showing a new message replaces the current one.
///
pub struct Banner {
    config: BannerConfig,
    next_id: AtomicU64,
    message: Arc<watch::Sender<Option<BannerMessage>>>,
}

impl Banner {
    pub fn new(config: BannerConfig) -> Self {
        let (message, _) = watch::channel(None);

        Self {
            config,
            next_id: AtomicU64::new(0),
            message: Arc::new(message),
        }
    }

    ///
    /// Must be called within tokio runtime
    ///
    pub fn show_success(&self, text: impl Into<String>) {
        self.show(BannerKind::Success, text.into(), self.config.success_duration);
    }

    ///
    /// Must be called within tokio runtime
    ///
    pub fn show_error(&self, text: impl Into<String>) {
        self.show(BannerKind::Error, text.into(), self.config.error_duration);
    }

    pub fn dismiss(&self) {
        self.message.send_replace(None);
    }

    ///
    /// Message that did not expire yet
    ///
    pub fn current(&self) -> Option<BannerMessage> {
        self.message
            .borrow()
            .as_ref()
            .filter(|message| message.expires_at > Instant::now())
            .cloned()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<BannerMessage>> {
        self.message.subscribe()
    }

    fn show(&self, kind: BannerKind, text: String, duration: Duration) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let expires_at = Instant::now() + duration;
        tracing::debug!(?kind, %text, "showing banner");

        self.message.send_replace(Some(BannerMessage {
            kind,
            text,
            expires_at,
            id,
        }));

        let message = self.message.clone();
        tokio::spawn(async move {
            tokio::time::sleep_until(expires_at).await;
            message.send_if_modified(|current| {
                let expired = current.as_ref().is_some_and(|current| current.id == id);
                if expired {
                    *current = None;
                }
                expired
            });
        });
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new(BannerConfig::default())
    }
}
