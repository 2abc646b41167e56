use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::BannerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerTone {
    Success,
    Error,
}

impl BannerTone {
    pub const fn label(self) -> &'static str {
        match self {
            BannerTone::Success => "success",
            BannerTone::Error => "error",
        }
    }
}

/// Transient inline notification shown above a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub tone: BannerTone,
    pub message: String,
}

impl Banner {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            tone: BannerTone::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            tone: BannerTone::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Default)]
struct BannerSlot {
    sequence: u64,
    current: Option<Banner>,
    timer: Option<JoinHandle<()>>,
}

/// Holds at most one banner and the task that will dismiss it.
///
/// Showing a banner aborts the pending dismissal of the previous one, so a
/// replacement always stays up for the full delay. Must be used from within
/// a tokio runtime.
#[derive(Debug, Clone)]
pub struct BannerBoard {
    slot: Arc<Mutex<BannerSlot>>,
    dismiss_after: Duration,
}

impl BannerBoard {
    pub fn new(config: &BannerConfig) -> Self {
        Self {
            slot: Arc::new(Mutex::new(BannerSlot::default())),
            dismiss_after: config.dismiss_after,
        }
    }

    pub fn show(&self, banner: Banner) {
        let mut slot = lock(&self.slot);
        slot.sequence += 1;
        let sequence = slot.sequence;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.current = Some(banner);

        let weak = Arc::downgrade(&self.slot);
        let delay = self.dismiss_after;
        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            expire(&weak, sequence);
        }));
    }

    /// Hides the banner immediately, cancelling its timer.
    pub fn dismiss(&self) {
        let mut slot = lock(&self.slot);
        slot.sequence += 1;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.current = None;
    }

    pub fn current(&self) -> Option<Banner> {
        lock(&self.slot).current.clone()
    }
}

// A timer that lost the race to a newer banner must leave it alone.
fn expire(slot: &Weak<Mutex<BannerSlot>>, sequence: u64) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let mut guard = lock(&slot);
    if guard.sequence == sequence {
        guard.current = None;
        guard.timer = None;
    }
}

fn lock(slot: &Mutex<BannerSlot>) -> MutexGuard<'_, BannerSlot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
