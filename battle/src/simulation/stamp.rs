use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of record ids and timestamps
pub trait Stamper: Send + Sync {
    /// A fresh, unique id
    fn next_id(&self) -> String;

    /// The current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Random UUIDs and the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemStamper;

impl Stamper for SystemStamper {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic ids (`<prefix>-1`, `<prefix>-2`, ...) and a frozen clock
#[derive(Debug)]
pub struct SequenceStamper {
    prefix: String,
    next: AtomicU64,
    at: DateTime<Utc>,
}

impl SequenceStamper {
    pub fn new(prefix: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
            at,
        }
    }
}

impl Default for SequenceStamper {
    fn default() -> Self {
        Self::new("battle", DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl Stamper for SequenceStamper {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }

    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}

impl<S: Stamper + ?Sized> Stamper for std::sync::Arc<S> {
    fn next_id(&self) -> String {
        (**self).next_id()
    }

    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
