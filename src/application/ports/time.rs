// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of `created_at` stamps for new articles.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
