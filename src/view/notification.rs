//! Transient, dismissible messages shown after user actions.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;

pub const DEFAULT_TTL_SECS: i64 = 5;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
    #[schema(value_type = String, format = "date-time")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
    ttl: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(Duration::seconds(DEFAULT_TTL_SECS))
    }
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            ttl,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push_at(NotificationLevel::Success, message, Utc::now())
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push_at(NotificationLevel::Error, message, Utc::now())
    }

    pub fn push_at(
        &mut self,
        level: NotificationLevel,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            level,
            message: message.into(),
            created_at: now,
        });
        id
    }

    /// Returns true if a notification was removed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Drops expired notifications and returns the rest, oldest first.
    pub fn active_at(&mut self, now: DateTime<Utc>) -> Vec<Notification> {
        let ttl = self.ttl;
        self.items.retain(|n| now - n.created_at < ttl);
        self.items.clone()
    }

    pub fn active(&mut self) -> Vec<Notification> {
        self.active_at(Utc::now())
    }

    /// Most recent message, regardless of expiry.
    pub fn last(&self) -> Option<&Notification> {
        self.items.last()
    }
}
