// ============================================================================
// TOAST STATE - Auto-expiring notification queue
// ============================================================================

use chrono::{DateTime, Utc};

use crate::models::{Toast, ToastKind};

pub const DEFAULT_TOAST_DURATION_MS: u32 = 3000;

/// Toasts in insertion order. Ids grow monotonically per queue.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a toast and return its id
    pub fn push(&mut self, message: &str, kind: ToastKind, duration_ms: u32, now: DateTime<Utc>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.to_string(),
            kind,
            visible: true,
            created_at: now,
            duration_ms,
        });
        id
    }

    pub fn push_default(&mut self, message: &str, kind: ToastKind, now: DateTime<Utc>) -> u64 {
        self.push(message, kind, DEFAULT_TOAST_DURATION_MS, now)
    }

    /// Remove one toast; unknown ids are ignored
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast whose duration has elapsed at `now`
    pub fn expire(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired(now));
        before - self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn get(&self, id: u64) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id == id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 22, 10, 0, 0).unwrap()
    }

    #[test]
    fn default_toast_is_gone_after_three_seconds() {
        let mut queue = ToastQueue::new();
        let id = queue.push_default("Login successful!", ToastKind::Success, t0());

        queue.expire(t0() + Duration::milliseconds(2999));
        assert!(queue.get(id).is_some());

        queue.expire(t0() + Duration::milliseconds(3000));
        assert!(queue.get(id).is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn toasts_expire_independently() {
        let mut queue = ToastQueue::new();
        let short = queue.push("short", ToastKind::Info, 1000, t0());
        let long = queue.push("long", ToastKind::Warning, 5000, t0() + Duration::milliseconds(500));

        assert_eq!(queue.expire(t0() + Duration::milliseconds(1200)), 1);
        assert!(queue.get(short).is_none());
        assert!(queue.get(long).is_some());
    }

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let mut queue = ToastQueue::new();
        let a = queue.push_default("same", ToastKind::Info, t0());
        let b = queue.push_default("same", ToastKind::Info, t0());

        assert!(b > a);
        let ids: Vec<u64> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut queue = ToastQueue::new();
        let a = queue.push_default("a", ToastKind::Info, t0());
        let b = queue.push_default("b", ToastKind::Danger, t0());

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert!(!queue.dismiss(999));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.last().map(|t| t.id), Some(b));
    }
}
