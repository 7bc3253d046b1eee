//! Transient toast notifications.
//!
//! The queue only tracks what is on screen; expiry is driven by the UI, which
//! sleeps for the configured TTL and then calls [`Notifications::dismiss`].

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification success",
            NotificationKind::Error => "notification error",
            NotificationKind::Info => "notification info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    next_id: u64,
    entries: Vec<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notification and return its id.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.entries.push(Notification {
            id,
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove a notification. Returns whether it was still showing.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut queue = Notifications::new();
        let a = queue.push(NotificationKind::Success, "Book borrowed successfully!");
        let b = queue.push(NotificationKind::Error, "Failed to borrow book. Please try again.");
        assert_ne!(a, b);
        assert_eq!(queue.entries().len(), 2);
        assert_eq!(queue.entries()[0].id, a);
        assert_eq!(queue.entries()[1].kind, NotificationKind::Error);
    }

    #[test]
    fn test_dismiss_only_removes_target() {
        let mut queue = Notifications::new();
        let a = queue.push(NotificationKind::Info, "Viewing user: ada");
        let b = queue.push(NotificationKind::Success, "User deleted successfully!");

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a), "already expired");
        assert_eq!(queue.entries().len(), 1);
        assert_eq!(queue.entries()[0].id, b);

        assert!(queue.dismiss(b));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut queue = Notifications::new();
        let a = queue.push(NotificationKind::Info, "one");
        queue.dismiss(a);
        let b = queue.push(NotificationKind::Info, "two");
        assert!(b > a);
    }
}
