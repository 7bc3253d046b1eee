//! Client-side copy of a server collection.
//!
//! A [`Collection`] is a read-through cache: the last successful fetch
//! replaces its items wholesale, a failed fetch keeps whatever was there and
//! records an error, and optimistic patches after a successful write are
//! applied in place and never reconciled against a later fetch.

use std::fmt::Debug;

/// Items addressable by a stable server id.
pub trait Keyed {
    type Key: Copy + PartialEq + Debug;

    fn key(&self) -> Self::Key;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Collection<T: Keyed> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    /// Rows with a mutating request in flight (borrow, delete).
    pending: Vec<T::Key>,
}

impl<T: Keyed> Default for Collection<T> {
    /// A fresh collection starts out loading, since every screen fetches on
    /// mount.
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            pending: Vec::new(),
        }
    }
}

impl<T: Keyed> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    /// A fetch succeeded: its items replace the current ones.
    pub fn loaded(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// A fetch failed: keep the previous items, surface `message`.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn get(&self, key: T::Key) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Apply `f` to the item with `key`. Returns whether one was found.
    pub fn patch(&mut self, key: T::Key, f: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.key() == key) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, key: T::Key) -> Option<T> {
        let index = self.items.iter().position(|item| item.key() == key)?;
        Some(self.items.remove(index))
    }

    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn begin_action(&mut self, key: T::Key) {
        if !self.pending.contains(&key) {
            self.pending.push(key);
        }
    }

    /// The request for `key` finished, whatever its outcome.
    pub fn end_action(&mut self, key: T::Key) {
        self.pending.retain(|pending| *pending != key);
    }

    pub fn is_pending(&self, key: T::Key) -> bool {
        self.pending.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, User};

    fn users() -> Vec<User> {
        (1..=6)
            .map(|id| User {
                id,
                name: Some(format!("user{id}")),
                email: Some(format!("user{id}@example.com")),
                role: None,
            })
            .collect()
    }

    #[test]
    fn test_starts_loading_then_loaded() {
        let mut users_cache = Collection::<User>::new();
        assert!(users_cache.is_loading());
        assert!(users_cache.is_empty());

        users_cache.loaded(users());
        assert!(!users_cache.is_loading());
        assert_eq!(users_cache.len(), 6);
        assert!(users_cache.error().is_none());
    }

    #[test]
    fn test_failed_fetch_keeps_previous_items() {
        let mut cache = Collection::<User>::new();
        cache.loaded(users());
        cache.start_loading();
        cache.failed("Failed to load users. Please try again.");

        assert_eq!(cache.len(), 6);
        assert!(!cache.is_loading());
        assert_eq!(cache.error(), Some("Failed to load users. Please try again."));

        cache.loaded(users().into_iter().take(2).collect());
        assert_eq!(cache.len(), 2);
        assert!(cache.error().is_none());
    }

    #[test]
    fn test_optimistic_delete_removes_row() {
        let mut cache = Collection::<User>::new();
        cache.loaded(users());

        cache.begin_action(5);
        assert!(cache.is_pending(5));
        let removed = cache.remove(5);
        cache.end_action(5);

        assert_eq!(removed.map(|u| u.id), Some(5));
        assert!(cache.get(5).is_none());
        assert!(cache.items().iter().all(|u| u.id != 5));
        assert!(!cache.is_pending(5));
        assert_eq!(cache.remove(5), None);
    }

    #[test]
    fn test_optimistic_borrow_sets_flag() {
        let mut cache = Collection::<Book>::new();
        cache.loaded(vec![Book {
            id: 42,
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            genre: None,
            available: Some(1),
            description: None,
            image_url: None,
            pdf_url: None,
            is_borrowed: false,
        }]);

        assert!(cache.patch(42, |b| b.is_borrowed = true));
        assert!(cache.get(42).is_some_and(|b| b.is_borrowed));
        assert!(!cache.patch(7, |b| b.is_borrowed = true));
    }

    #[test]
    fn test_overlapping_actions_stay_pending_independently() {
        let mut cache = Collection::<User>::new();
        cache.loaded(users());

        cache.begin_action(2);
        cache.begin_action(4);
        cache.end_action(2);

        assert!(!cache.is_pending(2));
        assert!(cache.is_pending(4));

        cache.end_action(4);
        assert!(!cache.is_pending(4));
    }
}
