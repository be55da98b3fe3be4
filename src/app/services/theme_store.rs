//! Process-wide theme preference with persistence and change notification.

use tracing::{info, warn};

use crate::app::domain::settings::ThemePreference;
use crate::app::infrastructure::storage::KeyValueStore;

/// Returned by [`ThemeStore::subscribe`]; pass back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener = Box<dyn FnMut(ThemePreference)>;

pub struct ThemeStore {
    storage: Box<dyn KeyValueStore>,
    key: String,
    theme: ThemePreference,
    system_dark: bool,
    listeners: Vec<(Subscription, Listener)>,
    next_id: u64,
}

impl ThemeStore {
    /// Reads the persisted preference under `key`. Missing, invalid or
    /// unreadable values fall back to `default`.
    pub fn new(
        storage: Box<dyn KeyValueStore>,
        key: impl Into<String>,
        default: ThemePreference,
        system_dark: bool,
    ) -> Self {
        let key = key.into();
        let theme = match storage.get(&key) {
            Ok(Some(value)) => ThemePreference::parse(&value).unwrap_or_else(|| {
                warn!(%key, %value, "ignoring invalid stored theme");
                default
            }),
            Ok(None) => default,
            Err(e) => {
                warn!(%key, error = %e, "theme storage unavailable, using default");
                default
            }
        };

        Self {
            storage,
            key,
            theme,
            system_dark,
            listeners: Vec::new(),
            next_id: 1,
        }
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn system_dark(&self) -> bool {
        self.system_dark
    }

    /// Concrete scheme for the current preference
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark(self.system_dark)
    }

    /// Persist and notify every subscriber, in subscription order.
    /// A failed write is logged; the in-memory value still changes.
    pub fn set_theme(&mut self, next: ThemePreference) {
        self.theme = next;
        if let Err(e) = self.storage.set(&self.key, next.as_str()) {
            warn!(key = %self.key, error = %e, "failed to persist theme");
        }
        info!(theme = next.as_str(), "theme changed");

        for (_, listener) in self.listeners.iter_mut() {
            listener(next);
        }
    }

    /// Flip between light and dark. `System` flips away from whatever
    /// the desktop currently shows.
    pub fn toggle(&mut self) -> ThemePreference {
        let next = if self.is_dark() {
            ThemePreference::Light
        } else {
            ThemePreference::Dark
        };
        self.set_theme(next);
        next
    }

    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(ThemePreference) + 'static,
    {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::app::infrastructure::error::{AppError, Result};
    use crate::app::infrastructure::storage::{JsonFileStore, MemoryStore};

    const KEY: &str = "portfolio-theme";

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(AppError::Storage("denied".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(AppError::Storage("denied".to_string()))
        }
    }

    fn store_with(value: Option<&str>) -> ThemeStore {
        let mut storage = MemoryStore::new();
        if let Some(v) = value {
            storage.set(KEY, v).unwrap();
        }
        ThemeStore::new(Box::new(storage), KEY, ThemePreference::Dark, false)
    }

    #[test]
    fn test_missing_value_uses_default() {
        assert_eq!(store_with(None).theme(), ThemePreference::Dark);
    }

    #[test]
    fn test_reads_persisted_value() {
        assert_eq!(store_with(Some("light")).theme(), ThemePreference::Light);
        assert_eq!(store_with(Some("system")).theme(), ThemePreference::System);
    }

    #[test]
    fn test_invalid_value_uses_default() {
        assert_eq!(store_with(Some("purple")).theme(), ThemePreference::Dark);
    }

    #[test]
    fn test_toggle_persists_across_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let mut store = ThemeStore::new(
            Box::new(JsonFileStore::new(&path)),
            KEY,
            ThemePreference::Dark,
            false,
        );
        assert_eq!(store.theme(), ThemePreference::Dark);
        assert_eq!(store.toggle(), ThemePreference::Light);

        let reloaded = ThemeStore::new(
            Box::new(JsonFileStore::new(&path)),
            KEY,
            ThemePreference::Dark,
            false,
        );
        assert_eq!(reloaded.theme(), ThemePreference::Light);
    }

    #[test]
    fn test_broken_storage_degrades_to_memory() {
        let mut store = ThemeStore::new(Box::new(BrokenStore), KEY, ThemePreference::Dark, false);
        assert_eq!(store.theme(), ThemePreference::Dark);
        store.set_theme(ThemePreference::Light);
        assert_eq!(store.theme(), ThemePreference::Light);
    }

    #[test]
    fn test_subscribers_notified_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = store_with(None);

        let first = seen.clone();
        store.subscribe(move |t| first.borrow_mut().push(("first", t)));
        let second = seen.clone();
        store.subscribe(move |t| second.borrow_mut().push(("second", t)));

        store.set_theme(ThemePreference::Light);
        assert_eq!(
            *seen.borrow(),
            vec![("first", ThemePreference::Light), ("second", ThemePreference::Light)]
        );
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let count = Rc::new(RefCell::new(0));
        let mut store = store_with(None);

        let c = count.clone();
        let sub = store.subscribe(move |_| *c.borrow_mut() += 1);
        store.toggle();
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.toggle();

        assert_eq!(*count.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_toggle_from_system_follows_desktop() {
        let mut storage = MemoryStore::new();
        storage.set(KEY, "system").unwrap();
        let mut store = ThemeStore::new(Box::new(storage), KEY, ThemePreference::Dark, true);
        assert!(store.is_dark());
        assert_eq!(store.toggle(), ThemePreference::Light);
        assert_eq!(store.toggle(), ThemePreference::Dark);
    }
}
