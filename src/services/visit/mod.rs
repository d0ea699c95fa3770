//! First-visit gate over the persistent store.

use crate::services::storage::KeyValueStore;

/// Storage key marking that the dashboard has been opened before.
pub const VISIT_KEY: &str = "has-visited";

/// Check-and-set: returns true exactly once per storage scope, persisting
/// the flag on that first call. The flag is never cleared by the app.
pub fn first_visit(store: &mut dyn KeyValueStore) -> bool {
    if store.get(VISIT_KEY).is_some() {
        return false;
    }

    store.set(VISIT_KEY, "true");
    log::info!("first visit detected; welcome banner enabled");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStore;

    #[test]
    fn first_call_shows_welcome_and_sets_the_flag() {
        let mut store = MemoryStore::default();
        assert!(first_visit(&mut store));
        assert_eq!(store.get(VISIT_KEY), Some("true".to_string()));
    }

    #[test]
    fn second_call_short_circuits() {
        let mut store = MemoryStore::default();
        assert!(first_visit(&mut store));
        assert!(!first_visit(&mut store));
    }

    #[test]
    fn any_stored_value_counts_as_visited() {
        let mut store = MemoryStore::default();
        store.set(VISIT_KEY, "yes");
        assert!(!first_visit(&mut store));
    }
}
