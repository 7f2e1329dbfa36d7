//! List Operations
//!
//! Pure helpers over the item collection.

use std::collections::HashSet;

use crate::models::ListItem;

/// Remove the item matching `id`. A missing id leaves the list untouched.
/// Returns whether an element was removed.
pub fn remove_item(items: &mut Vec<ListItem>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id != id);
    items.len() != before
}

/// Every id occurs at most once
pub fn has_unique_ids(items: &[ListItem]) -> bool {
    let mut seen = HashSet::new();
    items.iter().all(|item| seen.insert(item.id.as_str()))
}

/// Apply a completed refresh delay. `token` identifies the request that
/// scheduled the delay; a newer request bumps the epoch and strands the old
/// timer, so only the latest request restores the seed.
pub fn apply_refresh(seed: &[ListItem], epoch: u32, token: u32) -> Option<Vec<ListItem>> {
    (epoch == token).then(|| seed.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{basic_seed, menu_seed};

    fn make_item(id: &str) -> ListItem {
        ListItem::basic(id, format!("Item {}", id))
    }

    #[test]
    fn test_remove_present_id() {
        let mut items = basic_seed();
        assert!(remove_item(&mut items, "2"));

        let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["1", "3", "4"]);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut items = basic_seed();
        let before = items.clone();
        assert!(!remove_item(&mut items, "99"));
        assert_eq!(items, before);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut items: Vec<ListItem> = ["a", "b", "c", "d", "e"].iter().map(|id| make_item(id)).collect();
        remove_item(&mut items, "c");
        let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "d", "e"]);
    }

    #[test]
    fn test_refresh_restores_seed_by_value() {
        let seed = basic_seed();
        let mut items = seed.clone();
        remove_item(&mut items, "2");

        let restored = apply_refresh(&seed, 1, 1).unwrap();
        assert_eq!(restored, seed);
    }

    #[test]
    fn test_refresh_is_idempotent() {
        let seed = basic_seed();
        let first = apply_refresh(&seed, 1, 1).unwrap();
        let second = apply_refresh(&seed, 2, 2).unwrap();
        assert_eq!(first, second);
        assert_eq!(second.len(), seed.len());
    }

    #[test]
    fn test_stale_refresh_token_does_not_apply() {
        let seed = basic_seed();
        // Two requests in flight; the first timer fires after the second bumped the epoch
        assert!(apply_refresh(&seed, 2, 1).is_none());
        assert!(apply_refresh(&seed, 2, 2).is_some());
    }

    #[test]
    fn test_delete_then_refresh_scenario() {
        let seed = basic_seed();
        let mut items = seed.clone();

        remove_item(&mut items, "2");
        assert_eq!(items.len(), 3);

        items = apply_refresh(&seed, 1, 1).unwrap();
        assert_eq!(items, seed);
        assert_eq!(items.len(), 4);
    }

    #[test]
    fn test_menu_delete_scenario() {
        let mut items = menu_seed();
        assert!(remove_item(&mut items, "5"));

        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|item| item.name != "Sushi Rolls"));
        let likes: Vec<u32> = items.iter().filter_map(|item| item.likes).collect();
        assert_eq!(likes, [120, 95, 80, 110]);
        assert!(has_unique_ids(&items));
    }
}
