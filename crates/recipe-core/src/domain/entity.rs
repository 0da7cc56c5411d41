//! Domain Layer - Core Entity Trait
//!
//! Every record cached on the client has a server-assigned id. The
//! collection helpers below are generic over that contract.

/// Core trait for all domain entities
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Debug + Send + Sync;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Find an entity by ID
pub fn find_by_id<T: Entity>(items: &[T], id: T::Id) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}

/// Replace the entity with the same ID in place, keeping its position.
///
/// Returns `false` when no element carries that ID.
pub fn replace_by_id<T: Entity>(items: &mut [T], updated: T) -> bool {
    match items.iter_mut().find(|item| item.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove every entity with the given ID, returning how many were dropped
pub fn remove_by_id<T: Entity>(items: &mut Vec<T>, id: T::Id) -> usize {
    let before = items.len();
    items.retain(|item| item.id() != id);
    before - items.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(u32, &'static str);

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut rows = vec![Row(1, "a"), Row(2, "b"), Row(3, "c")];
        assert!(replace_by_id(&mut rows, Row(2, "B")));
        assert_eq!(rows, vec![Row(1, "a"), Row(2, "B"), Row(3, "c")]);
    }

    #[test]
    fn test_replace_missing_is_noop() {
        let mut rows = vec![Row(1, "a")];
        assert!(!replace_by_id(&mut rows, Row(9, "z")));
        assert_eq!(rows, vec![Row(1, "a")]);
    }

    #[test]
    fn test_remove_and_find() {
        let mut rows = vec![Row(1, "a"), Row(2, "b")];
        assert_eq!(find_by_id(&rows, 2), Some(&Row(2, "b")));
        assert_eq!(remove_by_id(&mut rows, 2), 1);
        assert_eq!(remove_by_id(&mut rows, 2), 0);
        assert!(find_by_id(&rows, 2).is_none());
    }
}
