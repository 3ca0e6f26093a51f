//! In-Memory Entity Collection
//!
//! Vec-backed, insertion-ordered storage shared by the three store
//! collections. Mutations targeting an unknown id are silent no-ops
//! (the caller gets `false`, never an error).

use tracing::debug;

/// Implemented by every stored entity type.
pub trait Entity {
    /// Opaque identifier, immutable after creation.
    fn id(&self) -> &str;

    /// Collection name used in logs.
    fn entity_type() -> &'static str;
}

/// Insertion-ordered collection of one entity type.
///
/// `push` appends at the end; `update` and `remove` never reorder the
/// remaining entries.
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Current entities in insertion order. Never fails.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Append an entity, returning its id.
    pub fn push(&mut self, item: T) -> String {
        let id = item.id().to_string();
        debug!(entity_type = T::entity_type(), id = %id, "entity added");
        self.items.push(item);
        id
    }

    /// Apply `f` to the entity at `id`, leaving its position unchanged.
    /// Returns `false` when the id is unknown.
    pub fn update(&mut self, id: &str, f: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                f(item);
                debug!(entity_type = T::entity_type(), id = %id, "entity updated");
                true
            }
            None => false,
        }
    }

    /// Remove the entity at `id`, preserving the order of the rest.
    /// Returns `false` when the id is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                self.items.remove(index);
                debug!(entity_type = T::entity_type(), id = %id, "entity removed");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Widget {
        id: String,
        label: String,
    }

    impl Entity for Widget {
        fn id(&self) -> &str {
            &self.id
        }

        fn entity_type() -> &'static str {
            "widget"
        }
    }

    fn widget(id: &str, label: &str) -> Widget {
        Widget {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut coll = Collection::new();
        coll.push(widget("a", "first"));
        coll.push(widget("b", "second"));
        coll.push(widget("c", "third"));

        let ids: Vec<&str> = coll.as_slice().iter().map(|w| w.id()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let mut coll = Collection::new();
        coll.push(widget("a", "first"));
        coll.push(widget("b", "second"));

        assert!(coll.update("a", |w| w.label = "renamed".to_string()));
        assert_eq!(coll.as_slice()[0].id, "a");
        assert_eq!(coll.as_slice()[0].label, "renamed");
        assert_eq!(coll.as_slice()[1].label, "second");
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut coll = Collection::new();
        coll.push(widget("a", "first"));

        assert!(!coll.update("missing", |w| w.label = "changed".to_string()));
        assert_eq!(coll.as_slice()[0].label, "first");
    }

    #[test]
    fn test_remove_preserves_remaining_order() {
        let mut coll = Collection::new();
        coll.push(widget("a", "first"));
        coll.push(widget("b", "second"));
        coll.push(widget("c", "third"));

        assert!(coll.remove("b"));
        let ids: Vec<&str> = coll.as_slice().iter().map(|w| w.id()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let mut coll = Collection::new();
        coll.push(widget("a", "first"));

        assert!(coll.remove("a"));
        assert!(!coll.remove("a"));
        assert!(coll.is_empty());
    }
}
