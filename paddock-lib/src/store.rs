//! In-memory record storage, one store per page.

use tracing::debug;

use crate::entities::{Entity, EntityId};

/// Ordered collection of records of one type.
///
/// Insertion order is preserved and replacing a record keeps its position.
/// A store holds no uniqueness constraint beyond the generated id, performs
/// no field validation, and is never persisted; its contents are dropped
/// with the page that owns it.
#[derive(Debug, Clone)]
pub struct Store<E> {
    entries: Vec<E>,
}

impl<E: Entity> Store<E> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a record to the end of the collection.
    pub fn add(&mut self, entity: E) {
        debug!(id = %entity.id(), "record added");
        self.entries.push(entity);
    }

    /// Swap the record whose id matches for the given one, keeping its
    /// position and leaving every other record untouched. Returns `false`
    /// when no record matches, in which case nothing changes.
    pub fn replace(&mut self, entity: E) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == entity.id()) {
            Some(slot) => {
                debug!(id = %entity.id(), "record replaced");
                *slot = entity;
                true
            }
            None => false,
        }
    }

    /// Remove the record with the given id, returning it. Absent ids leave
    /// the collection unchanged.
    pub fn remove(&mut self, id: EntityId) -> Option<E> {
        let index = self.entries.iter().position(|e| e.id() == id)?;
        debug!(%id, "record removed");
        Some(self.entries.remove(index))
    }

    pub fn get(&self, id: EntityId) -> Option<&E> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// All records, in insertion order.
    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Store<E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entities::Crop;

    fn crop(name: &str) -> Crop {
        Crop {
            id: EntityId::generate(),
            common_name: name.into(),
            scientific_name: "Oryza sativa".into(),
            category: "Grain".into(),
            season: "Yala".into(),
            field_id: "F-001".into(),
            image_url: None,
        }
    }

    #[test]
    fn test_add_preserves_order() {
        let mut store = Store::new();

        store.add(crop("Rice"));
        store.add(crop("Maize"));
        store.add(crop("Tea"));

        let names: Vec<_> = store.entries().iter().map(|c| c.common_name.as_str()).collect();
        assert_eq!(names, ["Rice", "Maize", "Tea"]);
    }

    #[test]
    fn test_replace_in_place() {
        let mut store = Store::new();

        store.add(crop("Rice"));
        let target = crop("Maize");
        store.add(target.clone());
        store.add(crop("Tea"));

        let replaced = store.replace(Crop {
            season: "Maha".into(),
            ..target.clone()
        });

        assert!(replaced);
        assert_eq!(store.len(), 3);
        let names: Vec<_> = store.entries().iter().map(|c| c.common_name.as_str()).collect();
        assert_eq!(names, ["Rice", "Maize", "Tea"]);
        assert_eq!(store.get(target.id).unwrap().season, "Maha");
    }

    #[test]
    fn test_replace_absent_is_noop() {
        let mut store = Store::new();
        store.add(crop("Rice"));

        let replaced = store.replace(crop("Maize"));

        assert!(!replaced);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut store = Store::new();
        let target = crop("Rice");
        store.add(target.clone());

        let removed = store.remove(target.id);

        assert_eq!(removed, Some(target));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = Store::new();
        store.add(crop("Rice"));

        let removed = store.remove(EntityId::generate());

        assert_eq!(removed, None);
        assert_eq!(store.len(), 1);
    }
}
