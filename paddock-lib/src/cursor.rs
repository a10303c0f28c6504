//! Tracks which record, if any, a page form is editing.

use crate::entities::{Entity, EntityId};

/// The single record currently targeted for update, or nothing.
///
/// `Empty` means the next submission creates a new record; `Editing` means it
/// replaces the held one. The cursor is the sole source of truth for that
/// decision. Cancelling the form, submitting it, or deleting the held record
/// all drop back to `Empty`.
#[derive(Debug, Clone)]
pub enum EditCursor<E> {
    Empty,
    Editing(E),
}

impl<E> Default for EditCursor<E> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<E: Entity> EditCursor<E> {
    /// Target a record for editing.
    pub fn start(&mut self, entity: E) {
        *self = Self::Editing(entity);
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    /// The record under edit, if any.
    pub fn editing(&self) -> Option<&E> {
        match self {
            Self::Empty => None,
            Self::Editing(entity) => Some(entity),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Release the cursor if it references the given id. Used when the
    /// record it points at is deleted out from under it.
    pub fn invalidate(&mut self, id: EntityId) {
        if self.editing().is_some_and(|e| e.id() == id) {
            self.clear();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entities::{EntityId, LogEntry};

    fn entry() -> LogEntry {
        LogEntry {
            id: EntityId::generate(),
            date: "2025-05-20".parse().unwrap(),
            details: "Irrigated the north lots".into(),
            image_url: None,
        }
    }

    #[test]
    fn test_starts_empty() {
        let cursor: EditCursor<LogEntry> = EditCursor::default();

        assert!(!cursor.is_editing());
        assert!(cursor.editing().is_none());
    }

    #[test]
    fn test_start_and_clear() {
        let mut cursor = EditCursor::default();
        let target = entry();

        cursor.start(target.clone());
        assert_eq!(cursor.editing().unwrap().id, target.id);

        cursor.clear();
        assert!(!cursor.is_editing());
    }

    #[test]
    fn test_invalidate_matching_id() {
        let mut cursor = EditCursor::default();
        let target = entry();
        cursor.start(target.clone());

        cursor.invalidate(target.id);

        assert!(!cursor.is_editing());
    }

    #[test]
    fn test_invalidate_other_id_keeps_cursor() {
        let mut cursor = EditCursor::default();
        cursor.start(entry());

        cursor.invalidate(EntityId::generate());

        assert!(cursor.is_editing());
    }
}
