//! Insert-or-replace dispatch for page form submissions.

use crate::{
    cursor::EditCursor,
    entities::{Entity, EntityId},
    form::{Form, FromForm, Result},
    store::Store,
};

/// How a submission landed in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Updated,
}

/// Decode the submitted form and apply it to the store.
///
/// The cursor decides between append and in-place replace, and is cleared
/// once the mutation lands. A decode failure leaves both the store and the
/// cursor exactly as they were.
pub fn submit<E: FromForm>(
    store: &mut Store<E>,
    cursor: &mut EditCursor<E>,
    form: &Form,
) -> Result<Outcome> {
    let entity = E::from_form(form, cursor.editing())?;

    let outcome = if cursor.is_editing() {
        store.replace(entity);
        Outcome::Updated
    } else {
        store.add(entity);
        Outcome::Created
    };

    cursor.clear();

    Ok(outcome)
}

/// Remove a record, releasing the cursor if it pointed at it. Absent ids
/// fall through untouched; the returned flag reports whether anything was
/// removed, and callers are free to ignore it.
pub fn delete<E: Entity>(store: &mut Store<E>, cursor: &mut EditCursor<E>, id: EntityId) -> bool {
    cursor.invalidate(id);
    store.remove(id).is_some()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        entities::Crop,
        form::DecodeError,
    };

    fn crop_form(name: &str) -> Form {
        Form::new()
            .with("common_name", name)
            .with("scientific_name", "Zea mays")
            .with("category", "Grain")
            .with("season", "Maha")
            .with("field_id", "F-002")
    }

    fn empty_page() -> (Store<Crop>, EditCursor<Crop>) {
        (Store::new(), EditCursor::default())
    }

    #[test]
    fn test_submit_add_mode() {
        let (mut store, mut cursor) = empty_page();

        let outcome = submit(&mut store, &mut cursor, &crop_form("Maize")).unwrap();

        assert_eq!(outcome, Outcome::Created);
        assert_eq!(store.len(), 1);
        assert!(!cursor.is_editing());
        assert_eq!(store.entries().first().unwrap().common_name, "Maize");
    }

    #[test]
    fn test_submit_update_mode_replaces_in_place() {
        let (mut store, mut cursor) = empty_page();

        submit(&mut store, &mut cursor, &crop_form("Rice")).unwrap();
        submit(&mut store, &mut cursor, &crop_form("Maize")).unwrap();
        submit(&mut store, &mut cursor, &crop_form("Tea")).unwrap();

        let target = store.entries().get(1).unwrap().clone();
        cursor.start(target.clone());

        let outcome = submit(&mut store, &mut cursor, &crop_form("Sweet Corn")).unwrap();

        assert_eq!(outcome, Outcome::Updated);
        assert_eq!(store.len(), 3);
        assert!(!cursor.is_editing());

        let names: Vec<_> = store.entries().iter().map(|c| c.common_name.as_str()).collect();
        assert_eq!(names, ["Rice", "Sweet Corn", "Tea"]);
        assert_eq!(store.entries().get(1).unwrap().id, target.id);
    }

    #[test]
    fn test_submit_decode_error_leaves_state_alone() {
        let (mut store, mut cursor) = empty_page();
        submit(&mut store, &mut cursor, &crop_form("Rice")).unwrap();
        let target = store.entries().first().unwrap().clone();
        cursor.start(target);

        let err = submit(&mut store, &mut cursor, &Form::new()).unwrap_err();

        assert_eq!(err, DecodeError::Missing("common_name"));
        assert_eq!(store.len(), 1);
        assert!(cursor.is_editing());
        assert_eq!(store.entries().first().unwrap().common_name, "Rice");
    }

    #[test]
    fn test_delete_clears_matching_cursor() {
        let (mut store, mut cursor) = empty_page();
        submit(&mut store, &mut cursor, &crop_form("Rice")).unwrap();
        let target = store.entries().first().unwrap().clone();
        cursor.start(target.clone());

        let removed = delete(&mut store, &mut cursor, target.id);

        assert!(removed);
        assert!(store.is_empty());
        assert!(!cursor.is_editing());
    }

    #[test]
    fn test_delete_absent_id_is_noop() {
        let (mut store, mut cursor) = empty_page();
        submit(&mut store, &mut cursor, &crop_form("Rice")).unwrap();
        let kept = store.entries().first().unwrap().clone();
        cursor.start(kept);

        let removed = delete(&mut store, &mut cursor, EntityId::generate());

        assert!(!removed);
        assert_eq!(store.len(), 1);
        assert!(cursor.is_editing());
    }
}
