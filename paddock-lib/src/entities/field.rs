use crate::{
    entities::{Entity, EntityId},
    form::{Form, FromForm, Result},
};

/// A plot of land with a size in acres and a coordinate location.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub id: EntityId,
    pub name: String,
    pub size: f64,
    pub location: Location,
    /// Image slots filled outside the form flow and carried over on edit.
    pub images: FieldImages,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldImages {
    pub image1: Option<String>,
    pub image2: Option<String>,
}

impl Field {
    /// Size as the field list renders it.
    pub fn size_label(&self) -> String {
        format!("{} acres", self.size)
    }

    /// Location as the field list renders it.
    pub fn location_label(&self) -> String {
        format!(
            "{:.6}, {:.6}",
            self.location.latitude, self.location.longitude
        )
    }
}

impl Entity for Field {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl FromForm for Field {
    fn from_form(form: &Form, current: Option<&Self>) -> Result<Self> {
        Ok(Self {
            id: current.map_or_else(EntityId::generate, |field| field.id),
            name: form.text("name")?,
            size: form.number("size")?,
            location: Location {
                latitude: form.number("latitude")?,
                longitude: form.number("longitude")?,
            },
            images: current.map(|field| field.images.clone()).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::form::DecodeError;

    fn form() -> Form {
        Form::new()
            .with("name", "North Lot")
            .with("size", "12.5")
            .with("latitude", "6.9271")
            .with("longitude", "79.8612")
    }

    #[test]
    fn test_from_form() {
        let field = Field::from_form(&form(), None).unwrap();

        assert_eq!(field.name, "North Lot");
        assert_eq!(field.size, 12.5);
        assert_eq!(field.location.latitude, 6.9271);
        assert_eq!(field.location.longitude, 79.8612);
        assert_eq!(field.images, FieldImages::default());
    }

    #[test]
    fn test_labels() {
        let field = Field::from_form(&form(), None).unwrap();

        assert_eq!(field.size_label(), "12.5 acres");
        assert_eq!(field.location_label(), "6.927100, 79.861200");
    }

    #[test]
    fn test_edit_changes_size_in_place() {
        let original = Field::from_form(&form(), None).unwrap();

        let updated = Field::from_form(&form().with("size", "15"), Some(&original)).unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.size_label(), "15 acres");
        assert_eq!(updated.name, "North Lot");
    }

    #[test]
    fn test_size_must_be_a_number() {
        let err = Field::from_form(&form().with("size", "a dozen"), None).unwrap_err();

        assert_eq!(err, DecodeError::InvalidNumber { field: "size" });
    }

    #[test]
    fn test_add_edit_delete_flow() {
        use crate::{binder, cursor::EditCursor, store::Store};

        let mut store: Store<Field> = Store::new();
        let mut cursor = EditCursor::default();

        binder::submit(&mut store, &mut cursor, &form()).unwrap();
        assert_eq!(store.len(), 1);
        let shown = store.entries().first().unwrap();
        assert_eq!(shown.name, "North Lot");
        assert_eq!(shown.size_label(), "12.5 acres");
        assert_eq!(shown.location_label(), "6.927100, 79.861200");

        let target = store.entries().first().unwrap().clone();
        cursor.start(target.clone());
        binder::submit(&mut store, &mut cursor, &form().with("size", "15")).unwrap();
        assert_eq!(store.get(target.id).unwrap().size_label(), "15 acres");

        binder::delete(&mut store, &mut cursor, target.id);
        assert!(store.is_empty());
    }

    #[test]
    fn test_edit_keeps_images() {
        let mut original = Field::from_form(&form(), None).unwrap();
        original.images.image1 = Some("north_lot.png".into());

        let updated = Field::from_form(&form(), Some(&original)).unwrap();

        assert_eq!(updated.images.image1, Some("north_lot.png".into()));
        assert_eq!(updated.images.image2, None);
    }
}
