use crate::{
    entities::{Entity, EntityId},
    form::{Form, FromForm, Result},
};

/// A cultivated crop, tied to a field by free-text id.
#[derive(Debug, Clone, PartialEq)]
pub struct Crop {
    pub id: EntityId,
    pub common_name: String,
    pub scientific_name: String,
    pub category: String,
    pub season: String,
    pub field_id: String,
    /// Set outside the form flow and carried over unchanged on edit.
    pub image_url: Option<String>,
}

impl Entity for Crop {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl FromForm for Crop {
    fn from_form(form: &Form, current: Option<&Self>) -> Result<Self> {
        Ok(Self {
            id: current.map_or_else(EntityId::generate, |crop| crop.id),
            common_name: form.text("common_name")?,
            scientific_name: form.text("scientific_name")?,
            category: form.text("category")?,
            season: form.text("season")?,
            field_id: form.text("field_id")?,
            image_url: current.and_then(|crop| crop.image_url.clone()),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::form::DecodeError;

    fn form() -> Form {
        Form::new()
            .with("common_name", "Rice")
            .with("scientific_name", "Oryza sativa")
            .with("category", "Grain")
            .with("season", "Yala")
            .with("field_id", "F-001")
    }

    #[test]
    fn test_from_form() {
        let crop = Crop::from_form(&form(), None).unwrap();

        assert_eq!(crop.common_name, "Rice");
        assert_eq!(crop.scientific_name, "Oryza sativa");
        assert_eq!(crop.image_url, None);
    }

    #[test]
    fn test_from_form_requires_every_field() {
        let incomplete = Form::new().with("common_name", "Rice");

        let err = Crop::from_form(&incomplete, None).unwrap_err();

        assert_eq!(err, DecodeError::Missing("scientific_name"));
    }

    #[test]
    fn test_edit_reuses_id_and_keeps_image() {
        let mut original = Crop::from_form(&form(), None).unwrap();
        original.image_url = Some("rice.png".into());

        let updated = Crop::from_form(&form().with("season", "Maha"), Some(&original)).unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.season, "Maha");
        assert_eq!(updated.image_url, Some("rice.png".into()));
    }
}
