use chrono::NaiveDate;

use crate::{
    entities::{Entity, EntityId},
    form::{Form, FromForm, Result},
};

/// A dated activity log entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: EntityId,
    pub date: NaiveDate,
    pub details: String,
    /// Set outside the form flow and carried over unchanged on edit.
    pub image_url: Option<String>,
}

impl Entity for LogEntry {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl FromForm for LogEntry {
    fn from_form(form: &Form, current: Option<&Self>) -> Result<Self> {
        Ok(Self {
            id: current.map_or_else(EntityId::generate, |entry| entry.id),
            date: form.date("date")?,
            details: form.text("details")?,
            image_url: current.and_then(|entry| entry.image_url.clone()),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_form() {
        let form = Form::new()
            .with("date", "2025-05-20")
            .with("details", "Irrigated the north lots");

        let entry = LogEntry::from_form(&form, None).unwrap();

        assert_eq!(entry.date.to_string(), "2025-05-20");
        assert_eq!(entry.details, "Irrigated the north lots");
        assert_eq!(entry.image_url, None);
    }

    #[test]
    fn test_edit_keeps_image() {
        let form = Form::new()
            .with("date", "2025-05-20")
            .with("details", "Irrigated the north lots");
        let mut original = LogEntry::from_form(&form, None).unwrap();
        original.image_url = Some("sprinklers.png".into());

        let updated =
            LogEntry::from_form(&form.clone().with("details", "Rain instead"), Some(&original))
                .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.details, "Rain instead");
        assert_eq!(updated.image_url, Some("sprinklers.png".into()));
    }
}
