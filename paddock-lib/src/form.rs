//! Validated decoding of submitted form values.
//!
//! A page form submits as a flat `field name → raw text` map. Decoding that
//! map into a typed record is kept separate from the store mutation itself:
//! a [`Form`] either produces a complete record or a [`DecodeError`], and
//! nothing is mutated until decoding has succeeded.

use std::{collections::BTreeMap, str::FromStr};

use chrono::NaiveDate;
use thiserror::Error;

use crate::entities::Entity;

pub type Result<T> = std::result::Result<T, DecodeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },
    #[error("{field} must be a date in YYYY-MM-DD form")]
    InvalidDate { field: &'static str },
    #[error("{field} has no option named \"{value}\"")]
    UnknownOption {
        field: &'static str,
        value: String,
    },
}

/// Raw values captured from a page form, keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct Form {
    fields: BTreeMap<&'static str, String>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's raw value, replacing any previous one.
    pub fn with(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.fields.insert(field, value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Required text field. Absent and blank values both count as missing,
    /// matching a required input that was never filled in.
    pub fn text(&self, field: &'static str) -> Result<String> {
        match self.get(field).map(str::trim) {
            None | Some("") => Err(DecodeError::Missing(field)),
            Some(value) => Ok(value.to_owned()),
        }
    }

    /// Required numeric field.
    pub fn number(&self, field: &'static str) -> Result<f64> {
        self.text(field)?
            .parse()
            .map_err(|_| DecodeError::InvalidNumber { field })
    }

    /// Required `YYYY-MM-DD` date field.
    pub fn date(&self, field: &'static str) -> Result<NaiveDate> {
        let raw = self.text(field)?;
        NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| DecodeError::InvalidDate { field })
    }

    /// Required field holding one option of an enumerated type.
    pub fn select<T: FromStr>(&self, field: &'static str) -> Result<T> {
        let raw = self.text(field)?;
        T::from_str(&raw).map_err(|_| DecodeError::UnknownOption { field, value: raw })
    }
}

/// Builds a full candidate record from submitted form values.
pub trait FromForm: Entity + Sized {
    /// Decode a complete record. `current` is the record under edit, if any:
    /// it supplies the reused id and any fields that are preserved rather
    /// than re-entered (image references). Every other field is rebuilt from
    /// the form; an update is a full replace, not a patch.
    fn from_form(form: &Form, current: Option<&Self>) -> Result<Self>;
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::entities::Availability;

    #[test]
    fn test_text_missing() {
        let form = Form::new();

        assert_eq!(form.text("name"), Err(DecodeError::Missing("name")));
    }

    #[test]
    fn test_text_blank_counts_as_missing() {
        let form = Form::new().with("name", "   ");

        assert_eq!(form.text("name"), Err(DecodeError::Missing("name")));
    }

    #[test]
    fn test_text_trims() {
        let form = Form::new().with("name", " North Lot ");

        assert_eq!(form.text("name").unwrap(), "North Lot");
    }

    #[test]
    fn test_number() {
        let form = Form::new().with("size", "12.5").with("count", "twelve");

        assert_eq!(form.number("size").unwrap(), 12.5);
        assert_eq!(
            form.number("count"),
            Err(DecodeError::InvalidNumber { field: "count" })
        );
    }

    #[test]
    fn test_date() {
        let form = Form::new()
            .with("date", "2025-05-20")
            .with("bad", "20/05/2025");

        assert_eq!(
            form.date("date").unwrap(),
            NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
        );
        assert_eq!(
            form.date("bad"),
            Err(DecodeError::InvalidDate { field: "bad" })
        );
    }

    #[test]
    fn test_select() {
        let form = Form::new()
            .with("status", "Available")
            .with("broken", "Sometimes");

        assert_eq!(
            form.select::<Availability>("status").unwrap(),
            Availability::Available
        );
        assert_eq!(
            form.select::<Availability>("broken"),
            Err(DecodeError::UnknownOption {
                field: "broken",
                value: "Sometimes".into()
            })
        );
    }
}
