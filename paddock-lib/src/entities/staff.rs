use chrono::NaiveDate;
use strum::{Display, EnumIter, EnumString};

use crate::{
    entities::{Entity, EntityId},
    form::{Form, FromForm, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "title_case")]
pub enum Gender {
    Male,
    Female,
}

/// Job role of a staff member, also used for the account profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "title_case")]
pub enum StaffRole {
    Manager,
    Administrative,
    Scientist,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub building_no: String,
    pub lane: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
}

/// A member of the farm's staff.
#[derive(Debug, Clone, PartialEq)]
pub struct Staff {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub designation: String,
    pub gender: Gender,
    pub joined_date: NaiveDate,
    pub date_of_birth: NaiveDate,
    pub address: Address,
    pub contact_no: String,
    pub email: String,
    pub role: StaffRole,
}

impl Staff {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Staff {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl FromForm for Staff {
    fn from_form(form: &Form, current: Option<&Self>) -> Result<Self> {
        Ok(Self {
            id: current.map_or_else(EntityId::generate, |staff| staff.id),
            first_name: form.text("first_name")?,
            last_name: form.text("last_name")?,
            designation: form.text("designation")?,
            gender: form.select("gender")?,
            joined_date: form.date("joined_date")?,
            date_of_birth: form.date("date_of_birth")?,
            address: Address {
                building_no: form.text("building_no")?,
                lane: form.text("lane")?,
                city: form.text("city")?,
                state: form.text("state")?,
                postal_code: form.text("postal_code")?,
            },
            contact_no: form.text("contact_no")?,
            email: form.text("email")?,
            role: form.select("role")?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::form::DecodeError;

    fn form() -> Form {
        Form::new()
            .with("first_name", "Nimal")
            .with("last_name", "Perera")
            .with("designation", "Field Supervisor")
            .with("gender", "Male")
            .with("joined_date", "2021-06-14")
            .with("date_of_birth", "1988-02-03")
            .with("building_no", "42")
            .with("lane", "Temple Lane")
            .with("city", "Kandy")
            .with("state", "Central")
            .with("postal_code", "20000")
            .with("contact_no", "0771234567")
            .with("email", "nimal@paddock.example")
            .with("role", "Scientist")
    }

    #[test]
    fn test_from_form() {
        let staff = Staff::from_form(&form(), None).unwrap();

        assert_eq!(staff.full_name(), "Nimal Perera");
        assert_eq!(staff.gender, Gender::Male);
        assert_eq!(staff.role, StaffRole::Scientist);
        assert_eq!(staff.joined_date.to_string(), "2021-06-14");
        assert_eq!(staff.address.city, "Kandy");
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let err = Staff::from_form(&form().with("joined_date", "14/06/2021"), None).unwrap_err();

        assert_eq!(err, DecodeError::InvalidDate { field: "joined_date" });
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let err = Staff::from_form(&form().with("role", "Foreman"), None).unwrap_err();

        assert_eq!(
            err,
            DecodeError::UnknownOption {
                field: "role",
                value: "Foreman".into()
            }
        );
    }

    #[test]
    fn test_edit_reuses_id() {
        let original = Staff::from_form(&form(), None).unwrap();

        let updated =
            Staff::from_form(&form().with("designation", "Manager"), Some(&original)).unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.designation, "Manager");
    }
}
