use crate::{
    entities::{Availability, Entity, EntityId},
    form::{Form, FromForm, Result},
};

/// A farm vehicle, assigned to a staff member by free-text id.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: EntityId,
    pub license_number: String,
    pub category: String,
    pub fuel_type: String,
    pub status: Availability,
    pub staff_id: String,
    pub remark: String,
}

impl Entity for Vehicle {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl FromForm for Vehicle {
    fn from_form(form: &Form, current: Option<&Self>) -> Result<Self> {
        Ok(Self {
            id: current.map_or_else(EntityId::generate, |vehicle| vehicle.id),
            license_number: form.text("license_number")?,
            category: form.text("category")?,
            fuel_type: form.text("fuel_type")?,
            status: form.select("status")?,
            staff_id: form.text("staff_id")?,
            remark: form.text("remark")?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn form() -> Form {
        Form::new()
            .with("license_number", "WP CAB-1234")
            .with("category", "Tractor")
            .with("fuel_type", "Diesel")
            .with("status", "Available")
            .with("staff_id", "S-010")
            .with("remark", "Serviced in May")
    }

    #[test]
    fn test_from_form() {
        let vehicle = Vehicle::from_form(&form(), None).unwrap();

        assert_eq!(vehicle.license_number, "WP CAB-1234");
        assert_eq!(vehicle.status, Availability::Available);
    }

    #[test]
    fn test_edit_replaces_every_field() {
        let original = Vehicle::from_form(&form(), None).unwrap();

        let updated = Vehicle::from_form(
            &form().with("status", "Unavailable").with("remark", "In repair"),
            Some(&original),
        )
        .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.status, Availability::Unavailable);
        assert_eq!(updated.remark, "In repair");
    }
}
