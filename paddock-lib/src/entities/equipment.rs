use strum::{Display, EnumIter, EnumString};

use crate::{
    entities::{Availability, Entity, EntityId},
    form::{Form, FromForm, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "title_case")]
pub enum EquipmentKind {
    Electrical,
    Mechanical,
}

/// A piece of equipment, assigned to a staff member and a field by
/// free-text ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
    pub id: EntityId,
    pub name: String,
    pub kind: EquipmentKind,
    pub status: Availability,
    pub staff_id: String,
    pub field_id: String,
}

impl Entity for Equipment {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl FromForm for Equipment {
    fn from_form(form: &Form, current: Option<&Self>) -> Result<Self> {
        Ok(Self {
            id: current.map_or_else(EntityId::generate, |equipment| equipment.id),
            name: form.text("name")?,
            kind: form.select("kind")?,
            status: form.select("status")?,
            staff_id: form.text("staff_id")?,
            field_id: form.text("field_id")?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::form::DecodeError;

    fn form() -> Form {
        Form::new()
            .with("name", "Water Pump 3")
            .with("kind", "Electrical")
            .with("status", "Available")
            .with("staff_id", "S-007")
            .with("field_id", "F-001")
    }

    #[test]
    fn test_from_form() {
        let equipment = Equipment::from_form(&form(), None).unwrap();

        assert_eq!(equipment.name, "Water Pump 3");
        assert_eq!(equipment.kind, EquipmentKind::Electrical);
        assert_eq!(equipment.status, Availability::Available);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let err = Equipment::from_form(&form().with("kind", "Hydraulic"), None).unwrap_err();

        assert_eq!(
            err,
            DecodeError::UnknownOption {
                field: "kind",
                value: "Hydraulic".into()
            }
        );
    }
}
