//! The dashboard's active-page selector.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// One of the dashboard's pages.
///
/// Selecting a view replaces the mounted page wholesale; record state does
/// not survive the switch and nothing transfers between page instances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, Serialize, Deserialize)]
pub enum View {
    #[default]
    Dashboard,
    Crops,
    Staff,
    Fields,
    Vehicles,
    Equipment,
    Logs,
    Settings,
}

impl View {
    /// Resolve a view from its navigation identifier. Unknown identifiers
    /// land on the dashboard.
    pub fn from_slug(slug: &str) -> Self {
        Self::iter()
            .find(|view| view.slug() == slug)
            .unwrap_or_default()
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Crops => "crops",
            Self::Staff => "staff",
            Self::Fields => "fields",
            Self::Vehicles => "vehicle",
            Self::Equipment => "equipment",
            Self::Logs => "logs",
            Self::Settings => "settings",
        }
    }

    /// Label shown in the navigation sidebar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Crops => "Crop",
            Self::Staff => "Staff",
            Self::Fields => "Fields",
            Self::Vehicles => "Vehicle",
            Self::Equipment => "Equipment",
            Self::Logs => "Logs",
            Self::Settings => "Settings",
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_slug() {
        assert_eq!(View::from_slug("crops"), View::Crops);
        assert_eq!(View::from_slug("vehicle"), View::Vehicles);
        assert_eq!(View::from_slug("settings"), View::Settings);
    }

    #[test]
    fn test_unknown_slug_falls_back_to_dashboard() {
        assert_eq!(View::from_slug("greenhouse"), View::Dashboard);
        assert_eq!(View::from_slug(""), View::Dashboard);
    }

    #[test]
    fn test_default_is_dashboard() {
        assert_eq!(View::default(), View::Dashboard);
    }
}
