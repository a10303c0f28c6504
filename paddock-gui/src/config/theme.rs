use serde::{Deserialize, Serialize};

/// Color scheme persisted in the GUI config.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl From<&Theme> for iced::Theme {
    fn from(theme: &Theme) -> Self {
        match theme {
            Theme::Light => Self::Light,
            Theme::Dark => Self::Dark,
        }
    }
}
