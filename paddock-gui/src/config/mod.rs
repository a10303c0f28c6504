use std::{fs, sync::Arc};

use paddock_lib::{View, fs::config_dir};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::config::theme::Theme;

mod theme;

const FILE_NAME: &str = "gui.toml";

/// Handle to the dashboard's configuration
pub type Cfg = Arc<RwLock<GuiConfig>>;

/// The dashboard's configuration, serialized to TOML. Holds presentation
/// state only; record data is never written to disk.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct GuiConfig {
    pub theme: Theme,
    pub last_view: View,
}

impl GuiConfig {
    pub fn load() -> Self {
        let path = config_dir().join(FILE_NAME);

        if path.exists() {
            let contents = fs::read_to_string(path).unwrap_or_default();
            toml::from_str(&contents).unwrap_or_default()
        } else {
            let cfg = Self::default();
            cfg.save();
            cfg
        }
    }

    pub fn save(&self) {
        if let Ok(contents) = toml::to_string_pretty(self) {
            let _ = fs::write(config_dir().join(FILE_NAME), contents);
        }
    }

    pub fn theme(&self) -> iced::Theme {
        (&self.theme).into()
    }
}
