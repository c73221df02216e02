//! Customer profile and app preferences.

use serde::{Deserialize, Serialize};

use shopapp_core::Email;

/// The signed-in customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: Email,
    #[serde(default)]
    pub phone: String,
}

/// A single on/off preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    DarkMode,
    Notifications,
    EmailUpdates,
    LocationTracking,
}

/// App settings. Preferences belong to the device, so they survive logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
    pub notifications: bool,
    pub email_updates: bool,
    pub location_tracking: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: true,
            email_updates: true,
            location_tracking: false,
        }
    }
}

impl Preferences {
    #[must_use]
    pub const fn get(&self, preference: Preference) -> bool {
        match preference {
            Preference::DarkMode => self.dark_mode,
            Preference::Notifications => self.notifications,
            Preference::EmailUpdates => self.email_updates,
            Preference::LocationTracking => self.location_tracking,
        }
    }

    /// Flip a preference and return its new value.
    pub fn toggle(&mut self, preference: Preference) -> bool {
        let slot = match preference {
            Preference::DarkMode => &mut self.dark_mode,
            Preference::Notifications => &mut self.notifications,
            Preference::EmailUpdates => &mut self.email_updates,
            Preference::LocationTracking => &mut self.location_tracking,
        };
        *slot = !*slot;
        *slot
    }
}
