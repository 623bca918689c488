//! Engine-side configuration: the already-validated scalars the resolvers
//! consume. The facade crate owns loading and validation; by the time a
//! `RenderConfig` reaches the engine every field is ready to use.

use serde::{Deserialize, Serialize};

use crate::clock::CalendarMode;
use crate::snapshot::Role;

/// Default strftime pattern for the `<Date>` token (long-date style).
pub const DEFAULT_DATE_FORMAT: &str = "%A, %B %d, %Y";

/// Per-resolution-pass configuration consumed by token resolvers.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Secondary template expanded by the `<Custom>` token.
    pub custom_template: String,
    /// Color token per crew role.
    pub role_colors: RoleColors,
    /// Calendar convention for clock decomposition.
    pub calendar: CalendarMode,
    /// Year displayed for calendar year zero.
    pub base_year: i32,
    /// strftime pattern for the `<Date>` token (Earth calendar only).
    pub date_format: String,
}

impl RenderConfig {
    /// Configuration with the defaults for the given calendar: empty custom
    /// text, `clear` role colors, the calendar's base year, and the
    /// long-date pattern.
    pub fn new(calendar: CalendarMode) -> Self {
        Self {
            custom_template: String::new(),
            role_colors: RoleColors::default(),
            calendar,
            base_year: calendar.default_base_year(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Color token per crew role, defaulting to `"clear"` (no styling).
///
/// Tokens are in `flighthud-markup` syntax: named colors, `bright_*`
/// variants, `#rgb`/`#rrggbb`, or `clear`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleColors {
    pub pilot: String,
    pub engineer: String,
    pub scientist: String,
    pub tourist: String,
}

impl Default for RoleColors {
    fn default() -> Self {
        Self {
            pilot: "clear".to_string(),
            engineer: "clear".to_string(),
            scientist: "clear".to_string(),
            tourist: "clear".to_string(),
        }
    }
}

impl RoleColors {
    /// The configured color token for a role.
    pub fn color_for(&self, role: Role) -> &str {
        match role {
            Role::Pilot => &self.pilot,
            Role::Engineer => &self.engineer,
            Role::Scientist => &self.scientist,
            Role::Tourist => &self.tourist,
        }
    }

    pub fn pilot(mut self, color: impl Into<String>) -> Self {
        self.pilot = color.into();
        self
    }

    pub fn engineer(mut self, color: impl Into<String>) -> Self {
        self.engineer = color.into();
        self
    }

    pub fn scientist(mut self, color: impl Into<String>) -> Self {
        self.scientist = color.into();
        self
    }

    pub fn tourist(mut self, color: impl Into<String>) -> Self {
        self.tourist = color.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_colors_default_to_clear() {
        let colors = RoleColors::default();
        for role in Role::ALL {
            assert_eq!(colors.color_for(role), "clear");
        }
    }

    #[test]
    fn base_year_tracks_calendar() {
        assert_eq!(RenderConfig::new(CalendarMode::Kerbin).base_year, 1);
        assert_eq!(RenderConfig::new(CalendarMode::Earth).base_year, 1940);
    }

    #[test]
    fn builder_sets_one_role() {
        let colors = RoleColors::default().pilot("#f39c12");
        assert_eq!(colors.color_for(Role::Pilot), "#f39c12");
        assert_eq!(colors.color_for(Role::Engineer), "clear");
    }
}
