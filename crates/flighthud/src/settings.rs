//! Overlay settings: the user-facing configuration surface.
//!
//! Settings can be built programmatically or loaded from YAML. Loading
//! validates every color token against the markup layer, so by the time a
//! [`HudEngine`] is built from settings, the engine's "already validated"
//! assumption holds.
//!
//! # Example
//!
//! ```rust
//! use flighthud::OverlaySettings;
//! use flighthud_render::CalendarMode;
//!
//! let settings = OverlaySettings::new(CalendarMode::Kerbin)
//!     .template("<Vessel> — <UT>")
//!     .custom_template("crew: <CrewShort>")
//!     .pilot_color("#35b1f0");
//!
//! let engine = settings.engine().unwrap();
//! # let _ = engine;
//! ```
//!
//! # YAML
//!
//! ```rust
//! use flighthud::OverlaySettings;
//!
//! let settings = OverlaySettings::from_yaml(r##"
//! template: "<Vessel> over <Body><N><T+>"
//! calendar: kerbin
//! role_colors:
//!   pilot: "#35b1f0"
//!   engineer: bright_yellow
//! style:
//!   anchor: top_right
//!   font_size: 14
//! "##).unwrap();
//! assert_eq!(settings.base_year(), 1);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use flighthud_markup::ColorToken;
use flighthud_render::{
    CalendarMode, HudEngine, RenderConfig, Role, RoleColors, DEFAULT_DATE_FORMAT,
};

use crate::error::SettingsError;
use crate::style::OverlayStyle;

/// The full configuration surface for one overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Main overlay template.
    pub template: String,
    /// Secondary template expanded by `<Custom>`.
    pub custom_template: String,
    /// Per-role crew colors.
    pub role_colors: RoleColors,
    /// Calendar convention.
    pub calendar: CalendarMode,
    /// Year displayed for calendar year zero. When absent, follows the
    /// calendar (1 for Kerbin, 1940 for Earth).
    pub base_year: Option<i32>,
    /// strftime pattern for `<Date>` (Earth calendar).
    pub date_format: String,
    /// Placement and paint attributes for the drawing surface.
    pub style: OverlayStyle,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self::new(CalendarMode::Kerbin)
    }
}

impl OverlaySettings {
    /// Empty settings under the given calendar.
    pub fn new(calendar: CalendarMode) -> Self {
        Self {
            template: String::new(),
            custom_template: String::new(),
            role_colors: RoleColors::default(),
            calendar,
            base_year: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            style: OverlayStyle::default(),
        }
    }

    /// Parses settings from a YAML document and validates color tokens.
    pub fn from_yaml(yaml: &str) -> Result<Self, SettingsError> {
        let settings: OverlaySettings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Checks every color field against the markup layer.
    pub fn validate(&self) -> Result<(), SettingsError> {
        const ROLE_FIELDS: [(Role, &str); 4] = [
            (Role::Pilot, "role_colors.pilot"),
            (Role::Engineer, "role_colors.engineer"),
            (Role::Scientist, "role_colors.scientist"),
            (Role::Tourist, "role_colors.tourist"),
        ];
        for (role, field) in ROLE_FIELDS {
            let token = self.role_colors.color_for(role);
            if ColorToken::parse(token).is_none() {
                return Err(SettingsError::InvalidColor {
                    field,
                    token: token.to_string(),
                });
            }
        }
        if ColorToken::parse(&self.style.color).is_none() {
            return Err(SettingsError::InvalidColor {
                field: "style.color",
                token: self.style.color.clone(),
            });
        }
        Ok(())
    }

    /// The effective base year: the configured override, or the calendar
    /// default.
    pub fn base_year(&self) -> i32 {
        self.base_year
            .unwrap_or_else(|| self.calendar.default_base_year())
    }

    /// The engine-side configuration slice of these settings.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            custom_template: self.custom_template.clone(),
            role_colors: self.role_colors.clone(),
            calendar: self.calendar,
            base_year: self.base_year(),
            date_format: self.date_format.clone(),
        }
    }

    /// Validates and builds the resolution engine.
    pub fn engine(&self) -> Result<HudEngine, SettingsError> {
        self.validate()?;
        Ok(HudEngine::new(self.render_config()))
    }

    // Builder-style setters, Theme-fashion: each consumes and returns self.

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn custom_template(mut self, template: impl Into<String>) -> Self {
        self.custom_template = template.into();
        self
    }

    pub fn base_year_override(mut self, year: i32) -> Self {
        self.base_year = Some(year);
        self
    }

    pub fn date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = pattern.into();
        self
    }

    pub fn style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }

    pub fn pilot_color(mut self, color: impl Into<String>) -> Self {
        self.role_colors.pilot = color.into();
        self
    }

    pub fn engineer_color(mut self, color: impl Into<String>) -> Self {
        self.role_colors.engineer = color.into();
        self
    }

    pub fn scientist_color(mut self, color: impl Into<String>) -> Self {
        self.role_colors.scientist = color.into();
        self
    }

    pub fn tourist_color(mut self, color: impl Into<String>) -> Self {
        self.role_colors.tourist = color.into();
        self
    }
}
