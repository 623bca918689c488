//! Convenient imports for overlay hosts.
//!
//! ```rust,ignore
//! use flighthud::prelude::*;
//!
//! let settings = OverlaySettings::from_file("overlay.yaml")?;
//! let engine = settings.engine()?;
//! let text = engine.resolve(&settings.template, &snapshot);
//! ```

pub use crate::error::SettingsError;
pub use crate::settings::OverlaySettings;
pub use crate::style::{Anchor, FontWeight, OverlayStyle};

pub use flighthud_markup::{MarkupParser, Transform};
pub use flighthud_render::{
    CalendarMode, CrewMember, HudEngine, Orbit, Role, Situation, Target, TelemetrySnapshot,
    Vessel, VesselKind,
};
