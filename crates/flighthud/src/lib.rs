//! # flighthud — templated telemetry overlay text
//!
//! flighthud renders a user-authored template into live telemetry text for
//! an on-screen overlay in a space-flight simulation. The template mixes
//! literal text with `<Token>` placeholders — time stamps, vessel and orbit
//! readouts, colorized crew listings — each resolved once per render frame
//! against an immutable telemetry snapshot.
//!
//! This crate is the host-facing surface: settings (programmatic or YAML),
//! overlay style attributes, and re-exports of the resolution engine from
//! [`flighthud_render`]. The drawing surface itself is not here; flighthud
//! hands it a resolved string plus an [`OverlayStyle`].
//!
//! ## Quick start
//!
//! ```rust
//! use flighthud::prelude::*;
//!
//! let settings = OverlaySettings::from_yaml(r##"
//! template: "<Vessel> — <Situation><N>T+ clock: <T+>"
//! calendar: kerbin
//! role_colors:
//!   pilot: "#35b1f0"
//! "##).unwrap();
//!
//! let engine = settings.engine().unwrap();
//!
//! let mut snapshot = TelemetrySnapshot::at(3_600.0, CalendarMode::Kerbin);
//! snapshot.vessel = Some(Vessel {
//!     name: "Dauntless".into(),
//!     kind: VesselKind::Ship,
//!     situation: Situation::Orbiting,
//!     body: "Kerbin".into(),
//!     biome: "shores".into(),
//!     landed_at: None,
//!     latitude: 0.0,
//!     longitude: 0.0,
//!     heading: 0.0,
//!     mach: 0.0,
//!     surface_speed: 0.0,
//!     mission_time: 125.0,
//!     crew: Vec::new(),
//!     orbit: None,
//! });
//!
//! let text = engine.resolve(&settings.template, &snapshot);
//! assert_eq!(text, "Dauntless — Orbiting\nT+ clock: T+ 00:02:05");
//! ```
//!
//! ## Tokens
//!
//! The full catalogue lives in [`flighthud_render::CATALOGUE`]. Unknown
//! tokens pass through literally, so templates written for a newer
//! flighthud degrade gracefully on an older one.
//!
//! ## Color markers
//!
//! Crew names arrive wrapped in `[color]…[/color]` markers (see
//! [`flighthud_markup`]). A surface that wants plain text strips them:
//!
//! ```rust
//! use flighthud::prelude::*;
//!
//! let plain = MarkupParser::new(Transform::Remove)
//!     .parse("[#35b1f0]Valentina[/#35b1f0]");
//! assert_eq!(plain, "Valentina");
//! ```

mod error;
pub mod prelude;
mod settings;
mod style;

pub use error::SettingsError;
pub use settings::OverlaySettings;
pub use style::{Anchor, FontWeight, OverlayStyle};

// The resolution engine and markup layer, re-exported for hosts that
// depend on the facade crate alone.
pub use flighthud_markup;
pub use flighthud_render;
