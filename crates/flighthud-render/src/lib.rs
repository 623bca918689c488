//! # flighthud-render — telemetry template resolution
//!
//! `flighthud-render` turns a user-authored template string into live
//! telemetry text for an on-screen overlay. Templates mix literal text with
//! `<Token>` placeholders; each placeholder resolves against an immutable
//! [`TelemetrySnapshot`] captured once per render frame.
//!
//! This crate is the rendering foundation of the `flighthud` overlay, but
//! has no opinion about drawing: it produces a final string (with
//! `flighthud-markup` color markers around crew names) and hands it to
//! whatever surface displays it.
//!
//! ## Core concepts
//!
//! - [`TelemetrySnapshot`]: read-only mission state for one pass
//! - [`Token`]: the closed catalogue of `<Name>` placeholders
//! - [`HudEngine`]: configuration + the resolution entry point
//! - [`CalendarMode`] / [`Clock`]: two year/day conventions for time text
//!
//! ## Quick start
//!
//! ```rust
//! use flighthud_render::{CalendarMode, HudEngine, RenderConfig, TelemetrySnapshot};
//!
//! let engine = HudEngine::new(RenderConfig::new(CalendarMode::Kerbin));
//! let snapshot = TelemetrySnapshot::at(21_660.0, CalendarMode::Kerbin);
//!
//! let text = engine.resolve("Day <Day> — <UT>", &snapshot);
//! assert_eq!(text, "Day 2 — Y0, D002, 0:01:00");
//! ```
//!
//! ## Never fail, always degrade
//!
//! The engine runs every render frame and must never interrupt rendering.
//! Nothing in the resolution path returns an error: unknown tokens echo
//! themselves literally, an unterminated `<` is ordinary text, and a token
//! whose telemetry is absent (no vessel, no orbit, no target) resolves to
//! an empty string or a documented sentinel (`"None"`, `"Unmanned"`).

mod clock;
mod config;
mod crew;
mod distance;
mod duration;
mod engine;
mod scanner;
mod snapshot;
mod token;

pub use clock::{CalendarMode, Clock};
pub use config::{RenderConfig, RoleColors, DEFAULT_DATE_FORMAT};
pub use crew::{format_crew, CrewQuery};
pub use distance::{format_distance, format_speed};
pub use duration::format_duration;
pub use engine::HudEngine;
pub use scanner::scan;
pub use snapshot::{
    CrewMember, Orbit, Role, Situation, Target, TelemetrySnapshot, Vessel, VesselKind,
};
pub use token::{ResolveContext, Token, CATALOGUE};
