//! Read-only telemetry snapshot consumed by token resolvers.
//!
//! A [`TelemetrySnapshot`] is captured once per resolution pass by the host
//! and threaded by reference into every resolver. Resolvers never mutate it
//! and never reach for ambient simulation state; everything they can say
//! about the mission comes from this value, which is what makes the engine
//! testable without a running simulation.
//!
//! # Example
//!
//! ```rust
//! use flighthud_render::{CalendarMode, TelemetrySnapshot};
//!
//! let snapshot = TelemetrySnapshot::at(9_203_010.0, CalendarMode::Kerbin);
//! assert_eq!(snapshot.year(), 1); // second Kerbin year, zero-based
//! assert_eq!(snapshot.day(), 1);  // day-of-year is one-based for display
//! ```

use crate::clock::{CalendarMode, Clock};

/// Immutable capture of current mission state for one resolution pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TelemetrySnapshot {
    /// Universal time in seconds since epoch.
    pub universal_time: f64,
    /// Calendar decomposition of `universal_time` (zero-based day/year).
    pub clock: Clock,
    /// The active vessel, if any.
    pub vessel: Option<Vessel>,
    /// The currently selected target, if any.
    pub target: Option<Target>,
}

impl TelemetrySnapshot {
    /// Builds a snapshot for the given universal time with no vessel or
    /// target, decomposing the clock under `mode`.
    pub fn at(universal_time: f64, mode: CalendarMode) -> Self {
        Self {
            universal_time,
            clock: Clock::decompose(universal_time, mode),
            vessel: None,
            target: None,
        }
    }

    /// Zero-based calendar year.
    pub fn year(&self) -> u64 {
        self.clock.year
    }

    /// One-based day-of-year. The clock stores the day zero-based; display
    /// is one-based, so this is the stored day plus one.
    pub fn day(&self) -> u64 {
        self.clock.day + 1
    }

    /// Hour of the day.
    pub fn hour(&self) -> u64 {
        self.clock.hour
    }

    /// Minute of the hour.
    pub fn minute(&self) -> u64 {
        self.clock.minute
    }

    /// Second of the minute.
    pub fn second(&self) -> u64 {
        self.clock.second
    }
}

/// The vessel the overlay is describing.
#[derive(Debug, Clone, PartialEq)]
pub struct Vessel {
    pub name: String,
    pub kind: VesselKind,
    pub situation: Situation,
    /// Name of the main body currently being orbited or stood on.
    pub body: String,
    /// Biome directly under the vessel.
    pub biome: String,
    /// Named landing site, when the simulation provides one (often a
    /// raw identifier such as `"launch_pad"`).
    pub landed_at: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    /// Compass heading in degrees.
    pub heading: f64,
    pub mach: f64,
    /// Surface-relative speed in m/s.
    pub surface_speed: f64,
    /// Mission elapsed time in seconds.
    pub mission_time: f64,
    /// Crew roster in the simulation's natural seating order.
    pub crew: Vec<CrewMember>,
    pub orbit: Option<Orbit>,
}

impl Vessel {
    /// Whether crew tokens apply to this vessel at all. An EVA kerbal is
    /// its own vessel, and flags and debris cannot hold a crew.
    pub fn is_crewable(&self) -> bool {
        !matches!(
            self.kind,
            VesselKind::Eva | VesselKind::Flag | VesselKind::Debris
        )
    }
}

/// Vessel classification as reported by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VesselKind {
    Ship,
    Probe,
    Lander,
    Station,
    Base,
    Rover,
    Plane,
    Relay,
    Eva,
    Flag,
    Debris,
}

/// Flight situation of a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Situation {
    PreLaunch,
    Landed,
    Splashed,
    Flying,
    SubOrbital,
    Orbiting,
    Escaping,
    Docked,
}

impl Situation {
    /// Title-cased label for display.
    pub fn label(self) -> &'static str {
        match self {
            Situation::PreLaunch => "Pre-Launch",
            Situation::Landed => "Landed",
            Situation::Splashed => "Splashed",
            Situation::Flying => "Flying",
            Situation::SubOrbital => "Sub-Orbital",
            Situation::Orbiting => "Orbiting",
            Situation::Escaping => "Escaping",
            Situation::Docked => "Docked",
        }
    }
}

/// Orbital elements of the active vessel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orbit {
    /// Apoapsis altitude in meters.
    pub apoapsis: f64,
    /// Periapsis altitude in meters.
    pub periapsis: f64,
    /// Inclination in degrees.
    pub inclination: f64,
    pub eccentricity: f64,
    /// Longitude of the ascending node in degrees.
    pub longitude_of_ascending_node: f64,
    /// Argument of periapsis in degrees.
    pub argument_of_periapsis: f64,
    /// Orbital period in seconds.
    pub period: f64,
    /// Orbital speed in m/s.
    pub speed: f64,
}

/// One crew member: a display name and a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrewMember {
    pub name: String,
    pub role: Role,
}

impl CrewMember {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }
}

/// Crew role, used for filtering and colorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Pilot,
    Engineer,
    Scientist,
    Tourist,
}

impl Role {
    /// All roles, in display precedence order.
    pub const ALL: [Role; 4] = [Role::Pilot, Role::Engineer, Role::Scientist, Role::Tourist];
}

/// The currently selected target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
}

impl Target {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_projection_is_one_based() {
        let snapshot = TelemetrySnapshot::at(0.0, CalendarMode::Kerbin);
        assert_eq!(snapshot.day(), 1);
        assert_eq!(snapshot.year(), 0);
    }

    #[test]
    fn eva_flag_and_debris_are_not_crewable() {
        let mut vessel = test_vessel(VesselKind::Ship);
        assert!(vessel.is_crewable());
        for kind in [VesselKind::Eva, VesselKind::Flag, VesselKind::Debris] {
            vessel.kind = kind;
            assert!(!vessel.is_crewable());
        }
    }

    fn test_vessel(kind: VesselKind) -> Vessel {
        Vessel {
            name: "Unity 1".into(),
            kind,
            situation: Situation::Orbiting,
            body: "Kerbin".into(),
            biome: "shores".into(),
            landed_at: None,
            latitude: 0.0,
            longitude: 0.0,
            heading: 0.0,
            mach: 0.0,
            surface_speed: 0.0,
            mission_time: 0.0,
            crew: Vec::new(),
            orbit: None,
        }
    }
}
