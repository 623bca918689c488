//! The token catalogue: every `<Name>` the overlay understands.
//!
//! Tokens form a closed set, fixed at compile time. Each catalogue name
//! maps to one [`Token`] variant and each variant resolves through one arm
//! of an exhaustive match, so adding a token without a resolver (or the
//! reverse) fails to compile. Lookup is case-sensitive exact match.
//!
//! Resolution never fails: whatever telemetry a token needs that the
//! snapshot does not carry (no vessel, no orbit, no target) resolves to an
//! empty string, and the scanner echoes unrecognized names literally.

use std::collections::HashMap;
use std::fmt::Write;

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::clock::{CalendarMode, Clock};
use crate::config::{RenderConfig, DEFAULT_DATE_FORMAT};
use crate::crew::{format_crew, CrewQuery};
use crate::distance::{format_distance, format_speed};
use crate::duration::format_duration;
use crate::snapshot::{Orbit, Role, TelemetrySnapshot, Vessel};

/// Everything a resolver may consult: the snapshot captured for this pass
/// and the engine configuration. Resolvers take the whole context even when
/// they need one field; uniform signatures keep the catalogue table flat.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub snapshot: &'a TelemetrySnapshot,
    pub config: &'a RenderConfig,
}

/// A token kind. One variant per catalogue entry, with the crew family
/// factored into a single variant carrying its query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Newline,
    /// Nested expansion of the configured custom template. Resolved by the
    /// engine, not here; see `HudEngine`.
    Custom,
    Date,
    UniversalTime,
    MissionTime,
    Year,
    Day,
    Hour,
    Minute,
    Second,
    Vessel,
    Body,
    Situation,
    Biome,
    LandingZone,
    Latitude,
    Longitude,
    Heading,
    Mach,
    SurfaceSpeed,
    OrbitalSpeed,
    Apoapsis,
    Periapsis,
    Inclination,
    Eccentricity,
    AscendingNode,
    PeriapsisArgument,
    Period,
    OrbitSummary,
    Crew(CrewQuery),
    Target,
}

const ALL_ROLES: &[Role] = &Role::ALL;
const PILOTS: &[Role] = &[Role::Pilot];
const ENGINEERS: &[Role] = &[Role::Engineer];
const SCIENTISTS: &[Role] = &[Role::Scientist];
const TOURISTS: &[Role] = &[Role::Tourist];

const fn crew(roles: &'static [Role], list: bool, short: bool) -> Token {
    Token::Crew(CrewQuery { roles, list, short })
}

/// Name → token table. The names are user-facing and case-sensitive.
pub const CATALOGUE: &[(&str, Token)] = &[
    ("N", Token::Newline),
    ("Custom", Token::Custom),
    ("Date", Token::Date),
    ("UT", Token::UniversalTime),
    ("T+", Token::MissionTime),
    ("Year", Token::Year),
    ("Day", Token::Day),
    ("Hour", Token::Hour),
    ("Minute", Token::Minute),
    ("Second", Token::Second),
    ("Vessel", Token::Vessel),
    ("Body", Token::Body),
    ("Situation", Token::Situation),
    ("Biome", Token::Biome),
    ("LandingZone", Token::LandingZone),
    ("Latitude", Token::Latitude),
    ("Longitude", Token::Longitude),
    ("Heading", Token::Heading),
    ("Mach", Token::Mach),
    ("Speed", Token::SurfaceSpeed),
    ("SrfSpeed", Token::SurfaceSpeed),
    ("OrbSpeed", Token::OrbitalSpeed),
    ("Ap", Token::Apoapsis),
    ("Pe", Token::Periapsis),
    ("Inc", Token::Inclination),
    ("Ecc", Token::Eccentricity),
    ("LAN", Token::AscendingNode),
    ("ArgPe", Token::PeriapsisArgument),
    ("Period", Token::Period),
    ("Orbit", Token::OrbitSummary),
    ("Crew", crew(ALL_ROLES, false, false)),
    ("CrewShort", crew(ALL_ROLES, false, true)),
    ("CrewList", crew(ALL_ROLES, true, false)),
    ("Pilots", crew(PILOTS, false, false)),
    ("PilotsShort", crew(PILOTS, false, true)),
    ("PilotsList", crew(PILOTS, true, false)),
    ("Engineers", crew(ENGINEERS, false, false)),
    ("EngineersShort", crew(ENGINEERS, false, true)),
    ("EngineersList", crew(ENGINEERS, true, false)),
    ("Scientists", crew(SCIENTISTS, false, false)),
    ("ScientistsShort", crew(SCIENTISTS, false, true)),
    ("ScientistsList", crew(SCIENTISTS, true, false)),
    ("Tourists", crew(TOURISTS, false, false)),
    ("TouristsShort", crew(TOURISTS, false, true)),
    ("TouristsList", crew(TOURISTS, true, false)),
    ("Target", Token::Target),
];

static BY_NAME: Lazy<HashMap<&'static str, Token>> =
    Lazy::new(|| CATALOGUE.iter().copied().collect());

impl Token {
    /// Looks a token up by its catalogue name (case-sensitive, exact).
    pub fn parse(name: &str) -> Option<Token> {
        BY_NAME.get(name).copied()
    }

    /// Produces this token's replacement text from the context. Absent
    /// telemetry yields an empty string.
    pub fn resolve(self, cx: &ResolveContext<'_>) -> String {
        let snapshot = cx.snapshot;
        let vessel = snapshot.vessel.as_ref();
        let orbit = vessel.and_then(|v| v.orbit.as_ref());
        match self {
            Token::Newline => "\n".to_string(),
            // The engine intercepts Custom before token resolution; a bare
            // resolve of it expands to nothing.
            Token::Custom => String::new(),
            Token::Date => resolve_date(cx),
            Token::UniversalTime => format!(
                "Y{}, D{:03}, {}:{:02}:{:02}",
                snapshot.year(),
                snapshot.day(),
                snapshot.hour(),
                snapshot.minute(),
                snapshot.second()
            ),
            Token::MissionTime => with_vessel(vessel, |v| {
                let span = Clock::decompose(v.mission_time, cx.config.calendar);
                format!("T+ {}", format_duration(span))
            }),
            Token::Year => snapshot.year().to_string(),
            Token::Day => snapshot.day().to_string(),
            Token::Hour => snapshot.hour().to_string(),
            Token::Minute => snapshot.minute().to_string(),
            Token::Second => snapshot.second().to_string(),
            Token::Vessel => with_vessel(vessel, |v| v.name.clone()),
            Token::Body => with_vessel(vessel, |v| v.body.clone()),
            Token::Situation => with_vessel(vessel, |v| v.situation.label().to_string()),
            Token::Biome => with_vessel(vessel, |v| title_case(&v.biome)),
            Token::LandingZone => with_vessel(vessel, landing_zone),
            Token::Latitude => with_vessel(vessel, |v| format!("{:.3}", v.latitude)),
            Token::Longitude => with_vessel(vessel, |v| format!("{:.3}", v.longitude)),
            Token::Heading => with_vessel(vessel, |v| format!("{:.1}", v.heading)),
            Token::Mach => with_vessel(vessel, |v| format!("{:.1}", v.mach)),
            Token::SurfaceSpeed => with_vessel(vessel, |v| format_speed(v.surface_speed)),
            Token::OrbitalSpeed => with_orbit(orbit, |o| format_speed(o.speed)),
            Token::Apoapsis => with_orbit(orbit, |o| format_distance(o.apoapsis)),
            Token::Periapsis => with_orbit(orbit, |o| format_distance(o.periapsis)),
            Token::Inclination => with_orbit(orbit, |o| format!("{:.2}°", o.inclination)),
            Token::Eccentricity => with_orbit(orbit, |o| format!("{:.3}", o.eccentricity)),
            Token::AscendingNode => {
                with_orbit(orbit, |o| format!("{:.1}°", o.longitude_of_ascending_node))
            }
            Token::PeriapsisArgument => {
                with_orbit(orbit, |o| format!("{:.1}°", o.argument_of_periapsis))
            }
            Token::Period => with_orbit(orbit, |o| {
                format_duration(Clock::decompose(o.period, cx.config.calendar))
            }),
            Token::OrbitSummary => with_orbit(orbit, |o| {
                format!(
                    "{} x {}",
                    format_distance(o.apoapsis),
                    format_distance(o.periapsis)
                )
            }),
            Token::Crew(query) => format_crew(vessel, query, &cx.config.role_colors),
            Token::Target => snapshot
                .target
                .as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_default(),
        }
    }
}

fn with_vessel(vessel: Option<&Vessel>, f: impl FnOnce(&Vessel) -> String) -> String {
    vessel.map(f).unwrap_or_default()
}

fn with_orbit(orbit: Option<&Orbit>, f: impl FnOnce(&Orbit) -> String) -> String {
    orbit.map(f).unwrap_or_default()
}

/// `<Date>`: a calendar date from base year plus elapsed years.
///
/// The Earth calendar formats through the configured strftime pattern; a
/// pattern chrono rejects falls back to the default rather than failing the
/// render. The home-world calendar has 426-day years no date library
/// models, so it renders a plain year/day form and ignores the pattern.
fn resolve_date(cx: &ResolveContext<'_>) -> String {
    let clock = &cx.snapshot.clock;
    match cx.config.calendar {
        CalendarMode::Kerbin => format!(
            "Year {}, Day {}",
            i64::from(cx.config.base_year) + clock.year as i64,
            clock.day + 1
        ),
        CalendarMode::Earth => {
            let year = cx.config.base_year.saturating_add(clock.year as i32);
            let Some(date) = NaiveDate::from_yo_opt(year, clock.day as u32 + 1) else {
                return String::new();
            };
            let mut out = String::new();
            if write!(out, "{}", date.format(&cx.config.date_format)).is_err() {
                out.clear();
                let _ = write!(out, "{}", date.format(DEFAULT_DATE_FORMAT));
            }
            out
        }
    }
}

/// `<LandingZone>`: the named landing site when the simulation provides
/// one, otherwise the biome. Underscored identifiers come out as words.
fn landing_zone(vessel: &Vessel) -> String {
    match vessel.landed_at.as_deref() {
        Some(site) if !site.is_empty() => title_case(&site.replace('_', " ")),
        _ => title_case(&vessel.biome),
    }
}

/// Title-cases each whitespace-separated word: first letter upper, rest
/// lower.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{CrewMember, Situation, Target, VesselKind};

    fn orbit() -> Orbit {
        Orbit {
            apoapsis: 2_500_000.0,
            periapsis: 1500.0,
            inclination: 6.25,
            eccentricity: 0.0321,
            longitude_of_ascending_node: 12.34,
            argument_of_periapsis: 90.06,
            period: 2.0 * 21_600.0,
            speed: 2330.0,
        }
    }

    fn vessel() -> Vessel {
        Vessel {
            name: "Dauntless".into(),
            kind: VesselKind::Ship,
            situation: Situation::SubOrbital,
            body: "Kerbin".into(),
            biome: "ice caps".into(),
            landed_at: None,
            latitude: -0.0972,
            longitude: 285.4201,
            heading: 91.27,
            mach: 3.27,
            surface_speed: 1500.0,
            mission_time: 2.0 * 21_600.0,
            crew: vec![CrewMember::new("Jebediah Kerman", Role::Pilot)],
            orbit: Some(orbit()),
        }
    }

    fn snapshot() -> TelemetrySnapshot {
        let mut snap = TelemetrySnapshot::at(9_201_600.0 + 21_600.0 + 3723.0, CalendarMode::Kerbin);
        snap.vessel = Some(vessel());
        snap.target = Some(Target::new("Mun"));
        snap
    }

    fn resolve(name: &str, snap: &TelemetrySnapshot, config: &RenderConfig) -> String {
        let cx = ResolveContext {
            snapshot: snap,
            config,
        };
        Token::parse(name).expect("catalogue name").resolve(&cx)
    }

    fn kerbin() -> RenderConfig {
        RenderConfig::new(CalendarMode::Kerbin)
    }

    #[test]
    fn catalogue_has_no_duplicate_names() {
        assert_eq!(BY_NAME.len(), CATALOGUE.len());
        let mut names: Vec<_> = CATALOGUE.iter().map(|(n, _)| *n).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CATALOGUE.len());
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(Token::parse("Vessel").is_some());
        assert!(Token::parse("vessel").is_none());
        assert!(Token::parse("VESSEL").is_none());
    }

    #[test]
    fn newline_token() {
        assert_eq!(resolve("N", &snapshot(), &kerbin()), "\n");
    }

    #[test]
    fn calendar_field_tokens() {
        let snap = snapshot();
        let config = kerbin();
        // One Kerbin year + one day + 01:02:03 past epoch
        assert_eq!(resolve("Year", &snap, &config), "1");
        assert_eq!(resolve("Day", &snap, &config), "2"); // one-based
        assert_eq!(resolve("Hour", &snap, &config), "1");
        assert_eq!(resolve("Minute", &snap, &config), "2");
        assert_eq!(resolve("Second", &snap, &config), "3");
    }

    #[test]
    fn universal_time_stamp() {
        assert_eq!(resolve("UT", &snapshot(), &kerbin()), "Y1, D002, 1:02:03");
    }

    #[test]
    fn mission_time_uses_duration_convention() {
        // MET of exactly 2 Kerbin days: duration day offset applies
        assert_eq!(resolve("T+", &snapshot(), &kerbin()), "T+ 3d, 00:00:00");
    }

    #[test]
    fn vessel_tokens() {
        let snap = snapshot();
        let config = kerbin();
        assert_eq!(resolve("Vessel", &snap, &config), "Dauntless");
        assert_eq!(resolve("Body", &snap, &config), "Kerbin");
        assert_eq!(resolve("Situation", &snap, &config), "Sub-Orbital");
        assert_eq!(resolve("Biome", &snap, &config), "Ice Caps");
        assert_eq!(resolve("Latitude", &snap, &config), "-0.097");
        assert_eq!(resolve("Longitude", &snap, &config), "285.420");
        assert_eq!(resolve("Heading", &snap, &config), "91.3");
        assert_eq!(resolve("Mach", &snap, &config), "3.3");
        assert_eq!(resolve("Speed", &snap, &config), "1.5 km/s");
        assert_eq!(resolve("SrfSpeed", &snap, &config), "1.5 km/s");
    }

    #[test]
    fn landing_zone_prefers_named_site() {
        let mut snap = snapshot();
        let config = kerbin();
        assert_eq!(resolve("LandingZone", &snap, &config), "Ice Caps");

        if let Some(v) = snap.vessel.as_mut() {
            v.landed_at = Some("launch_pad".into());
        }
        assert_eq!(resolve("LandingZone", &snap, &config), "Launch Pad");

        if let Some(v) = snap.vessel.as_mut() {
            v.landed_at = Some(String::new()); // empty site falls back
        }
        assert_eq!(resolve("LandingZone", &snap, &config), "Ice Caps");
    }

    #[test]
    fn orbit_tokens() {
        let snap = snapshot();
        let config = kerbin();
        assert_eq!(resolve("Ap", &snap, &config), "2.5 Mm");
        assert_eq!(resolve("Pe", &snap, &config), "1.5 km");
        assert_eq!(resolve("Inc", &snap, &config), "6.25°");
        assert_eq!(resolve("Ecc", &snap, &config), "0.032");
        assert_eq!(resolve("LAN", &snap, &config), "12.3°");
        assert_eq!(resolve("ArgPe", &snap, &config), "90.1°");
        assert_eq!(resolve("OrbSpeed", &snap, &config), "2.3 km/s");
        assert_eq!(resolve("Period", &snap, &config), "3d, 00:00:00");
        assert_eq!(resolve("Orbit", &snap, &config), "2.5 Mm x 1.5 km");
    }

    #[test]
    fn target_token() {
        let snap = snapshot();
        assert_eq!(resolve("Target", &snap, &kerbin()), "Mun");
    }

    #[test]
    fn absent_vessel_resolves_every_vessel_token_empty() {
        let snap = TelemetrySnapshot::at(0.0, CalendarMode::Kerbin);
        let config = kerbin();
        for name in [
            "T+", "Vessel", "Body", "Situation", "Biome", "LandingZone", "Latitude", "Longitude",
            "Heading", "Mach", "Speed", "SrfSpeed", "OrbSpeed", "Ap", "Pe", "Inc", "Ecc", "LAN",
            "ArgPe", "Period", "Orbit", "Crew", "Target",
        ] {
            assert_eq!(resolve(name, &snap, &config), "", "token {}", name);
        }
    }

    #[test]
    fn absent_orbit_resolves_orbit_tokens_empty() {
        let mut snap = snapshot();
        if let Some(v) = snap.vessel.as_mut() {
            v.orbit = None;
        }
        let config = kerbin();
        for name in ["OrbSpeed", "Ap", "Pe", "Inc", "Ecc", "LAN", "ArgPe", "Period", "Orbit"] {
            assert_eq!(resolve(name, &snap, &config), "", "token {}", name);
        }
        // Vessel-level tokens still resolve
        assert_eq!(resolve("Vessel", &snap, &config), "Dauntless");
    }

    #[test]
    fn date_kerbin_mode_is_year_day_text() {
        // base year 1 + elapsed year 1, stored day 1 -> display day 2
        assert_eq!(resolve("Date", &snapshot(), &kerbin()), "Year 2, Day 2");
    }

    #[test]
    fn date_earth_mode_formats_with_pattern() {
        let mut config = RenderConfig::new(CalendarMode::Earth);
        config.date_format = "%Y-%m-%d".into();
        // 40 days and change into year zero of 1940
        let snap = TelemetrySnapshot::at(40.0 * 86_400.0 + 60.0, CalendarMode::Earth);
        assert_eq!(resolve("Date", &snap, &config), "1940-02-10");
    }

    #[test]
    fn date_earth_mode_default_pattern() {
        let config = RenderConfig::new(CalendarMode::Earth);
        let snap = TelemetrySnapshot::at(0.0, CalendarMode::Earth);
        // January 1st, 1940 was a Monday
        assert_eq!(resolve("Date", &snap, &config), "Monday, January 01, 1940");
    }

    #[test]
    fn crew_family_maps_to_queries() {
        let snap = snapshot();
        let config = kerbin();
        assert_eq!(resolve("Pilots", &snap, &config), "[clear]Jebediah Kerman[/clear]");
        assert_eq!(resolve("Engineers", &snap, &config), "None");
        assert_eq!(
            resolve("PilotsShort", &snap, &config),
            "[clear]Jebediah[/clear][clear] Kerman[/clear]"
        );
        assert_eq!(
            resolve("CrewList", &snap, &config),
            "• [clear]Jebediah Kerman[/clear]"
        );
    }

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("ice caps"), "Ice Caps");
        assert_eq!(title_case("SHORES"), "Shores");
        assert_eq!(title_case(""), "");
    }
}
