//! Human-scaled distance and speed text.

/// Unit suffixes by thousand-fold tier. Values needing a seventh tier are
/// outside the contract; see [`format_distance`].
const UNITS: [&str; 6] = ["m", "km", "Mm", "Gm", "Tm", "Pm"];

/// Scales a raw magnitude in meters into a one-decimal string with a unit
/// suffix: the value is divided by 1000 while it exceeds 1000, and the
/// division count picks the suffix.
///
/// Anything past the petameter tier is a contract violation (asserted in
/// debug builds, clamped in release).
///
/// # Example
///
/// ```rust
/// use flighthud_render::format_distance;
///
/// assert_eq!(format_distance(0.0), "0.0 m");
/// assert_eq!(format_distance(1500.0), "1.5 km");
/// assert_eq!(format_distance(2_500_000.0), "2.5 Mm");
/// ```
pub fn format_distance(magnitude: f64) -> String {
    let mut value = magnitude;
    let mut tier = 0;
    while value > 1000.0 && tier + 1 < UNITS.len() {
        value /= 1000.0;
        tier += 1;
    }
    debug_assert!(
        value <= 1000.0 || tier + 1 < UNITS.len(),
        "distance {} exceeds the {} tier",
        magnitude,
        UNITS[UNITS.len() - 1],
    );
    format!("{:.1} {}", value, UNITS[tier])
}

/// Distance-scaled speed: [`format_distance`] with a `/s` suffix.
pub fn format_speed(magnitude: f64) -> String {
    format!("{}/s", format_distance(magnitude))
}
