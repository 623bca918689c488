//! Crew roster aggregation: filter by role, colorize, join.

use flighthud_markup::{close_marker, open_marker};

use crate::config::RoleColors;
use crate::snapshot::{Role, Vessel};

/// The literal surname shared by every crew member; stripped in short mode.
const SURNAME: &str = " Kerman";

/// Which crew members to show and how to render them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrewQuery {
    /// Roles to include, in roster-filter order.
    pub roles: &'static [Role],
    /// Bulleted list (one member per line) instead of inline join.
    pub list: bool,
    /// Strip the shared surname from each name.
    pub short: bool,
}

/// Renders the crew of `vessel` selected by `query`, colorizing each name
/// with its role's color marker.
///
/// - No vessel, or a vessel that cannot hold crew (EVA, flag, debris):
///   empty string — crew tokens simply do not apply.
/// - Roster filtered to the queried roles, in roster order.
/// - Nothing matched: `"None"` when exactly one role was queried,
///   `"Unmanned"` otherwise.
/// - List mode bullets each entry (`"• "`) and joins with newlines; inline
///   mode joins with `", "`.
/// - Short + inline appends the shared surname once after the join instead
///   of per member. See the branch below for the single-role color rule.
pub fn format_crew(vessel: Option<&Vessel>, query: CrewQuery, colors: &RoleColors) -> String {
    let Some(vessel) = vessel else {
        return String::new();
    };
    if !vessel.is_crewable() {
        return String::new();
    }

    let members: Vec<_> = vessel
        .crew
        .iter()
        .filter(|member| query.roles.contains(&member.role))
        .collect();

    let single_role = query.roles.len() == 1;
    if members.is_empty() {
        return if single_role { "None" } else { "Unmanned" }.to_string();
    }

    let entries: Vec<String> = members
        .iter()
        .map(|member| {
            let name = if query.short {
                member.name.strip_suffix(SURNAME).unwrap_or(&member.name)
            } else {
                &member.name
            };
            colorize(name, colors.color_for(member.role))
        })
        .collect();

    let mut output = if query.list {
        entries
            .iter()
            .map(|entry| format!("• {}", entry))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        entries.join(", ")
    };

    if query.short && !query.list {
        // Deliberate asymmetry: with a single queried role the shared
        // surname is highlighted in that role's color; with several roles
        // there is no one color to pick, so it stays unstyled.
        if single_role {
            output.push_str(&colorize(SURNAME, colors.color_for(query.roles[0])));
        } else {
            output.push_str(SURNAME);
        }
    }

    output
}

fn colorize(text: &str, color: &str) -> String {
    format!("{}{}{}", open_marker(color), text, close_marker(color))
}
