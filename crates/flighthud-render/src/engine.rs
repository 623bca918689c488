//! The template engine: one snapshot, one scanner pass, nested `<Custom>`
//! expansion.

use crate::config::RenderConfig;
use crate::scanner::scan;
use crate::snapshot::TelemetrySnapshot;
use crate::token::{ResolveContext, Token};

/// The literal span stripped from the custom template before its nested
/// resolution pass.
const CUSTOM_SPAN: &str = "<Custom>";

/// Resolves overlay templates against a telemetry snapshot.
///
/// The engine holds the per-mission configuration and nothing else; every
/// call takes the snapshot it should describe, so resolution is a pure
/// function of its arguments. It runs once per render frame and never
/// fails: malformed syntax renders as literal text and absent telemetry
/// renders as nothing.
///
/// # Example
///
/// ```rust
/// use flighthud_render::{CalendarMode, HudEngine, RenderConfig, TelemetrySnapshot};
///
/// let engine = HudEngine::new(RenderConfig::new(CalendarMode::Kerbin));
/// let snapshot = TelemetrySnapshot::at(3723.0, CalendarMode::Kerbin);
///
/// assert_eq!(engine.resolve("UT <UT>", &snapshot), "UT Y0, D001, 1:02:03");
/// assert_eq!(engine.resolve("no tokens", &snapshot), "no tokens");
/// ```
#[derive(Debug, Clone)]
pub struct HudEngine {
    config: RenderConfig,
}

impl HudEngine {
    /// Creates an engine over the given configuration.
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Resolves `template` against `snapshot`, replacing every recognized
    /// `<Token>` span and copying everything else verbatim.
    pub fn resolve(&self, template: &str, snapshot: &TelemetrySnapshot) -> String {
        let cx = ResolveContext {
            snapshot,
            config: &self.config,
        };
        scan(template, |name| {
            let token = Token::parse(name)?;
            Some(match token {
                Token::Custom => self.resolve_custom(&cx),
                token => token.resolve(&cx),
            })
        })
    }

    /// Expands the configured custom template with a nested resolution
    /// pass.
    ///
    /// Any literal `<Custom>` inside the custom text is stripped first, so
    /// direct self-inclusion cannot recurse. The guard is textual, not a
    /// depth counter: an indirect cycle routed through some other expansion
    /// would not be caught. No such route exists today — every other token
    /// resolves to telemetry text, not templates — but it is a known
    /// limitation rather than a handled case.
    fn resolve_custom(&self, cx: &ResolveContext<'_>) -> String {
        let custom = self.config.custom_template.replace(CUSTOM_SPAN, "");
        scan(&custom, |name| {
            let token = Token::parse(name)?;
            // Stripping removed every Custom span, so this arm only sees
            // ordinary tokens; Custom itself resolves to nothing if the
            // scanner somehow reaches it.
            Some(token.resolve(cx))
        })
    }
}
