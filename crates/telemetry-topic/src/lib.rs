//! Publish-topic templates.
//!
//! A template such as `racing/{gameName}/{trackName}` is resolved against a
//! telemetry snapshot. Each recognised placeholder is replaced with a live,
//! sanitised value; anything else in the template is left verbatim.
//!
//! ```
//! use mqtt_publisher_telemetry_core::MapSnapshot;
//! use mqtt_publisher_telemetry_topic::TopicTemplate;
//!
//! let snapshot = MapSnapshot::new().with("GameName", "Assetto Corsa");
//! let topic = TopicTemplate::new("racing/{gameName}/{carName}").resolve(&snapshot);
//! assert_eq!(topic, "racing/Assetto_Corsa/Unknown");
//! ```

#![deny(static_mut_refs)]

use mqtt_publisher_telemetry_core::FieldSource;
use std::fmt;
use tracing::trace;

/// Substituted when a placeholder has no value or sanitises to nothing.
pub const UNKNOWN_SEGMENT: &str = "Unknown";

/// A placeholder recognised inside a topic template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    GameName,
    SessionType,
    TrackName,
    CarName,
}

impl Placeholder {
    /// Resolution order.
    pub const ALL: [Placeholder; 4] = [
        Placeholder::GameName,
        Placeholder::SessionType,
        Placeholder::TrackName,
        Placeholder::CarName,
    ];

    /// The literal token, braces included.
    pub const fn token(self) -> &'static str {
        match self {
            Placeholder::GameName => "{gameName}",
            Placeholder::SessionType => "{sessionType}",
            Placeholder::TrackName => "{trackName}",
            Placeholder::CarName => "{carName}",
        }
    }

    /// Snapshot fields tried in order. The game name comes from the
    /// source's own report instead.
    pub const fn source_fields(self) -> &'static [&'static str] {
        match self {
            Placeholder::GameName => &[],
            Placeholder::SessionType => &["SessionTypeName"],
            Placeholder::TrackName => &["TrackName", "TrackDisplayName"],
            Placeholder::CarName => &["CarName", "CarModel"],
        }
    }

    /// Raw, unsanitised value for this placeholder.
    pub fn lookup(self, source: &dyn FieldSource) -> Option<String> {
        match self {
            Placeholder::GameName => source.game_name(),
            other => source.first_string(other.source_fields()),
        }
    }

    /// Sanitised value, falling back to [`UNKNOWN_SEGMENT`].
    pub fn value(self, source: &dyn FieldSource) -> String {
        self.lookup(source)
            .map_or_else(|| UNKNOWN_SEGMENT.to_string(), |raw| sanitize_segment(&raw))
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Make `input` safe as a single topic level.
///
/// Spaces become underscores, then everything outside `[A-Za-z0-9_-]` is
/// dropped. An empty result becomes [`UNKNOWN_SEGMENT`].
pub fn sanitize_segment(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        UNKNOWN_SEGMENT.to_string()
    } else {
        cleaned
    }
}

/// An immutable topic template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicTemplate {
    template: String,
}

impl TopicTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Placeholders that occur in the template, in resolution order.
    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        Placeholder::ALL
            .into_iter()
            .filter(|p| self.template.contains(p.token()))
    }

    pub fn has_placeholders(&self) -> bool {
        self.placeholders().next().is_some()
    }

    /// Substitute every placeholder present in the template.
    ///
    /// Only placeholders that occur are looked up. Placeholders are replaced
    /// one after another in [`Placeholder::ALL`] order, so braces already in
    /// the template can combine with an earlier value into a later token:
    /// `{{gameName}}` with game `sessionType` ends up holding the session type.
    pub fn resolve(&self, source: &dyn FieldSource) -> String {
        resolve_topic(&self.template, source)
    }
}

impl From<&str> for TopicTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

impl From<String> for TopicTemplate {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}

impl fmt::Display for TopicTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

/// Resolve `template` without building a [`TopicTemplate`].
///
/// Replacement is sequential, see [`TopicTemplate::resolve`].
pub fn resolve_topic(template: &str, source: &dyn FieldSource) -> String {
    let mut topic = template.to_string();
    for placeholder in Placeholder::ALL {
        if topic.contains(placeholder.token()) {
            let value = placeholder.value(source);
            trace!(%placeholder, value = %value, "topic placeholder resolved");
            topic = topic.replace(placeholder.token(), &value);
        }
    }
    topic
}

#[cfg(test)]
mod tests {
    use super::*;
    use mqtt_publisher_telemetry_core::MapSnapshot;

    #[test]
    fn sanitize_replaces_spaces_then_strips() {
        assert_eq!(sanitize_segment("GT3 Cup!"), "GT3_Cup");
        assert_eq!(sanitize_segment("Spa-Francorchamps"), "Spa-Francorchamps");
        assert_eq!(sanitize_segment("Nürburgring GP"), "Nrburgring_GP");
        assert_eq!(sanitize_segment("a/b+c#"), "abc");
    }

    #[test]
    fn sanitize_empty_result_is_unknown() {
        assert_eq!(sanitize_segment(""), "Unknown");
        assert_eq!(sanitize_segment("!!!"), "Unknown");
        assert_eq!(sanitize_segment("/#+"), "Unknown");
    }

    #[test]
    fn track_and_car_fall_back_in_order() {
        let s = MapSnapshot::new()
            .with("TrackDisplayName", "Circuit de Spa")
            .with("CarModel", "BMW M4 GT3");
        let topic = resolve_topic("{trackName}/{carName}", &s);
        assert_eq!(topic, "Circuit_de_Spa/BMW_M4_GT3");

        let s = s.with("TrackName", "spa").with("CarName", "bmw_m4_gt3");
        assert_eq!(resolve_topic("{trackName}/{carName}", &s), "spa/bmw_m4_gt3");
    }

    #[test]
    fn repeated_and_unknown_tokens() {
        let s = MapSnapshot::new()
            .with("GameName", "iRacing")
            .with("SessionTypeName", "Race");
        assert_eq!(
            resolve_topic("{gameName}/{sessionType}/{gameName}/{driver}", &s),
            "iRacing/Race/iRacing/{driver}"
        );
    }

    #[test]
    fn template_reports_its_placeholders() {
        let t = TopicTemplate::new("sim/{carName}/{gameName}");
        let found: Vec<_> = t.placeholders().collect();
        assert_eq!(found, vec![Placeholder::GameName, Placeholder::CarName]);
        assert!(!TopicTemplate::new("racing/driver").has_placeholders());
    }

    #[test]
    fn earlier_value_can_form_a_later_token() {
        let s = MapSnapshot::new()
            .with("GameName", "sessionType")
            .with("SessionTypeName", "Race");
        assert_eq!(resolve_topic("{{gameName}}", &s), "Race");

        let no_session = MapSnapshot::new().with("GameName", "sessionType");
        assert_eq!(resolve_topic("x/{{gameName}}/y", &no_session), "x/Unknown/y");
    }

    #[test]
    fn empty_template_resolves_to_itself() {
        assert_eq!(TopicTemplate::new("").resolve(&MapSnapshot::new()), "");
    }
}
