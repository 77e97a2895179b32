//! Point and line colors for `[particles].point_color` and `[plexus].color`.
//!
//! Colors are written as `#RRGGBB`, or `#RRGGBBAA` when the line or point
//! should be translucent.

use hero_common::{Color, ConfigError};
use regex::Regex;
use std::sync::LazyLock;

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^#(?P<r>[0-9a-fA-F]{2})(?P<g>[0-9a-fA-F]{2})(?P<b>[0-9a-fA-F]{2})(?P<a>[0-9a-fA-F]{2})?$",
    )
    .unwrap()
});

/// Parse `#RRGGBB` or `#RRGGBBAA`. A missing alpha channel is opaque.
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();
    let caps = HEX_RE
        .captures(s)
        .ok_or_else(|| ConfigError::ParseError(format!("expected #RRGGBB or #RRGGBBAA, got '{s}'")))?;

    // The regex guarantees two hex digits per channel.
    let channel = |name: &str| {
        caps.name(name)
            .and_then(|m| u8::from_str_radix(m.as_str(), 16).ok())
    };
    match (channel("r"), channel("g"), channel("b")) {
        (Some(r), Some(g), Some(b)) => Ok(Color::from_rgba(r, g, b, channel("a").unwrap_or(255))),
        _ => Err(ConfigError::ParseError(format!("invalid color channel in '{s}'"))),
    }
}

pub fn validate_color(s: &str) -> bool {
    HEX_RE.is_match(s.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_point_color() {
        let c = parse_color("#00d4ff").unwrap();
        assert_eq!(c, Color::from_rgba(0, 212, 255, 255));
    }

    #[test]
    fn alpha_channel_is_read() {
        let c = parse_color("#7FDCFF80").unwrap();
        assert_eq!(c, Color::from_rgba(127, 220, 255, 128));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(parse_color("  #7fdcff ").is_ok());
        assert!(validate_color(" #7fdcff"));
    }

    #[test]
    fn other_formats_are_rejected() {
        for s in ["", "cyan", "#f00", "#12345", "#1234567", "#gg0000", "rgba(0,212,255,0.5)"] {
            assert!(parse_color(s).is_err(), "{s} should not parse");
            assert!(!validate_color(s), "{s} should not validate");
        }
    }

    #[test]
    fn error_names_the_input() {
        let err = parse_color("blue").unwrap_err();
        assert!(err.to_string().contains("'blue'"));
    }
}
