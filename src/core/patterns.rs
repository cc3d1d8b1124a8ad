// src/core/patterns.rs
// Compiled once, shared by every extractor call.

use std::sync::LazyLock;

use regex::Regex;

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("pattern {pattern:?}: {e}"))
}

/// `Commander's Planet [1:234:7]` → name, galaxy, system, position.
pub static COORD_TITLE: LazyLock<Regex> = LazyLock::new(|| re(r"([^\[]+) \[(\d+):(\d+):(\d+)]"));

pub static PERCENT: LazyLock<Regex> = LazyLock::new(|| re(r"(\d+)%"));

pub static OPEN_TECH: LazyLock<Regex> = LazyLock::new(|| re(r"openTech=(\d+)"));

// Entity class tokens on report images.
pub static BUILDING_CLASS: LazyLock<Regex> = LazyLock::new(|| re(r"building(\d+)"));
pub static RESEARCH_CLASS: LazyLock<Regex> = LazyLock::new(|| re(r"research(\d+)"));
pub static SHIP_CLASS: LazyLock<Regex> = LazyLock::new(|| re(r"tech(\d+)"));
pub static DEFENSE_CLASS: LazyLock<Regex> = LazyLock::new(|| re(r"defense(\d+)"));

/// `-12°C to 28°C`, `5 °C – 45 °C`, `-40°C bis -1°C` → min, max.
pub static TEMPERATURE: LazyLock<Regex> = LazyLock::new(|| re(r"(-?\d+)\D+?(-?\d+)"));

/// `12.800km (163/163)` → `12.800`.
pub static DIAMETER: LazyLock<Regex> = LazyLock::new(|| re(r"([\d.,]+)"));

/// The inline call that hands the empire page its data.
pub static EMPIRE_JSON: LazyLock<Regex> =
    LazyLock::new(|| re(r##"(?s)createImperiumHtml\(\s*"#mainContent"\s*,\s*"#loading"\s*,\s*(\{.*\})\s*,\s*\d+\s*\)"##));

/// Builds the `<fn>(id, listId,` pattern for an abort link's onclick.
pub fn cancel_call(function: &str) -> Regex {
    re(&format!(r"{}\((\d+),\s?(\d+),", regex::escape(function)))
}

/// Builds the `var <name> = "...token=XYZ"` pattern for a cancel link.
pub fn cancel_token(link_var: &str) -> Regex {
    re(&format!(r#"{}\s*=\s*"[^"]*?token=([^"&]+)"#, regex::escape(link_var)))
}
