//! In-page anchor handling.
//!
//! Sections are switched by the navigation controls, not by scrolling, so
//! `#section` links must not make the browser jump. The bare `#` and the
//! contact anchor keep their default behavior.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

const PASSTHROUGH: [&str; 2] = ["#", "#contact"];

/// Whether a click on a link with this `href` should have its default
/// navigation prevented.
#[must_use]
pub fn intercepts(href: &str) -> bool {
    href.starts_with('#') && !PASSTHROUGH.contains(&href)
}
