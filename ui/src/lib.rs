//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

/// Design tokens and the landing page styles.
pub const THEME_CSS: Asset = asset!("/assets/theme.css");

mod glyph;
pub use glyph::{Glyph, GlyphIcon};

pub mod landing;
pub use landing::{
    CallToAction, CtaLink, Emphasis, Feature, FeatureCard, Landing, Tint, BRAND,
    CALLS_TO_ACTION, FEATURES, REGISTER_HREF, SIGN_IN_HREF, TAGLINE,
};

#[cfg(test)]
mod tests {
    const THEME: &str = include_str!("../assets/theme.css");

    #[test]
    fn test_theme_defines_design_tokens() {
        for token in [
            "--primary:",
            "--primary-foreground:",
            "--border:",
            "--accent:",
            "--muted-foreground:",
        ] {
            assert!(THEME.contains(token), "theme.css is missing {token}");
        }
    }
}
