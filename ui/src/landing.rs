//! The public landing page: hero, calls to action and feature cards.
//!
//! Everything rendered here is a compile-time constant. The two links are
//! plain anchors, so whatever router hosts the page resolves them.

use dioxus::prelude::*;

use crate::glyph::{Glyph, GlyphIcon};

pub const BRAND: &str = "PayroPOS";
pub const TAGLINE: &str = "Built for modern stores";

pub const SIGN_IN_HREF: &str = "/login";
pub const REGISTER_HREF: &str = "/register";

/// Visual weight of a call-to-action link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    /// Filled with the primary colour.
    Primary,
    /// Bordered, transparent background.
    Outline,
}

impl Emphasis {
    fn class(self) -> &'static str {
        match self {
            Emphasis::Primary => "cta cta--primary",
            Emphasis::Outline => "cta cta--outline",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
    pub emphasis: Emphasis,
}

/// Accent colour of a feature card's icon tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Blue,
    Green,
    Purple,
}

impl Tint {
    fn class(self) -> &'static str {
        match self {
            Tint::Blue => "feature-card__icon feature-card__icon--blue",
            Tint::Green => "feature-card__icon feature-card__icon--green",
            Tint::Purple => "feature-card__icon feature-card__icon--purple",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
    pub tint: Tint,
}

pub const CALLS_TO_ACTION: [CallToAction; 2] = [
    CallToAction {
        label: "Sign In",
        href: SIGN_IN_HREF,
        emphasis: Emphasis::Primary,
    },
    CallToAction {
        label: "Create Account",
        href: REGISTER_HREF,
        emphasis: Emphasis::Outline,
    },
];

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Barcode Scanning",
        description: "Quickly add products using barcode or QR code scanning",
        glyph: Glyph::QrCode,
        tint: Tint::Blue,
    },
    Feature {
        title: "Credit Tracking",
        description: "Manage customer credit balances and payment history",
        glyph: Glyph::Cards,
        tint: Tint::Green,
    },
    Feature {
        title: "Real-time Reports",
        description: "Track sales, inventory, and business insights in real-time",
        glyph: Glyph::Chart,
        tint: Tint::Purple,
    },
];

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    rsx! {
        main {
            class: "landing",
            div {
                class: "landing__inner",

                // Logo
                div {
                    class: "landing__logo",
                    GlyphIcon { glyph: Glyph::Calculator, class: "landing__logo-glyph" }
                }

                h1 { class: "landing__title", "{BRAND}" }
                p { class: "landing__tagline", "{TAGLINE}" }

                div {
                    class: "landing__actions",
                    for cta in CALLS_TO_ACTION {
                        CtaLink { key: "{cta.href}", cta: cta }
                    }
                }

                div {
                    class: "landing__features",
                    for feature in FEATURES {
                        FeatureCard { key: "{feature.title}", feature: feature }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CtaLink(cta: CallToAction) -> Element {
    rsx! {
        a {
            class: cta.emphasis.class(),
            href: cta.href,
            "{cta.label}"
        }
    }
}

#[component]
pub fn FeatureCard(feature: Feature) -> Element {
    rsx! {
        div {
            class: "feature-card",
            div {
                class: feature.tint.class(),
                GlyphIcon { glyph: feature.glyph, class: "feature-card__glyph" }
            }
            h3 { class: "feature-card__title", "{feature.title}" }
            p { class: "feature-card__description", "{feature.description}" }
        }
    }
}
