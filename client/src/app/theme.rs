//! # Theme
//!
//! Light/dark palettes and the resolver that keeps the theme slice in step
//! with the system appearance.
//!
//! The active theme is identified by [`ThemeMode`]. Screens compare modes,
//! never palette values.
//!
//! ## Override semantics
//!
//! [`ThemeResolver::override_theme`] wins until the next appearance-change
//! event. Every event replaces the theme, even one that reports the appearance
//! the system already had. Overrides are not persisted.

use serde::{Deserialize, Serialize};

use crate::app::store::Store;

/// Theme identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// System appearance signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
    /// Platform did not report a preference
    Unspecified,
}

impl From<Appearance> for ThemeMode {
    fn from(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => ThemeMode::Dark,
            Appearance::Light | Appearance::Unspecified => ThemeMode::Light,
        }
    }
}

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#RRGGBB`
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Color roles shared by every screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub bg: Rgb,
    pub header_bg: Rgb,
    pub text: Rgb,
    pub text_secondary: Rgb,
    pub button_bg: Rgb,
    pub button_text: Rgb,
    pub icon_bg: Rgb,
    pub icon_text: Rgb,
    pub line: Rgb,
}

pub const LIGHT_PALETTE: Palette = Palette {
    bg: Rgb(255, 255, 255),
    header_bg: Rgb(247, 247, 247),
    text: Rgb(30, 30, 30),
    text_secondary: Rgb(140, 140, 140),
    button_bg: Rgb(74, 124, 228),
    button_text: Rgb(255, 255, 255),
    icon_bg: Rgb(236, 241, 252),
    icon_text: Rgb(74, 124, 228),
    line: Rgb(224, 224, 224),
};

pub const DARK_PALETTE: Palette = Palette {
    bg: Rgb(18, 18, 18),
    header_bg: Rgb(30, 30, 30),
    text: Rgb(240, 240, 240),
    text_secondary: Rgb(160, 160, 160),
    button_bg: Rgb(95, 145, 245),
    button_text: Rgb(18, 18, 18),
    icon_bg: Rgb(44, 52, 70),
    icon_text: Rgb(150, 180, 250),
    line: Rgb(58, 58, 58),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &LIGHT_PALETTE,
            ThemeMode::Dark => &DARK_PALETTE,
        }
    }
}

/// Keeps the theme slice in step with the system appearance.
#[derive(Clone)]
pub struct ThemeResolver {
    store: Store,
}

impl ThemeResolver {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Pick the launch theme.
    pub fn initialize(&self, appearance: Appearance) -> ThemeMode {
        let mode = ThemeMode::from(appearance);
        tracing::debug!(?appearance, ?mode, "Initial theme");
        self.store.set_theme(mode);
        mode
    }

    /// System appearance changed. Replaces any manual override.
    pub fn on_appearance_changed(&self, appearance: Appearance) -> ThemeMode {
        let mode = ThemeMode::from(appearance);
        let previous = self.store.theme_mode();
        self.store.set_theme(mode);
        tracing::info!(?previous, ?mode, "Theme follows system appearance");
        mode
    }

    /// Manual override, held until the next appearance event.
    pub fn override_theme(&self, mode: ThemeMode) {
        tracing::info!(?mode, "Theme overridden");
        self.store.set_theme(mode);
    }
}
