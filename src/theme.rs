// Light/dark theme flag plus the per-theme opacity constants used when
// composing particle and line colors. Persistence writes the plain strings
// "light"/"dark" to client-side storage; anything else reads back as light.

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Value persisted under [`config::THEME_STORAGE_KEY`].
    pub fn storage_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Missing or unrecognized stored values fall back to light.
    pub fn from_storage(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Alpha injected into the accent color for particle fills. Lower in dark
    /// mode to reduce visual noise.
    pub fn particle_alpha(self) -> f32 {
        match self {
            Theme::Light => config::PARTICLE_ALPHA_LIGHT,
            Theme::Dark => config::PARTICLE_ALPHA_DARK,
        }
    }

    /// Base alpha for connective lines, scaled down with distance at draw time.
    pub fn line_alpha(self) -> f32 {
        match self {
            Theme::Light => config::LINE_ALPHA_LIGHT,
            Theme::Dark => config::LINE_ALPHA_DARK,
        }
    }
}

#[test]
fn storage_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_storage(Some(theme.storage_value())), theme);
    }
    assert_eq!(Theme::from_storage(None), Theme::Light);
    assert_eq!(Theme::from_storage(Some("solarized")), Theme::Light);
}

#[test]
fn dark_mode_dims_particles_and_lines() {
    assert_eq!(Theme::Dark.particle_alpha(), 0.3);
    assert_eq!(Theme::Light.particle_alpha(), 0.4);
    assert!(Theme::Dark.line_alpha() < Theme::Light.line_alpha());
}
