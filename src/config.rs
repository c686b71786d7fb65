// Centralized configuration for the particle field and the page chrome.

use palette::Srgb;

// ====================
// Particle Field
// ====================
pub const NUM_PARTICLES: usize = 180;
pub const PARTICLE_RADIUS: f32 = 1.8;
/// Initial velocity components are sampled uniformly from [-INITIAL_SPEED, INITIAL_SPEED)
pub const INITIAL_SPEED: f32 = 0.1;

// ====================
// Connective Lines
// ====================
/// Max distance at which two particles are joined by a line
pub const LINE_DISTANCE: f32 = 150.0;
/// Max distance at which a particle is joined to the pointer
pub const POINTER_LINE_DISTANCE: f32 = 180.0;
pub const LINE_WIDTH: f32 = 1.8;
pub const POINTER_LINE_WIDTH: f32 = 2.5;
/// Pointer lines render brighter than particle-particle lines
pub const POINTER_LINE_ALPHA_BOOST: f32 = 1.5;

// ====================
// Pointer Repulsion
// ====================
pub const POINTER_REPULSE_RADIUS: f32 = 80.0;
pub const REPULSE_FORCE: f32 = 0.8;

// ====================
// Theme Opacity
// ====================
pub const PARTICLE_ALPHA_LIGHT: f32 = 0.4;
pub const PARTICLE_ALPHA_DARK: f32 = 0.3;
pub const LINE_ALPHA_LIGHT: f32 = 0.6;
pub const LINE_ALPHA_DARK: f32 = 0.4;

// ====================
// Page Chrome
// ====================
pub const ACCENT_CSS_VAR: &str = "--accent-blue-main";
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const THEME_STORAGE_KEY: &str = "theme";
/// Fallback when the accent CSS variable is missing or malformed
pub const DEFAULT_ACCENT: Srgb<u8> = Srgb::new(59, 130, 246);
/// Sections activate once they cross this offset below the header
pub const NAV_ACTIVATION_OFFSET: f64 = 50.0;
/// The hero stays active until it has scrolled within this slack of leaving
pub const HERO_SCROLL_SLACK: f64 = 50.0;
/// Sticky panel appears this many pixels before the hero bottom clears the header
pub const STICKY_PANEL_SLACK: f64 = 20.0;
/// Smooth-scroll lands slightly past the section top so the heading clears the header
pub const SMOOTH_SCROLL_NUDGE: f64 = 5.0;

// ====================
// Staged Reveal
// ====================
pub const OVERLAY_HIDE_DELAY_MS: i32 = 1500;
pub const LAYOUT_KICKOFF_DELAY_MS: i32 = 500;

use serde::{Deserialize, Serialize};

/// Runtime tuning knobs for the particle field. Defaults mirror the constants
/// above; the live copy is held in [`FIELD_CONFIG`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldConfig {
    pub num_particles: usize,
    pub particle_radius: f32,
    pub initial_speed: f32,
    pub line_distance: f32,
    pub pointer_line_distance: f32,
    pub pointer_repulse_radius: f32,
    pub repulse_force: f32,
    pub line_width: f32,
    pub pointer_line_width: f32,
    pub pointer_line_alpha_boost: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            num_particles: NUM_PARTICLES,
            particle_radius: PARTICLE_RADIUS,
            initial_speed: INITIAL_SPEED,
            line_distance: LINE_DISTANCE,
            pointer_line_distance: POINTER_LINE_DISTANCE,
            pointer_repulse_radius: POINTER_REPULSE_RADIUS,
            repulse_force: REPULSE_FORCE,
            line_width: LINE_WIDTH,
            pointer_line_width: POINTER_LINE_WIDTH,
            pointer_line_alpha_boost: POINTER_LINE_ALPHA_BOOST,
        }
    }
}

use once_cell::sync::Lazy;
use parking_lot::Mutex;

pub static FIELD_CONFIG: Lazy<Mutex<FieldConfig>> =
    Lazy::new(|| Mutex::new(FieldConfig::default()));

#[test]
fn default_config_matches_constants() {
    let cfg = FieldConfig::default();
    assert_eq!(cfg.num_particles, 180);
    assert_eq!(cfg.particle_radius, 1.8);
    assert_eq!(cfg.line_distance, 150.0);
    assert_eq!(cfg.pointer_line_distance, 180.0);
}
