// The particle field animator: owns the particle collection, the surface
// bounds and the pointer state, (re)builds the field, and runs the per-frame
// pass that updates every particle and draws the connective line network.

use palette::Srgb;
use ultraviolet::Vec2;

use crate::color::Rgba;
use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use crate::theme::Theme;

/// Pointer position in surface space; `None` while the pointer is outside
/// the viewport. Written by the pointer events, read by the render pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub pos: Option<Vec2>,
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    /// width = viewport width, height = full scrollable document height
    pub bounds: Vec2,
    pub pointer: PointerState,
}

impl ParticleField {
    pub fn new(bounds: Vec2) -> Self {
        Self {
            particles: Vec::new(),
            bounds,
            pointer: PointerState::default(),
        }
    }

    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    /// Discard and rebuild the whole field. Positions are sampled uniformly,
    /// inset by the particle radius so every particle starts fully visible;
    /// velocity components are uniform in ±`initial_speed`. Runs at startup
    /// and again on every resize or theme change; particle identity is
    /// deliberately not preserved across rebuilds.
    pub fn init(&mut self, cfg: &FieldConfig, accent: Srgb<u8>, theme: Theme) {
        let color = Rgba::new(accent, theme.particle_alpha());
        let radius = cfg.particle_radius;

        self.particles.clear();
        for _ in 0..cfg.num_particles {
            let x = fastrand::f32() * (self.bounds.x - radius * 2.0) + radius;
            let y = fastrand::f32() * (self.bounds.y - radius * 2.0) + radius;
            let vx = fastrand::f32() * (cfg.initial_speed * 2.0) - cfg.initial_speed;
            let vy = fastrand::f32() * (cfg.initial_speed * 2.0) - cfg.initial_speed;
            self.particles
                .push(Particle::new(Vec2::new(x, y), Vec2::new(vx, vy), radius, color));
        }
    }

    /// One frame: clear, then for each particle update + draw it, join it to
    /// every later particle within `line_distance`, and join it to the
    /// pointer within `pointer_line_distance`. O(N²) by design; at the fixed
    /// particle count that fits comfortably in a frame budget.
    ///
    /// `accent` and `theme` are resolved by the caller every frame, so a
    /// theme change shows up on the next frame without restarting the loop.
    pub fn render_frame<S: Surface>(
        &mut self,
        surface: &mut S,
        cfg: &FieldConfig,
        accent: Srgb<u8>,
        theme: Theme,
    ) {
        surface.clear();

        let base_alpha = theme.line_alpha();
        let pointer = self.pointer.pos;

        for i in 0..self.particles.len() {
            self.particles[i].update(self.bounds, pointer, cfg);
            let p1 = self.particles[i].clone();
            surface.fill_circle(p1.pos, p1.radius, p1.color);

            // j starts at i: the self-pair is a zero-length segment at full
            // base alpha, invisible and harmless.
            for j in i..self.particles.len() {
                let p2_pos = self.particles[j].pos;
                let distance = (p1.pos - p2_pos).mag();
                if let Some(alpha) = line_alpha(distance, cfg.line_distance, base_alpha) {
                    surface.stroke_line(
                        p1.pos,
                        p2_pos,
                        cfg.line_width,
                        Rgba::new(accent, alpha),
                    );
                }
            }

            if let Some(pointer) = pointer {
                let distance = (p1.pos - pointer).mag();
                if let Some(alpha) = pointer_line_alpha(
                    distance,
                    cfg.pointer_line_distance,
                    base_alpha,
                    cfg.pointer_line_alpha_boost,
                ) {
                    surface.stroke_line(
                        p1.pos,
                        pointer,
                        cfg.pointer_line_width,
                        Rgba::new(accent, alpha),
                    );
                }
            }
        }
    }
}

/// Alpha for a particle-particle line: the base theme opacity scaled by
/// `1 - d/threshold`. `None` at or past the threshold, where the line would
/// have zero opacity anyway.
pub fn line_alpha(distance: f32, threshold: f32, base_alpha: f32) -> Option<f32> {
    (distance < threshold).then(|| base_alpha * (1.0 - distance / threshold))
}

/// Pointer lines use a larger threshold and render brighter than the
/// particle-particle network.
pub fn pointer_line_alpha(
    distance: f32,
    threshold: f32,
    base_alpha: f32,
    boost: f32,
) -> Option<f32> {
    (distance < threshold).then(|| base_alpha * boost * (1.0 - distance / threshold))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[derive(Default)]
    struct RecordingSurface {
        clears: usize,
        circles: Vec<(Vec2, f32, Rgba)>,
        lines: Vec<(Vec2, Vec2, f32, Rgba)>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.clears += 1;
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
            self.circles.push((center, radius, color));
        }
        fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
            self.lines.push((from, to, width, color));
        }
    }

    fn small_cfg() -> FieldConfig {
        FieldConfig {
            num_particles: 24,
            ..FieldConfig::default()
        }
    }

    #[test]
    fn init_fills_exactly_n_particles_within_insets() {
        fastrand::seed(7);
        let cfg = small_cfg();
        let mut field = ParticleField::new(Vec2::new(800.0, 600.0));
        field.init(&cfg, config::DEFAULT_ACCENT, Theme::Light);

        assert_eq!(field.particles.len(), cfg.num_particles);
        for p in &field.particles {
            assert!(p.pos.x >= p.radius && p.pos.x <= 800.0 - p.radius);
            assert!(p.pos.y >= p.radius && p.pos.y <= 600.0 - p.radius);
            assert!(p.vel.x.abs() <= cfg.initial_speed);
            assert!(p.vel.y.abs() <= cfg.initial_speed);
        }
    }

    #[test]
    fn reinit_discards_the_previous_batch() {
        fastrand::seed(7);
        let cfg = small_cfg();
        let mut field = ParticleField::new(Vec2::new(400.0, 300.0));
        field.init(&cfg, config::DEFAULT_ACCENT, Theme::Light);
        field.init(&cfg, config::DEFAULT_ACCENT, Theme::Dark);

        assert_eq!(field.particles.len(), cfg.num_particles);
        for p in &field.particles {
            assert_eq!(p.color.alpha, Theme::Dark.particle_alpha());
        }
    }

    #[test]
    fn particles_never_escape_the_reflective_bounds() {
        fastrand::seed(11);
        let cfg = small_cfg();
        let bounds = Vec2::new(200.0, 150.0);
        let mut field = ParticleField::new(bounds);
        field.init(&cfg, config::DEFAULT_ACCENT, Theme::Light);

        let mut surface = RecordingSurface::default();
        for _ in 0..2000 {
            field.render_frame(&mut surface, &cfg, config::DEFAULT_ACCENT, Theme::Light);
        }

        // Overshoot of one frame's travel past the wall is tolerated, never
        // a permanent escape.
        let slack = cfg.particle_radius + cfg.initial_speed;
        for p in &field.particles {
            assert!(p.pos.x >= -slack && p.pos.x <= bounds.x + slack);
            assert!(p.pos.y >= -slack && p.pos.y <= bounds.y + slack);
        }
    }

    #[test]
    fn frame_pass_clears_then_draws_every_particle() {
        fastrand::seed(3);
        let cfg = small_cfg();
        let mut field = ParticleField::new(Vec2::new(800.0, 600.0));
        field.init(&cfg, config::DEFAULT_ACCENT, Theme::Light);

        let mut surface = RecordingSurface::default();
        field.render_frame(&mut surface, &cfg, config::DEFAULT_ACCENT, Theme::Light);

        assert_eq!(surface.clears, 1);
        assert_eq!(surface.circles.len(), cfg.num_particles);
        // Every particle pairs with itself, so there are at least N segments.
        assert!(surface.lines.len() >= cfg.num_particles);
    }

    #[test]
    fn pointer_lines_are_boosted_and_wider() {
        let cfg = FieldConfig::default();
        let mut field = ParticleField::new(Vec2::new(800.0, 600.0));
        field.particles.push(Particle::new(
            Vec2::new(400.0, 300.0),
            Vec2::zero(),
            cfg.particle_radius,
            Rgba::new(config::DEFAULT_ACCENT, 0.4),
        ));
        field.pointer.pos = Some(Vec2::new(400.0, 390.0));

        let mut surface = RecordingSurface::default();
        field.render_frame(&mut surface, &cfg, config::DEFAULT_ACCENT, Theme::Light);

        let pointer_line = surface
            .lines
            .iter()
            .find(|(_, _, width, _)| *width == cfg.pointer_line_width)
            .expect("no pointer line drawn");
        let expected = pointer_line_alpha(
            90.0,
            cfg.pointer_line_distance,
            Theme::Light.line_alpha(),
            cfg.pointer_line_alpha_boost,
        )
        .unwrap();
        assert!((pointer_line.3.alpha - expected).abs() < 1e-5);
    }

    #[test]
    fn line_alpha_fades_monotonically_to_zero_at_the_threshold() {
        let base = 0.6;
        assert_eq!(line_alpha(0.0, 150.0, base), Some(base));

        let mut last = f32::INFINITY;
        for d in 0..150 {
            let alpha = line_alpha(d as f32, 150.0, base).unwrap();
            assert!(alpha < last);
            last = alpha;
        }
        let near = line_alpha(149.9999, 150.0, base).unwrap();
        assert!(near >= 0.0 && near < 1e-4);
        assert_eq!(line_alpha(150.0, 150.0, base), None);
        assert_eq!(line_alpha(400.0, 150.0, base), None);
    }

    #[test]
    fn pointer_line_alpha_scales_by_the_boost() {
        let plain = line_alpha(90.0, 180.0, 0.6).unwrap();
        let boosted = pointer_line_alpha(90.0, 180.0, 0.6, 1.5).unwrap();
        assert!((boosted - plain * 1.5).abs() < 1e-6);
        assert_eq!(pointer_line_alpha(180.0, 180.0, 0.6, 1.5), None);
    }
}
