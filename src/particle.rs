// Defines the particle struct (position, velocity, radius, color) and its
// per-frame update: wall reflection, pointer repulsion, Euler integration.

use ultraviolet::Vec2;

use crate::color::Rgba;
use crate::config::FieldConfig;

#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Rgba) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Advance one frame. Velocities are in pixels per frame; there is no
    /// delta-time normalization, the step is tied to the display refresh.
    ///
    /// Walls are reflective: when the leading edge is past an extent the
    /// matching velocity component flips sign, per axis independently. The
    /// position is never clamped, so a particle may overshoot the edge by one
    /// frame's travel before it turns around.
    pub fn update(&mut self, bounds: Vec2, pointer: Option<Vec2>, cfg: &FieldConfig) {
        if self.pos.x + self.radius > bounds.x || self.pos.x - self.radius < 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y + self.radius > bounds.y || self.pos.y - self.radius < 0.0 {
            self.vel.y = -self.vel.y;
        }

        if let Some(pointer) = pointer {
            let d = pointer - self.pos;
            let distance = d.mag();

            if distance < cfg.pointer_repulse_radius + self.radius {
                // Impulse away from the pointer, strongest at distance 0.
                // There is no damping or restoring force anywhere, so repeated
                // proximity keeps adding speed; that liveliness is intended.
                let angle = d.y.atan2(d.x);
                let force = (cfg.pointer_repulse_radius - distance)
                    / cfg.pointer_repulse_radius
                    * cfg.repulse_force;
                self.vel.x -= force * angle.cos();
                self.vel.y -= force * angle.sin();
            }
        }

        self.pos += self.vel;
    }
}
