// Seam between the render pass and whatever actually draws. The wasm build
// implements this over a 2D canvas context; tests record the primitives.

use ultraviolet::Vec2;

use crate::color::Rgba;

pub trait Surface {
    /// Wipe the whole surface ahead of a frame.
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}
