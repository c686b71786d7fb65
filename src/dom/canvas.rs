// Surface implementation over a 2D canvas context.

use ultraviolet::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::color::Rgba;
use crate::surface::Surface;

pub struct Canvas2d {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn from_element_id(document: &Document, id: &str) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))?
            .dyn_into()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Size the backing store to the viewport width and the full scrollable
    /// document height, and report the new bounds.
    pub fn resize_to_page(&self, window: &Window, document: &Document) -> Result<Vec2, JsValue> {
        let width = window.inner_width()?.as_f64().unwrap_or(0.0);
        let height = document
            .document_element()
            .map(|root| root.scroll_height())
            .unwrap_or(0) as f64;
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        Ok(Vec2::new(width as f32, height as f32))
    }
}

impl Surface for Canvas2d {
    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
