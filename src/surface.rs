use crate::values::css_rgba;
use glam::Vec2;
use glowsphere_core::{Rgba, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D context as a drawing target for the render loop.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `Ok(None)` when the browser cannot provide a 2D context for `canvas`.
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Option<Self>> {
        let ctx = match canvas.get_context("2d") {
            Ok(Some(obj)) => obj
                .dyn_into::<web::CanvasRenderingContext2d>()
                .map_err(|e| anyhow::anyhow!("not a 2d context: {:?}", e))?,
            Ok(None) => return Ok(None),
            Err(e) => {
                log::warn!("getContext('2d') failed: {:?}", e);
                return Ok(None);
            }
        };
        Ok(Some(Self {
            canvas: canvas.clone(),
            ctx,
        }))
    }

    /// Backing-store size in pixels.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&css_rgba(color));
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&css_rgba(color));
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.close_path();
        self.ctx.fill();
    }
}
