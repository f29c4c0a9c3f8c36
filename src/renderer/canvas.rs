//! Canvas 2D painter

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::Painter;

/// Paints onto a `CanvasRenderingContext2d`
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    background: Option<HtmlImageElement>,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            background: None,
        }
    }

    /// Use this image for `draw_background`
    pub fn set_background(&mut self, image: HtmlImageElement) {
        self.background = Some(image);
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        if self
            .ctx
            .arc(cx as f64, cy as f64, radius as f64, 0.0, std::f64::consts::TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(font);
        self.ctx.fill_text(text, x as f64, y as f64).ok();
    }

    fn draw_background(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let Some(image) = &self.background else {
            return;
        };
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                image, x as f64, y as f64, w as f64, h as f64,
            )
            .ok();
    }
}
