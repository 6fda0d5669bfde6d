use crate::catalog::{short_location, Destination};
use crate::constants::*;
use fnv::FnvHashMap;
use glam::Vec2;
use globe_core::ProjectedItem;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one frame needs to draw, in CSS pixels.
pub struct Scene<'a> {
    pub size: Vec2,
    pub dpr: f64,
    pub projected: &'a [ProjectedItem],
    pub items: &'a [Destination],
    pub hovered: Option<usize>,
    pub heading: u32,
}

/// Canvas 2D painter. Items arrive farthest-first and are painted in that
/// order, so nearer bubbles cover farther ones.
pub struct Painter {
    ctx: web::CanvasRenderingContext2d,
    images: FnvHashMap<String, web::HtmlImageElement>,
}

impl Painter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self {
            ctx,
            images: FnvHashMap::default(),
        })
    }

    /// Decoded image for `url`, starting the download on first use.
    fn image(&mut self, url: &str) -> Option<web::HtmlImageElement> {
        if let Some(img) = self.images.get(url) {
            return (img.complete() && img.natural_width() > 0).then(|| img.clone());
        }
        match web::HtmlImageElement::new() {
            Ok(img) => {
                img.set_cross_origin(Some("anonymous"));
                img.set_src(url);
                self.images.insert(url.to_string(), img);
            }
            Err(e) => log::warn!("[render] image element failed: {:?}", e),
        }
        None
    }

    pub fn draw(&mut self, scene: &Scene) {
        let ctx = self.ctx.clone();
        let _ = ctx.set_transform(scene.dpr, 0.0, 0.0, scene.dpr, 0.0, 0.0);
        let center = scene.size * 0.5;

        self.draw_backdrop(scene.size, center, scene.heading);

        let mut hovered = None;
        for p in scene.projected {
            if Some(p.slot) == scene.hovered {
                hovered = Some(p);
                continue;
            }
            if let Some(dest) = scene.items.get(p.slot) {
                self.draw_item(center, p, dest, 1.0);
            }
        }
        // the hovered bubble is raised above everything else
        if let Some(p) = hovered {
            if let Some(dest) = scene.items.get(p.slot) {
                self.draw_item(center, p, dest, HOVER_SCALE);
            }
        }

        self.draw_heading(scene.size, scene.heading);
        ctx.set_global_alpha(1.0);
    }

    fn draw_backdrop(&self, size: Vec2, center: Vec2, heading: u32) {
        let ctx = &self.ctx;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(BACKGROUND_OUTER);
        ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);

        let (cx, cy) = (center.x as f64, center.y as f64);
        ctx.set_global_alpha(0.35);
        ctx.set_fill_style_str(BACKGROUND_INNER);
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, (size.x.min(size.y) * 0.5) as f64, 0.0, TAU);
        ctx.fill();

        // wireframe core, turning with the heading
        ctx.set_global_alpha(RING_ALPHA as f64);
        ctx.set_stroke_style_str(GOLD);
        ctx.set_line_width(1.0);
        let turn = (heading as f64).to_radians();
        ctx.begin_path();
        let _ = ctx.ellipse(
            cx,
            cy,
            RING_RADII_PX[0] as f64,
            RING_RADII_PX[0] as f64 * 0.5,
            turn,
            0.0,
            TAU,
        );
        ctx.stroke();
        ctx.begin_path();
        let _ = ctx.ellipse(
            cx,
            cy,
            RING_RADII_PX[1] as f64 * 0.5,
            RING_RADII_PX[1] as f64,
            -turn,
            0.0,
            TAU,
        );
        ctx.stroke();
    }

    fn draw_item(&mut self, center: Vec2, p: &ProjectedItem, dest: &Destination, emphasis: f32) {
        let image = self.image(&dest.image);
        let ctx = &self.ctx;

        let pos = p.screen_position(center);
        let (x, y) = (pos.x as f64, pos.y as f64);
        let s = (p.scale * emphasis) as f64;
        let alpha = if p.is_front { p.alpha } else { p.alpha * BACK_DIM };
        ctx.set_global_alpha(alpha as f64);

        let r = ITEM_RADIUS_PX as f64 * s;
        let inner = r - ITEM_RING_PX as f64 * s;

        ctx.set_fill_style_str(GOLD);
        ctx.begin_path();
        let _ = ctx.arc(x, y, r, 0.0, TAU);
        ctx.fill();

        ctx.save();
        ctx.begin_path();
        let _ = ctx.arc(x, y, inner, 0.0, TAU);
        ctx.clip();
        match image {
            Some(img) => {
                let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    &img,
                    x - inner,
                    y - inner,
                    inner * 2.0,
                    inner * 2.0,
                );
            }
            None => {
                ctx.set_fill_style_str(BACKGROUND_OUTER);
                ctx.fill_rect(x - inner, y - inner, inner * 2.0, inner * 2.0);
            }
        }
        ctx.restore();

        let stem_top = y + r;
        let stem_bottom = stem_top + STEM_LENGTH_PX as f64 * s;
        ctx.set_stroke_style_str(GOLD);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        ctx.move_to(x, stem_top);
        ctx.line_to(x, stem_bottom);
        ctx.stroke();

        let (w, h) = (LABEL_WIDTH_PX as f64 * s, LABEL_HEIGHT_PX as f64 * s);
        ctx.set_fill_style_str(LABEL_FILL);
        ctx.fill_rect(x - w * 0.5, stem_bottom, w, h);
        ctx.stroke_rect(x - w * 0.5, stem_bottom, w, h);

        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.set_fill_style_str(GOLD);
        ctx.set_font(&format!("{:.0}px sans-serif", 9.0 * s));
        let _ = ctx.fill_text(
            &short_location(&dest.location).to_uppercase(),
            x,
            stem_bottom + h * 0.3,
        );
        ctx.set_fill_style_str(CREAM);
        ctx.set_font(&format!("{:.0}px serif", 12.0 * s));
        let _ = ctx.fill_text(&dest.name, x, stem_bottom + h * 0.68);
    }

    fn draw_heading(&self, size: Vec2, heading: u32) {
        let ctx = &self.ctx;
        let (right, bottom) = (size.x as f64 - 32.0, size.y as f64 - 32.0);
        ctx.set_text_align("right");
        ctx.set_text_baseline("alphabetic");

        ctx.set_global_alpha(0.4);
        ctx.set_fill_style_str(CREAM);
        ctx.set_font("10px sans-serif");
        let _ = ctx.fill_text(&format!("{}° E", heading), right, bottom - 18.0);

        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(GOLD);
        let _ = ctx.fill_text("DRAG GLOBE TO NAVIGATE", right, bottom);
    }
}
