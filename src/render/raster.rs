//! Software composite renderer.
//!
//! Freehand strokes are drawn as tiny-skia stroked paths with round caps and
//! joins; text labels are rasterized from `ab_glyph` outlines when a font is
//! configured. Coordinates are 1:1 with the background's native pixels, so no
//! scaling pass is needed at export time.

use ab_glyph::{Font, FontArc, Glyph, PxScale, ScaleFont, point};
use image::{Rgba, RgbaImage};
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::model::{Annotation, FreehandAnnotation, TextAnnotation};
use crate::render::{CompositeError, CompositeRenderer};

/// Pure-software [`CompositeRenderer`].
#[derive(Clone, Default)]
pub struct RasterRenderer {
    font: Option<FontArc>,
}

impl RasterRenderer {
    /// Renderer without text support; text labels are skipped with a log.
    pub fn new() -> Self {
        Self { font: None }
    }

    /// Renderer that rasterizes text labels with the given font.
    pub fn with_font(font: FontArc) -> Self {
        Self { font: Some(font) }
    }
}

impl CompositeRenderer for RasterRenderer {
    fn render(
        &self,
        background: &RgbaImage,
        annotations: &[Annotation],
    ) -> Result<RgbaImage, CompositeError> {
        let (width, height) = background.dimensions();
        if width == 0 || height == 0 {
            return Err(CompositeError::InvalidSurface { width, height });
        }

        let mut composite = background.clone();
        for annotation in annotations {
            match annotation {
                Annotation::Freehand(stroke) => draw_stroke(&mut composite, stroke),
                Annotation::Text(label) => match &self.font {
                    Some(font) => draw_label(&mut composite, label, font),
                    None => {
                        log::debug!("skipping text label {}: no font configured", label.id);
                    }
                },
            }
        }
        Ok(composite)
    }
}

/// Convert the image to a Pixmap, apply a drawing function, and copy back.
fn with_pixmap(img: &mut RgbaImage, f: impl FnOnce(&mut Pixmap)) {
    let (w, h) = img.dimensions();
    let Some(size) = tiny_skia::IntSize::from_wh(w, h) else {
        return;
    };
    let Some(mut pixmap) = Pixmap::from_vec(img.as_raw().clone(), size) else {
        return;
    };

    f(&mut pixmap);

    img.copy_from_slice(pixmap.data());
}

/// Build a polyline path through flattened x/y pairs.
fn build_polyline(points: &[f32]) -> Option<tiny_skia::Path> {
    if points.len() < 4 {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(points[0], points[1]);
    for pair in points[2..].chunks_exact(2) {
        pb.line_to(pair[0], pair[1]);
    }
    pb.finish()
}

fn draw_stroke(img: &mut RgbaImage, stroke: &FreehandAnnotation) {
    let Some(path) = build_polyline(&stroke.points) else {
        return;
    };
    let [r, g, b, a] = stroke.color.to_rgba8();
    let width = stroke.stroke_width.max(1.0);

    with_pixmap(img, |pixmap| {
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;

        let stroke_style = Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        };

        pixmap.stroke_path(&path, &paint, &stroke_style, Transform::identity(), None);
    });
}

fn draw_label(img: &mut RgbaImage, label: &TextAnnotation, font: &FontArc) {
    let scale = PxScale::from(label.font_size);
    let scaled = font.as_scaled(scale);
    let [r, g, b, _] = label.color.to_rgba8();

    // Glyph origins sit on the baseline; the label position is the box's
    // top-left corner.
    let baseline = label.y + scaled.ascent();
    let mut caret = label.x;
    let mut previous: Option<ab_glyph::GlyphId> = None;

    for ch in label.text.chars() {
        let glyph_id = font.glyph_id(ch);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, glyph_id);
        }
        let glyph: Glyph = glyph_id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(glyph_id);
        previous = Some(glyph_id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            let px = bounds.min.x as i32 + gx as i32;
            let py = bounds.min.y as i32 + gy as i32;
            if px < 0 || py < 0 || px as u32 >= img.width() || py as u32 >= img.height() {
                return;
            }
            blend_pixel(
                img.get_pixel_mut(px as u32, py as u32),
                [r, g, b],
                coverage,
            );
        });
    }
}

/// Source-over blend of an opaque color at the given coverage.
fn blend_pixel(dst: &mut Rgba<u8>, rgb: [u8; 3], coverage: f32) {
    let alpha = (coverage.clamp(0.0, 1.0) * 255.0) as u16;
    if alpha == 0 {
        return;
    }
    for (channel, src) in dst.0.iter_mut().take(3).zip(rgb) {
        let blended = (u16::from(src) * alpha + u16::from(*channel) * (255 - alpha)) / 255;
        *channel = blended as u8;
    }
    dst.0[3] = dst.0[3].max(alpha as u8);
}
