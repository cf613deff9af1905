//! SVG drawing vocabulary shared by all scenes.
//!
//! Scenes describe themselves in complex-plane coordinates; this module owns
//! the mapping onto the SVG canvas (y flipped, origin centered) and the small
//! set of shapes every scene is built from: axes, the unit circle, root
//! markers, chord polygons, and caption text.
//!
//! Markup is generated with [maud], so malformed SVG is a compile error and
//! all interpolated text is escaped.

use super::geometry::{Point, Root};
use maud::{Markup, html};

/// Palette shared across scenes.
pub const COLOR_CIRCLE: &str = "#4f8fd0";
pub const COLOR_ROOT: &str = "#e8b84a";
pub const COLOR_PRIMITIVE: &str = "#d05555";
pub const COLOR_CHORD: &str = "#7bc47f";
pub const COLOR_TEXT: &str = "#e8e8e8";
pub const COLOR_MUTED: &str = "#8a8a8a";
const COLOR_BACKGROUND: &str = "#101418";
const COLOR_AXIS: &str = "#3a4048";

/// Canvas geometry: maps unit-circle coordinates to SVG pixels.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    /// Pixels per unit length in the complex plane.
    pub scale: f64,
}

impl Frame {
    /// A frame whose unit circle fills ~70% of the shorter edge.
    pub fn new(width: u32, height: u32) -> Self {
        let short = f64::from(width.min(height));
        Self {
            width,
            height,
            scale: short * 0.35,
        }
    }

    fn center(&self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    /// Complex-plane point to canvas pixels. The imaginary axis points up,
    /// SVG y points down.
    pub fn to_canvas(&self, p: Point) -> (f64, f64) {
        let (cx, cy) = self.center();
        (cx + p.re * self.scale, cy - p.im * self.scale)
    }
}

fn px(v: f64) -> String {
    format!("{v:.2}")
}

/// The SVG document wrapper: background, title caption, then scene content.
pub fn document(frame: &Frame, title: &str, content: Markup) -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg"
            width=(frame.width) height=(frame.height)
            viewBox={ "0 0 " (frame.width) " " (frame.height) } {
            rect width="100%" height="100%" fill=(COLOR_BACKGROUND) {}
            text x="24" y="40" fill=(COLOR_TEXT) font-size="24"
                font-family="Georgia, serif" { (title) }
            (content)
        }
    }
}

/// Real and imaginary axes through the origin.
pub fn axes(frame: &Frame) -> Markup {
    let (cx, cy) = frame.center();
    html! {
        line x1="0" y1=(px(cy)) x2=(frame.width) y2=(px(cy))
            stroke=(COLOR_AXIS) stroke-width="1" {}
        line x1=(px(cx)) y1="0" x2=(px(cx)) y2=(frame.height)
            stroke=(COLOR_AXIS) stroke-width="1" {}
        text x=(px(f64::from(frame.width) - 30.0)) y=(px(cy - 8.0))
            fill=(COLOR_MUTED) font-size="14" font-style="italic" { "Re" }
        text x=(px(cx + 8.0)) y="20" fill=(COLOR_MUTED)
            font-size="14" font-style="italic" { "Im" }
    }
}

/// The unit circle |z| = 1.
pub fn unit_circle(frame: &Frame) -> Markup {
    let (cx, cy) = frame.center();
    html! {
        circle cx=(px(cx)) cy=(px(cy)) r=(px(frame.scale))
            fill="none" stroke=(COLOR_CIRCLE) stroke-width="2" {}
    }
}

/// A dot at a root's position, optionally labelled with its angle.
pub fn root_marker(frame: &Frame, root: &Root, color: &str, with_label: bool) -> Markup {
    let (x, y) = frame.to_canvas(root.point);
    // Push the label outward along the radius so it clears the circle.
    let label_point = Point {
        re: root.point.re * 1.22,
        im: root.point.im * 1.22,
    };
    let (lx, ly) = frame.to_canvas(label_point);
    html! {
        circle cx=(px(x)) cy=(px(y)) r="6" fill=(color) {}
        @if with_label {
            text x=(px(lx)) y=(px(ly)) fill=(COLOR_TEXT) font-size="14"
                text-anchor="middle" dominant-baseline="middle" {
                (root.angle_label())
            }
        }
    }
}

/// A radius line from the origin to a root.
pub fn radius(frame: &Frame, root: &Root, color: &str) -> Markup {
    let (cx, cy) = frame.center();
    let (x, y) = frame.to_canvas(root.point);
    html! {
        line x1=(px(cx)) y1=(px(cy)) x2=(px(x)) y2=(px(y))
            stroke=(color) stroke-width="1.5" stroke-dasharray="4 3" {}
    }
}

/// The closed polygon joining consecutive roots — the regular n-gon.
pub fn chord_polygon(frame: &Frame, roots: &[Root], color: &str) -> Markup {
    let points: String = roots
        .iter()
        .map(|r| {
            let (x, y) = frame.to_canvas(r.point);
            format!("{},{}", px(x), px(y))
        })
        .collect::<Vec<_>>()
        .join(" ");
    html! {
        polygon points=(points) fill="none" stroke=(color) stroke-width="1.5" {}
    }
}

/// Left-aligned caption lines under the title.
pub fn caption(lines: &[String]) -> Markup {
    html! {
        @for (i, line) in lines.iter().enumerate() {
            text x="24" y=(px(72.0 + i as f64 * 24.0)) fill=(COLOR_MUTED)
                font-size="16" font-family="Georgia, serif" { (line) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::geometry::nth_roots;

    fn frame() -> Frame {
        Frame::new(800, 600)
    }

    #[test]
    fn to_canvas_centers_the_origin() {
        let (x, y) = frame().to_canvas(Point { re: 0.0, im: 0.0 });
        assert_eq!((x, y), (400.0, 300.0));
    }

    #[test]
    fn to_canvas_flips_the_imaginary_axis() {
        let f = frame();
        let (_, y_up) = f.to_canvas(Point { re: 0.0, im: 1.0 });
        let (_, y_down) = f.to_canvas(Point { re: 0.0, im: -1.0 });
        assert!(y_up < 300.0);
        assert!(y_down > 300.0);
    }

    #[test]
    fn scale_fits_the_shorter_edge() {
        let f = Frame::new(1200, 600);
        assert_eq!(f.scale, 600.0 * 0.35);
    }

    #[test]
    fn document_is_a_standalone_svg() {
        let f = frame();
        let svg = document(&f, "Test Scene", axes(&f)).into_string();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("Test Scene"));
    }

    #[test]
    fn titles_are_escaped() {
        let f = frame();
        let svg = document(&f, "a < b & c", html! {}).into_string();
        assert!(svg.contains("a &lt; b &amp; c"));
        assert!(!svg.contains("a < b"));
    }

    #[test]
    fn root_marker_draws_dot_and_label() {
        let f = frame();
        let roots = nth_roots(4);
        let markup = root_marker(&f, &roots[1], COLOR_ROOT, true).into_string();
        assert!(markup.contains("circle"));
        assert!(markup.contains("2π·1/4"));
    }

    #[test]
    fn root_marker_label_is_optional() {
        let f = frame();
        let roots = nth_roots(4);
        let markup = root_marker(&f, &roots[1], COLOR_ROOT, false).into_string();
        assert!(!markup.contains("text"));
    }

    #[test]
    fn chord_polygon_has_one_vertex_per_root() {
        let f = frame();
        let roots = nth_roots(5);
        let markup = chord_polygon(&f, &roots, COLOR_CHORD).into_string();
        let points = markup
            .split("points=\"")
            .nth(1)
            .and_then(|s| s.split('"').next())
            .unwrap();
        assert_eq!(points.split(' ').count(), 5);
    }
}
