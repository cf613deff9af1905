//! The scene catalog: ten SVG vignettes explaining the nth roots of unity.
//!
//! Each scene is a pure function from a canvas [`Frame`] to a complete SVG
//! document; [`render_scene`] writes it to `<output_dir>/<slug>.svg`. The
//! catalog order is fixed and numbered — the numbers are what the CLI, the
//! batch orchestrator, and the final summary all refer to.
//!
//! Scenes have no shared state and touch the filesystem only through their
//! own output file, which is what makes them safe to dispatch in parallel
//! via [`crate::batch`].

pub mod geometry;
pub mod svg;

use crate::batch::{BatchError, Catalog, Job};
use crate::naming::scene_slug;
use geometry::{nth_roots, primitive_roots, roots_product, roots_sum, totient};
use maud::{Markup, html};
use std::fs;
use std::path::{Path, PathBuf};
use svg::{
    COLOR_CHORD, COLOR_CIRCLE, COLOR_MUTED, COLOR_PRIMITIVE, COLOR_ROOT, Frame, axes, caption,
    chord_polygon, document, radius, root_marker, unit_circle,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no scene is numbered {0}")]
    UnknownScene(u32),
}

/// Where and how scenes render.
#[derive(Debug, Clone)]
pub struct SceneContext {
    pub output_dir: PathBuf,
    pub frame: Frame,
}

impl SceneContext {
    pub fn new(output_dir: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            output_dir: output_dir.into(),
            frame: Frame::new(width, height),
        }
    }
}

/// One catalog entry: a number, a display title, and a renderer.
#[derive(Clone, Copy)]
pub struct Scene {
    pub number: u32,
    pub title: &'static str,
    render: fn(&Frame) -> Markup,
}

impl Scene {
    /// Output file stem, derived from the title.
    pub fn slug(&self) -> String {
        scene_slug(self.title)
    }
}

/// All scenes in presentation order. Numbers are stable identifiers.
pub fn all_scenes() -> Vec<Scene> {
    vec![
        Scene { number: 1, title: "Introduction to Roots of Unity", render: introduction },
        Scene { number: 2, title: "Complex Root Visualization", render: complex_roots },
        Scene { number: 3, title: "Nth Roots of Unity", render: nth_roots_scene },
        Scene { number: 4, title: "Polar Form Representation", render: polar_form },
        Scene { number: 5, title: "Unity Properties & Sum/Product", render: unity_properties },
        Scene { number: 6, title: "Primitive Root and Principal Root", render: primitive_root },
        Scene { number: 7, title: "Geometric Properties", render: geometric_properties },
        Scene { number: 8, title: "Special Cases (Square, Cube, Fourth Roots)", render: special_cases },
        Scene { number: 9, title: "Specific Roots of Unity", render: specific_roots },
        Scene { number: 10, title: "Root Pattern Visualization", render: root_pattern },
    ]
}

/// Look up a scene by its catalog number.
pub fn find_scene(number: u32) -> Result<Scene, SceneError> {
    all_scenes()
        .into_iter()
        .find(|s| s.number == number)
        .ok_or(SceneError::UnknownScene(number))
}

/// Render one scene to `<output_dir>/<slug>.svg`.
pub fn render_scene(scene: &Scene, ctx: &SceneContext) -> Result<PathBuf, SceneError> {
    fs::create_dir_all(&ctx.output_dir)?;
    let markup = (scene.render)(&ctx.frame);
    let path = scene_output_path(&ctx.output_dir, scene);
    fs::write(&path, markup.into_string())?;
    Ok(path)
}

pub fn scene_output_path(output_dir: &Path, scene: &Scene) -> PathBuf {
    output_dir.join(format!("{}.svg", scene.slug()))
}

/// Wrap the full scene catalog as batch jobs.
pub fn catalog(ctx: &SceneContext) -> Result<Catalog, BatchError> {
    let jobs = all_scenes()
        .into_iter()
        .map(|scene| {
            let ctx = ctx.clone();
            Job::new(scene.number, scene.title, move || {
                render_scene(&scene, &ctx)?;
                Ok(())
            })
        })
        .collect();
    Catalog::new(jobs)
}

// ============================================================================
// Scene renderers
// ============================================================================

/// 1 — the unit circle and the defining properties.
fn introduction(frame: &Frame) -> Markup {
    let lines = vec![
        "The nth roots of unity are the solutions of zⁿ = 1.".to_string(),
        "All of them lie on the unit circle: |z| = 1.".to_string(),
        "Euler: e^(iθ) = cos θ + i·sin θ".to_string(),
        "De Moivre: (cos θ + i·sin θ)ⁿ = cos nθ + i·sin nθ".to_string(),
    ];
    document(frame, "Introduction to Roots of Unity", html! {
        (axes(frame))
        (unit_circle(frame))
        (caption(&lines))
    })
}

/// 2 — square, cube, and fourth roots overlaid on one circle.
fn complex_roots(frame: &Frame) -> Markup {
    let palette = [COLOR_ROOT, COLOR_CHORD, COLOR_PRIMITIVE];
    let lines = vec![
        "Dots mark e^(2πik/n) for n = 2, 3, 4.".to_string(),
        "Each n divides the circle into n equal arcs.".to_string(),
    ];
    document(frame, "Complex Root Visualization", html! {
        (axes(frame))
        (unit_circle(frame))
        @for (i, n) in [2u32, 3, 4].into_iter().enumerate() {
            @for root in nth_roots(n) {
                (root_marker(frame, &root, palette[i], false))
            }
        }
        (caption(&lines))
    })
}

/// 3 — the sixth roots, labelled, with their regular hexagon.
fn nth_roots_scene(frame: &Frame) -> Markup {
    let n = 6;
    let roots = nth_roots(n);
    let lines = vec![
        format!("z_k = e^(2πik/{n}) for k = 0 .. {}", n - 1),
        format!("The {n} roots are the vertices of a regular {n}-gon."),
    ];
    document(frame, "Nth Roots of Unity", html! {
        (axes(frame))
        (unit_circle(frame))
        (chord_polygon(frame, &roots, COLOR_CHORD))
        @for root in &roots {
            (root_marker(frame, root, COLOR_ROOT, true))
        }
        (caption(&lines))
    })
}

/// 4 — polar form: radii and angle labels for the eighth roots.
fn polar_form(frame: &Frame) -> Markup {
    let roots = nth_roots(8);
    let lines = vec![
        "z_k = cos(2πk/n) + i·sin(2πk/n) = e^(2πik/n)".to_string(),
        "Every root is one unit from the origin at angle 2πk/n.".to_string(),
    ];
    document(frame, "Polar Form Representation", html! {
        (axes(frame))
        (unit_circle(frame))
        @for root in &roots {
            (radius(frame, root, COLOR_MUTED))
            (root_marker(frame, root, COLOR_ROOT, true))
        }
        (caption(&lines))
    })
}

/// 5 — the sum and product identities, computed for n = 5.
fn unity_properties(frame: &Frame) -> Markup {
    let n = 5;
    let roots = nth_roots(n);
    let sum = roots_sum(n);
    let product = roots_product(n);
    let lines = vec![
        format!("Sum of the {n}th roots: {:.1} + {:.1}i (zero for n ≥ 2)", sum.re, sum.im),
        format!("Product of the {n}th roots: {:.1} (equals (−1)ⁿ⁺¹)", product.re),
    ];
    document(frame, "Unity Properties & Sum/Product", html! {
        (axes(frame))
        (unit_circle(frame))
        (chord_polygon(frame, &roots, COLOR_CHORD))
        @for root in &roots {
            (root_marker(frame, root, COLOR_ROOT, false))
        }
        (caption(&lines))
    })
}

/// 6 — primitive roots of n = 6 highlighted against the rest.
fn primitive_root(frame: &Frame) -> Markup {
    let n = 6;
    let roots = nth_roots(n);
    let lines = vec![
        format!("A root is primitive when gcd(k, n) = 1; there are φ({n}) = {}.", totient(n)),
        "The principal root is k = 1, the first step counter-clockwise.".to_string(),
        "Highlighted: the primitive roots; they generate all the others.".to_string(),
    ];
    document(frame, "Primitive Root and Principal Root", html! {
        (axes(frame))
        (unit_circle(frame))
        @for root in &roots {
            @let color = if root.is_primitive() { COLOR_PRIMITIVE } else { COLOR_ROOT };
            (root_marker(frame, root, color, true))
        }
        (caption(&lines))
    })
}

/// 7 — the regular n-gon as the geometric face of the roots.
fn geometric_properties(frame: &Frame) -> Markup {
    let n = 7;
    let roots = nth_roots(n);
    let lines = vec![
        format!("The {n}th roots are the vertices of a regular {n}-gon."),
        "Adjacent vertices subtend equal central angles of 2π/n.".to_string(),
        "Conjugate roots mirror each other across the real axis.".to_string(),
    ];
    document(frame, "Geometric Properties", html! {
        (axes(frame))
        (unit_circle(frame))
        (chord_polygon(frame, &roots, COLOR_CHORD))
        @for root in &roots {
            (radius(frame, root, COLOR_MUTED))
            (root_marker(frame, root, COLOR_ROOT, false))
        }
        (caption(&lines))
    })
}

/// 8 — n = 2, 3, 4 as nested figures: segment, triangle, square.
fn special_cases(frame: &Frame) -> Markup {
    let lines = vec![
        "n = 2: ±1 — a diameter of the circle.".to_string(),
        "n = 3: the cube roots form an equilateral triangle.".to_string(),
        "n = 4: ±1, ±i — a square on the axes.".to_string(),
    ];
    let cases = [(2u32, COLOR_ROOT), (3, COLOR_CHORD), (4, COLOR_PRIMITIVE)];
    document(frame, "Special Cases (Square, Cube, Fourth Roots)", html! {
        (axes(frame))
        (unit_circle(frame))
        @for (n, color) in cases {
            @let roots = nth_roots(n);
            (chord_polygon(frame, &roots, color))
            @for root in &roots {
                (root_marker(frame, root, color, false))
            }
        }
        (caption(&lines))
    })
}

/// 9 — the twelfth roots, primitivity color-coded.
fn specific_roots(frame: &Frame) -> Markup {
    let n = 12;
    let roots = nth_roots(n);
    let prim = primitive_roots(n).len();
    let lines = vec![
        format!("The {n} twelfth roots of unity; {prim} of them are primitive."),
        "Primitive indices: k coprime with 12, i.e. k = 1, 5, 7, 11.".to_string(),
    ];
    document(frame, "Specific Roots of Unity", html! {
        (axes(frame))
        (unit_circle(frame))
        (chord_polygon(frame, &roots, COLOR_CIRCLE))
        @for root in &roots {
            @let color = if root.is_primitive() { COLOR_PRIMITIVE } else { COLOR_ROOT };
            (root_marker(frame, root, color, false))
        }
        (caption(&lines))
    })
}

/// 10 — overlaid n-gons for n = 2 .. 8, one pattern per n.
fn root_pattern(frame: &Frame) -> Markup {
    let lines = vec![
        "Polygons for n = 2 .. 8 overlaid on one circle.".to_string(),
        "Every vertex of every polygon is a root of unity.".to_string(),
    ];
    document(frame, "Root Pattern Visualization", html! {
        (axes(frame))
        (unit_circle(frame))
        @for n in 2u32..=8 {
            (chord_polygon(frame, &nth_roots(n), COLOR_CHORD))
        }
        @for root in nth_roots(8) {
            (root_marker(frame, &root, COLOR_ROOT, false))
        }
        (caption(&lines))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch;
    use tempfile::TempDir;

    fn test_ctx(dir: &Path) -> SceneContext {
        SceneContext::new(dir, 400, 300)
    }

    #[test]
    fn catalog_is_numbered_one_to_ten_in_order() {
        let scenes = all_scenes();
        assert_eq!(scenes.len(), 10);
        for (i, scene) in scenes.iter().enumerate() {
            assert_eq!(scene.number, i as u32 + 1);
        }
    }

    #[test]
    fn scene_titles_are_unique_slugs() {
        let scenes = all_scenes();
        let mut slugs: Vec<String> = scenes.iter().map(Scene::slug).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), scenes.len());
    }

    #[test]
    fn find_scene_by_number() {
        let scene = find_scene(4).unwrap();
        assert_eq!(scene.title, "Polar Form Representation");
    }

    #[test]
    fn find_scene_unknown_number() {
        assert!(matches!(find_scene(99), Err(SceneError::UnknownScene(99))));
    }

    #[test]
    fn render_scene_writes_svg() {
        let tmp = TempDir::new().unwrap();
        let ctx = test_ctx(tmp.path());
        let scene = find_scene(3).unwrap();

        let path = render_scene(&scene, &ctx).unwrap();

        assert_eq!(path, tmp.path().join("nth_roots_of_unity.svg"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<svg"));
        assert!(content.contains("Nth Roots of Unity"));
    }

    #[test]
    fn render_scene_creates_output_dir() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a/b/scenes");
        let ctx = test_ctx(&nested);
        render_scene(&find_scene(1).unwrap(), &ctx).unwrap();
        assert!(nested.join("introduction_to_roots_of_unity.svg").exists());
    }

    #[test]
    fn every_scene_renders_standalone_svg() {
        let frame = Frame::new(400, 300);
        for scene in all_scenes() {
            let svg = (scene.render)(&frame).into_string();
            // Titles pass through maud, so compare against the escaped form.
            let title = html! { (scene.title) }.into_string();
            assert!(svg.starts_with("<svg"), "scene {} is not SVG", scene.number);
            assert!(svg.contains(&title), "scene {} lacks its title", scene.number);
        }
    }

    #[test]
    fn catalog_renders_all_scenes_through_the_orchestrator() {
        let tmp = TempDir::new().unwrap();
        let ctx = test_ctx(tmp.path());
        let report = batch::run_sequential(catalog(&ctx).unwrap(), None);

        assert_eq!(report.total, 10);
        assert!(report.all_succeeded());
        for scene in all_scenes() {
            assert!(
                scene_output_path(tmp.path(), &scene).exists(),
                "missing output for scene {}",
                scene.number
            );
        }
    }
}
