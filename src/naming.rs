//! Scene display names and their output filenames.
//!
//! Scene titles are written for humans ("Special Cases (Square, Cube, Fourth
//! Roots)"); output files need a stable, filesystem-safe stem. This module
//! owns that single conversion so every surface (renderer, CLI listing,
//! reports) agrees on where a scene's output lives.
//!
//! ## Slug rules
//!
//! - lowercase
//! - spaces, slashes, and dashes become underscores
//! - every other non-alphanumeric character is dropped
//! - runs of underscores collapse to one
//!
//! `"Special Cases (Square, Cube, Fourth Roots)"` → `special_cases_square_cube_fourth_roots`

/// Convert a scene display name into its output file stem.
pub fn scene_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if matches!(c, ' ' | '/' | '-' | '_') && !slug.ends_with('_') && !slug.is_empty() {
            slug.push('_');
        }
    }
    while slug.ends_with('_') {
        slug.pop();
    }
    slug
}
