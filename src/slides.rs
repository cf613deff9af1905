//! Slide deck generation.
//!
//! Converts a directory of markdown files into a single self-contained HTML
//! slideshow. Filename order is slide order — name files `01-intro.md`,
//! `02-definition.md`, and so on. The output is one `presentation.html` with
//! the stylesheet and keyboard/click navigation embedded, so the deck can be
//! opened straight from the filesystem.
//!
//! HTML structure is generated with [maud]; markdown bodies are converted
//! with [pulldown-cmark] and injected pre-escaped, which is the only
//! unescaped interpolation in the document.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Options, Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum SlidesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read slide {path}: {source}")]
    SlideRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

const CSS: &str = include_str!("../static/slides.css");
const JS: &str = include_str!("../static/slides.js");

/// What was generated, for display.
#[derive(Debug)]
pub struct DeckSummary {
    pub slides: Vec<String>,
    pub output_file: PathBuf,
}

impl DeckSummary {
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Generate `presentation.html` from the markdown files in `content_dir`.
///
/// Both directories are created if missing — a fresh checkout can run this
/// before any slides have been written, producing an empty deck.
pub fn generate_deck(
    content_dir: &Path,
    output_dir: &Path,
    title: &str,
) -> Result<DeckSummary, SlidesError> {
    fs::create_dir_all(content_dir)?;
    fs::create_dir_all(output_dir)?;

    let mut slides = Vec::new();
    for path in slide_files(content_dir) {
        let markdown = fs::read_to_string(&path).map_err(|source| SlidesError::SlideRead {
            path: path.clone(),
            source,
        })?;
        slides.push((slide_name(&path), markdown_to_html(&markdown)));
    }

    let page = render_presentation(title, &slides);
    let output_file = output_dir.join("presentation.html");
    fs::write(&output_file, page.into_string())?;

    Ok(DeckSummary {
        slides: slides.into_iter().map(|(name, _)| name).collect(),
        output_file,
    })
}

/// Markdown files directly inside the content directory, sorted by filename.
fn slide_files(content_dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(content_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .collect();
    files.sort();
    files
}

fn slide_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_FOOTNOTES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

/// The full presentation document: one `<section>` per slide plus the
/// embedded stylesheet and navigation script.
fn render_presentation(title: &str, slides: &[(String, String)]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                main.deck data-slide-count=(slides.len()) {
                    @if slides.is_empty() {
                        section.slide.current {
                            h1 { (title) }
                            p.empty-deck { "No slides yet — add markdown files to the content directory." }
                        }
                    }
                    @for (i, (_, body)) in slides.iter().enumerate() {
                        section.slide.current[i == 0] {
                            (PreEscaped(body.as_str()))
                        }
                    }
                }
                footer.deck-status {
                    span #slide-position { "1" }
                    " / "
                    span { (slides.len().max(1)) }
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}
