//! # rootshow
//!
//! Educational SVG scene and slide renderer for the nth roots of unity.
//! Ten scripted scenes draw the geometry of zⁿ = 1 on the complex plane, and
//! a slide generator turns a directory of markdown files into a single HTML
//! slideshow. Both surfaces are driven through one batch job orchestrator.
//!
//! # Architecture: Catalog → Dispatch → Report
//!
//! Rendering is organized as a batch: a read-only [`batch::Catalog`] of
//! numbered jobs goes in, and a [`batch::BatchReport`] with one result per
//! job comes out, whether the jobs ran one at a time or across a bounded
//! worker pool. A failing scene never stops the batch — it becomes a failed
//! result in an otherwise complete report.
//!
//! ```text
//! scenes::catalog()  →  batch::run_parallel(catalog, workers, progress)
//!                         │  completion-ordered progress events
//!                         ▼
//!                       BatchReport (always in catalog order)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`batch`] | Job/Catalog/BatchReport types and the sequential/parallel dispatchers |
//! | [`scenes`] | The ten-scene catalog; SVG renderers over the roots-of-unity geometry |
//! | [`scenes::geometry`] | Placement arithmetic: root points, primitivity, sum/product identities |
//! | [`scenes::svg`] | Canvas mapping and the shared SVG drawing vocabulary (Maud) |
//! | [`slides`] | Markdown → single-file HTML slideshow |
//! | [`config`] | `rootshow.toml` loading, validation, worker-count resolution |
//! | [`naming`] | Scene title → output filename slugs |
//! | [`output`] | CLI output formatting — progress lines, summaries, listings |
//!
//! # Design Decisions
//!
//! ## Failures Are Results, Not Panics
//!
//! A job's action reports failure by returning `Err`. The orchestrator
//! converts that to a tagged [`batch::JobResult`] at the per-job boundary
//! instead of letting anything unwind across the worker pool, so one broken
//! scene cannot take down a batch or leave the report incomplete.
//!
//! ## Per-Call Worker Pools
//!
//! [`batch::run_parallel`] builds its own bounded rayon pool from an explicit
//! `max_workers` argument rather than configuring a global pool. The worker
//! count is plain data flowing from config/CLI into the call — the
//! orchestrator has no hidden global state, and two batches with different
//! bounds can coexist in one process (the tests rely on this).
//!
//! ## Maud For HTML *and* SVG
//!
//! Both the slideshow and the scenes are generated with
//! [Maud](https://maud.lambda.xyz/): malformed markup is a compile error,
//! interpolation is escaped by default, and there are no template files to
//! ship or get out of sync. The only `PreEscaped` input is HTML produced by
//! pulldown-cmark.
//!
//! ## Static SVG Scenes
//!
//! Scenes are self-contained SVG documents rather than encoded video. The
//! output opens in any browser, diffs cleanly in version control, and keeps
//! the binary free of codec dependencies.

pub mod batch;
pub mod config;
pub mod naming;
pub mod output;
pub mod scenes;
pub mod slides;
