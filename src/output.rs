//! CLI output formatting.
//!
//! Each surface has a `format_*` function returning plain lines (pure, no
//! I/O) and a `print_*` wrapper that writes to stdout, so the exact text is
//! unit-testable. Progress lines reflect completion order; the batch summary
//! is always in catalog order with failures marked.
//!
//! ```text
//! ✓  3. Nth Roots of Unity (3/10)
//! ✗  5. Unity Properties & Sum/Product: write failed (5/10)
//!
//! Scene Order
//! ==================================================
//!  1. Introduction to Roots of Unity
//!  ...
//!  5. Unity Properties & Sum/Product  ✗ FAILED
//! ==================================================
//! 10 jobs: 9 succeeded, 1 failed
//! ```

use crate::batch::{BatchReport, JobResult};
use crate::scenes::Scene;
use crate::slides::DeckSummary;

const RULE: &str = "==================================================";

/// One live progress line for a completed job.
///
/// `done`/`total` is the caller's running completion count — under parallel
/// dispatch it reflects completion order, not catalog order.
pub fn format_progress(result: &JobResult, done: usize, total: usize) -> String {
    if result.succeeded {
        format!("✓ {:>2}. {} ({done}/{total})", result.sequence, result.name)
    } else {
        format!(
            "✗ {:>2}. {}: {} ({done}/{total})",
            result.sequence, result.name, result.message
        )
    }
}

/// The terminal summary: every job in catalog order, failures marked.
pub fn format_batch_summary(report: &BatchReport) -> Vec<String> {
    let mut lines = vec![String::new(), "Scene Order".to_string(), RULE.to_string()];
    for result in &report.results {
        let mut line = format!("{:>2}. {}", result.sequence, result.name);
        if !result.succeeded {
            line.push_str("  ✗ FAILED");
        }
        lines.push(line);
    }
    lines.push(RULE.to_string());
    let failed = report.total - report.succeeded();
    if failed == 0 {
        lines.push(format!("{} jobs: all succeeded", report.total));
    } else {
        lines.push(format!(
            "{} jobs: {} succeeded, {} failed",
            report.total,
            report.succeeded(),
            failed
        ));
    }
    lines
}

pub fn print_batch_summary(report: &BatchReport) {
    for line in format_batch_summary(report) {
        println!("{line}");
    }
}

/// The scene catalog listing for `rootshow list` and the interactive menu.
pub fn format_scene_list(scenes: &[Scene]) -> Vec<String> {
    scenes
        .iter()
        .map(|s| format!("{:>2}. {}", s.number, s.title))
        .collect()
}

pub fn print_scene_list(scenes: &[Scene]) {
    for line in format_scene_list(scenes) {
        println!("{line}");
    }
}

/// What the slide generator produced.
pub fn format_deck_summary(summary: &DeckSummary) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, name) in summary.slides.iter().enumerate() {
        lines.push(format!("{:>2}. {}", i + 1, name));
    }
    lines.push(format!(
        "Generated {} slides \u{2192} {}",
        summary.slide_count(),
        summary.output_file.display()
    ));
    lines
}

pub fn print_deck_summary(summary: &DeckSummary) {
    for line in format_deck_summary(summary) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{Catalog, Job, run_sequential};
    use std::path::PathBuf;

    fn sample_report() -> BatchReport {
        let jobs = vec![
            Job::new(1, "first", || Ok(())),
            Job::new(2, "second", || Err("disk full".into())),
            Job::new(3, "third", || Ok(())),
        ];
        run_sequential(Catalog::new(jobs).unwrap(), None)
    }

    #[test]
    fn progress_line_success() {
        let report = sample_report();
        let line = format_progress(&report.results[0], 1, 3);
        assert_eq!(line, "✓  1. first (1/3)");
    }

    #[test]
    fn progress_line_failure_carries_message() {
        let report = sample_report();
        let line = format_progress(&report.results[1], 2, 3);
        assert!(line.starts_with("✗  2. second: disk full"));
    }

    #[test]
    fn summary_lists_every_job_in_order() {
        let report = sample_report();
        let lines = format_batch_summary(&report);
        let first = lines.iter().position(|l| l.contains("1. first")).unwrap();
        let second = lines.iter().position(|l| l.contains("2. second")).unwrap();
        let third = lines.iter().position(|l| l.contains("3. third")).unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn summary_marks_failures() {
        let lines = format_batch_summary(&sample_report());
        let failed_line = lines.iter().find(|l| l.contains("second")).unwrap();
        assert!(failed_line.contains("✗ FAILED"));
        let ok_line = lines.iter().find(|l| l.contains("first")).unwrap();
        assert!(!ok_line.contains("FAILED"));
        assert!(lines.last().unwrap().contains("2 succeeded, 1 failed"));
    }

    #[test]
    fn summary_for_empty_batch_is_just_the_header() {
        let report = run_sequential(Catalog::new(vec![]).unwrap(), None);
        let lines = format_batch_summary(&report);
        assert!(lines.contains(&"Scene Order".to_string()));
        assert!(lines.last().unwrap().contains("0 jobs"));
    }

    #[test]
    fn all_success_summary() {
        let jobs = vec![Job::new(1, "only", || Ok(()))];
        let report = run_sequential(Catalog::new(jobs).unwrap(), None);
        let lines = format_batch_summary(&report);
        assert!(lines.last().unwrap().contains("all succeeded"));
    }

    #[test]
    fn scene_list_is_numbered() {
        let lines = format_scene_list(&crate::scenes::all_scenes());
        assert_eq!(lines.len(), 10);
        assert!(lines[0].starts_with(" 1. Introduction"));
        assert!(lines[9].starts_with("10. Root Pattern"));
    }

    #[test]
    fn deck_summary_lists_slides_and_output() {
        let summary = DeckSummary {
            slides: vec!["01-intro".to_string(), "02-euler".to_string()],
            output_file: PathBuf::from("slides/output/presentation.html"),
        };
        let lines = format_deck_summary(&summary);
        assert_eq!(lines[0], " 1. 01-intro");
        assert!(lines.last().unwrap().contains("Generated 2 slides"));
        assert!(lines.last().unwrap().contains("presentation.html"));
    }
}
