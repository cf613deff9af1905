use clap::{Parser, Subcommand};
use rootshow::scenes::SceneContext;
use rootshow::{batch, config, output, scenes, slides};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

#[derive(Parser)]
#[command(name = "rootshow")]
#[command(about = "SVG scene and slide renderer for the nth roots of unity")]
#[command(long_about = "\
SVG scene and slide renderer for the nth roots of unity

Ten numbered scenes draw the geometry of zⁿ = 1 — the unit circle, polar
form, primitive roots, regular polygons — as standalone SVG files. A slide
generator turns a directory of markdown files into a single HTML slideshow.

Project layout:

  rootshow.toml            # Config (optional; run 'rootshow gen-config')
  slides/content/          # Markdown slides, filename order is slide order
  │   ├── 01-intro.md
  │   └── 02-euler.md
  slides/output/           # presentation.html lands here
  media/scenes/            # Rendered scene SVGs land here

Batch rendering runs every scene to completion even when some fail: each
scene gets a ✓/✗ progress line as it finishes, and the final summary lists
all scenes in catalog order. Run without a subcommand for the interactive
menu.")]
#[command(version)]
struct Cli {
    /// Path to the config file
    #[arg(long, default_value = "rootshow.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List the scene catalog
    List,
    /// Render every scene in the catalog
    Render {
        /// Render one scene at a time instead of using the worker pool
        #[arg(long)]
        sequential: bool,
        /// Maximum parallel workers (default: config, then CPU cores)
        #[arg(long)]
        workers: Option<usize>,
        /// Write the batch report as JSON to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Render a single scene by catalog number
    Scene {
        /// Scene number, as shown by `rootshow list`
        number: u32,
    },
    /// Generate the HTML slide deck from markdown content
    Slides,
    /// Print a stock rootshow.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::Config::load(&cli.config)?;

    match cli.command {
        Some(Command::List) => output::print_scene_list(&scenes::all_scenes()),
        Some(Command::Render {
            sequential,
            workers,
            report,
        }) => {
            let all_ok = run_batch(&config, sequential, workers, report.as_deref())?;
            if !all_ok {
                std::process::exit(1);
            }
        }
        Some(Command::Scene { number }) => render_single(&config, number)?,
        Some(Command::Slides) => generate_slides(&config)?,
        Some(Command::GenConfig) => print!("{}", config::stock_config_toml()),
        None => interactive_menu(&config)?,
    }

    Ok(())
}

fn scene_context(config: &config::Config) -> SceneContext {
    SceneContext::new(
        &config.scenes.output_dir,
        config.canvas.width,
        config.canvas.height,
    )
}

/// Run the full scene catalog and print live progress plus the summary.
///
/// Returns whether every job succeeded; the batch itself always runs to
/// completion.
fn run_batch(
    config: &config::Config,
    sequential: bool,
    workers: Option<usize>,
    report_path: Option<&Path>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let ctx = scene_context(config);
    let catalog = scenes::catalog(&ctx)?;
    let total = catalog.len();

    let (tx, rx) = mpsc::channel();
    let printer = std::thread::spawn(move || {
        let mut done = 0;
        for result in rx {
            done += 1;
            println!("{}", output::format_progress(&result, done, total));
        }
    });

    let report = if sequential {
        println!("Rendering {total} scenes sequentially...");
        batch::run_sequential(catalog, Some(&tx))
    } else {
        let workers = workers.unwrap_or_else(|| config::effective_workers(&config.rendering));
        println!("Rendering {total} scenes with up to {workers} workers...");
        batch::run_parallel(catalog, workers, Some(&tx))?
    };
    drop(tx);
    printer.join().map_err(|_| "progress printer panicked")?;

    output::print_batch_summary(&report);

    if let Some(path) = report_path {
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!("Report written to {}", path.display());
    }

    Ok(report.all_succeeded())
}

/// Render one scene by number. An unknown number is a user error, reported
/// with the catalog listing; it never panics.
fn render_single(config: &config::Config, number: u32) -> Result<(), Box<dyn std::error::Error>> {
    match scenes::find_scene(number) {
        Ok(scene) => {
            let path = scenes::render_scene(&scene, &scene_context(config))?;
            println!(
                "✓ {:>2}. {} \u{2192} {}",
                scene.number,
                scene.title,
                path.display()
            );
            Ok(())
        }
        Err(_) => {
            eprintln!("No scene is numbered {number}. Available scenes:");
            output::print_scene_list(&scenes::all_scenes());
            std::process::exit(2);
        }
    }
}

fn generate_slides(config: &config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let summary = slides::generate_deck(
        Path::new(&config.slides.content_dir),
        Path::new(&config.slides.output_dir),
        &config.slides.title,
    )?;
    output::print_deck_summary(&summary);
    Ok(())
}

// ============================================================================
// Interactive menu
// ============================================================================

/// Read one trimmed line from stdin. `None` means EOF.
fn prompt(text: &str) -> std::io::Result<Option<String>> {
    print!("{text}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// The interactive runner. Bad input is reported and the menu re-displays;
/// only "exit" or EOF leaves the loop.
fn interactive_menu(config: &config::Config) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        println!();
        println!("=== Nth Roots of Unity Interactive Runner ===");
        println!();
        println!("What would you like to do?");
        println!("1. Render a single scene");
        println!("2. Generate slides");
        println!("3. Render all scenes (parallel)");
        println!("4. Render all scenes (sequential)");
        println!("5. Exit");
        println!();

        let Some(choice) = prompt("Enter your choice (1-5): ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => menu_render_single(config)?,
            "2" => {
                // Batch-style isolation: a failed generation reports and the
                // menu continues.
                if let Err(e) = generate_slides(config) {
                    println!("Error generating slides: {e}");
                }
            }
            "3" => {
                run_batch(config, false, None, None)?;
            }
            "4" => {
                run_batch(config, true, None, None)?;
            }
            "5" => {
                println!("Goodbye!");
                return Ok(());
            }
            _ => println!("Invalid choice! Please enter 1, 2, 3, 4, or 5."),
        }
    }
}

fn menu_render_single(config: &config::Config) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    println!("Available scenes:");
    output::print_scene_list(&scenes::all_scenes());
    println!();

    let Some(answer) = prompt("Enter scene number to render (or 'b' to go back): ")? else {
        return Ok(());
    };
    if answer.eq_ignore_ascii_case("b") {
        return Ok(());
    }

    let Ok(number) = answer.parse::<u32>() else {
        println!("Invalid input! Please enter a number.");
        return Ok(());
    };

    match scenes::find_scene(number) {
        Ok(scene) => match scenes::render_scene(&scene, &scene_context(config)) {
            Ok(path) => println!("✓ Rendered {} \u{2192} {}", scene.title, path.display()),
            Err(e) => println!("✗ Error rendering {}: {e}", scene.title),
        },
        Err(_) => println!("Invalid scene number!"),
    }
    Ok(())
}
