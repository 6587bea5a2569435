//! Extract command implementation.
//!
//! Locates assets, extracts a palette from each, and writes the JSON report.

use std::path::{Path, PathBuf};

use chrono::Utc;
use clap::Args;

use crate::decode::decode;
use crate::discovery::{locate, LocateOptions, Manifest, MANIFEST_FILENAME};
use crate::error::{Result, SwatchError};
use crate::extract::{palette_from_images, Settings};
use crate::output::{display_path, plural, Printer, Verbosity};
use crate::report::{build, Report};
use crate::types::PaletteItem;

/// Extract palettes from image assets
#[derive(Args, Debug, Default)]
pub struct ExtractArgs {
    /// Files or directories to scan (default: brandbook/gradients)
    pub inputs: Vec<String>,

    /// JSON output path (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Number of unique colours per asset [default: 6]
    #[arg(long)]
    pub top: Option<usize>,

    /// Square size for downsampling before counting colours [default: 80]
    #[arg(long)]
    pub sample: Option<u32>,

    /// Emit a simple {name: [hex]} mapping instead of the detailed report
    #[arg(long)]
    pub flatten: bool,

    /// Directory relative paths are resolved against (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Manifest to load instead of <root>/swatch.yaml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Suppress status output
    #[arg(long, short, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print a line for every extracted asset
    #[arg(long, short)]
    pub verbose: bool,
}

impl ExtractArgs {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Everything a run needs, after merging flags, manifest and defaults.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub root: PathBuf,
    pub manifest: Manifest,
    pub targets: Vec<String>,
    pub settings: Settings,
    pub flatten: bool,
    pub output: Option<PathBuf>,
}

/// Load the manifest for `root`: an explicit `--config`, else `swatch.yaml`
/// when present, else defaults.
fn load_manifest(root: &Path, config: Option<&Path>) -> Result<Manifest> {
    match config {
        Some(path) => Manifest::load(&root.join(path)),
        None => {
            let path = root.join(MANIFEST_FILENAME);
            if path.is_file() {
                Manifest::load(&path)
            } else {
                Ok(Manifest::default())
            }
        }
    }
}

fn require_positive(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(SwatchError::Config {
            message: format!("--{} must be at least 1", name),
            help: Some(format!("Pass a positive integer, e.g. --{} 6", name)),
        });
    }
    Ok(())
}

/// Merge command-line flags over manifest values over built-in defaults.
pub fn plan(args: &ExtractArgs) -> Result<RunPlan> {
    let root = match &args.root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    let manifest = load_manifest(&root, args.config.as_deref())?;

    let settings = Settings {
        top: args.top.unwrap_or_else(|| manifest.effective_top()),
        sample: args.sample.unwrap_or_else(|| manifest.effective_sample()),
    };
    require_positive("top", settings.top)?;
    require_positive("sample", settings.sample as usize)?;

    let targets = if args.inputs.is_empty() {
        manifest.effective_sources()
    } else {
        args.inputs.clone()
    };

    let output = args
        .output
        .clone()
        .or_else(|| manifest.output.clone())
        .map(|p| if p.is_absolute() { p } else { root.join(p) });

    Ok(RunPlan {
        flatten: args.flatten || manifest.flatten.unwrap_or(false),
        root,
        manifest,
        targets,
        settings,
        output,
    })
}

/// Extract palettes from `files` in order.
///
/// Assets that fail to decode are reported and dropped; assets without
/// colours are dropped silently.
pub fn extract_all(files: &[PathBuf], settings: Settings, printer: &Printer) -> Vec<PaletteItem> {
    let mut items = Vec::new();

    for path in files {
        let display = display_path(path);
        let decoded = match decode(path) {
            Ok(decoded) => decoded,
            Err(e) => {
                printer.warning("Warning", &format!("{}; skipping", e));
                continue;
            }
        };

        for skipped in &decoded.skipped {
            printer.warning(
                "Skipped",
                &format!("embedded image #{} in {}: {}", skipped.index + 1, display, skipped.reason),
            );
        }

        if let Some(item) = palette_from_images(path, &decoded.images, settings) {
            printer.verbose(
                "Extracted",
                &format!("{} from {}", plural(item.colors().len(), "colour", "colours"), display),
            );
            items.push(item);
        }
    }

    items
}

pub fn run(args: ExtractArgs, printer: &Printer) -> Result<()> {
    let plan = plan(&args)?;

    let options = LocateOptions::new(&plan.root).with_manifest(plan.manifest.clone());
    let files = locate(&plan.targets, &options);
    printer.status("Scanning", &plural(files.len(), "asset", "assets"));

    let items = extract_all(&files, plan.settings, printer);
    let report: Report = build(&items, &files, plan.settings, plan.flatten, Utc::now());

    match &plan.output {
        Some(path) => {
            report.write(path)?;
            printer.status("Wrote", &display_path(path));
        }
        None => println!("{}", report.to_json()?),
    }

    printer.status(
        "Finished",
        &format!(
            "{} from {}",
            plural(items.len(), "palette", "palettes"),
            plural(files.len(), "asset", "assets")
        ),
    );

    Ok(())
}
