use std::path::PathBuf;

use clap::Args;

use crate::catalog::builtin_registry;
use crate::emit::{EmitOptions, MANIFEST_FILE, emit, plan};
use crate::error::{CoverageError, Result};
use crate::registry::Registry;
use crate::runner::{RUNNER_FILE, RunnerOptions, check_build_dir, render_runner, write_runner};
use crate::util::{OutputIntegration, output_for, remove_stale};

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Output root; programs are written to `<out-dir>/tests`.
    #[arg(long = "out-dir", default_value = ".")]
    pub out_dir: PathBuf,

    /// Make target directory referenced by the runner script.
    #[arg(long = "build-dir", default_value = "build")]
    pub build_dir: String,

    /// List what would be written without touching the filesystem.
    #[arg(long)]
    pub dry_run: bool,

    /// Runner script exits 0 even when programs fail.
    #[arg(long)]
    pub lenient_runner: bool,

    #[arg(long)]
    pub no_manifest: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            build_dir: "build".to_string(),
            dry_run: false,
            lenient_runner: false,
            no_manifest: false,
        }
    }
}

impl GenerateArgs {
    #[must_use]
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            out_dir: self.out_dir.clone(),
            write_manifest: !self.no_manifest,
        }
    }

    #[must_use]
    pub fn runner_options(&self) -> RunnerOptions {
        RunnerOptions {
            strict: !self.lenient_runner,
            build_dir: self.build_dir.clone(),
        }
    }

    fn check(&self) -> Result<()> {
        check_build_dir(&self.build_dir)?;
        if self.out_dir.exists() && !self.out_dir.is_dir() {
            return Err(CoverageError::invalid(format!(
                "--out-dir {} is not a directory",
                self.out_dir.display()
            )));
        }
        Ok(())
    }
}

/// Result of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    pub functions: usize,
    pub total: usize,
    /// `None` on a dry run.
    pub runner: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
}

pub fn run_generate(args: GenerateArgs) -> Result<()> {
    generate_with(&builtin_registry(), &args).map(|_| ())
}

/// Full pass over `registry`: programs, runner script and manifest.
pub fn generate_with(registry: &Registry, args: &GenerateArgs) -> Result<GenerateSummary> {
    let integration = OutputIntegration::detect();
    let ui = output_for(&integration);

    args.check()?;
    ui.rule(Some("nvg coverage"));

    let summary = if args.dry_run {
        let units = plan(registry)?;
        for unit in &units {
            ui.info(&format!(
                "would write {} ({} variant {}, {})",
                unit.filename, unit.function, unit.variant, unit.category
            ));
        }
        ui.warning("dry run: nothing written");
        GenerateSummary {
            functions: registry.len(),
            total: units.len(),
            runner: None,
            manifest: None,
        }
    } else {
        // A runner left over from an earlier pass must not outlive a failed one.
        registry.validate()?;
        let runner_path = args.out_dir.join(RUNNER_FILE);
        remove_stale(&runner_path)?;

        let emit_options = args.emit_options();
        let artifacts = emit(registry, &emit_options)?;
        for artifact in &artifacts {
            ui.info(&format!("Generated: {}", artifact.filename));
        }

        let script = render_runner(&artifacts, &args.runner_options());
        write_runner(&runner_path, &script)?;
        tracing::debug!(
            file = %runner_path.display(),
            strict = !args.lenient_runner,
            "wrote runner script"
        );

        GenerateSummary {
            functions: registry.len(),
            total: artifacts.len(),
            runner: Some(runner_path),
            manifest: emit_options
                .write_manifest
                .then(|| args.out_dir.join(MANIFEST_FILE)),
        }
    };

    if let Some(runner) = &summary.runner {
        ui.success(&format!("Generated runner script: {}", runner.display()));
    }
    ui.info(&format!("Total tests generated: {}", summary.total));

    if integration.should_emit_json() {
        println!(
            "{}",
            serde_json::json!({
                "command": "generate",
                "status": "ok",
                "dry_run": args.dry_run,
                "out_dir": args.out_dir.display().to_string(),
                "functions": summary.functions,
                "total": summary.total,
                "runner": summary.runner.as_ref().map(|path| path.display().to_string()),
                "manifest": summary.manifest.as_ref().map(|path| path.display().to_string()),
                "integration": integration,
            })
        );
    }

    Ok(summary)
}

/// Prints one line per registry entry: name, category, variant count.
pub fn run_list() -> Result<()> {
    let registry = builtin_registry();
    registry.validate()?;

    let integration = OutputIntegration::detect();
    if integration.should_emit_json() {
        let functions = registry
            .iter()
            .map(|entry| {
                serde_json::json!({
                    "name": entry.name,
                    "category": entry.category,
                    "variants": entry.variants.len(),
                })
            })
            .collect::<Vec<_>>();
        println!(
            "{}",
            serde_json::json!({
                "command": "list",
                "functions": functions,
                "total": registry.variant_count(),
            })
        );
        return Ok(());
    }

    for line in list_lines(&registry) {
        println!("{line}");
    }
    Ok(())
}

fn list_lines(registry: &Registry) -> Vec<String> {
    let width = registry
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or_default();
    registry
        .iter()
        .map(|entry| {
            format!(
                "{:<width$}  {:<7}  {}",
                entry.name,
                entry.category,
                entry.variants.len()
            )
        })
        .collect()
}
