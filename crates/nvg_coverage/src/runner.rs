//! Aggregate runner script: builds and runs every generated program in
//! emission order and tallies the results.

use std::path::Path;

use crate::emit::GeneratedArtifact;
use crate::error::{CoverageError, Result};
use crate::util::{make_executable, write_string};

/// Runner path relative to the output root.
pub const RUNNER_FILE: &str = "run_coverage_tests.sh";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerOptions {
    /// Exit non-zero when any program fails to build or run.
    pub strict: bool,
    /// Make target directory for built programs.
    pub build_dir: String,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            strict: true,
            build_dir: "build".to_string(),
        }
    }
}

/// Build directories are pasted into the script unquoted, so only plain path
/// characters are accepted.
pub fn check_build_dir(build_dir: &str) -> Result<()> {
    if build_dir.trim_end_matches('/').is_empty() {
        return Err(CoverageError::invalid(
            "--build-dir must name a directory other than the filesystem root",
        ));
    }
    if let Some(bad) = build_dir
        .chars()
        .find(|ch| !(ch.is_ascii_alphanumeric() || matches!(*ch, '_' | '.' | '/' | '-')))
    {
        return Err(CoverageError::invalid(format!(
            "--build-dir {build_dir:?} contains {bad:?}; use only [A-Za-z0-9_./-]"
        )));
    }
    Ok(())
}

/// Path the script executes a built program from. Relative build
/// directories are anchored at the working directory.
fn run_path(build_dir: &str, name: &str) -> String {
    if build_dir.starts_with('/') {
        format!("{build_dir}/{name}")
    } else {
        format!("./{build_dir}/{name}")
    }
}

/// Bash script with one build-and-run block per artifact, in order.
#[must_use]
pub fn render_runner(artifacts: &[GeneratedArtifact], options: &RunnerOptions) -> String {
    let mut script = String::new();
    script.push_str("#!/bin/bash\n");
    script.push_str("# Run all generated API coverage tests\n");
    script.push('\n');
    script.push_str("PASSED=0\n");
    script.push_str("FAILED=0\n");

    let build_dir = options.build_dir.trim_end_matches('/');
    for artifact in artifacts {
        let name = &artifact.test_name;
        script.push('\n');
        script.push_str(&format!("echo \"Running {name}...\"\n"));
        script.push_str(&format!(
            "make {build_dir}/{name} && {}\n",
            run_path(build_dir, name)
        ));
        script.push_str("if [ $? -eq 0 ]; then\n");
        script.push_str("\t((PASSED++))\n");
        script.push_str("else\n");
        script.push_str("\t((FAILED++))\n");
        script.push_str(&format!("\techo \"FAILED: {name}\"\n"));
        script.push_str("fi\n");
    }

    script.push('\n');
    script.push_str("echo \"\"\n");
    script.push_str("echo \"====================\"\n");
    script.push_str("echo \"Tests passed: $PASSED\"\n");
    script.push_str("echo \"Tests failed: $FAILED\"\n");
    script.push_str("echo \"Total: $((PASSED + FAILED))\"\n");

    if options.strict {
        script.push('\n');
        script.push_str("if [ $FAILED -ne 0 ]; then\n");
        script.push_str("\texit 1\n");
        script.push_str("fi\n");
    }
    script.push_str("exit 0\n");

    script
}

/// Writes the runner script and marks it executable.
pub fn write_runner(path: &Path, script: &str) -> Result<()> {
    write_string(path, script)?;
    make_executable(path)
}
