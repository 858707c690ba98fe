//! Emission pipeline: registry traversal, file writes, and the artifact list
//! the runner script is generated from.
//!
//! The artifact order is always the registry traversal order (function order
//! outer, variant order inner). [`emit`] validates the registry before the
//! first write, so an authoring error never leaves a partial test directory
//! behind.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::registry::{Category, ParameterSet, Registry};
use crate::unit::{TESTS_DIR, TestUnit, build_unit_with};
use crate::util::{ensure_dir, remove_stale, sha256_hex, write_string};

/// Manifest schema tag.
pub const MANIFEST_VERSION: &str = "nvg-coverage-manifest-v1";

/// Manifest path relative to the output root.
pub const MANIFEST_FILE: &str = "tests/coverage_manifest.json";

/// A test program that has been (or would be) written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    /// Path relative to the output root, e.g. `tests/test_rect_000.c`.
    pub filename: String,
    /// Logical name, e.g. `test_rect_000`; also the build target name.
    pub test_name: String,
    pub function: String,
    pub variant: usize,
    pub category: Category,
    pub params: ParameterSet,
    /// SHA-256 of the program text.
    pub sha256: String,
}

impl GeneratedArtifact {
    #[must_use]
    pub fn from_unit(unit: &TestUnit) -> Self {
        Self {
            filename: unit.filename.clone(),
            test_name: unit.test_name.clone(),
            function: unit.function.clone(),
            variant: unit.variant,
            category: unit.category,
            params: unit.params.clone(),
            sha256: sha256_hex(unit.source.as_bytes()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Root the relative artifact paths are resolved against.
    pub out_dir: PathBuf,
    pub write_manifest: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            write_manifest: true,
        }
    }
}

/// Machine-readable record of one generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageManifest {
    pub version: String,
    pub functions: usize,
    pub total: usize,
    pub artifacts: Vec<GeneratedArtifact>,
}

impl CoverageManifest {
    #[must_use]
    pub fn new(registry: &Registry, artifacts: &[GeneratedArtifact]) -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            functions: registry.len(),
            total: artifacts.len(),
            artifacts: artifacts.to_vec(),
        }
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        write_string(path, &content)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str::<Self>(&content)?)
    }
}

/// Every test unit of `registry`, in traversal order. Nothing is written.
pub fn plan(registry: &Registry) -> Result<Vec<TestUnit>> {
    registry.validate()?;

    let mut units = Vec::with_capacity(registry.variant_count());
    for entry in registry.iter() {
        for (variant, params) in entry.indexed_variants() {
            units.push(build_unit_with(&entry.name, entry.category, variant, params));
        }
    }
    Ok(units)
}

/// Writes one program per (function, variant) and returns the artifacts in
/// traversal order. The first I/O failure aborts the run. A manifest from an
/// earlier run is removed before the first program is written.
pub fn emit(registry: &Registry, options: &EmitOptions) -> Result<Vec<GeneratedArtifact>> {
    let units = plan(registry)?;

    remove_stale(&options.out_dir.join(MANIFEST_FILE))?;
    ensure_dir(&options.out_dir.join(TESTS_DIR))?;

    let mut artifacts = Vec::with_capacity(units.len());
    for unit in &units {
        let path = options.out_dir.join(&unit.filename);
        write_string(&path, &unit.source)?;
        tracing::debug!(
            file = %path.display(),
            function = %unit.function,
            variant = unit.variant,
            category = %unit.category,
            "wrote test unit"
        );
        artifacts.push(GeneratedArtifact::from_unit(unit));
    }

    if options.write_manifest {
        let manifest = CoverageManifest::new(registry, &artifacts);
        manifest.write_to_path(&options.out_dir.join(MANIFEST_FILE))?;
    }

    tracing::info!(
        functions = registry.len(),
        artifacts = artifacts.len(),
        out_dir = %options.out_dir.display(),
        "emitted coverage tests"
    );

    Ok(artifacts)
}
