//! Registry data model: the functions under test and their parameter variants.
//!
//! A [`Registry`] is authored once (see [`crate::catalog`]) and read-only for
//! the duration of a generation run. [`Registry::validate`] rejects every
//! authoring mistake that would otherwise corrupt the emitted artifact set.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classify::{classify, listed_categories};
use crate::error::{CoverageError, Result};
use crate::unit::test_name;

// ── Values ─────────────────────────────────────────────────────────────

/// A single positional argument value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ParamValue {
    /// Decimal integer literal, unsuffixed.
    Int(i64),
    /// Floating-point literal, suffixed per target language.
    Float(f64),
    /// Enum/flag identifier or pre-formed expression, emitted verbatim.
    Symbol(String),
}

impl ParamValue {
    #[must_use]
    pub fn symbol(token: impl Into<String>) -> Self {
        Self::Symbol(token.into())
    }

    fn check(&self) -> std::result::Result<(), String> {
        match self {
            Self::Int(_) => Ok(()),
            Self::Float(value) if value.is_finite() => Ok(()),
            Self::Float(value) => Err(format!("float value {value} is not finite")),
            Self::Symbol(token) if token.trim().is_empty() => {
                Err("symbolic value is empty".to_string())
            }
            Self::Symbol(token)
                if token.contains(['\n', '\r', ';', '"'])
                    || token.contains("//")
                    || token.contains("/*") =>
            {
                Err(format!("symbolic value {token:?} is not a single expression"))
            }
            Self::Symbol(_) => Ok(()),
        }
    }
}

/// Ordered positional arguments for one variant. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(Vec<ParamValue>);

impl ParameterSet {
    #[must_use]
    pub fn new(values: Vec<ParamValue>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParamValue> {
        self.0.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ── Categories ─────────────────────────────────────────────────────────

/// How a function must be exercised to produce visible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Appends closed geometry to the open path; filled afterwards.
    Shape,
    /// Appends a segment to the open path; stroked afterwards.
    Path,
    /// Replaces the fill operation itself.
    Fill,
    /// Replaces the stroke operation itself.
    Stroke,
    /// Mutates render state before a reference rectangle is drawn.
    State,
    /// Mutates text state before a reference string is drawn.
    Text,
    /// Anything else; called before a baseline rectangle.
    Generic,
}

impl Category {
    pub const ALL: [Self; 7] = [
        Self::Shape,
        Self::Path,
        Self::Fill,
        Self::Stroke,
        Self::State,
        Self::Text,
        Self::Generic,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shape => "shape",
            Self::Path => "path",
            Self::Fill => "fill",
            Self::Stroke => "stroke",
            Self::State => "state",
            Self::Text => "text",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ── Entries ────────────────────────────────────────────────────────────

/// One API function and the variants to generate for it.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionEntry {
    pub name: String,
    pub category: Category,
    pub variants: Vec<ParameterSet>,
}

impl FunctionEntry {
    /// Entry whose category comes from the static name lists.
    #[must_use]
    pub fn new(name: impl Into<String>, variants: Vec<ParameterSet>) -> Self {
        let name = name.into();
        let category = classify(&name);
        Self {
            name,
            category,
            variants,
        }
    }

    /// Entry with an explicitly pinned category.
    #[must_use]
    pub fn with_category(
        name: impl Into<String>,
        category: Category,
        variants: Vec<ParameterSet>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            variants,
        }
    }

    /// `(variant index, parameters)` in authoring order.
    pub fn indexed_variants(&self) -> impl Iterator<Item = (usize, &ParameterSet)> {
        self.variants.iter().enumerate()
    }
}

/// Ordered, immutable table of functions under test.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    entries: Vec<FunctionEntry>,
}

impl Registry {
    #[must_use]
    pub fn new(entries: Vec<FunctionEntry>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FunctionEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of (function, variant) pairs.
    #[must_use]
    pub fn variant_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.variants.len()).sum()
    }

    /// Number of functions per category, in [`Category::ALL`] order.
    #[must_use]
    pub fn category_histogram(&self) -> BTreeMap<Category, usize> {
        let mut histogram = BTreeMap::new();
        for entry in &self.entries {
            *histogram.entry(entry.category).or_insert(0) += 1;
        }
        histogram
    }

    /// Checks every authoring invariant; the first violation is returned.
    pub fn validate(&self) -> Result<()> {
        let mut names: BTreeMap<&str, usize> = BTreeMap::new();
        let mut filenames: BTreeMap<String, (&str, usize)> = BTreeMap::new();

        for (position, entry) in self.entries.iter().enumerate() {
            let name = entry.name.as_str();
            if name.is_empty() {
                return Err(CoverageError::EmptyFunctionName { position });
            }
            if !is_c_identifier(name) {
                return Err(CoverageError::InvalidFunctionName {
                    name: name.to_string(),
                });
            }
            if names.insert(name, position).is_some() {
                return Err(CoverageError::DuplicateFunction {
                    name: name.to_string(),
                });
            }

            let listed = listed_categories(name);
            if listed.len() > 1 {
                return Err(CoverageError::ConflictingCategory {
                    name: name.to_string(),
                    categories: listed
                        .iter()
                        .map(|category| category.as_str())
                        .collect::<Vec<_>>()
                        .join(", "),
                });
            }

            for (variant, params) in entry.indexed_variants() {
                for (argument, value) in params.iter().enumerate() {
                    value
                        .check()
                        .map_err(|message| CoverageError::InvalidValue {
                            function: name.to_string(),
                            variant,
                            argument,
                            message,
                        })?;
                }

                let filename = test_name(name, variant);
                if let Some((first_function, first_variant)) =
                    filenames.insert(filename.clone(), (name, variant))
                {
                    return Err(CoverageError::DuplicateFilename {
                        filename,
                        function: name.to_string(),
                        variant,
                        first_function: first_function.to_string(),
                        first_variant,
                    });
                }
            }
        }

        Ok(())
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
