use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoverageError>;

#[derive(Debug, Error)]
pub enum CoverageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("registry entry #{position} has an empty function name")]
    EmptyFunctionName { position: usize },

    #[error("registry function {name:?} is not a valid C identifier")]
    InvalidFunctionName { name: String },

    #[error("registry function {name} is declared more than once")]
    DuplicateFunction { name: String },

    #[error("{function} variant {variant} maps to {filename}, already produced by {first_function} variant {first_variant}")]
    DuplicateFilename {
        filename: String,
        function: String,
        variant: usize,
        first_function: String,
        first_variant: usize,
    },

    #[error("function {name} is listed in more than one category: {categories}")]
    ConflictingCategory { name: String, categories: String },

    #[error("{function} variant {variant} argument {argument}: {message}")]
    InvalidValue {
        function: String,
        variant: usize,
        argument: usize,
        message: String,
    },

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CoverageError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyFunctionName { .. }
            | Self::InvalidFunctionName { .. }
            | Self::DuplicateFunction { .. }
            | Self::DuplicateFilename { .. }
            | Self::ConflictingCategory { .. }
            | Self::InvalidValue { .. } => 2,
            _ => 1,
        }
    }

    /// True for registry authoring mistakes, as opposed to I/O or usage errors.
    #[must_use]
    pub fn is_authoring(&self) -> bool {
        self.exit_code() == 2
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::CoverageError;

    #[test]
    fn invalid_constructor_is_a_usage_error() {
        let error = CoverageError::invalid("--build-dir must not be empty");
        assert_eq!(error.exit_code(), 1);
        assert_eq!(
            error.to_string(),
            "invalid argument: --build-dir must not be empty"
        );
        assert!(!error.is_authoring());
    }

    #[test]
    fn authoring_errors_use_distinct_exit_code() {
        let error = CoverageError::DuplicateFunction {
            name: "nvgRect".to_string(),
        };
        assert_eq!(error.exit_code(), 2);
        assert!(error.is_authoring());
        assert!(error.to_string().contains("nvgRect"));
    }

    #[test]
    fn write_error_names_the_path() {
        let error = CoverageError::Write {
            path: PathBuf::from("tests/test_rect_000.c"),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(error.exit_code(), 1);
        let rendered = error.to_string();
        assert!(rendered.contains("tests/test_rect_000.c"));
        assert!(rendered.contains("disk full"));
    }
}
