use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Assertion failed in `{check}`: expected {expected:?}, got {actual:?}")]
    AssertionFailure {
        check: &'static str,
        expected: String,
        actual: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl HarnessError {
    pub fn assertion(check: &'static str, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::AssertionFailure {
            check,
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Process exit status the binary reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::AssertionFailure { .. } => 1,
            Self::IoError(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;
