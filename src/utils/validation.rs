use crate::utils::error::{HarnessError, Result};

pub fn validate_exact(check: &'static str, expected: &str, actual: &str) -> Result<()> {
    if actual != expected {
        return Err(HarnessError::assertion(check, expected, actual));
    }
    Ok(())
}

pub fn validate_stable(check: &'static str, first: &str, second: &str) -> Result<()> {
    if first != second {
        return Err(HarnessError::assertion(check, first, second));
    }
    Ok(())
}

pub fn validate_no_surrounding_whitespace(check: &'static str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        return Err(HarnessError::assertion(check, trimmed, value));
    }
    Ok(())
}

/// Counts `char`s, not bytes.
pub fn validate_char_count(check: &'static str, value: &str, expected: usize) -> Result<()> {
    let count = value.chars().count();
    if count != expected {
        return Err(HarnessError::assertion(
            check,
            format!("{} characters", expected),
            format!("{} characters", count),
        ));
    }
    Ok(())
}
