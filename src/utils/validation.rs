//! Centralized input validation and limits.

/// Maximum number of fridge items accepted in one request (DOS protection)
pub const MAX_FRIDGE_ITEMS: usize = 500;

/// Maximum number of recipes accepted in a caller-supplied corpus
pub const MAX_RECIPES: usize = 5_000;

/// Maximum length, in characters, of a single product or ingredient name
pub const MAX_TERM_LENGTH: usize = 200;

/// Upper bound for `maxResults`
pub const MAX_RESULTS_LIMIT: usize = 100;

/// Upper bound for menu servings
pub const MAX_SERVINGS: u32 = 50;

/// Request validation error types
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Too many {what}: maximum is {max}")]
    TooManyItems { what: &'static str, max: usize },
    #[error("Name too long: exceeds {MAX_TERM_LENGTH} characters")]
    TermTooLong,
    #[error("Name contains control characters")]
    ControlCharacters,
    #[error("Minimum match ratio must be between 0 and 1, got {0}")]
    InvalidRatio(f64),
    #[error("Maximum results must be between 1 and {MAX_RESULTS_LIMIT}, got {0}")]
    InvalidMaxResults(usize),
    #[error("Servings must be between 1 and {MAX_SERVINGS}, got {0}")]
    InvalidServings(u32),
}

/// Check a single product or ingredient name.
///
/// ```
/// use frigo_match::utils::validation::{validate_term, ValidationError};
///
/// assert!(validate_term("crème fraîche").is_ok());
/// assert_eq!(validate_term("lait\u{0}"), Err(ValidationError::ControlCharacters));
/// ```
///
/// # Errors
///
/// Returns an error if the name is too long or holds control characters.
pub fn validate_term(term: &str) -> Result<(), ValidationError> {
    if term.chars().count() > MAX_TERM_LENGTH {
        return Err(ValidationError::TermTooLong);
    }
    if term.chars().any(char::is_control) {
        return Err(ValidationError::ControlCharacters);
    }
    Ok(())
}

/// Check a list of names against a count limit and [`validate_term`]
///
/// # Errors
///
/// Returns the first violation found.
pub fn validate_terms<S: AsRef<str>>(
    terms: &[S],
    what: &'static str,
    max: usize,
) -> Result<(), ValidationError> {
    if terms.len() > max {
        return Err(ValidationError::TooManyItems { what, max });
    }
    terms.iter().try_for_each(|t| validate_term(t.as_ref()))
}

/// # Errors
///
/// Returns an error if `ratio` is NaN or outside `[0, 1]`.
pub fn validate_ratio(ratio: f64) -> Result<(), ValidationError> {
    if (0.0..=1.0).contains(&ratio) {
        Ok(())
    } else {
        Err(ValidationError::InvalidRatio(ratio))
    }
}

/// # Errors
///
/// Returns an error if `max_results` is zero or above [`MAX_RESULTS_LIMIT`].
pub fn validate_max_results(max_results: usize) -> Result<(), ValidationError> {
    if (1..=MAX_RESULTS_LIMIT).contains(&max_results) {
        Ok(())
    } else {
        Err(ValidationError::InvalidMaxResults(max_results))
    }
}

/// # Errors
///
/// Returns an error if `servings` is zero or above [`MAX_SERVINGS`].
pub fn validate_servings(servings: u32) -> Result<(), ValidationError> {
    if (1..=MAX_SERVINGS).contains(&servings) {
        Ok(())
    } else {
        Err(ValidationError::InvalidServings(servings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_term_length_counts_chars() {
        // Multi-byte characters count once
        let accented = "é".repeat(MAX_TERM_LENGTH);
        assert!(validate_term(&accented).is_ok());
        let too_long = "a".repeat(MAX_TERM_LENGTH + 1);
        assert_eq!(validate_term(&too_long), Err(ValidationError::TermTooLong));
    }

    #[test]
    fn test_validate_term_control_characters() {
        assert_eq!(validate_term("riz\n"), Err(ValidationError::ControlCharacters));
        assert_eq!(validate_term("riz\u{1b}[31m"), Err(ValidationError::ControlCharacters));
    }

    #[test]
    fn test_validate_terms_limit() {
        let items = vec!["riz"; MAX_FRIDGE_ITEMS + 1];
        assert_eq!(
            validate_terms(&items, "fridge items", MAX_FRIDGE_ITEMS),
            Err(ValidationError::TooManyItems {
                what: "fridge items",
                max: MAX_FRIDGE_ITEMS
            })
        );
        assert!(validate_terms(&items[..10], "fridge items", MAX_FRIDGE_ITEMS).is_ok());
    }

    #[test]
    fn test_validate_ratio() {
        assert!(validate_ratio(0.0).is_ok());
        assert!(validate_ratio(1.0).is_ok());
        assert!(validate_ratio(1.5).is_err());
        assert!(validate_ratio(-0.1).is_err());
        assert!(validate_ratio(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_max_results_and_servings() {
        assert!(validate_max_results(10).is_ok());
        assert!(validate_max_results(0).is_err());
        assert!(validate_max_results(MAX_RESULTS_LIMIT + 1).is_err());
        assert!(validate_servings(4).is_ok());
        assert!(validate_servings(0).is_err());
    }
}
