//! Short code generation and validation utilities.
//!
//! Generated codes are 6 characters drawn uniformly from `[A-Za-z0-9]`,
//! which gives 62^6 (about 5.68 × 10^10) possible codes. Uniqueness is not
//! guaranteed here; callers check the store and retry on collision.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Alphabet used for generated codes.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated codes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Shortest accepted user-supplied code.
pub const MIN_CODE_LENGTH: usize = 6;

/// Longest accepted user-supplied code.
pub const MAX_CODE_LENGTH: usize = 8;

/// Codes that would be shadowed by fixed routes.
const RESERVED_CODES: &[&str] = &["healthz"];

/// Generates a random short code.
///
/// Each character is drawn independently from a 62-symbol alphabet using the
/// thread-local RNG.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..GENERATED_CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided short code.
///
/// # Rules
///
/// - Length: 6-8 characters
/// - Allowed characters: ASCII letters and digits
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_short_code(code: &str) -> Result<(), AppError> {
    let well_formed = (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code.len())
        && code.chars().all(|c| c.is_ascii_alphanumeric());

    if !well_formed {
        return Err(AppError::bad_request(
            "Code must be 6-8 alphanumeric characters.",
            json!({ "code": code, "provided_length": code.chars().count() }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        for _ in 0..100 {
            assert_eq!(generate_code().len(), GENERATED_CODE_LENGTH);
        }
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        for _ in 0..500 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
        }
    }

    #[test]
    fn test_generated_code_passes_validation() {
        for _ in 0..100 {
            assert!(validate_short_code(&generate_code()).is_ok());
        }
    }

    #[test]
    fn test_generate_code_mostly_unique() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();

        // 1000 draws from 62^6 collide with probability below 1e-5.
        assert!(codes.len() >= 999);
    }

    #[test]
    fn test_generate_code_uses_whole_alphabet() {
        let seen: HashSet<char> = (0..2000)
            .flat_map(|_| generate_code().chars().collect::<Vec<_>>())
            .collect();

        assert!(seen.iter().any(|c| c.is_ascii_uppercase()));
        assert!(seen.iter().any(|c| c.is_ascii_lowercase()));
        assert!(seen.iter().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_validate_length_bounds() {
        assert!(validate_short_code("abcdef").is_ok());
        assert!(validate_short_code("abcdefg").is_ok());
        assert!(validate_short_code("abcdefgh").is_ok());
    }

    #[test]
    fn test_validate_mixed_case_and_digits() {
        assert!(validate_short_code("AbC123").is_ok());
        assert!(validate_short_code("12345678").is_ok());
    }

    #[test]
    fn test_validate_too_short() {
        let err = validate_short_code("abc12").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("6-8"));
    }

    #[test]
    fn test_validate_too_long() {
        assert!(validate_short_code("abcdefghi").is_err());
    }

    #[test]
    fn test_validate_rejects_symbols() {
        assert!(validate_short_code("abc-123").is_err());
        assert!(validate_short_code("abc_123").is_err());
        assert!(validate_short_code("abc 123").is_err());
    }

    #[test]
    fn test_validate_rejects_non_ascii() {
        assert!(validate_short_code("abcdé1").is_err());
        assert!(validate_short_code("абвгде").is_err());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_short_code("").is_err());
    }

    #[test]
    fn test_validate_reserved_codes() {
        for &reserved in RESERVED_CODES {
            let err = validate_short_code(reserved).unwrap_err();
            assert!(err.to_string().contains("reserved"));
        }
    }
}
