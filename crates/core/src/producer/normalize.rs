//! Canonicalization of raw identifier and hectare inputs.
//!
//! These functions only reshape input. Range and length rules live in
//! [`super::validation`].

use crate::error::ValidationError;

use super::AreaInput;

/// Unit suffix accepted after a hectare value.
const HECTARE_SUFFIX: &str = "ha";

/// Strip every non-digit character from a CPF/CNPJ.
pub fn normalize_identifier(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Convert a hectare input into a canonical `f64`.
///
/// Text is trimmed and lower-cased, a trailing `ha` unit is dropped, and a
/// comma decimal separator becomes a period, so `"3,5 ha"` parses as `3.5`.
pub fn normalize_area_value(raw: &AreaInput) -> Result<f64, ValidationError> {
    let text = match raw {
        AreaInput::Number(value) => return Ok(*value),
        AreaInput::Text(text) => text,
    };

    let mut cleaned = text.trim().to_lowercase();
    if let Some(stripped) = cleaned.strip_suffix(HECTARE_SUFFIX) {
        cleaned = stripped.trim().to_string();
    }
    let cleaned = cleaned.replace(',', ".");

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidNumberFormat {
            value: text.clone(),
        }),
    }
}
