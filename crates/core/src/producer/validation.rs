//! Producer validation rules (create and partial update).
//!
//! Both entry points normalize before checking. The cross-field area rule is
//! exposed separately because on update it must run against the merged
//! record, which only the service can build.

use validator::Validate;

use crate::error::ValidationError;

use super::normalize::{normalize_area_value, normalize_identifier};
use super::{AreaInput, AreaTriple, CreateProducer, NewProducer, ProducerChanges, UpdateProducer};

/// Digit count of a CPF (individual).
pub const CPF_LEN: usize = 11;

/// Digit count of a CNPJ (organization).
pub const CNPJ_LEN: usize = 14;

pub const TOTAL_AREA_FIELD: &str = "total_area_hectares";
pub const ARABLE_AREA_FIELD: &str = "arable_area_hectares";
pub const VEGETATION_AREA_FIELD: &str = "vegetation_area_hectares";

/// Normalize an identifier and require 11 or 14 digits.
pub fn validate_identifier(raw: &str) -> Result<String, ValidationError> {
    let digits = normalize_identifier(raw);
    match digits.len() {
        CPF_LEN | CNPJ_LEN => Ok(digits),
        other => Err(ValidationError::InvalidIdentifier { digits: other }),
    }
}

/// Character count of a state code, after upper-casing.
pub const STATE_LEN: usize = 2;

/// Upper-case a state code and require exactly two characters in the result.
///
/// Some letters grow when upper-cased (`ß` becomes `SS`), so the length is
/// checked on the stored form.
pub fn validate_state(raw: &str) -> Result<String, ValidationError> {
    let state = raw.to_uppercase();
    if state.chars().count() != STATE_LEN {
        return Err(ValidationError::InvalidField("state".to_string()));
    }
    Ok(state)
}

/// Normalize one area field and apply its sign rules.
pub fn validate_area(field: &'static str, raw: &AreaInput) -> Result<f64, ValidationError> {
    let value = normalize_area_value(raw)?;
    if value < 0.0 {
        return Err(ValidationError::NegativeArea { field });
    }
    if field == TOTAL_AREA_FIELD && value <= 0.0 {
        return Err(ValidationError::NonPositiveTotalArea);
    }
    Ok(value)
}

/// Require `arable + vegetation <= total`.
pub fn check_area_sum(areas: AreaTriple) -> Result<(), ValidationError> {
    if areas.arable + areas.vegetation > areas.total {
        return Err(ValidationError::AreaSumExceedsTotal {
            arable: areas.arable,
            vegetation: areas.vegetation,
            total: areas.total,
        });
    }
    Ok(())
}

/// Normalize and fully validate a create payload.
pub fn validate_new(input: &CreateProducer) -> Result<NewProducer, ValidationError> {
    input.validate()?;

    let identifier = validate_identifier(&input.identifier)?;
    let state = validate_state(&input.state)?;
    let total = validate_area(TOTAL_AREA_FIELD, &input.total_area_hectares)?;
    let arable = validate_area(ARABLE_AREA_FIELD, &input.arable_area_hectares)?;
    let vegetation = validate_area(VEGETATION_AREA_FIELD, &input.vegetation_area_hectares)?;
    check_area_sum(AreaTriple {
        total,
        arable,
        vegetation,
    })?;

    Ok(NewProducer {
        identifier,
        name: input.name.clone(),
        farm_name: input.farm_name.clone(),
        city: input.city.clone(),
        state,
        total_area_hectares: total,
        arable_area_hectares: arable,
        vegetation_area_hectares: vegetation,
        planted_crops: input.planted_crops.clone(),
    })
}

/// Normalize and validate the supplied fields of an update payload.
///
/// The area sum is not checked here; see [`check_area_sum`] and
/// [`ProducerChanges::merged_areas`].
pub fn validate_changes(input: &UpdateProducer) -> Result<ProducerChanges, ValidationError> {
    input.validate()?;

    let area = |field: &'static str, raw: &Option<AreaInput>| {
        raw.as_ref().map(|value| validate_area(field, value)).transpose()
    };

    Ok(ProducerChanges {
        name: input.name.clone(),
        farm_name: input.farm_name.clone(),
        city: input.city.clone(),
        state: input.state.as_deref().map(validate_state).transpose()?,
        total_area_hectares: area(TOTAL_AREA_FIELD, &input.total_area_hectares)?,
        arable_area_hectares: area(ARABLE_AREA_FIELD, &input.arable_area_hectares)?,
        vegetation_area_hectares: area(VEGETATION_AREA_FIELD, &input.vegetation_area_hectares)?,
        planted_crops: input.planted_crops.clone(),
    })
}
