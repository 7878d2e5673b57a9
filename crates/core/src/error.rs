use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Producer with identifier {identifier} already exists")]
    DuplicateIdentifier { identifier: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// A rejected producer input, one variant per rule.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid hectare value '{value}'. Use the format '3,9 ha'")]
    InvalidNumberFormat { value: String },

    #[error("Identifier must have 11 (CPF) or 14 (CNPJ) digits, got {digits}")]
    InvalidIdentifier { digits: usize },

    #[error("{field} cannot be negative")]
    NegativeArea { field: &'static str },

    #[error("total_area_hectares must be greater than zero")]
    NonPositiveTotalArea,

    #[error(
        "Arable area ({arable}) plus vegetation area ({vegetation}) exceeds total area ({total})"
    )]
    AreaSumExceedsTotal {
        arable: f64,
        vegetation: f64,
        total: f64,
    },

    #[error("Invalid value for field(s): {0}")]
    InvalidField(String),
}

impl ValidationError {
    /// Stable machine-readable code naming the rule that failed.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidNumberFormat { .. } => "INVALID_NUMBER_FORMAT",
            ValidationError::InvalidIdentifier { .. } => "INVALID_IDENTIFIER",
            ValidationError::NegativeArea { .. } => "NEGATIVE_AREA",
            ValidationError::NonPositiveTotalArea => "NON_POSITIVE_TOTAL_AREA",
            ValidationError::AreaSumExceedsTotal { .. } => "AREA_SUM_EXCEEDS_TOTAL",
            ValidationError::InvalidField(_) => "INVALID_FIELD",
        }
    }
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        ValidationError::InvalidField(fields.join(", "))
    }
}
