use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inclusive bounds for a rating value.
pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// One user's rating of one recipe. Unique per (user, recipe): a second
/// submission by the same user replaces the value, it never adds a row.
/// Owned by the submitting user; moderators never write ratings.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Rating {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
    pub value: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Derived summary stored on the recipe row. Never authoritative on its
/// own: always a pure function of the rating rows at recompute time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RecipeAggregate {
    pub average: f64,
    pub count: i32,
}

impl RecipeAggregate {
    /// Recomputes the aggregate from a full set of stored values. The mean
    /// is rounded half away from zero to 2 decimals, matching the SQL
    /// `ROUND(AVG(value)::numeric, 2)` the repository uses.
    pub fn from_values(values: &[i16]) -> Self {
        if values.is_empty() {
            return Self {
                average: 0.0,
                count: 0,
            };
        }
        let sum: i64 = values.iter().map(|v| *v as i64).sum();
        let mean = sum as f64 / values.len() as f64;
        Self {
            average: (mean * 100.0).round() / 100.0,
            count: values.len() as i32,
        }
    }
}

/// Validates a submitted value against the [1,5] range.
pub fn validate_rating_value(value: i16) -> Result<i16, crate::domain::shared::errors::DomainError> {
    if (MIN_RATING..=MAX_RATING).contains(&value) {
        Ok(value)
    } else {
        Err(crate::domain::shared::errors::DomainError::InvalidArgument(
            format!("rating must be between {MIN_RATING} and {MAX_RATING} (got {value})"),
        ))
    }
}
