//! Field-level validation helpers shared by content handlers.

use crate::error::CoreError;

/// Lead pipeline statuses, in workflow order.
pub const LEAD_STATUSES: &[&str] = &["new", "contacted", "qualified", "closed"];

/// Require a non-blank value for `field`, returning it trimmed.
pub fn require_text(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(format!("{field} is required"))),
    }
}

/// Testimonial ratings are whole stars from 1 to 5.
pub fn validate_rating(rating: i16) -> Result<(), CoreError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "rating must be between 1 and 5, got {rating}"
        )))
    }
}

pub fn validate_lead_status(status: &str) -> Result<(), CoreError> {
    if LEAD_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid status '{status}'. Must be one of: {}",
            LEAD_STATUSES.join(", ")
        )))
    }
}
