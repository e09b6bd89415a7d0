use uuid::Uuid;

use crate::errors::AppError;

/// Parses a path id, mapping malformed input to a 400 rather than a 404.
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::InvalidId("Invalid project ID".to_string()))
}
