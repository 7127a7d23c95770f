use crate::server::error::AppError;

/// Parses a series ID from a path segment.
///
/// Any 64-bit integer is a well-formed ID. Values outside the `i32` range can never
/// have been assigned, so they are reported as a missing series.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed identifier
/// - `Err(AppError::InvalidInput)` - The segment is not an integer
/// - `Err(AppError::NotFound)` - The segment is an integer no series can have
pub fn parse_series_id(value: &str) -> Result<i32, AppError> {
    let id = value
        .parse::<i64>()
        .map_err(|_| AppError::InvalidInput(format!("Invalid id: {}", value)))?;

    i32::try_from(id).map_err(|_| AppError::NotFound("Series not found".to_string()))
}
