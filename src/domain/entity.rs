use crate::errors::ServiceError;

/// Binds a persisted entity to its writable request shape and its readable
/// response projection.
///
/// Every ERP entity follows the same contract: callers supply a `Request`
/// to create or update, the service hands back a `Response` derived from
/// the stored entity, and the stored entity itself never crosses the
/// service boundary. Identity is an `i64` assigned once at creation and
/// immutable afterwards.
pub trait Entity: Clone + Send + Sync + 'static {
    type Request;
    type Response;

    /// Display name used in error messages ("Driver", "SalesOrder", ...).
    const NAME: &'static str;

    /// Build a new entity from a request, validating required fields.
    fn from_request(id: i64, req: Self::Request) -> Result<Self, ServiceError>;

    /// Project the stored entity into its caller-facing response.
    fn to_response(&self) -> Self::Response;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// Overwrite all mutable fields from a request, keeping identity.
    ///
    /// Updates use full-overwrite semantics across the whole catalogue:
    /// omitted-field preservation is not supported.
    fn apply_request(&mut self, req: Self::Request) -> Result<(), ServiceError> {
        *self = Self::from_request(self.id(), req)?;
        Ok(())
    }

    /// True when storing both entities would violate a uniqueness
    /// constraint (duplicate email, plate number, setting name, ...).
    fn conflicts_with(&self, _other: &Self) -> bool {
        false
    }
}

// ── Field validation helpers ─────────────────────────────────────────────────

/// Require a non-blank text field; returns the trimmed value.
pub fn require_text(field: &str, value: &str) -> Result<String, ServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::validation(format!(
            "{field} must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// Require a quantity, capacity, or count to be non-negative.
pub fn require_non_negative<T: PartialOrd + Default + std::fmt::Display>(
    field: &str,
    value: T,
) -> Result<T, ServiceError> {
    if value < T::default() {
        return Err(ServiceError::validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(value)
}

/// Require a float field to be an actual number. `NaN` slips past ordering
/// checks (`NaN < 0.0` is false) and then fails every comparison, so
/// non-finite values are rejected up front.
pub fn require_finite(field: &str, value: f64) -> Result<f64, ServiceError> {
    if !value.is_finite() {
        return Err(ServiceError::validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    Ok(value)
}

/// Require a strictly positive amount (quantities of goods, line counts).
pub fn require_positive<T: PartialOrd + Default + std::fmt::Display>(
    field: &str,
    value: T,
) -> Result<T, ServiceError> {
    if value <= T::default() {
        return Err(ServiceError::validation(format!(
            "{field} must be positive, got {value}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_text_trims() {
        assert_eq!(require_text("name", "  Ana ").unwrap(), "Ana");
    }

    #[test]
    fn require_text_rejects_blank() {
        let err = require_text("name", "   ").unwrap_err();
        assert!(err.to_string().contains("name must not be empty"));
    }

    #[test]
    fn require_non_negative_accepts_zero() {
        assert_eq!(require_non_negative("capacity", 0).unwrap(), 0);
    }

    #[test]
    fn require_non_negative_rejects_negative() {
        assert!(require_non_negative("capacity", -5).is_err());
    }

    #[test]
    fn require_finite_rejects_nan_and_infinity() {
        assert!(require_finite("distance_km", f64::NAN).is_err());
        assert!(require_finite("distance_km", f64::INFINITY).is_err());
        assert_eq!(require_finite("distance_km", 12.5).unwrap(), 12.5);
    }

    #[test]
    fn require_positive_rejects_zero() {
        assert!(require_positive("quantity", 0).is_err());
        assert_eq!(require_positive("quantity", 3).unwrap(), 3);
    }
}
