//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use validator::ValidationError;

/// Validar y convertir string a datetime.
///
/// Acepta RFC3339 (`2026-01-20T10:00:00Z`), datetime naive
/// (`2026-01-20T10:00:00`) y fecha sola (`2026-01-20`); los valores
/// sin zona horaria se interpretan como UTC.
pub fn validate_datetime(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&naive));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }

    let mut error = ValidationError::new("datetime");
    error.add_param("value".into(), &value.to_string());
    error.add_param("format".into(), &"ISO-8601".to_string());
    Err(error)
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email (básico)
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en una lista de valores permitidos
pub fn validate_enum(value: &str, allowed_values: &[&str]) -> Result<(), ValidationError> {
    if !allowed_values.contains(&value) {
        let mut error = ValidationError::new("enum");
        error.add_param("value".into(), &value.to_string());
        error.add_param("allowed_values".into(), &format!("{:?}", allowed_values));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_validate_datetime_rfc3339() {
        let dt = validate_datetime("2026-01-20T10:00:00Z").unwrap();
        assert_eq!(dt.hour(), 10);

        let dt = validate_datetime("2026-01-20T10:00:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn test_validate_datetime_naive() {
        let dt = validate_datetime("2026-01-20T10:30:00").unwrap();
        assert_eq!(dt.hour(), 10);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_validate_datetime_date_only() {
        let dt = validate_datetime("2026-01-20").unwrap();
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_validate_datetime_invalid() {
        assert!(validate_datetime("not-a-date").is_err());
        assert!(validate_datetime("2026-13-45").is_err());
        assert!(validate_datetime("").is_err());
    }

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("abc").is_ok());
        assert!(validate_not_empty("").is_err());
        assert!(validate_not_empty("   ").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("test@").is_err());
    }

    #[test]
    fn test_validate_enum() {
        let allowed = ["admin", "user"];
        assert!(validate_enum("admin", &allowed).is_ok());
        assert!(validate_enum("root", &allowed).is_err());
    }
}
