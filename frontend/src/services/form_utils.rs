//! Parsing of raw form input values into request fields.

use super::date_utils::parse_input_date;

/// Optional numeric measurement: blank, unparseable and zero all mean "not recorded"
pub fn parse_optional_measurement(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value != 0.0)
}

/// Whole number of sets/reps, at least 1
pub fn parse_count(input: &str, field: &str) -> Result<u32, String> {
    match input.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(format!("{} must be a whole number greater than zero", field)),
    }
}

/// Required decimal value such as a goal target
pub fn parse_required_number(input: &str, field: &str) -> Result<f64, String> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| format!("{} must be a number", field))
}

/// Optional `YYYY-MM-DD` date; blank means none
pub fn parse_optional_date(input: &str, field: &str) -> Result<Option<String>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_input_date(trimmed)
        .map(|date| Some(date.format("%Y-%m-%d").to_string()))
        .ok_or_else(|| format!("{} must be a valid date", field))
}

/// Required non-blank text field
pub fn require_text(input: &str, field: &str) -> Result<String, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(format!("{} is required", field))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_measurement() {
        assert_eq!(parse_optional_measurement("72.5"), Some(72.5));
        assert_eq!(parse_optional_measurement(" 40 "), Some(40.0));
        assert_eq!(parse_optional_measurement(""), None);
        assert_eq!(parse_optional_measurement("abc"), None);
        assert_eq!(parse_optional_measurement("0"), None);
        assert_eq!(parse_optional_measurement("NaN"), None);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("3", "Sets"), Ok(3));
        assert_eq!(parse_count("0", "Sets"), Err("Sets must be a whole number greater than zero".to_string()));
        assert!(parse_count("2.5", "Reps").is_err());
        assert!(parse_count("-1", "Reps").is_err());
        assert!(parse_count("", "Reps").is_err());
    }

    #[test]
    fn test_parse_required_number() {
        assert_eq!(parse_required_number("70", "Target"), Ok(70.0));
        assert_eq!(parse_required_number("x", "Target"), Err("Target must be a number".to_string()));
        assert!(parse_required_number("inf", "Target").is_err());
    }

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(parse_optional_date("", "Deadline"), Ok(None));
        assert_eq!(parse_optional_date("2025-07-01", "Deadline"), Ok(Some("2025-07-01".to_string())));
        assert!(parse_optional_date("07/01/2025", "Deadline").is_err());
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("  alice ", "Username"), Ok("alice".to_string()));
        assert_eq!(require_text("   ", "Username"), Err("Username is required".to_string()));
    }
}
