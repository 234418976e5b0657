use crate::utils::error::{Result, StandingsError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StandingsError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_printable(field_name: &str, value: &str) -> Result<()> {
    if let Some(c) = value.chars().find(|c| c.is_control()) {
        return Err(StandingsError::ValidationError {
            field: field_name.to_string(),
            value: value.escape_debug().to_string(),
            reason: format!("Contains control character {:?}", c),
        });
    }
    Ok(())
}

pub fn validate_max_length(field_name: &str, value: &str, max_chars: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max_chars {
        return Err(StandingsError::ValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value is {} characters, at most {} allowed", len, max_chars),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("keyword", "American").is_ok());
        assert!(validate_non_empty_string("keyword", "").is_err());
        assert!(validate_non_empty_string("keyword", "   ").is_err());
    }

    #[test]
    fn test_validate_printable() {
        assert!(validate_printable("keyword", "League").is_ok());
        assert!(validate_printable("keyword", "Lea\ngue").is_err());
        assert!(validate_printable("keyword", "\u{7}").is_err());
    }

    #[test]
    fn test_validate_max_length() {
        assert!(validate_max_length("keyword", "West", 4).is_ok());
        assert!(validate_max_length("keyword", "Central", 4).is_err());
    }
}
