//! Placeholders for values the backend did not send

pub const NOT_AVAILABLE: &str = "N/A";

/// Text or "N/A" when missing or blank
pub fn or_na(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Text or an empty string when missing
pub fn or_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        assert_eq!(or_na(Some("Lan")), "Lan");
        assert_eq!(or_na(Some("  ")), "N/A");
        assert_eq!(or_na(None), "N/A");
        assert_eq!(or_empty(None), "");
        assert_eq!(or_empty(Some("a@example.com")), "a@example.com");
    }
}
