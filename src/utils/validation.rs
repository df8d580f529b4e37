use crate::utils::error::{CastError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_host(value: Option<&str>) -> Result<&str> {
    match value.map(str::trim) {
        Some(host) if !host.is_empty() => Ok(host),
        _ => Err(CastError::MissingHost),
    }
}

pub fn validate_port(field_name: &str, port: u16) -> Result<()> {
    if port == 0 {
        return Err(CastError::invalid_argument(
            field_name,
            port,
            "Port must be between 1 and 65535",
        ));
    }
    Ok(())
}

/// Absolute volume level. Zero is allowed.
pub fn validate_volume_level(field_name: &str, value: f32) -> Result<()> {
    if !value.is_finite() {
        return Err(CastError::invalid_argument(
            field_name,
            value,
            "Has to be float between 0.0 and 1.0.",
        ));
    }
    validate_range(field_name, value, 0.0, 1.0)
}

/// Relative step. A zero step would be a no-op round trip, so it is rejected.
pub fn validate_volume_step(field_name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 || value > 1.0 {
        return Err(CastError::invalid_argument(
            field_name,
            value,
            "Has to be float between 0.0 and 1.0.",
        ));
    }
    Ok(())
}

pub fn validate_sources(field_name: &str, sources: &[String]) -> Result<()> {
    if sources.is_empty() {
        return Err(CastError::invalid_argument(
            field_name,
            "",
            "At least one source is required",
        ));
    }
    for source in sources {
        validate_non_empty_string(field_name, source)?;
        if source.contains('\0') {
            return Err(CastError::invalid_argument(
                field_name,
                source,
                "Source contains null bytes",
            ));
        }
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CastError::invalid_argument(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CastError::invalid_argument(
            field_name,
            value,
            format!("Has to be float between {:.1} and {:.1}.", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_host() {
        assert_eq!(validate_host(Some("192.168.1.20")).unwrap(), "192.168.1.20");
        assert_eq!(validate_host(Some(" tv.local ")).unwrap(), "tv.local");
        assert!(matches!(validate_host(None), Err(CastError::MissingHost)));
        assert!(matches!(validate_host(Some("   ")), Err(CastError::MissingHost)));
    }

    #[test]
    fn test_validate_volume_level() {
        assert!(validate_volume_level("volume", 0.0).is_ok());
        assert!(validate_volume_level("volume", 0.5).is_ok());
        assert!(validate_volume_level("volume", 1.0).is_ok());
        assert!(validate_volume_level("volume", 1.2).is_err());
        assert!(validate_volume_level("volume", -0.1).is_err());
        assert!(validate_volume_level("volume", f32::NAN).is_err());
    }

    #[test]
    fn test_validate_volume_step() {
        assert!(validate_volume_step("volumeStep", 0.1).is_ok());
        assert!(validate_volume_step("volumeStep", 1.0).is_ok());
        assert!(validate_volume_step("volumeStep", 0.0).is_err());
        assert!(validate_volume_step("volumeStep", -0.2).is_err());
        assert!(validate_volume_step("volumeStep", f32::INFINITY).is_err());
    }

    #[test]
    fn test_validate_sources() {
        assert!(validate_sources("src", &["http://host/a.mp4".to_string()]).is_ok());
        assert!(validate_sources("src", &[]).is_err());
        assert!(validate_sources("src", &["  ".to_string()]).is_err());
    }

    #[test]
    fn test_validate_port() {
        assert!(validate_port("port", 8009).is_ok());
        assert!(validate_port("port", 0).is_err());
    }
}
