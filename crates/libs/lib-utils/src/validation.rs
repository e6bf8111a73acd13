//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate an EVM address: `0x` followed by exactly 40 hex digits.
///
/// Mixed case is accepted; the EIP-55 checksum is not verified.
pub fn validate_evm_address(value: &str, field_name: &str) -> Result<(), String> {
    validate_not_empty(value, field_name)?;

    let hex = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .ok_or_else(|| format!("{} must start with 0x", field_name))?;

    if hex.len() != 40 {
        return Err(format!(
            "{} must have 40 hex digits after 0x, got {}",
            field_name,
            hex.len()
        ));
    }

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("{} contains non-hex characters", field_name));
    }

    Ok(())
}
