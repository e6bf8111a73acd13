//! # Shared Utility Functions
//!
//! Address formatting used by the connect button and the token gallery.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Keep the first N and last M characters, join with an ellipsis
//! - [`truncate_address`] - `format_address` with the `0x1234...abcd` layout
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x9f2c6a1b3e4d5f60718293a4b5c6d7e8f90141aa";
//! assert_eq!(format_address(address, 6, 4), "0x9f2c...41aa");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x9f2c6a1b3e4d5f60718293a4b5c6d7e8f90141aa";
/// assert_eq!(format_address(addr, 6, 4), "0x9f2c...41aa");
/// assert_eq!(format_address(addr, 4, 6), "0x9f...0141aa");
/// assert_eq!(format_address("0x12", 6, 4), "0x12");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len
        || !address.is_char_boundary(prefix_len)
        || !address.is_char_boundary(address_len - suffix_len)
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an EVM address as `0x` plus four characters, ellipsis, last four characters.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x9f2c6a1b3e4d5f60718293a4b5c6d7e8f90141aa";
/// assert_eq!(truncate_address(addr), "0x9f2c...41aa");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x9f2c6a1b3e4d5f60718293a4b5c6d7e8f90141aa";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 6, 4), "0x9f2c...41aa");
        assert_eq!(format_address(ADDR, 2, 2), "0x...aa");
        assert_eq!(format_address(ADDR, 10, 6), "0x9f2c6a1b...0141aa");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0xabc", 6, 4), "0xabc");
        assert_eq!(format_address("", 6, 4), "");
    }

    #[test]
    fn test_format_address_non_ascii_is_left_alone() {
        assert_eq!(format_address("0x€€€€€€€€", 3, 2), "0x€€€€€€€€");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(ADDR), "0x9f2c...41aa");
    }
}
