use alloy::primitives::Address;
use thiserror::Error;

/// Message returned to API clients for any malformed address
pub const INVALID_ADDRESS_MESSAGE: &str = "Invalid Ethereum address";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("expected 40 hex digits, got {0} characters")]
    InvalidLength(usize),

    #[error("address contains non-hex characters")]
    InvalidHex,

    #[error("mixed-case address fails EIP-55 checksum")]
    InvalidChecksum,
}

/// Validate an account address supplied by a client.
///
/// The `0x` prefix is optional. Addresses written entirely in lower or upper
/// case are accepted as-is; mixed-case input must match its EIP-55 checksum
/// form exactly, including the lowercase `0x` prefix.
pub fn validate_address(input: &str) -> Result<Address, AddressError> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    if digits.len() != 40 {
        return Err(AddressError::InvalidLength(digits.len()));
    }

    let bytes = hex::decode(digits).map_err(|_| AddressError::InvalidHex)?;
    let address = Address::from_slice(&bytes);

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        if address.to_checksum(None) != input {
            return Err(AddressError::InvalidChecksum);
        }
    }

    Ok(address)
}
