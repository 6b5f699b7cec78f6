use serde::{Serialize, Serializer};

/// Value reported in place of the total supply when the call fails
pub const TOTAL_SUPPLY_UNAVAILABLE: &str = "Not available";

/// Total supply scaled by decimals, or the unavailability sentinel
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TotalSupply {
    Amount(f64),
    Unavailable,
}

impl Serialize for TotalSupply {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TotalSupply::Amount(amount) => serializer.serialize_f64(*amount),
            TotalSupply::Unavailable => serializer.serialize_str(TOTAL_SUPPLY_UNAVAILABLE),
        }
    }
}

/// Response model for GET /token/info/
#[derive(Debug, Serialize)]
pub struct TokenInfoResponse {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub total_supply: TotalSupply,
    pub contract_address: String,
}
