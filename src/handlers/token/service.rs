use log::{debug, warn};

use crate::{
    chain::{to_human_amount, TokenReader},
    handlers::token::dto::{TokenInfoResponse, TotalSupply},
};

/// Service layer for token metadata
pub struct TokenService;

impl TokenService {
    /// Read the token metadata fresh from the contract
    ///
    /// # Arguments
    /// * `reader` - Token contract reader
    ///
    /// # Returns
    /// * `Ok(TokenInfoResponse)` - Symbol, name, decimals, total supply and address
    /// * `Err(anyhow::Error)` - Error if symbol, name or decimals cannot be read
    pub async fn get_token_info(reader: &dyn TokenReader) -> anyhow::Result<TokenInfoResponse> {
        let contract_address = reader.token_address();
        debug!("Fetching token info for {:?}", contract_address);

        let symbol = reader.symbol().await?;
        let name = reader.name().await?;
        let decimals = reader.decimals().await?;

        let total_supply = match reader.total_supply().await {
            Ok(raw) => match to_human_amount(raw, decimals) {
                Ok(amount) => TotalSupply::Amount(amount),
                Err(e) => {
                    warn!("Failed to scale total supply: {}", e);
                    TotalSupply::Unavailable
                }
            },
            Err(e) => {
                warn!("Total supply not available: {}", e);
                TotalSupply::Unavailable
            }
        };

        Ok(TokenInfoResponse {
            symbol,
            name,
            decimals,
            total_supply,
            contract_address: contract_address.to_checksum(None),
        })
    }
}
