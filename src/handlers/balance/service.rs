use alloy::primitives::Address;
use log::{debug, warn};
use serde_json::Value;

use crate::{
    chain::{to_human_amount, validate_address, TokenReader},
    handlers::balance::dto::BatchBalanceEntry,
};

/// Error marker attached to batch entries that fail validation
pub const INVALID_ENTRY_MESSAGE: &str = "Invalid address";

/// Service layer for balance lookups
pub struct BalanceService;

impl BalanceService {
    /// Get the human-readable balance of `owner`
    ///
    /// # Arguments
    /// * `reader` - Token contract reader
    /// * `owner` - Validated account address
    ///
    /// # Returns
    /// * `Ok(f64)` - Raw balance divided by `10^decimals`
    /// * `Err(anyhow::Error)` - Error if either remote call fails
    pub async fn get_balance(reader: &dyn TokenReader, owner: Address) -> anyhow::Result<f64> {
        debug!("Fetching balance for {:?}", owner);

        let raw = reader.balance_of(owner).await?;
        let decimals = reader.decimals().await?;
        to_human_amount(raw, decimals)
    }

    /// Look up every address in order, one at a time
    ///
    /// Entries that are not valid addresses are reported in place and never
    /// reach the contract. A remote failure aborts the whole batch.
    pub async fn get_balances(
        reader: &dyn TokenReader,
        addresses: &[Value],
    ) -> anyhow::Result<Vec<BatchBalanceEntry>> {
        let mut balances = Vec::with_capacity(addresses.len());

        for entry in addresses {
            let parsed = match entry.as_str() {
                Some(raw) => validate_address(raw).map_err(|e| e.to_string()),
                None => Err("address is not a string".to_string()),
            };

            match parsed {
                Ok(owner) => {
                    let balance = Self::get_balance(reader, owner).await?;
                    balances.push(BatchBalanceEntry {
                        address: entry.clone(),
                        balance: Some(balance),
                        error: None,
                    });
                }
                Err(reason) => {
                    warn!("Skipping batch entry {}: {}", entry, reason);
                    balances.push(BatchBalanceEntry {
                        address: entry.clone(),
                        balance: None,
                        error: Some(INVALID_ENTRY_MESSAGE.to_string()),
                    });
                }
            }
        }

        debug!("Resolved {} batch entries", balances.len());
        Ok(balances)
    }
}
