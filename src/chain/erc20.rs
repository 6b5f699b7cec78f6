use alloy::primitives::{Address, U256};
use alloy::providers::DynProvider;
use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use crate::chain::contracts::IERC20;

/// Read-only view of the configured ERC-20 contract.
///
/// Every method except `token_address` performs one remote call.
#[async_trait]
pub trait TokenReader: Send + Sync {
    fn token_address(&self) -> Address;

    async fn balance_of(&self, owner: Address) -> Result<U256>;

    async fn decimals(&self) -> Result<u8>;

    async fn symbol(&self) -> Result<String>;

    async fn name(&self) -> Result<String>;

    async fn total_supply(&self) -> Result<U256>;
}

/// `TokenReader` backed by a JSON-RPC provider
pub struct Erc20Client {
    contract: IERC20::IERC20Instance<DynProvider>,
}

impl Erc20Client {
    pub fn new(provider: DynProvider, token_address: Address) -> Self {
        Self {
            contract: IERC20::new(token_address, provider),
        }
    }
}

#[async_trait]
impl TokenReader for Erc20Client {
    fn token_address(&self) -> Address {
        *self.contract.address()
    }

    async fn balance_of(&self, owner: Address) -> Result<U256> {
        debug!("Calling balanceOf({:?}) on {:?}", owner, self.contract.address());
        let balance = self.contract.balanceOf(owner).call().await?;
        Ok(balance)
    }

    async fn decimals(&self) -> Result<u8> {
        let decimals = self.contract.decimals().call().await?;
        Ok(decimals)
    }

    async fn symbol(&self) -> Result<String> {
        let symbol = self.contract.symbol().call().await?;
        Ok(symbol)
    }

    async fn name(&self) -> Result<String> {
        let name = self.contract.name().call().await?;
        Ok(name)
    }

    async fn total_supply(&self) -> Result<U256> {
        let total_supply = self.contract.totalSupply().call().await?;
        Ok(total_supply)
    }
}
