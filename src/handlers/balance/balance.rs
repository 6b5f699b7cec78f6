use actix_web::{web, HttpResponse};
use log::{error, info, warn};
use std::sync::Arc;

use crate::{
    chain::{validate_address, TokenReader, INVALID_ADDRESS_MESSAGE},
    config::Config,
    errors::ApiError,
    handlers::balance::{
        dto::{BalanceResponse, BatchBalanceRequest, BatchBalanceResponse},
        service::BalanceService,
    },
};

/// GET /balance/{address}/ - Returns the token balance of one address
///
/// # Arguments
/// * `reader` - Token contract reader
/// * `config` - Service configuration (for the unit label)
/// * `path` - Path parameter containing the address
///
/// # Returns
/// JSON object of BalanceResponse, 400 on a malformed address, 503 when the node fails
pub async fn get_balance_handler(
    reader: web::Data<Arc<dyn TokenReader>>,
    config: web::Data<Arc<Config>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let address = path.into_inner();
    info!("Handling GET /balance/{}/ request", address);

    let owner = match validate_address(&address) {
        Ok(owner) => owner,
        Err(e) => {
            warn!("Rejected address {}: {}", address, e);
            return Err(ApiError::InvalidAddress(INVALID_ADDRESS_MESSAGE.to_string()));
        }
    };

    match BalanceService::get_balance(reader.get_ref().as_ref(), owner).await {
        Ok(balance) => {
            info!("Balance of {} is {}", address, balance);
            Ok(HttpResponse::Ok().json(BalanceResponse {
                address,
                balance,
                unit: config.chain.unit.clone(),
            }))
        }
        Err(e) => {
            error!("Failed to retrieve balance of {}: {}", address, e);
            Err(ApiError::Upstream(e.to_string()))
        }
    }
}

/// POST /balance/ - Returns balances for a list of addresses
///
/// # Arguments
/// * `reader` - Token contract reader
/// * `body` - BatchBalanceRequest containing the addresses
///
/// # Returns
/// JSON object of BatchBalanceResponse with one entry per input address, in order
pub async fn get_balance_batch_handler(
    reader: web::Data<Arc<dyn TokenReader>>,
    body: web::Json<BatchBalanceRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling POST /balance/ request");

    let addresses = match body.into_inner().addresses {
        Some(addresses) if !addresses.is_empty() => addresses,
        _ => {
            warn!("Batch request without addresses");
            return Err(ApiError::MissingInput(
                "Addresses list is required".to_string(),
            ));
        }
    };

    match BalanceService::get_balances(reader.get_ref().as_ref(), &addresses).await {
        Ok(balances) => {
            info!("Successfully resolved {} balances", balances.len());
            Ok(HttpResponse::Ok().json(BatchBalanceResponse { balances }))
        }
        Err(e) => {
            error!("Failed to resolve batch balances: {}", e);
            Err(ApiError::Internal(e.to_string()))
        }
    }
}
