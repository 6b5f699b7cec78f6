use actix_web::{web, HttpResponse};
use log::{error, info};
use std::sync::Arc;

use crate::{chain::TokenReader, errors::ApiError, handlers::token::service::TokenService};

/// GET /token/info/ - Returns metadata of the configured token
///
/// # Returns
/// JSON object of TokenInfoResponse; `total_supply` is "Not available" when it cannot be read
pub async fn get_token_info_handler(
    reader: web::Data<Arc<dyn TokenReader>>,
) -> Result<HttpResponse, ApiError> {
    info!("Handling GET /token/info/ request");

    match TokenService::get_token_info(reader.get_ref().as_ref()).await {
        Ok(token) => {
            info!("Successfully retrieved token info for {}", token.symbol);
            Ok(HttpResponse::Ok().json(token))
        }
        Err(e) => {
            error!("Failed to retrieve token info: {}", e);
            Err(ApiError::Internal(e.to_string()))
        }
    }
}
