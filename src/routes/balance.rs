use actix_web::web;

use crate::handlers::balance::{get_balance_batch_handler, get_balance_handler};

pub fn configure_balance_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/balance/", web::post().to(get_balance_batch_handler))
        .route("/balance/{address}/", web::get().to(get_balance_handler));
}
