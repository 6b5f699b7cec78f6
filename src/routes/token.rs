use actix_web::web;

use crate::handlers::token::get_token_info_handler;

pub fn configure_token_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/token/info/", web::get().to(get_token_info_handler));
}
