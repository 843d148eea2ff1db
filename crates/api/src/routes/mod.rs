//! HTTP route modules.

pub mod meta;
pub mod recommendations;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    meta::configure(cfg);
    recommendations::configure(cfg);
}
