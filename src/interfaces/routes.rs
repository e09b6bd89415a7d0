use actix_web::web;

use crate::handlers::home::home;

mod auth;
mod projects;
mod json_error;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.configure(auth::config_routes);
    cfg.configure(projects::config_routes);
    cfg.configure(json_error::config_routes);
}
