pub mod dispatch_reminders;

use actix_web::web;
use dispatch_reminders::{dispatch_reminders_controller, dispatch_reminders_preflight_controller};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/notifications/dispatch",
        web::post().to(dispatch_reminders_controller),
    );
    cfg.route(
        "/notifications/dispatch",
        web::get().to(dispatch_reminders_controller),
    );
    cfg.route(
        "/notifications/dispatch",
        web::method(actix_web::http::Method::OPTIONS).to(dispatch_reminders_preflight_controller),
    );
}
