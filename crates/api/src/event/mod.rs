mod create_event;
mod get_event;
mod get_events;
pub mod notify_event;
pub mod send_event_reminders;
mod subscribers;
mod update_event;

use actix_web::web;
use create_event::create_event_controller;
use get_event::get_event_controller;
use get_events::get_events_controller;
use notify_event::notify_event_controller;
use send_event_reminders::send_event_reminders_controller;
use update_event::update_event_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::post().to(create_event_controller));
    cfg.route("/events", web::get().to(get_events_controller));
    cfg.route("/events/{event_id}", web::get().to(get_event_controller));
    cfg.route("/events/{event_id}", web::put().to(update_event_controller));
    cfg.route(
        "/events/{event_id}/notify",
        web::post().to(notify_event_controller),
    );

    cfg.route(
        "/cron/reminders",
        web::post().to(send_event_reminders_controller),
    );
}
