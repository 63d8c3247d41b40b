mod create_organization;
mod get_organization;
mod get_organization_events;
mod get_organization_members;
mod get_organizations;
mod update_organization;

use actix_web::web;
use create_organization::create_organization_controller;
use get_organization::get_organization_controller;
use get_organization_events::get_organization_events_controller;
use get_organization_members::get_organization_members_controller;
use get_organizations::get_organizations_controller;
use update_organization::update_organization_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/organizations",
        web::post().to(create_organization_controller),
    );
    cfg.route("/organizations", web::get().to(get_organizations_controller));
    cfg.route(
        "/organizations/{organization_id}",
        web::get().to(get_organization_controller),
    );
    cfg.route(
        "/organizations/{organization_id}",
        web::put().to(update_organization_controller),
    );
    cfg.route(
        "/organizations/{organization_id}/events",
        web::get().to(get_organization_events_controller),
    );
    cfg.route(
        "/organizations/{organization_id}/members",
        web::get().to(get_organization_members_controller),
    );
}
