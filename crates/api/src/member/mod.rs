mod create_member;
mod get_member;
mod update_member;

use actix_web::web;
use create_member::create_member_controller;
use get_member::get_member_controller;
use update_member::update_member_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/members", web::post().to(create_member_controller));
    cfg.route("/members/{member_id}", web::get().to(get_member_controller));
    cfg.route("/members/{member_id}", web::put().to(update_member_controller));
}
