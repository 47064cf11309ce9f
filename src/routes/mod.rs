// Route exports
pub mod horoscope;
pub mod matches;
pub mod search;
pub mod session;
pub mod zodiac;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(zodiac::configure)
            .configure(search::configure)
            .configure(horoscope::configure)
            .configure(session::configure),
    );
}
