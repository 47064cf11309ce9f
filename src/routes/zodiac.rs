use crate::core::zodiac::classify;
use crate::models::{ClassifyRequest, ClassifyResponse};
use actix_web::{web, HttpResponse, Responder};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/zodiac/classify", web::post().to(classify_birth_date));
}

/// Classify endpoint
///
/// POST /api/v1/zodiac/classify
///
/// Request body:
/// ```json
/// { "birthDate": "1995-07-23" }
/// ```
async fn classify_birth_date(req: web::Json<ClassifyRequest>) -> impl Responder {
    let sign = classify(req.birth_date);
    HttpResponse::Ok().json(ClassifyResponse {
        sign,
        glyph: sign.glyph(),
        color: sign.color(),
    })
}
