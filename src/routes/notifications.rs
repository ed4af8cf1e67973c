use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;

use crate::models::{ApplicationRecord, NotificationError};
use crate::routes::AppState;

/// Configure notification hook routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/hooks/new-application", web::post().to(new_application));
}

/// New-application notification hook
///
/// POST /api/v1/hooks/new-application
///
/// Invoked by the database trigger with the newly inserted application
/// row under a `record` key. Every failure mode answers 500 with a bare
/// `{ "error": ... }` body; dispatch is at-most-once, with no retries.
/// The body is parsed by hand so malformed JSON also reports through
/// the hook's own error contract.
async fn new_application(state: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => return notification_error(format!("Invalid JSON payload: {}", e)),
    };

    let record_value = match payload.get("record") {
        Some(value) if !value.is_null() => value.clone(),
        _ => {
            return notification_error(
                "Invalid request payload: \"record\" object not found.".to_string(),
            )
        }
    };

    let record: ApplicationRecord = match serde_json::from_value(record_value) {
        Ok(record) => record,
        Err(e) => return notification_error(format!("Invalid application record: {}", e)),
    };

    tracing::info!("Dispatching new-application notification for {}", record.name);

    match state.mailgun.send_new_application(&record).await {
        Ok(upstream) => HttpResponse::Ok().json(upstream),
        Err(e) => notification_error(e.to_string()),
    }
}

fn notification_error(message: String) -> HttpResponse {
    tracing::error!("Error processing new application: {}", message);
    HttpResponse::InternalServerError().json(NotificationError { error: message })
}
