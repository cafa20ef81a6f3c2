use rocket::request::{FromRequest, Outcome, Request};
use rocket::serde::json::Json;
use rocket::State;
use serde_json::{json, Map, Value};

use crate::contact::{self, ContactSubmission, MSG_FAILED, MSG_SENT};
use crate::rate_limit::ContactLimiter;

/// Client address for rate limiting. Proxy headers first, then the peer
/// address Rocket saw.
pub struct ClientAddr(pub String);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ClientAddr {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        if let Some(ip) = request.headers().get_one("X-Forwarded-For") {
            let first = ip.split(',').next().unwrap_or("").trim();
            if !first.is_empty() {
                return Outcome::Success(ClientAddr(first.to_string()));
            }
        }
        let ip = request
            .client_ip()
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Outcome::Success(ClientAddr(ip))
    }
}

// ── Contact submission ─────────────────────────────────

#[post("/contact", format = "json", data = "<form>")]
pub async fn contact_submit(
    limiter: &State<ContactLimiter>,
    client: ClientAddr,
    form: Json<ContactSubmission>,
) -> Json<Value> {
    if !limiter.allow(&client.0) {
        return Json(json!({"success": false, "error": contact::MSG_RATE_LIMITED}));
    }

    let errors = form.validate();
    if !errors.is_empty() {
        let mut fields = Map::new();
        for (field, message) in errors {
            fields.insert(field.to_string(), Value::String(message.to_string()));
        }
        return Json(json!({"success": false, "errors": fields}));
    }

    match contact::deliver(&form).await {
        Ok(()) => Json(json!({"success": true, "message": MSG_SENT})),
        Err(e) => {
            log::error!("Contact delivery failed: {}", e);
            Json(json!({"success": false, "error": MSG_FAILED}))
        }
    }
}

pub fn routes() -> Vec<rocket::Route> {
    routes![contact_submit]
}
