use regex::Regex;
use rocket::tokio::time::sleep;
use serde::Deserialize;
use std::sync::OnceLock;
use std::time::Duration;

/// Inline error color applied to failing fields, both server-rendered and
/// in the emitted form script.
pub const ERROR_COLOR: &str = "#dc3545";

/// Simulated delivery wait. Stands in for a real mail handoff so the form
/// exercises its pending/success/failure states.
pub const DELIVERY_DELAY_MS: u64 = 800;

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

pub const ERR_NAME: &str = "Enter at least 2 characters";
pub const ERR_EMAIL: &str = "Enter a valid email";
pub const ERR_MESSAGE: &str = "Message too short";

pub const MSG_SENT: &str = "Thanks for reaching out! I will get back to you soon.";
pub const MSG_FAILED: &str = "Something went wrong. Please try again.";
pub const MSG_RATE_LIMITED: &str = "Too many messages. Please wait before trying again.";

/// One `@`, no whitespace, at least one dot in the domain part.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// A contact-form submission, accepted both as JSON (`/api/contact`) and as
/// a plain form post (`/contact`).
#[derive(Debug, Clone, Default, Deserialize, FromForm)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Run every rule over the trimmed fields and return the failures as an
    /// ordered field → message list. All rules are evaluated so every
    /// invalid field is reported in the same pass; an empty list means the
    /// submission is valid.
    pub fn validate(&self) -> Vec<(&'static str, &'static str)> {
        let mut errors = Vec::new();

        if self.name.trim().chars().count() < NAME_MIN_CHARS {
            errors.push(("name", ERR_NAME));
        }
        if !email_regex().is_match(self.email.trim()) {
            errors.push(("email", ERR_EMAIL));
        }
        if self.message.trim().chars().count() < MESSAGE_MIN_CHARS {
            errors.push(("message", ERR_MESSAGE));
        }

        errors
    }
}

/// Simulated delivery: wait, log, succeed. The error arm is part of the
/// contract (callers surface it as the failure acknowledgment and leave
/// the form populated) even though the current body cannot produce it.
pub async fn deliver(submission: &ContactSubmission) -> Result<(), String> {
    sleep(Duration::from_millis(DELIVERY_DELAY_MS)).await;
    log::info!(
        "Contact message from {} <{}> ({} chars)",
        submission.name.trim(),
        submission.email.trim(),
        submission.message.trim().chars().count()
    );
    Ok(())
}
