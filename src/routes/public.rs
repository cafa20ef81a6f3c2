use rocket::form::Form;
use rocket::http::{Cookie, CookieJar};
use rocket::response::content::RawHtml;
use rocket::State;

use crate::contact::{self, ContactSubmission, MSG_FAILED, MSG_SENT};
use crate::rate_limit::ContactLimiter;
use crate::render::{self, FormView, Theme};
use crate::routes::api::ClientAddr;
use crate::site::SiteData;

const THEME_COOKIE: &str = "theme";

fn current_theme(cookies: &CookieJar<'_>) -> Theme {
    Theme::from_cookie_value(cookies.get(THEME_COOKIE).map(|c| c.value()))
}

// ── Page ───────────────────────────────────────────────

#[get("/")]
pub fn page(data: &State<SiteData>, cookies: &CookieJar<'_>) -> RawHtml<String> {
    let theme = current_theme(cookies);
    RawHtml(render::render_page(data, theme, &FormView::default()))
}

// ── Contact form fallback (no-JS path) ─────────────────
// The inline script intercepts submits and talks to /api/contact; this
// route serves clients without scripting by re-rendering the page with
// inline errors or a flash banner.

#[post("/contact", data = "<form>")]
pub async fn contact_fallback(
    data: &State<SiteData>,
    limiter: &State<ContactLimiter>,
    client: ClientAddr,
    cookies: &CookieJar<'_>,
    form: Form<ContactSubmission>,
) -> RawHtml<String> {
    let theme = current_theme(cookies);
    let submission = form.into_inner();

    if !limiter.allow(&client.0) {
        let view = FormView {
            values: submission,
            errors: Vec::new(),
            flash: Some(("error", contact::MSG_RATE_LIMITED)),
        };
        return RawHtml(render::render_page(data, theme, &view));
    }

    let errors = submission.validate();
    if !errors.is_empty() {
        let view = FormView {
            values: submission,
            errors,
            flash: None,
        };
        return RawHtml(render::render_page(data, theme, &view));
    }

    let view = match contact::deliver(&submission).await {
        Ok(()) => FormView {
            values: ContactSubmission::default(),
            errors: Vec::new(),
            flash: Some(("success", MSG_SENT)),
        },
        Err(e) => {
            log::error!("Contact delivery failed: {}", e);
            FormView {
                values: submission,
                errors: Vec::new(),
                flash: Some(("error", MSG_FAILED)),
            }
        }
    };
    RawHtml(render::render_page(data, theme, &view))
}

// ── Theme toggle ───────────────────────────────────────
// The script flips the body class immediately and posts here so the next
// page load starts from the same theme.

#[post("/theme")]
pub fn theme_toggle(cookies: &CookieJar<'_>) -> &'static str {
    let next = current_theme(cookies).flipped();
    cookies.add(Cookie::new(THEME_COOKIE, next.cookie_value()));
    next.cookie_value()
}

pub fn routes() -> Vec<rocket::Route> {
    routes![page, contact_fallback, theme_toggle]
}
