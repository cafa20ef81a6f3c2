use crate::behavior;
use crate::contact::ContactSubmission;
use crate::sections;
use crate::site::SiteData;

// ── Placeholder content ────────────────────────────────
// Used wherever the site document leaves a field empty, so a missing or
// malformed document still produces a complete page.

pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_ROLE: &str = "Full-Stack Developer";
pub const DEFAULT_TAGLINE: &str = "I build things for the web.";
pub const DEFAULT_BIO: &str = "A short introduction will appear here once the site document is filled in.";

/// Binary page theme, mirrored between the `theme` cookie and the
/// `dark-theme` body class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_cookie_value(value: Option<&str>) -> Theme {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn cookie_value(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Per-request form state: submitted values to preserve, validation errors
/// to decorate, and an optional flash banner. `Default` is the idle form.
#[derive(Debug, Default)]
pub struct FormView {
    pub values: ContactSubmission,
    pub errors: Vec<(&'static str, &'static str)>,
    pub flash: Option<(&'static str, &'static str)>,
}

impl FormView {
    pub fn error_for(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| *msg)
    }
}

/// Assemble the whole page. Builders are pure functions of the data, so a
/// second call with the same inputs produces the same document.
pub fn render_page(data: &SiteData, theme: Theme, form: &FormView) -> String {
    let title = text_or(&data.name, DEFAULT_NAME);
    let body_class = if theme.is_dark() { " class=\"dark-theme\"" } else { "" };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} | Portfolio</title>\n\
         <style>{css}</style>\n</head>\n<body{body_class}>\n\
         {nav}\n<main>\n{hero}\n{about}\n{skills}\n{projects}\n{contact}\n</main>\n{footer}\n\
         <script>{script}</script>\n</body>\n</html>\n",
        title = html_escape(title),
        css = PAGE_CSS,
        body_class = body_class,
        nav = sections::build_nav(data, theme),
        hero = sections::build_hero(data),
        about = sections::build_about(data),
        skills = sections::build_skills(&data.skills),
        projects = sections::build_projects(&data.projects),
        contact = sections::build_contact(data, form),
        footer = sections::build_footer(data),
        script = behavior::build_script(),
    )
}

/// Fall back to the placeholder when the document leaves a field empty.
pub fn text_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn current_year() -> String {
    chrono::Utc::now().format("%Y").to_string()
}

const PAGE_CSS: &str = "\
:root{--bg:#ffffff;--bg-alt:#f6f8fa;--text:#1f2328;--text-muted:#57606a;--accent:#2563eb;--border:#d0d7de;--card:#ffffff}\
body.dark-theme{--bg:#0d1117;--bg-alt:#161b22;--text:#e6edf3;--text-muted:#8b949e;--accent:#60a5fa;--border:#30363d;--card:#161b22}\
*{box-sizing:border-box;margin:0;padding:0}\
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',sans-serif;background:var(--bg);color:var(--text);line-height:1.6;transition:background .3s,color .3s}\
.site-nav{position:sticky;top:0;display:flex;align-items:center;justify-content:space-between;padding:14px 24px;background:var(--bg);border-bottom:1px solid var(--border);z-index:10}\
.nav-brand{font-weight:700;font-size:1.1em;color:var(--text);text-decoration:none}\
.nav-menu{display:flex;gap:20px;list-style:none}\
.nav-menu a{color:var(--text-muted);text-decoration:none;font-size:.95em}\
.nav-menu a:hover{color:var(--accent)}\
.nav-toggle{display:none;background:none;border:none;cursor:pointer;padding:6px}\
.nav-toggle span{display:block;width:22px;height:2px;margin:5px 0;background:var(--text);transition:transform .3s,opacity .3s}\
.nav-toggle.active span:nth-child(1){transform:translateY(7px) rotate(45deg)}\
.nav-toggle.active span:nth-child(2){opacity:0}\
.nav-toggle.active span:nth-child(3){transform:translateY(-7px) rotate(-45deg)}\
.theme-toggle{background:none;border:1px solid var(--border);border-radius:50%;width:34px;height:34px;cursor:pointer;color:var(--text);font-size:15px}\
@media(max-width:767px){.nav-toggle{display:block}.nav-menu{position:absolute;top:100%;left:0;right:0;flex-direction:column;gap:0;background:var(--bg);border-bottom:1px solid var(--border);max-height:0;overflow:hidden;transition:max-height .3s}.nav-menu.active{max-height:320px}.nav-menu li{padding:12px 24px}}\
.section{max-width:960px;margin:0 auto;padding:72px 24px;opacity:0;transform:translateY(24px);transition:opacity .6s,transform .6s}\
.section.visible{opacity:1;transform:none}\
.section h2{font-size:1.6em;margin-bottom:24px}\
.hero{min-height:70vh;display:flex;flex-direction:column;justify-content:center}\
.hero h1{font-size:2.6em;margin-bottom:8px}\
.hero-role{font-size:1.3em;color:var(--accent);margin-bottom:12px}\
.hero-tagline{color:var(--text-muted);max-width:560px;margin-bottom:28px}\
.hero-cta{display:inline-block;width:fit-content;padding:12px 28px;background:var(--accent);color:#fff;border-radius:6px;text-decoration:none}\
.about-meta{margin-top:16px;color:var(--text-muted)}\
.skill{margin-bottom:18px}\
.skill-info{display:flex;justify-content:space-between;margin-bottom:6px;font-size:.95em}\
.skill-bar{height:8px;background:var(--bg-alt);border:1px solid var(--border);border-radius:4px;overflow:hidden}\
.skill-progress{height:100%;width:0;background:var(--accent);border-radius:4px;transition:width 1s ease}\
.project-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(280px,1fr));gap:24px}\
.project-card{background:var(--card);border:1px solid var(--border);border-radius:8px;overflow:hidden}\
.project-card img{width:100%;height:160px;object-fit:cover;display:block}\
.project-body{padding:16px}\
.project-body h3{margin-bottom:8px}\
.project-body p{color:var(--text-muted);font-size:.95em;margin-bottom:12px}\
.project-tags{display:flex;flex-wrap:wrap;gap:6px;list-style:none;margin-bottom:12px}\
.project-tags li{font-size:.8em;padding:2px 10px;background:var(--bg-alt);border:1px solid var(--border);border-radius:10px}\
.project-links a{margin-right:14px;color:var(--accent);text-decoration:none;font-size:.95em}\
.contact-grid{display:grid;grid-template-columns:1fr 1fr;gap:40px}\
@media(max-width:767px){.contact-grid{grid-template-columns:1fr}}\
.contact-info p{margin-bottom:10px;color:var(--text-muted)}\
.social-links{display:flex;gap:12px;margin-top:16px}\
.social-links a{color:var(--text-muted)}\
.social-links a:hover{color:var(--accent)}\
.contact-form input,.contact-form textarea{width:100%;padding:10px 12px;margin-bottom:4px;background:var(--bg);color:var(--text);border:1px solid var(--border);border-radius:6px;font:inherit}\
.contact-form textarea{min-height:120px;resize:vertical}\
.contact-form button{margin-top:10px;padding:12px 28px;background:var(--accent);color:#fff;border:none;border-radius:6px;cursor:pointer;font:inherit}\
.contact-form button:disabled{opacity:.6;cursor:default}\
.field-error{font-size:.85em;margin:0 0 10px}\
.form-flash{padding:12px;margin-bottom:16px;border-radius:6px;font-size:.95em}\
.form-flash-success{background:rgba(34,197,94,.12);color:#16a34a}\
.form-flash-error{background:rgba(239,68,68,.12);color:#ef4444}\
.site-footer{border-top:1px solid var(--border);padding:32px 24px;text-align:center;color:var(--text-muted)}\
.site-footer .social-links{justify-content:center;margin-bottom:12px}\
";
