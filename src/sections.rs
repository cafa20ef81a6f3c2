//! Section builders for the portfolio page.
//! Each builder returns a complete HTML fragment from the site data alone,
//! so re-rendering replaces content instead of appending to it.

use crate::contact::ERROR_COLOR;
use crate::render::{
    current_year, html_escape, text_or, FormView, Theme, DEFAULT_BIO, DEFAULT_NAME, DEFAULT_ROLE,
    DEFAULT_TAGLINE,
};
use crate::site::{Project, SiteData, Skill, SocialLink};

// ── Navigation ─────────────────────────────────────────

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

pub fn build_nav(data: &SiteData, theme: Theme) -> String {
    let mut links = String::new();
    for (href, label) in NAV_LINKS {
        links.push_str(&format!("<li><a href=\"{}\">{}</a></li>", href, label));
    }

    // Icon reflects the current theme; the script keeps it in sync on toggle.
    let icon = if theme.is_dark() { "\u{2600}" } else { "\u{263E}" };

    format!(
        "<header class=\"site-nav\">\
         <a href=\"#home\" class=\"nav-brand\">{brand}</a>\
         <ul id=\"nav-menu\" class=\"nav-menu\">{links}</ul>\
         <div>\
         <button id=\"theme-toggle\" class=\"theme-toggle\" aria-label=\"Toggle theme\">\
         <span class=\"theme-icon\">{icon}</span></button>\
         <button id=\"nav-toggle\" class=\"nav-toggle\" aria-label=\"Toggle menu\">\
         <span></span><span></span><span></span></button>\
         </div>\
         </header>",
        brand = html_escape(text_or(&data.name, DEFAULT_NAME)),
        links = links,
        icon = icon,
    )
}

// ── Hero ───────────────────────────────────────────────

pub fn build_hero(data: &SiteData) -> String {
    format!(
        "<section id=\"home\" class=\"section hero\">\
         <h1 id=\"hero-name\">{name}</h1>\
         <p id=\"hero-role\" class=\"hero-role\">{role}</p>\
         <p id=\"hero-tagline\" class=\"hero-tagline\">{tagline}</p>\
         <a href=\"#contact\" class=\"hero-cta\">Get in touch</a>\
         </section>",
        name = html_escape(text_or(&data.name, DEFAULT_NAME)),
        role = html_escape(text_or(&data.role, DEFAULT_ROLE)),
        tagline = html_escape(text_or(&data.tagline, DEFAULT_TAGLINE)),
    )
}

// ── About ──────────────────────────────────────────────

pub fn build_about(data: &SiteData) -> String {
    let mut meta = String::new();
    if !data.email.trim().is_empty() {
        meta.push_str(&format!(
            "<p id=\"about-email\">Email: <a href=\"mailto:{email}\">{email}</a></p>",
            email = html_escape(&data.email)
        ));
    }
    if !data.location.trim().is_empty() {
        meta.push_str(&format!(
            "<p id=\"about-location\">Based in {}</p>",
            html_escape(&data.location)
        ));
    }

    format!(
        "<section id=\"about\" class=\"section\">\
         <h2>About</h2>\
         <p id=\"about-bio\">{bio}</p>\
         <div class=\"about-meta\">{meta}</div>\
         </section>",
        bio = html_escape(text_or(&data.bio, DEFAULT_BIO)),
        meta = meta,
    )
}

// ── Skills ─────────────────────────────────────────────

/// One labeled progress bar per skill. The bar carries its target width in
/// `data-level` and starts at width zero; the reveal script animates it.
pub fn build_skills(skills: &[Skill]) -> String {
    let mut items = String::new();
    for skill in skills {
        let level = skill.clamped_level();
        items.push_str(&format!(
            "<div class=\"skill\">\
             <div class=\"skill-info\"><span>{name}</span><span>{level}%</span></div>\
             <div class=\"skill-bar\"><div class=\"skill-progress\" data-level=\"{level}\"></div></div>\
             </div>",
            name = html_escape(&skill.name),
            level = level,
        ));
    }

    format!(
        "<section id=\"skills\" class=\"section\">\
         <h2>Skills</h2>\
         <div id=\"skills-list\">{items}</div>\
         </section>",
        items = items,
    )
}

// ── Projects ───────────────────────────────────────────

pub fn build_projects(projects: &[Project]) -> String {
    let mut cards = String::new();
    for project in projects {
        cards.push_str(&build_project_card(project));
    }

    format!(
        "<section id=\"projects\" class=\"section\">\
         <h2>Projects</h2>\
         <div id=\"project-grid\" class=\"project-grid\">{cards}</div>\
         </section>",
        cards = cards,
    )
}

fn build_project_card(project: &Project) -> String {
    let mut tags = String::new();
    for tag in project.tech_tags() {
        tags.push_str(&format!("<li>{}</li>", html_escape(tag)));
    }

    let mut links = String::new();
    for (url, label) in [(&project.repo, "Code"), (&project.live, "Live")] {
        if !url.trim().is_empty() {
            links.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                html_escape(url),
                label
            ));
        }
    }

    let image = if project.image.trim().is_empty() {
        String::new()
    } else {
        format!(
            "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            html_escape(&project.image),
            html_escape(&project.title)
        )
    };

    format!(
        "<article class=\"project-card\">{image}\
         <div class=\"project-body\">\
         <h3>{title}</h3>\
         <p>{description}</p>\
         <ul class=\"project-tags\">{tags}</ul>\
         <div class=\"project-links\">{links}</div>\
         </div></article>",
        image = image,
        title = html_escape(&project.title),
        description = html_escape(&project.description),
        tags = tags,
        links = links,
    )
}

// ── Social links ───────────────────────────────────────

// (platform, icon_svg): exact-name lookup, generic glyph otherwise.
const SOCIAL_ICONS: &[(&str, &str)] = &[
    (
        "GitHub",
        r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/></svg>"#,
    ),
    (
        "LinkedIn",
        r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/></svg>"#,
    ),
    (
        "Twitter",
        r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z"/></svg>"#,
    ),
    (
        "Instagram",
        r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><rect x="2" y="2" width="20" height="20" rx="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" y1="6.5" x2="17.51" y2="6.5"/></svg>"#,
    ),
];

const GENERIC_ICON: &str = r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"/><path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"/></svg>"#;

fn icon_for(platform: &str) -> &'static str {
    SOCIAL_ICONS
        .iter()
        .find(|(name, _)| *name == platform)
        .map(|(_, icon)| *icon)
        .unwrap_or(GENERIC_ICON)
}

/// Identical markup is rendered into the contact block and the footer.
pub fn build_social_links(links: &[SocialLink]) -> String {
    if links.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"social-links\">");
    for link in links {
        html.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" title=\"{}\">{}</a>",
            html_escape(&link.url),
            html_escape(&link.platform),
            icon_for(&link.platform)
        ));
    }
    html.push_str("</div>");
    html
}

// ── Contact ────────────────────────────────────────────

pub fn build_contact(data: &SiteData, form: &FormView) -> String {
    let mut info = String::new();
    info.push_str("<p>Have a project in mind or just want to say hi? Drop a message.</p>");
    if !data.email.trim().is_empty() {
        info.push_str(&format!(
            "<p><a href=\"mailto:{email}\">{email}</a></p>",
            email = html_escape(&data.email)
        ));
    }
    info.push_str(&build_social_links(&data.social_links));

    format!(
        "<section id=\"contact\" class=\"section\">\
         <h2>Contact</h2>\
         <div class=\"contact-grid\">\
         <div class=\"contact-info\">{info}</div>\
         {form}\
         </div></section>",
        info = info,
        form = build_contact_form(form),
    )
}

fn build_contact_form(form: &FormView) -> String {
    let flash = match form.flash {
        Some(("success", msg)) => format!(
            "<div class=\"form-flash form-flash-success\">{}</div>",
            html_escape(msg)
        ),
        Some((_, msg)) => format!(
            "<div class=\"form-flash form-flash-error\">{}</div>",
            html_escape(msg)
        ),
        None => String::new(),
    };

    let field = |name: &str, tag: &str, kind: &str, placeholder: &str, value: &str| -> String {
        let error = form.error_for(name);
        let border = match error {
            Some(_) => format!(" style=\"border-color:{}\"", ERROR_COLOR),
            None => String::new(),
        };
        let message = match error {
            Some(msg) => format!(
                "<div class=\"field-error\" style=\"color:{}\">{}</div>",
                ERROR_COLOR,
                html_escape(msg)
            ),
            None => String::new(),
        };
        if tag == "textarea" {
            format!(
                "<textarea name=\"{name}\" placeholder=\"{placeholder}\"{border}>{value}</textarea>{message}",
                name = name,
                placeholder = placeholder,
                border = border,
                value = html_escape(value),
                message = message,
            )
        } else {
            format!(
                "<input type=\"{kind}\" name=\"{name}\" placeholder=\"{placeholder}\" value=\"{value}\"{border}>{message}",
                kind = kind,
                name = name,
                placeholder = placeholder,
                border = border,
                value = html_escape(value),
                message = message,
            )
        }
    };

    format!(
        "<form id=\"contact-form\" class=\"contact-form\" method=\"post\" action=\"/contact\" novalidate>\
         {flash}\
         {name}{email}{message}\
         <button type=\"submit\">Send Message</button>\
         </form>",
        flash = flash,
        name = field("name", "input", "text", "Name", &form.values.name),
        email = field("email", "input", "email", "Email", &form.values.email),
        message = field("message", "textarea", "", "Your message...", &form.values.message),
    )
}

// ── Footer ─────────────────────────────────────────────

pub fn build_footer(data: &SiteData) -> String {
    format!(
        "<footer class=\"site-footer\">\
         {social}\
         <p>&copy; <span id=\"year\">{year}</span> {name}</p>\
         </footer>",
        social = build_social_links(&data.social_links),
        year = current_year(),
        name = html_escape(text_or(&data.name, DEFAULT_NAME)),
    )
}
