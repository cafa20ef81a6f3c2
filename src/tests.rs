#![cfg(test)]

use rocket::http::ContentType;
use rocket::local::blocking::Client;
use serde_json::Value;
use std::fs;

use crate::behavior;
use crate::contact::{
    deliver, ContactSubmission, ERR_EMAIL, ERR_MESSAGE, ERR_NAME, MSG_RATE_LIMITED, MSG_SENT,
};
use crate::rate_limit::ContactLimiter;
use crate::render::{self, FormView, Theme, DEFAULT_NAME, DEFAULT_ROLE};
use crate::sections;
use crate::site::{Project, SiteData, Skill, SocialLink};

/// Atomic counter for unique temp-file names so parallel tests don't collide.
static TEST_FILE_COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

fn temp_path(suffix: &str) -> std::path::PathBuf {
    let id = TEST_FILE_COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    std::env::temp_dir().join(format!("folio_test_{}_{}", id, suffix))
}

fn sample_data() -> SiteData {
    SiteData {
        name: "Alex Mercer".into(),
        role: "Systems Engineer".into(),
        tagline: "I build fast, boring, reliable software.".into(),
        bio: "Engineer with a soft spot for performance work.".into(),
        email: "alex@example.dev".into(),
        location: "Lisbon, Portugal".into(),
        skills: vec![
            Skill { name: "Go".into(), level: 80 },
            Skill { name: "Rust".into(), level: 60 },
        ],
        projects: vec![Project {
            title: "chunkstore".into(),
            description: "Content-addressed blob store.".into(),
            image: "/static/images/chunkstore.png".into(),
            repo: "https://github.com/example/chunkstore".into(),
            live: "".into(),
            tech: "Rust, RocksDB, gRPC".into(),
        }],
        social_links: vec![
            SocialLink { platform: "GitHub".into(), url: "https://github.com/example".into() },
            SocialLink { platform: "Mastodon".into(), url: "https://hachyderm.io/@example".into() },
        ],
    }
}

fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
    ContactSubmission {
        name: name.into(),
        email: email.into(),
        message: message.into(),
    }
}

// ═══════════════════════════════════════════════════════════
// Site document
// ═══════════════════════════════════════════════════════════

#[test]
fn site_data_parses_full_document() {
    let raw = r#"{
        "name": "Jo",
        "role": "Dev",
        "skills": [{"name": "Rust", "level": 85}],
        "projects": [{"title": "p", "tech": "a,b"}],
        "socialLinks": [{"platform": "GitHub", "url": "https://github.com/jo"}]
    }"#;
    let data: SiteData = serde_json::from_str(raw).unwrap();
    assert_eq!(data.name, "Jo");
    assert_eq!(data.skills.len(), 1);
    assert_eq!(data.skills[0].level, 85);
    assert_eq!(data.projects[0].title, "p");
    assert_eq!(data.social_links[0].platform, "GitHub");
    // Unlisted fields fall back to their defaults
    assert!(data.bio.is_empty());
    assert!(data.location.is_empty());
}

#[test]
fn malformed_document_falls_back_to_defaults() {
    let path = temp_path("bad.json");
    fs::write(&path, "{ not valid json !!").unwrap();
    let data = SiteData::load_or_default(&path);
    assert!(data.name.is_empty());
    assert!(data.skills.is_empty());
    let _ = fs::remove_file(&path);
}

#[test]
fn missing_document_falls_back_to_defaults() {
    let path = temp_path("missing.json");
    let data = SiteData::load_or_default(&path);
    assert!(data.projects.is_empty());
}

#[test]
fn loaded_document_round_trips() {
    let path = temp_path("good.json");
    fs::write(
        &path,
        r#"{"name":"Jo","skills":[{"name":"Go","level":70}]}"#,
    )
    .unwrap();
    let data = SiteData::load_or_default(&path);
    assert_eq!(data.name, "Jo");
    assert_eq!(data.skills[0].name, "Go");
    let _ = fs::remove_file(&path);
}

#[test]
fn skill_level_is_clamped_for_rendering() {
    assert_eq!(Skill { name: "a".into(), level: -20 }.clamped_level(), 0);
    assert_eq!(Skill { name: "b".into(), level: 150 }.clamped_level(), 100);
    assert_eq!(Skill { name: "c".into(), level: 80 }.clamped_level(), 80);
}

#[test]
fn tech_tags_split_and_trimmed() {
    let project = Project { tech: " Rust , RocksDB,gRPC ".into(), ..Default::default() };
    assert_eq!(project.tech_tags(), vec!["Rust", "RocksDB", "gRPC"]);
}

#[test]
fn tech_tags_drop_empty_segments() {
    let project = Project { tech: "Go,,Rust,".into(), ..Default::default() };
    assert_eq!(project.tech_tags(), vec!["Go", "Rust"]);
    let blank = Project { tech: "  ".into(), ..Default::default() };
    assert!(blank.tech_tags().is_empty());
}

// ═══════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════

#[test]
fn valid_submission_passes() {
    let errors = submission("Al", "al@example.com", "Hello there!").validate();
    assert!(errors.is_empty());
}

#[test]
fn all_failures_reported_together() {
    let errors = submission("A", "bad", "short").validate();
    assert_eq!(
        errors,
        vec![
            ("name", ERR_NAME),
            ("email", ERR_EMAIL),
            ("message", ERR_MESSAGE),
        ]
    );
}

#[test]
fn name_requires_two_characters() {
    assert_eq!(
        submission("A", "al@example.com", "Hello there!").validate(),
        vec![("name", ERR_NAME)]
    );
    // Multibyte names are measured in characters, not bytes
    assert!(submission("Ál", "al@example.com", "Hello there!")
        .validate()
        .is_empty());
}

#[test]
fn message_requires_ten_characters() {
    assert_eq!(
        submission("Al", "al@example.com", "too short").validate(),
        vec![("message", ERR_MESSAGE)]
    );
    assert!(submission("Al", "al@example.com", "long enough").validate().is_empty());
}

#[test]
fn email_pattern_rules() {
    let ok = |email: &str| submission("Al", email, "Hello there!").validate().is_empty();
    assert!(ok("al@example.com"));
    assert!(ok("a@b.c"));
    assert!(ok(" al@example.com ")); // trimmed before matching
    assert!(!ok("bad"));
    assert!(!ok("a@b")); // no dot after the @
    assert!(!ok("a b@c.com")); // inner whitespace
    assert!(!ok("a@@b.com")); // more than one @
    assert!(!ok("a@b@c.com"));
    assert!(!ok(""));
}

#[test]
fn fields_are_trimmed_before_checks() {
    assert!(submission("  Al  ", "al@example.com", "  Hello there!  ")
        .validate()
        .is_empty());
    // Nine characters plus padding still fails
    assert_eq!(
        submission("Al", "al@example.com", "  123456789  ").validate(),
        vec![("message", ERR_MESSAGE)]
    );
}

#[test]
fn delivery_succeeds_after_delay() {
    let rt = rocket::tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap();
    let start = std::time::Instant::now();
    let result = rt.block_on(deliver(&submission("Al", "al@example.com", "Hello there!")));
    assert!(result.is_ok());
    assert!(start.elapsed().as_millis() >= 800);
}

// ═══════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════

#[test]
fn skills_render_one_bar_per_skill() {
    let skills = vec![
        Skill { name: "Go".into(), level: 80 },
        Skill { name: "Rust".into(), level: 60 },
        Skill { name: "Weird".into(), level: 150 },
    ];
    let html = sections::build_skills(&skills);
    assert_eq!(html.matches("data-level=").count(), 3);
    assert!(html.contains("data-level=\"100\"")); // clamped
    // No width is applied server-side; the reveal script animates it
    assert!(!html.contains("width:"));
}

#[test]
fn skills_scenario_go_rust() {
    let skills = vec![
        Skill { name: "Go".into(), level: 80 },
        Skill { name: "Rust".into(), level: 60 },
    ];
    let html = sections::build_skills(&skills);
    assert!(html.contains("<span>Go</span><span>80%</span>"));
    assert!(html.contains("<span>Rust</span><span>60%</span>"));
    assert!(html.contains("data-level=\"80\""));
    assert!(html.contains("data-level=\"60\""));
    // Document order preserved
    assert!(html.find("Go").unwrap() < html.find("Rust").unwrap());
}

#[test]
fn project_card_contents() {
    let html = sections::build_projects(&sample_data().projects);
    assert!(html.contains("<h3>chunkstore</h3>"));
    assert!(html.contains("<li>Rust</li><li>RocksDB</li><li>gRPC</li>"));
    assert!(html.contains("target=\"_blank\" rel=\"noopener noreferrer\""));
    assert!(html.contains("loading=\"lazy\""));
    // Empty live URL renders no second link
    assert_eq!(html.matches("target=\"_blank\"").count(), 1);
}

#[test]
fn rendering_escapes_document_strings() {
    let mut data = sample_data();
    data.projects[0].title = "<script>alert(1)</script>".into();
    let html = sections::build_projects(&data.projects);
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[test]
fn social_icon_lookup_with_generic_fallback() {
    let links = sample_data().social_links;
    let html = sections::build_social_links(&links);
    // GitHub resolves to its own glyph, Mastodon to the generic link glyph
    assert!(html.contains("M9 19c-5 1.5-5-2.5-7-3"));
    assert!(html.contains("M10 13a5 5 0 0 0 7.54.54"));
    assert!(html.contains("title=\"Mastodon\""));
}

#[test]
fn social_links_appear_in_contact_and_footer() {
    let data = sample_data();
    let page = render::render_page(&data, Theme::Light, &FormView::default());
    let fragment = sections::build_social_links(&data.social_links);
    assert_eq!(page.matches(fragment.as_str()).count(), 2);
}

#[test]
fn renderers_are_idempotent() {
    let data = sample_data();
    assert_eq!(
        sections::build_skills(&data.skills),
        sections::build_skills(&data.skills)
    );
    assert_eq!(
        sections::build_projects(&data.projects),
        sections::build_projects(&data.projects)
    );
    assert_eq!(
        render::render_page(&data, Theme::Light, &FormView::default()),
        render::render_page(&data, Theme::Light, &FormView::default())
    );
}

#[test]
fn empty_document_renders_placeholders() {
    let page = render::render_page(&SiteData::default(), Theme::Light, &FormView::default());
    assert!(page.contains(DEFAULT_NAME));
    assert!(page.contains(DEFAULT_ROLE));
    assert!(page.contains(&render::current_year()));
}

#[test]
fn document_fields_override_placeholders() {
    let page = render::render_page(&sample_data(), Theme::Light, &FormView::default());
    assert!(page.contains("Alex Mercer"));
    assert!(page.contains("Systems Engineer"));
    assert!(!page.contains(DEFAULT_NAME));
    assert!(!page.contains(DEFAULT_ROLE));
}

#[test]
fn theme_controls_body_class_and_icon() {
    let data = sample_data();
    let light = render::render_page(&data, Theme::Light, &FormView::default());
    let dark = render::render_page(&data, Theme::Dark, &FormView::default());
    assert!(light.contains("<body>"));
    assert!(light.contains("\u{263E}")); // moon while light
    assert!(dark.contains("<body class=\"dark-theme\">"));
    assert!(dark.contains("\u{2600}")); // sun while dark
}

#[test]
fn form_errors_are_decorated_and_values_preserved() {
    let values = submission("A", "bad", "short");
    let errors = values.validate();
    let view = FormView { values, errors, flash: None };
    let page = render::render_page(&sample_data(), Theme::Light, &view);
    assert!(page.contains(ERR_NAME));
    assert!(page.contains(ERR_EMAIL));
    assert!(page.contains(ERR_MESSAGE));
    assert!(page.contains("border-color:#dc3545"));
    assert!(page.contains("value=\"A\""));
    assert!(page.contains(">short</textarea>"));
}

#[test]
fn clean_form_carries_no_error_decoration() {
    let page = render::render_page(&sample_data(), Theme::Light, &FormView::default());
    assert!(!page.contains("border-color:#dc3545"));
    assert!(!page.contains("field-error\" style"));
}

#[test]
fn flash_banner_renders_by_kind() {
    let success = FormView { flash: Some(("success", MSG_SENT)), ..Default::default() };
    let page = render::render_page(&sample_data(), Theme::Light, &success);
    assert!(page.contains("form-flash-success"));
    assert!(page.contains(MSG_SENT));

    let failure = FormView { flash: Some(("error", "nope")), ..Default::default() };
    let page = render::render_page(&sample_data(), Theme::Light, &failure);
    assert!(page.contains("form-flash-error"));
}

#[test]
fn theme_cookie_round_trip() {
    assert_eq!(Theme::from_cookie_value(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_cookie_value(Some("light")), Theme::Light);
    assert_eq!(Theme::from_cookie_value(Some("purple")), Theme::Light);
    assert_eq!(Theme::from_cookie_value(None), Theme::Light);
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
}

// ═══════════════════════════════════════════════════════════
// Behavior script
// ═══════════════════════════════════════════════════════════

#[test]
fn behavior_script_carries_its_constants() {
    let script = behavior::build_script();
    assert!(script.contains("window.innerWidth>=768"));
    assert!(script.contains("i*150"));
    assert!(script.contains("threshold:0.1"));
    assert!(script.contains("rootMargin:'0px 0px -50px 0px'"));
    assert!(script.contains("#dc3545"));
    assert!(script.contains(ERR_NAME));
    assert!(script.contains(ERR_EMAIL));
    assert!(script.contains(ERR_MESSAGE));
    // Every template token was substituted
    assert!(!script.contains("{{"));
}

#[test]
fn behavior_script_is_embedded_in_the_page() {
    let page = render::render_page(&sample_data(), Theme::Light, &FormView::default());
    assert!(page.contains("IntersectionObserver"));
    assert!(page.contains("'Sending…'") || page.contains("Sending"));
}

// ═══════════════════════════════════════════════════════════
// Rate limiting
// ═══════════════════════════════════════════════════════════

#[test]
fn limiter_allows_then_blocks() {
    let limiter = ContactLimiter::new();
    for _ in 0..5 {
        assert!(limiter.allow("1.2.3.4"));
    }
    assert!(!limiter.allow("1.2.3.4"));
    // Other clients are unaffected
    assert!(limiter.allow("5.6.7.8"));
}

// ═══════════════════════════════════════════════════════════
// Routes
// ═══════════════════════════════════════════════════════════

fn test_client() -> Client {
    Client::tracked(crate::build(sample_data())).expect("valid rocket instance")
}

#[test]
fn page_route_serves_full_document() {
    let client = test_client();
    let response = client.get("/").dispatch();
    assert_eq!(response.status(), rocket::http::Status::Ok);
    let body = response.into_string().unwrap();
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Alex Mercer"));
    assert!(body.contains("id=\"contact-form\""));
}

#[test]
fn api_contact_reports_all_field_errors() {
    let client = test_client();
    let response = client
        .post("/api/contact")
        .header(ContentType::JSON)
        .body(r#"{"name":"A","email":"bad","message":"short"}"#)
        .dispatch();
    let body: Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(body["success"], Value::Bool(false));
    let errors = body["errors"].as_object().unwrap();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors["name"], ERR_NAME);
    assert_eq!(errors["email"], ERR_EMAIL);
    assert_eq!(errors["message"], ERR_MESSAGE);
}

#[test]
fn api_contact_accepts_valid_submission() {
    let client = test_client();
    let response = client
        .post("/api/contact")
        .header(ContentType::JSON)
        .body(r#"{"name":"Al","email":"al@example.com","message":"Hello there!"}"#)
        .dispatch();
    let body: Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["message"], MSG_SENT);
}

#[test]
fn api_contact_rate_limits_after_five_attempts() {
    let client = test_client();
    for _ in 0..5 {
        client
            .post("/api/contact")
            .header(ContentType::JSON)
            .body(r#"{"name":"A","email":"bad","message":"short"}"#)
            .dispatch();
    }
    let response = client
        .post("/api/contact")
        .header(ContentType::JSON)
        .body(r#"{"name":"A","email":"bad","message":"short"}"#)
        .dispatch();
    let body: Value = serde_json::from_str(&response.into_string().unwrap()).unwrap();
    assert_eq!(body["success"], Value::Bool(false));
    assert_eq!(body["error"], MSG_RATE_LIMITED);
}

#[test]
fn contact_fallback_rerenders_with_errors() {
    let client = test_client();
    let response = client
        .post("/contact")
        .header(ContentType::Form)
        .body("name=A&email=bad&message=short")
        .dispatch();
    let body = response.into_string().unwrap();
    assert!(body.contains(ERR_NAME));
    assert!(body.contains(ERR_EMAIL));
    assert!(body.contains(ERR_MESSAGE));
    assert!(body.contains("value=\"A\"")); // submitted values preserved
}

#[test]
fn contact_fallback_clears_form_on_success() {
    let client = test_client();
    let response = client
        .post("/contact")
        .header(ContentType::Form)
        .body("name=Al&email=al%40example.com&message=Hello+there%21")
        .dispatch();
    let body = response.into_string().unwrap();
    assert!(body.contains(MSG_SENT));
    assert!(body.contains("value=\"\"")); // fields reset
    assert!(!body.contains("value=\"Al\""));
}

#[test]
fn theme_route_toggles_cookie() {
    let client = test_client();
    let response = client.post("/theme").dispatch();
    assert_eq!(response.into_string().unwrap(), "dark");
    // Tracked client carries the cookie into the next request
    let response = client.post("/theme").dispatch();
    assert_eq!(response.into_string().unwrap(), "light");
}

#[test]
fn page_honors_theme_cookie() {
    let client = test_client();
    client.post("/theme").dispatch();
    let body = client.get("/").dispatch().into_string().unwrap();
    assert!(body.contains("<body class=\"dark-theme\">"));
}

#[test]
fn unknown_route_hits_catcher() {
    let client = test_client();
    let response = client.get("/definitely-not-here").dispatch();
    assert_eq!(response.status(), rocket::http::Status::NotFound);
    assert!(response.into_string().unwrap().contains("Page not found"));
}
