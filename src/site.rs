use log::{error, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use url::Url;

/// Site document, loaded once at startup and shared as Rocket managed state.
/// Missing fields deserialize to their defaults; empty strings mean "not
/// provided" and leave the built-in placeholder markup untouched at render
/// time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteData {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    pub location: String,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub social_links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub level: i64,
}

impl Skill {
    /// Percentage used for rendering. Out-of-range levels in the document
    /// degrade to a capped bar instead of breaking the layout.
    pub fn clamped_level(&self) -> i64 {
        self.level.clamp(0, 100)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub repo: String,
    pub live: String,
    pub tech: String,
}

impl Project {
    /// Split the comma-separated `tech` string into trimmed tags.
    /// Empty segments from stray commas are dropped.
    pub fn tech_tags(&self) -> Vec<&str> {
        self.tech
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

impl SiteData {
    /// Read and parse the site document. Any I/O or JSON error is logged and
    /// the server falls back to an empty document, so the page still renders
    /// with its placeholder content.
    pub fn load_or_default(path: &Path) -> SiteData {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "Could not read site document {}: {} (serving placeholders)",
                    path.display(),
                    e
                );
                return SiteData::default();
            }
        };

        match serde_json::from_str::<SiteData>(&raw) {
            Ok(data) => {
                data.check_urls();
                data
            }
            Err(e) => {
                error!(
                    "Malformed site document {}: {} (serving placeholders)",
                    path.display(),
                    e
                );
                SiteData::default()
            }
        }
    }

    /// Warn about external URLs that don't parse. Rendering is unaffected;
    /// a broken link in the document stays a broken link on the page.
    fn check_urls(&self) {
        for project in &self.projects {
            for (label, value) in [("repo", &project.repo), ("live", &project.live)] {
                if !value.is_empty() && Url::parse(value).is_err() {
                    warn!(
                        "Project \"{}\": invalid {} URL: {}",
                        project.title, label, value
                    );
                }
            }
        }
        for link in &self.social_links {
            if !link.url.is_empty() && Url::parse(&link.url).is_err() {
                warn!("Social link \"{}\": invalid URL: {}", link.platform, link.url);
            }
        }
    }
}
