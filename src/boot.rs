use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

/// Required directories that will be created if missing
const REQUIRED_DIRS: &[&str] = &["website"];

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories and warns about an absent site document;
/// the server still starts in that case and renders placeholders.
pub fn run(site_data_path: &str) {
    info!("Folio boot check starting...");

    let mut warnings = 0u32;
    let mut errors = 0u32;

    // ── 1. Directories ─────────────────────────────────
    for dir in REQUIRED_DIRS {
        let path = Path::new(dir);
        if !path.exists() {
            match fs::create_dir_all(path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir, e);
                    errors += 1;
                }
            }
        }
    }

    // ── 2. Site document ───────────────────────────────
    if Path::new(site_data_path).exists() {
        info!("  Site document found: {}", site_data_path);
    } else {
        warn!(
            "  Site document missing: {} (page will render placeholders)",
            site_data_path
        );
        warnings += 1;
    }

    // ── 3. Rocket.toml exists ──────────────────────────
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found, using default config");
        warnings += 1;
    }

    // ── Summary ────────────────────────────────────────
    if errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            errors, warnings
        );
        process::exit(1);
    }

    if warnings > 0 {
        warn!("Boot check passed with {} warning(s).", warnings);
    } else {
        info!("Boot check passed. All systems go.");
    }
}
