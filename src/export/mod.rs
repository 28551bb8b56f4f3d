// Static export - writes the portfolio as plain files
//
// Produces a fully static site: pre-rendered single-page markup, a robots
// directive, a single-URL sitemap, and two generated SVG icons. No server,
// no build pipeline; the output directory can be served as-is or pushed to
// a static host under a subpath (the base path is applied in production).

pub mod assets;
pub mod html;

use crate::config::Config;
use crate::content;
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::PathBuf;

/// Options resolved from CLI flags + config
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub out_dir: PathBuf,
    pub production: bool,
}

impl ExportOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            out_dir: config.export.out_dir.clone(),
            production: config.production,
        }
    }
}

/// Write the full static export
pub fn run(config: &Config, opts: &ExportOptions) -> Result<()> {
    let out = &opts.out_dir;
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory {}", out.display()))?;

    // Base path only applies to production builds (subpath deployment)
    let base_path = if opts.production {
        config.export.base_path.trim_end_matches('/')
    } else {
        ""
    };

    let portfolio = content::portfolio();

    let page = html::render_page(&portfolio, base_path);
    write_file(out.join("index.html"), &page)?;

    write_file(
        out.join("robots.txt"),
        &assets::robots_txt(&config.export.site_url),
    )?;
    write_file(
        out.join("sitemap.xml"),
        &assets::sitemap_xml(&config.export.site_url, Utc::now().date_naive()),
    )?;
    write_file(out.join("icon.svg"), &assets::app_icon(64))?;
    write_file(out.join("apple-touch-icon.svg"), &assets::app_icon(180))?;

    tracing::info!(
        out_dir = %out.display(),
        production = opts.production,
        "static export complete"
    );
    Ok(())
}

fn write_file(path: PathBuf, contents: &str) -> Result<()> {
    fs::write(&path, contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(file = %path.display(), bytes = contents.len(), "wrote export file");
    Ok(())
}
