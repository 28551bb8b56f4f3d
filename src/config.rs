// Configuration for folio
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/folio/config.toml)
// 3. Built-in defaults (lowest priority)

use crate::resolver::ResolverConfig;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Active-section resolver tuning
///
/// These are tuned heuristics with no documented derivation; they stay
/// configurable instead of being folded into the resolver.
#[derive(Debug, Clone)]
pub struct ResolverSettings {
    /// Minimum visible fraction for a section to win unconditionally
    pub meaningful_ratio: f64,

    /// How long (ms) a nav-activation intent bridges a smooth scroll
    pub intent_ms: u64,

    /// Observer silence (ms) after which raw scroll re-resolves
    pub stale_ms: u64,

    /// Sticky-nav height in rows (buffer line for the geometric fallback)
    pub top_buffer_rows: u16,

    /// Viewport band insets: ignore this much of the top/bottom (percent)
    pub band_top_pct: u8,
    pub band_bottom_pct: u8,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            meaningful_ratio: 0.12,
            intent_ms: 900,
            stale_ms: 250,
            top_buffer_rows: 3,
            band_top_pct: 20,
            band_bottom_pct: 70,
        }
    }
}

impl ResolverSettings {
    /// Convert to the resolver's own config type
    pub fn to_resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            meaningful_ratio: self.meaningful_ratio,
            intent_window: Duration::from_millis(self.intent_ms),
            stale_after: Duration::from_millis(self.stale_ms),
            top_buffer: i32::from(self.top_buffer_rows),
        }
    }
}

/// Static export settings
#[derive(Debug, Clone)]
pub struct ExportSettings {
    /// Output directory for the static site
    pub out_dir: PathBuf,

    /// Canonical site URL (robots/sitemap)
    pub site_url: String,

    /// Subpath prefix applied to asset links in production builds
    pub base_path: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("./dist"),
            site_url: "https://example.com".to_string(),
            base_path: "/PersonalPortfolio".to_string(),
        }
    }
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    Daily,
    Never,
}

impl LogRotation {
    fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => LogRotation::Hourly,
            "never" => LogRotation::Never,
            _ => LogRotation::Daily,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Also write logs to rotating files
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_prefix: String,
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "folio".to_string(),
            file_rotation: LogRotation::Daily,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "auto", "dracula", "nord", "gruvbox"
    pub theme: String,

    /// Production flag: apply the base path to exported asset links
    pub production: bool,

    /// Active-section resolver tuning
    pub resolver: ResolverSettings,

    /// Static export settings
    pub export: ExportSettings,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Resolver settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileResolver {
    meaningful_ratio: Option<f64>,
    intent_ms: Option<u64>,
    stale_ms: Option<u64>,
    top_buffer_rows: Option<u16>,
    band_top_pct: Option<u8>,
    band_bottom_pct: Option<u8>,
}

/// Export settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileExport {
    out_dir: Option<String>,
    site_url: Option<String>,
    base_path: Option<String>,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_prefix: Option<String>,
    file_rotation: Option<String>,
}

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    theme: Option<String>,
    production: Option<bool>,

    /// Optional [resolver] section
    resolver: Option<FileResolver>,

    /// Optional [export] section
    export: Option<FileExport>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/folio/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("folio").join("config.toml"))
    }

    /// Create config template if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let template = r#"# folio configuration
# Uncomment and modify options as needed

# Theme: auto, dracula, nord, gruvbox
# theme = "auto"

# Production flag: prefix exported asset links with [export].base_path
# production = false

# Active-section highlighting heuristics (tuned values, change with care)
# [resolver]
# meaningful_ratio = 0.12   # visible fraction at which a section wins outright
# intent_ms = 900           # how long a nav jump bridges the smooth scroll
# stale_ms = 250            # observer silence before scroll re-resolves
# top_buffer_rows = 3       # sticky nav height in rows
# band_top_pct = 20         # viewport band insets
# band_bottom_pct = 70

# Static export
# [export]
# out_dir = "./dist"
# site_url = "https://example.com"
# base_path = "/PersonalPortfolio"

# Logging configuration
# [logging]
# level = "info"            # trace, debug, info, warn, error (RUST_LOG overrides)
# file_enabled = false      # also write rotating log files
# file_dir = "./logs"
# file_prefix = "folio"
# file_rotation = "daily"   # hourly, daily, never
"#;

        // Write template (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                FileConfig::default()
            }),
            Err(_) => FileConfig::default(), // File doesn't exist, use defaults
        }
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# folio configuration

# Theme: auto, dracula, nord, gruvbox
theme = "{theme}"

# Production flag: prefix exported asset links with [export].base_path
production = {production}

# Active-section highlighting heuristics
[resolver]
meaningful_ratio = {ratio}
intent_ms = {intent}
stale_ms = {stale}
top_buffer_rows = {buffer}
band_top_pct = {band_top}
band_bottom_pct = {band_bottom}

# Static export
[export]
out_dir = "{out_dir}"
site_url = "{site_url}"
base_path = "{base_path}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
file_rotation = "{file_rotation}"
"#,
            theme = self.theme,
            production = self.production,
            ratio = self.resolver.meaningful_ratio,
            intent = self.resolver.intent_ms,
            stale = self.resolver.stale_ms,
            buffer = self.resolver.top_buffer_rows,
            band_top = self.resolver.band_top_pct,
            band_bottom = self.resolver.band_bottom_pct,
            out_dir = self.export.out_dir.display(),
            site_url = self.export.site_url,
            base_path = self.export.base_path,
            log_level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            file_rotation = self.logging.file_rotation.as_str(),
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();

        // Theme: env > file > default
        let theme = std::env::var("FOLIO_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or_else(|| "auto".to_string());

        // Production flag: env > file > default
        let production = std::env::var("FOLIO_PRODUCTION")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .ok()
            .or(file.production)
            .unwrap_or(false);

        // Resolver tuning: file config only (env vars would be verbose)
        let defaults = ResolverSettings::default();
        let file_resolver = file.resolver.unwrap_or_default();
        let resolver = ResolverSettings {
            meaningful_ratio: file_resolver
                .meaningful_ratio
                .unwrap_or(defaults.meaningful_ratio),
            intent_ms: file_resolver.intent_ms.unwrap_or(defaults.intent_ms),
            stale_ms: file_resolver.stale_ms.unwrap_or(defaults.stale_ms),
            top_buffer_rows: file_resolver
                .top_buffer_rows
                .unwrap_or(defaults.top_buffer_rows),
            band_top_pct: file_resolver
                .band_top_pct
                .unwrap_or(defaults.band_top_pct)
                .min(100),
            band_bottom_pct: file_resolver
                .band_bottom_pct
                .unwrap_or(defaults.band_bottom_pct)
                .min(100),
        };

        // Export settings: env > file > defaults
        let export_defaults = ExportSettings::default();
        let file_export = file.export.unwrap_or_default();
        let export = ExportSettings {
            out_dir: std::env::var("FOLIO_OUT_DIR")
                .ok()
                .or(file_export.out_dir)
                .map(PathBuf::from)
                .unwrap_or(export_defaults.out_dir),
            site_url: std::env::var("FOLIO_SITE_URL")
                .ok()
                .or(file_export.site_url)
                .unwrap_or(export_defaults.site_url),
            base_path: file_export
                .base_path
                .unwrap_or(export_defaults.base_path),
        };

        // Logging settings: file config only (RUST_LOG env var handled in main.rs)
        let log_defaults = LoggingConfig::default();
        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(log_defaults.level),
            file_enabled: file_logging
                .file_enabled
                .unwrap_or(log_defaults.file_enabled),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(log_defaults.file_dir),
            file_prefix: file_logging.file_prefix.unwrap_or(log_defaults.file_prefix),
            file_rotation: file_logging
                .file_rotation
                .map(|s| LogRotation::from_str(&s))
                .unwrap_or(log_defaults.file_rotation),
        };

        Self {
            theme,
            production,
            resolver,
            export,
            logging,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "auto".to_string(),
            production: false,
            resolver: ResolverSettings::default(),
            export: ExportSettings::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolver_defaults_match_tuned_constants() {
        let r = ResolverSettings::default();
        assert!((r.meaningful_ratio - 0.12).abs() < f64::EPSILON);
        assert_eq!(r.intent_ms, 900);
        assert_eq!(r.stale_ms, 250);
    }

    #[test]
    fn to_toml_round_trips_through_file_parser() {
        let config = Config::default();
        let parsed: FileConfig = toml::from_str(&config.to_toml()).expect("valid toml");
        assert_eq!(parsed.theme.as_deref(), Some("auto"));
        assert_eq!(parsed.production, Some(false));
        let resolver = parsed.resolver.expect("resolver section");
        assert_eq!(resolver.intent_ms, Some(900));
        let logging = parsed.logging.expect("logging section");
        assert_eq!(logging.file_rotation.as_deref(), Some("daily"));
    }

    #[test]
    fn rotation_parsing_defaults_to_daily() {
        assert_eq!(LogRotation::from_str("hourly"), LogRotation::Hourly);
        assert_eq!(LogRotation::from_str("NEVER"), LogRotation::Never);
        assert_eq!(LogRotation::from_str("weekly"), LogRotation::Daily);
    }
}
