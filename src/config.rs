use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use tracing::{info, warn};

use crate::domain::entities::preferences::Theme;
use crate::domain::entities::query::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

pub const DATA_DIR_ENV: &str = "AFFILIATE_DESK_DATA_DIR";
pub const PAGE_SIZE_ENV: &str = "AFFILIATE_DESK_PAGE_SIZE";
pub const SYSTEM_THEME_ENV: &str = "AFFILIATE_DESK_SYSTEM_THEME";

const DB_FILE_NAME: &str = "records.sqlite";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub default_page_size: usize,
    pub system_theme: Theme,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let data_dir = match env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.trim().is_empty() => {
                info!("{DATA_DIR_ENV} set, using {dir}");
                PathBuf::from(dir)
            }
            _ => default_data_dir()?,
        };

        Ok(Self::with_data_dir(
            data_dir,
            env::var(PAGE_SIZE_ENV).ok().as_deref(),
            env::var(SYSTEM_THEME_ENV).ok().as_deref(),
        ))
    }

    /// Builds a config from raw override values. Invalid values are logged
    /// and replaced by defaults.
    pub fn with_data_dir(
        data_dir: PathBuf,
        page_size: Option<&str>,
        system_theme: Option<&str>,
    ) -> Self {
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            data_dir,
            default_page_size: parse_page_size(page_size),
            system_theme: parse_system_theme(system_theme),
        }
    }

    pub fn webview_data_dir(&self) -> Result<PathBuf> {
        ensure_webview_data_dir(&self.data_dir)
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let project_dirs = ProjectDirs::from("com", "affiliate", "affiliate-desk")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))?;
    Ok(project_dirs.data_local_dir().to_path_buf())
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn parse_page_size(raw: Option<&str>) -> usize {
    let Some(raw) = raw else {
        return DEFAULT_PAGE_SIZE;
    };
    match raw.trim().parse::<usize>() {
        Ok(size) if PAGE_SIZE_OPTIONS.contains(&size) => size,
        Ok(size) => {
            warn!("{PAGE_SIZE_ENV}={size} is not one of {PAGE_SIZE_OPTIONS:?}, using default: {DEFAULT_PAGE_SIZE}");
            DEFAULT_PAGE_SIZE
        }
        Err(e) => {
            warn!("Invalid {PAGE_SIZE_ENV} value: {e}, using default: {DEFAULT_PAGE_SIZE}");
            DEFAULT_PAGE_SIZE
        }
    }
}

/// Desktop webviews expose no reliable colour-scheme query, so the platform
/// default is dark unless overridden.
fn parse_system_theme(raw: Option<&str>) -> Theme {
    let Some(raw) = raw else {
        return Theme::Dark;
    };
    raw.parse::<Theme>().unwrap_or_else(|e| {
        warn!("Invalid {SYSTEM_THEME_ENV} value: {e}, using default: dark");
        Theme::Dark
    })
}
