use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const THEME_KEY: &str = "affiliate-theme";
pub const SIDEBAR_COLLAPSED_KEY: &str = "affiliate-sidebarCollapsed";
pub const FOLLOW_SYSTEM_THEME_KEY: &str = "affiliate-followSystemTheme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other:?}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub follow_system_theme: bool,
    pub sidebar_collapsed: bool,
}

impl Preferences {
    /// Resolves start-up preferences from persisted key/value pairs.
    ///
    /// Following the system theme wins over a saved theme; a missing or
    /// unreadable saved theme falls back to light. Unreadable flags read as
    /// `false`.
    pub fn resolve(stored: &BTreeMap<String, String>, system_theme: Theme) -> Self {
        let follow_system_theme = read_flag(stored, FOLLOW_SYSTEM_THEME_KEY);
        let sidebar_collapsed = read_flag(stored, SIDEBAR_COLLAPSED_KEY);

        let theme = if follow_system_theme {
            system_theme
        } else {
            stored
                .get(THEME_KEY)
                .and_then(|value| match value.parse::<Theme>() {
                    Ok(theme) => Some(theme),
                    Err(err) => {
                        tracing::warn!("ignoring saved theme: {err}");
                        None
                    }
                })
                .unwrap_or_default()
        };

        Self {
            theme,
            follow_system_theme,
            sidebar_collapsed,
        }
    }

    pub fn to_entries(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (THEME_KEY.to_string(), self.theme.to_string()),
            (
                FOLLOW_SYSTEM_THEME_KEY.to_string(),
                self.follow_system_theme.to_string(),
            ),
            (
                SIDEBAR_COLLAPSED_KEY.to_string(),
                self.sidebar_collapsed.to_string(),
            ),
        ])
    }
}

fn read_flag(stored: &BTreeMap<String, String>, key: &str) -> bool {
    stored.get(key).map(|value| value == "true").unwrap_or(false)
}
