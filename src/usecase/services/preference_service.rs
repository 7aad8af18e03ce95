use std::sync::Arc;

use crate::domain::entities::preferences::{Preferences, Theme};
use crate::usecase::ports::repo::{RecordRepository, RepoError};

/// Theme and sidebar state, owned by the app shell and handed to views.
///
/// Every mutation is written through to the repository. A failed write keeps
/// the in-memory change and is reported to the caller.
pub struct PreferenceService {
    repo: Arc<dyn RecordRepository>,
    system_theme: Theme,
}

impl PreferenceService {
    pub fn new(repo: Arc<dyn RecordRepository>, system_theme: Theme) -> Self {
        Self { repo, system_theme }
    }

    /// Reads persisted preferences, falling back to defaults if the store
    /// cannot be read.
    pub fn init(&self) -> Preferences {
        match self.repo.load_preferences() {
            Ok(stored) => Preferences::resolve(&stored, self.system_theme),
            Err(err) => {
                tracing::warn!("failed to load preferences, using defaults: {err}");
                Preferences::resolve(&Default::default(), self.system_theme)
            }
        }
    }

    pub fn toggle_theme(&self, prefs: &mut Preferences) -> Result<(), RepoError> {
        let next = prefs.theme.toggled();
        self.set_theme(prefs, next)
    }

    /// Choosing a theme explicitly stops following the system theme.
    pub fn set_theme(&self, prefs: &mut Preferences, theme: Theme) -> Result<(), RepoError> {
        prefs.theme = theme;
        prefs.follow_system_theme = false;
        self.persist(prefs)
    }

    pub fn set_follow_system_theme(
        &self,
        prefs: &mut Preferences,
        follow: bool,
    ) -> Result<(), RepoError> {
        prefs.follow_system_theme = follow;
        if follow {
            prefs.theme = self.system_theme;
        }
        self.persist(prefs)
    }

    pub fn toggle_sidebar(&self, prefs: &mut Preferences) -> Result<(), RepoError> {
        prefs.sidebar_collapsed = !prefs.sidebar_collapsed;
        self.persist(prefs)
    }

    fn persist(&self, prefs: &Preferences) -> Result<(), RepoError> {
        self.repo.save_preferences(&prefs.to_entries()).inspect_err(|err| {
            tracing::warn!("failed to save preferences: {err}");
        })
    }
}
