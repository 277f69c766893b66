// Rust guideline compliant 2026-10-18

//! A signed-in dashboard over a data directory, for one CLI invocation.

use buildboard_app::{AppError, Dashboard, DataDir, Result, ScriptedAuth};
use buildboard_core::{default_resources, AuthUser, Build, Config, Error as CoreError, Resource};
use std::sync::Arc;

/// The dashboard a command runs against, signed in as the configured user.
pub struct Session {
    config: Config,
    dashboard: Dashboard,
}

impl Session {
    /// Loads the directory's configuration and applies command-line
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be read or is invalid
    /// after the overrides.
    pub fn load_config(
        data_dir: &DataDir,
        user: Option<String>,
        log_level: Option<String>,
    ) -> Result<Config> {
        let mut config = data_dir.load_config()?;
        if let Some(user) = user {
            config.user_id = user;
        }
        if let Some(level) = log_level {
            config.log_level = level;
        }
        config.validate()?;
        Ok(config)
    }

    /// Opens the data directory's store and signs in as `config.user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be opened.
    pub fn new(data_dir: &DataDir, config: Config) -> Result<Self> {
        let store = Arc::new(data_dir.open_store()?);
        let auth = ScriptedAuth::signed_in(AuthUser {
            uid: config.user_id.clone(),
            display_name: None,
            email: None,
        });

        let mut dashboard = Dashboard::new(store, Arc::new(auth), &config);
        dashboard.start();
        tracing::debug!(user = %config.user_id, root = %data_dir.root().display(), "session opened");

        Ok(Self { config, dashboard })
    }

    /// Returns the effective configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the dashboard.
    #[must_use]
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Returns the dashboard for search and tab changes.
    pub fn dashboard_mut(&mut self) -> &mut Dashboard {
        &mut self.dashboard
    }

    /// Finds one of the user's builds by full ID or unique ID prefix.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing matches and `InvalidInput` if the
    /// prefix is ambiguous.
    pub fn find_build(&self, id: &str) -> Result<Build> {
        resolve(self.dashboard.builds().builds(), id, |build| &build.id)
    }

    /// Finds a built-in or custom resource by full ID or unique ID prefix.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if nothing matches and `InvalidInput` if the
    /// prefix is ambiguous.
    pub fn find_resource(&self, id: &str) -> Result<Resource> {
        let mut all = default_resources();
        all.extend(self.dashboard.resources().custom_resources());
        resolve(all, id, |resource| &resource.id)
    }
}

fn resolve<T, F>(items: Vec<T>, id: &str, id_of: F) -> Result<T>
where
    F: Fn(&T) -> &String,
{
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::Core(CoreError::NotFound(id.to_string())));
    }

    let mut matches: Vec<T> = Vec::new();
    for item in items {
        if id_of(&item) == id {
            return Ok(item);
        }
        if id_of(&item).starts_with(id) {
            matches.push(item);
        }
    }

    match matches.len() {
        0 => Err(AppError::Core(CoreError::NotFound(id.to_string()))),
        1 => Ok(matches.remove(0)),
        n => Err(AppError::InvalidInput(format!(
            "ID prefix '{id}' matches {n} documents"
        ))),
    }
}
