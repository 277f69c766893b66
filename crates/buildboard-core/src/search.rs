// Rust guideline compliant 2026-10-18

//! Build list filtering and debounced search.

use crate::{Build, BuildStatus, Error, GameVersion, Result};
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Default delay between the last keystroke and the query taking effect.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Status/version filter applied before the text query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildFilter {
    /// Every build.
    #[default]
    All,
    /// Builds with status `active`.
    Active,
    /// Builds for one game.
    Version(GameVersion),
}

impl FromStr for BuildFilter {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "all" => Ok(BuildFilter::All),
            "active" => Ok(BuildFilter::Active),
            other => other
                .parse::<GameVersion>()
                .map(BuildFilter::Version)
                .map_err(|_| Error::InvalidValue {
                    kind: "build filter",
                    value: value.to_string(),
                }),
        }
    }
}

impl fmt::Display for BuildFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildFilter::All => f.write_str("all"),
            BuildFilter::Active => f.write_str("active"),
            BuildFilter::Version(version) => write!(f, "{version}"),
        }
    }
}

impl BuildFilter {
    /// Returns true if the build passes the filter.
    #[must_use]
    pub fn matches(&self, build: &Build) -> bool {
        match self {
            BuildFilter::All => true,
            BuildFilter::Active => build.build_status == BuildStatus::Active,
            BuildFilter::Version(version) => build.game_version == *version,
        }
    }
}

/// Returns true if the build name or character name contains `query`,
/// ignoring case. `query` must already be lowercase.
fn matches_query(build: &Build, query: &str) -> bool {
    build.build_name.to_lowercase().contains(query)
        || build
            .character_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(query))
}

/// Applies the filter, then the text query, preserving input order.
///
/// # Arguments
///
/// * `builds` - Builds to filter
/// * `filter` - Status/version filter
/// * `query` - Case-insensitive substring; empty matches everything
///
/// # Returns
///
/// The matching builds.
pub fn filter_builds(builds: &[Build], filter: BuildFilter, query: &str) -> Vec<Build> {
    const PARALLEL_THRESHOLD: usize = 1_000;

    let query = query.to_lowercase();
    let predicate = |build: &&Build| {
        filter.matches(build) && (query.is_empty() || matches_query(build, &query))
    };

    if builds.len() >= PARALLEL_THRESHOLD {
        builds.par_iter().filter(predicate).cloned().collect()
    } else {
        builds.iter().filter(predicate).cloned().collect()
    }
}

/// Search and filter state behind a build list.
///
/// Text input is debounced: [`set_query`](Self::set_query) records the input
/// and a deadline, and [`poll`](Self::poll) promotes it to the effective
/// query once the deadline has passed. Time is passed in by the caller.
#[derive(Debug, Clone)]
pub struct SearchState {
    filter: BuildFilter,
    input: String,
    debounced: String,
    deadline: Option<Instant>,
    delay: Duration,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl SearchState {
    /// Creates search state with the given debounce delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            filter: BuildFilter::All,
            input: String::new(),
            debounced: String::new(),
            deadline: None,
            delay,
        }
    }

    /// Returns the active filter.
    #[must_use]
    pub fn filter(&self) -> BuildFilter {
        self.filter
    }

    /// Sets the filter. Filters apply immediately.
    pub fn set_filter(&mut self, filter: BuildFilter) {
        self.filter = filter;
    }

    /// Returns the raw input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the query currently in effect.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.debounced
    }

    /// Returns true if an input change is waiting for its deadline.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Records new input text; it takes effect `delay` after `now`. A newer
    /// input restarts the delay.
    pub fn set_query(&mut self, text: impl Into<String>, now: Instant) {
        self.input = text.into();
        self.deadline = Some(now + self.delay);
    }

    /// Applies pending input whose deadline has passed.
    ///
    /// # Returns
    ///
    /// True if the effective query changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => self.flush(),
            _ => false,
        }
    }

    /// Applies pending input immediately.
    ///
    /// # Returns
    ///
    /// True if the effective query changed.
    pub fn flush(&mut self) -> bool {
        if self.deadline.take().is_none() {
            return false;
        }
        if self.debounced == self.input {
            return false;
        }
        self.debounced = self.input.clone();
        true
    }

    /// Drops pending input without applying it.
    pub fn cleanup(&mut self) {
        self.deadline = None;
    }

    /// Returns the builds that pass the current filter and query.
    #[must_use]
    pub fn apply(&self, builds: &[Build]) -> Vec<Build> {
        filter_builds(builds, self.filter, &self.debounced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(name: &str, character: Option<&str>, version: GameVersion, status: BuildStatus) -> Build {
        Build {
            id: format!("bld-{name}"),
            user_id: "u1".to_string(),
            build_name: name.to_string(),
            game_version: version,
            character_name: character.map(str::to_string),
            league: None,
            build_status: status,
            guide_status: None,
            pob_link: None,
            guide_link: None,
            notes: None,
            created_at: 1000,
            updated_at: 1000,
            last_opened: None,
        }
    }

    fn sample() -> Vec<Build> {
        vec![
            build("Tornado Shot", Some("RangerDan"), GameVersion::Poe1, BuildStatus::Active),
            build("Boneshatter", None, GameVersion::Poe1, BuildStatus::Paused),
            build("Spark Stormweaver", Some("Zappy"), GameVersion::Poe2, BuildStatus::Active),
        ]
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse::<BuildFilter>().ok(), Some(BuildFilter::All));
        assert_eq!(
            "POE2".parse::<BuildFilter>().ok(),
            Some(BuildFilter::Version(GameVersion::Poe2))
        );
        assert!("paused".parse::<BuildFilter>().is_err());
    }

    #[test]
    fn test_filter_then_query() {
        let builds = sample();
        assert_eq!(filter_builds(&builds, BuildFilter::Active, "").len(), 2);
        assert_eq!(
            filter_builds(&builds, BuildFilter::Version(GameVersion::Poe1), "").len(),
            2
        );

        let found = filter_builds(&builds, BuildFilter::All, "zAPP");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].build_name, "Spark Stormweaver");

        assert!(filter_builds(&builds, BuildFilter::Version(GameVersion::Poe2), "tornado").is_empty());
    }

    #[test]
    fn test_debounce_waits_for_deadline() {
        let start = Instant::now();
        let mut search = SearchState::default();
        search.set_query("spark", start);
        assert!(search.is_pending());
        assert!(!search.poll(start + Duration::from_millis(299)));
        assert_eq!(search.query(), "");

        assert!(search.poll(start + Duration::from_millis(300)));
        assert_eq!(search.query(), "spark");
        assert_eq!(search.apply(&sample()).len(), 1);
    }

    #[test]
    fn test_new_input_restarts_delay() {
        let start = Instant::now();
        let mut search = SearchState::new(Duration::from_millis(100));
        search.set_query("sp", start);
        search.set_query("spark", start + Duration::from_millis(80));
        assert!(!search.poll(start + Duration::from_millis(150)));
        assert!(search.poll(start + Duration::from_millis(180)));
        assert_eq!(search.query(), "spark");
    }

    #[test]
    fn test_cleanup_cancels_pending() {
        let start = Instant::now();
        let mut search = SearchState::default();
        search.set_query("bone", start);
        search.cleanup();
        assert!(!search.poll(start + Duration::from_secs(5)));
        assert_eq!(search.query(), "");
        assert_eq!(search.input(), "bone");
    }
}
