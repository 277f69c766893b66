// Rust guideline compliant 2026-10-18

//! Danish display text for statuses and timestamps.

use crate::{BuildStatus, GuideStatus};
use chrono::{DateTime, Datelike, Utc};

const MONTHS: [&str; 12] = [
    "jan.", "feb.", "mar.", "apr.", "maj", "jun.", "jul.", "aug.", "sep.", "okt.", "nov.", "dec.",
];

/// Returns the label for a build status.
#[must_use]
pub fn status_text(status: BuildStatus) -> &'static str {
    match status {
        BuildStatus::Active => "Aktiv",
        BuildStatus::Paused => "Pause",
        BuildStatus::Completed => "Færdig",
    }
}

/// Returns the one-character indicator for a guide status.
#[must_use]
pub fn guide_indicator(status: Option<GuideStatus>) -> &'static str {
    match status {
        Some(GuideStatus::UpToDate) => "✓",
        Some(GuideStatus::Outdated) => "⚠",
        Some(GuideStatus::Unknown) | None => "?",
    }
}

/// Returns the label for a guide status.
#[must_use]
pub fn guide_text(status: Option<GuideStatus>) -> &'static str {
    match status {
        Some(GuideStatus::UpToDate) => "Guide opdateret",
        Some(GuideStatus::Outdated) => "Guide forældet",
        Some(GuideStatus::Unknown) | None => "Guide ukendt",
    }
}

/// Formats when a build was last opened, relative to `now`.
///
/// Under a minute is "Lige nu"; minutes, hours and days are counted up to 30
/// days, after which the date is shown (with the year when older than a
/// year).
#[must_use]
pub fn format_last_opened(timestamp: Option<i64>, now: DateTime<Utc>) -> String {
    let Some(timestamp) = timestamp else {
        return "Aldrig".to_string();
    };
    let Some(opened) = DateTime::<Utc>::from_timestamp(timestamp, 0) else {
        return "Aldrig".to_string();
    };

    let elapsed = now.signed_duration_since(opened);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        return "Lige nu".to_string();
    }
    if minutes < 60 {
        let unit = if minutes == 1 { "minut" } else { "minutter" };
        return format!("{minutes} {unit} siden");
    }
    if hours < 24 {
        let unit = if hours == 1 { "time" } else { "timer" };
        return format!("{hours} {unit} siden");
    }
    if days < 30 {
        let unit = if days == 1 { "dag" } else { "dage" };
        return format!("{days} {unit} siden");
    }

    let month = MONTHS[opened.month0() as usize];
    if days > 365 {
        format!("{}. {} {}", opened.day(), month, opened.year())
    } else {
        format!("{}. {}", opened.day(), month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0)
            .single()
            .expect("valid date")
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_text(BuildStatus::Completed), "Færdig");
        assert_eq!(guide_indicator(Some(GuideStatus::Outdated)), "⚠");
        assert_eq!(guide_text(None), "Guide ukendt");
    }

    #[test]
    fn test_relative_times() {
        let now = now();
        let ts = now.timestamp();
        assert_eq!(format_last_opened(None, now), "Aldrig");
        assert_eq!(format_last_opened(Some(ts - 30), now), "Lige nu");
        assert_eq!(format_last_opened(Some(ts - 60), now), "1 minut siden");
        assert_eq!(format_last_opened(Some(ts - 5 * 60), now), "5 minutter siden");
        assert_eq!(format_last_opened(Some(ts - 3600), now), "1 time siden");
        assert_eq!(format_last_opened(Some(ts - 2 * 86_400), now), "2 dage siden");
    }

    #[test]
    fn test_old_dates() {
        let now = now();
        let january = Utc
            .with_ymd_and_hms(2025, 1, 3, 12, 0, 0)
            .single()
            .expect("valid date");
        assert_eq!(format_last_opened(Some(january.timestamp()), now), "3. jan.");

        let old = Utc
            .with_ymd_and_hms(2023, 11, 20, 12, 0, 0)
            .single()
            .expect("valid date");
        assert_eq!(format_last_opened(Some(old.timestamp()), now), "20. nov. 2023");
    }
}
