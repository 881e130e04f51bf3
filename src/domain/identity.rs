// ============================================================
// Layer 3 — Document Identity
// ============================================================
// A document's logical identity comes from its path alone,
// never from its content. Two corpus layouts exist:
//
//   Current layout                 Historical layout
//   ──────────────                 ─────────────────
//   <root>/                        <root>/
//     <service>/                     <service>/
//       <name>.md                      <name>/
//                                        <version date>.md
//
// The layout is chosen once by the caller; the resulting
// Identity enum carries exactly the fields that layout has,
// so nothing downstream re-checks a "historical" flag.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::domain::error::{CguError, CguResult};

/// How the whole-second part of a `version_date` is rendered
pub const VERSION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which naming convention a corpus follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// `<service>/<name>.md`
    Current,
    /// `<service>/<name>/<iso date>.md`
    Historical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Current {
        service: String,
        name:    String,
    },
    Historical {
        service:      String,
        name:         String,
        version_date: VersionDate,
    },
}

/// A version stamp exactly as the file stem wrote it: the
/// wall-clock date and time, and the UTC offset if one was given.
///
/// Rendered as `2020-01-15 00:30:00`, with microseconds when the
/// stem had a fraction (`.500000`) and the offset last (`+01:00`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionDate {
    datetime: NaiveDateTime,
    offset:   Option<FixedOffset>,
}

impl VersionDate {
    pub fn new(datetime: NaiveDateTime, offset: Option<FixedOffset>) -> Self {
        Self { datetime, offset }
    }

    /// Wall-clock date and time, never shifted to UTC
    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        self.offset
    }
}

impl fmt::Display for VersionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.format(VERSION_DATE_FORMAT))?;

        let nanos = self.datetime.nanosecond();
        if nanos % 1_000 != 0 {
            write!(f, "{}", self.datetime.format("%.9f"))?;
        } else if nanos != 0 {
            write!(f, "{}", self.datetime.format("%.6f"))?;
        }

        if let Some(offset) = self.offset {
            write!(f, "{offset}")?;
        }
        Ok(())
    }
}

impl Identity {
    /// Derive an identity from a document path.
    ///
    /// Fails with `MalformedPath` if the path lacks the parent
    /// directories the layout needs, and with `MalformedVersionDate`
    /// if a historical file stem is not an ISO-8601 date/time.
    pub fn from_path(path: &Path, layout: Layout) -> CguResult<Self> {
        let stem = file_stem(path)?;

        match layout {
            Layout::Current => Ok(Identity::Current {
                service: ancestor_name(path, 1)?,
                name:    stem,
            }),
            Layout::Historical => {
                let version_date = parse_version_date(&stem).ok_or_else(|| {
                    CguError::MalformedVersionDate {
                        path: path.to_path_buf(),
                        stem: stem.clone(),
                    }
                })?;
                Ok(Identity::Historical {
                    service: ancestor_name(path, 2)?,
                    name:    ancestor_name(path, 1)?,
                    version_date,
                })
            }
        }
    }

    pub fn service(&self) -> &str {
        match self {
            Identity::Current { service, .. } | Identity::Historical { service, .. } => service,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Identity::Current { name, .. } | Identity::Historical { name, .. } => name,
        }
    }

    pub fn version_date(&self) -> Option<VersionDate> {
        match self {
            Identity::Current { .. } => None,
            Identity::Historical { version_date, .. } => Some(*version_date),
        }
    }

    pub fn is_historical(&self) -> bool {
        matches!(self, Identity::Historical { .. })
    }

    /// Unique report key: `service - name` or `service - name - date`
    pub fn fullname(&self) -> String {
        match self {
            Identity::Current { service, name } => format!("{service} - {name}"),
            Identity::Historical { service, name, version_date } => {
                format!("{service} - {name} - {version_date}")
            }
        }
    }
}

/// Parse an ISO-8601 date or date-time.
///
/// Accepts a bare date (midnight), `T` or space separated
/// date-times with optional seconds and fraction, and RFC 3339
/// stamps with an offset. The offset is kept alongside the
/// wall-clock time, not applied to it.
pub fn parse_version_date(s: &str) -> Option<VersionDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(VersionDate::new(dt.naive_local(), Some(*dt.offset())));
    }

    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(VersionDate::new(dt, None));
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| VersionDate::new(dt, None))
}

fn file_stem(path: &Path) -> CguResult<String> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| CguError::MalformedPath {
            path:   path.to_path_buf(),
            reason: "no file name".to_string(),
        })
}

/// Name of the directory `depth` levels above the file (1 = parent)
fn ancestor_name(path: &Path, depth: usize) -> CguResult<String> {
    path.ancestors()
        .nth(depth)
        .and_then(|p| p.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| CguError::MalformedPath {
            path:   path.to_path_buf(),
            reason: format!("expected at least {depth} parent directories"),
        })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_identity() {
        let path = Path::new("tests/data/FakeService/Community Guidelines.md");
        let id = Identity::from_path(path, Layout::Current).unwrap();
        assert_eq!(id.service(), "FakeService");
        assert_eq!(id.name(), "Community Guidelines");
        assert_eq!(id.version_date(), None);
        assert_eq!(id.fullname(), "FakeService - Community Guidelines");
    }

    #[test]
    fn test_historical_identity() {
        let path = Path::new("data/Instagram/Community Guidelines/2020-01-15.md");
        let id = Identity::from_path(path, Layout::Historical).unwrap();
        assert_eq!(id.service(), "Instagram");
        assert_eq!(id.name(), "Community Guidelines");
        assert_eq!(
            id.version_date().map(|v| v.datetime()),
            NaiveDate::from_ymd_opt(2020, 1, 15).and_then(|d| d.and_hms_opt(0, 0, 0))
        );
        assert!(id.is_historical());
        assert_eq!(
            id.fullname(),
            "Instagram - Community Guidelines - 2020-01-15 00:00:00"
        );
    }

    #[test]
    fn test_historical_identity_with_time() {
        let path = Path::new("Twitter/Privacy Policy/2021-03-04T05:06:07.md");
        let id = Identity::from_path(path, Layout::Historical).unwrap();
        assert_eq!(id.fullname(), "Twitter - Privacy Policy - 2021-03-04 05:06:07");
    }

    #[test]
    fn test_historical_rejects_non_iso_stem() {
        let path = Path::new("Instagram/Community Guidelines/latest.md");
        let err = Identity::from_path(path, Layout::Historical).unwrap_err();
        match err {
            CguError::MalformedVersionDate { stem, .. } => assert_eq!(stem, "latest"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_current_needs_a_service_directory() {
        let err = Identity::from_path(Path::new("Terms.md"), Layout::Current).unwrap_err();
        assert!(matches!(err, CguError::MalformedPath { .. }));
    }

    #[test]
    fn test_historical_needs_a_grandparent() {
        let path = Path::new("Community Guidelines/2020-01-15.md");
        let err = Identity::from_path(path, Layout::Historical).unwrap_err();
        assert!(matches!(err, CguError::MalformedPath { .. }));
    }

    #[test]
    fn test_historical_identity_keeps_offset_wall_clock() {
        let path = Path::new("Instagram/Terms/2020-01-15T00:30:00+01:00.md");
        let id = Identity::from_path(path, Layout::Historical).unwrap();
        let date = id.version_date().unwrap();
        assert_eq!(
            date.datetime().date(),
            NaiveDate::from_ymd_opt(2020, 1, 15).unwrap()
        );
        assert_eq!(date.offset(), FixedOffset::east_opt(3600));
        assert_eq!(id.fullname(), "Instagram - Terms - 2020-01-15 00:30:00+01:00");
    }

    #[test]
    fn test_sub_second_stems_stay_distinct() {
        let a = Identity::from_path(
            Path::new("Twitter/Privacy Policy/2021-03-04T05:06:07.5.md"),
            Layout::Historical,
        )
        .unwrap();
        let b = Identity::from_path(
            Path::new("Twitter/Privacy Policy/2021-03-04T05:06:07.25.md"),
            Layout::Historical,
        )
        .unwrap();
        assert_eq!(a.fullname(), "Twitter - Privacy Policy - 2021-03-04 05:06:07.500000");
        assert_eq!(b.fullname(), "Twitter - Privacy Policy - 2021-03-04 05:06:07.250000");
    }

    #[test]
    fn test_parse_version_date_variants() {
        let midnight = NaiveDate::from_ymd_opt(2020, 1, 15)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        let plain = Some(VersionDate::new(midnight, None));
        assert_eq!(parse_version_date("2020-01-15"), plain);
        assert_eq!(parse_version_date("2020-01-15T00:00"), plain);
        assert_eq!(parse_version_date("2020-01-15 00:00:00"), plain);
        assert_eq!(
            parse_version_date("2020-01-15T00:00:00Z"),
            Some(VersionDate::new(midnight, FixedOffset::east_opt(0)))
        );
        assert_eq!(parse_version_date("2020-13-15"), None);
        assert_eq!(parse_version_date("yesterday"), None);
    }

    #[test]
    fn test_version_date_rendering() {
        let render = |s: &str| parse_version_date(s).unwrap().to_string();
        assert_eq!(render("2020-01-15"), "2020-01-15 00:00:00");
        assert_eq!(render("2020-01-15T00:00:00Z"), "2020-01-15 00:00:00+00:00");
        assert_eq!(render("2020-01-15T23:30:00-05:00"), "2020-01-15 23:30:00-05:00");
        assert_eq!(render("2020-01-15 10:11:12.123456"), "2020-01-15 10:11:12.123456");
    }
}
