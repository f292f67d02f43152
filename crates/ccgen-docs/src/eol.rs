//! EOL table rows

use std::path::Path;

use chrono::{Days, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info, instrument};

use ccgen_core::error::DocError;

use crate::Result;

static TABLE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|Agent version \|EOL Date \|Maintained until").expect("Invalid regex")
});

/// A `major.minor.bugfix` release; the bugfix part may be `x`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    pub major: u64,
    pub minor: u64,
    pub bugfix: String,
}

impl ReleaseVersion {
    /// Parse `major.minor.bugfix`
    pub fn parse(release: &str) -> Result<Self> {
        let invalid = || DocError::InvalidVersion(release.to_string());

        let parts: Vec<&str> = release.split('.').collect();
        let [major, minor, bugfix] = parts.as_slice() else {
            return Err(invalid());
        };
        if bugfix.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            major: major.parse().map_err(|_| invalid())?,
            minor: minor.parse().map_err(|_| invalid())?,
            bugfix: bugfix.to_string(),
        })
    }

    /// The release that follows this one in the table
    pub fn successor(&self, next_major: bool) -> Result<String> {
        let overflow = || DocError::OutOfRange(format!("no release after {}", self));
        if next_major {
            let major = self.major.checked_add(1).ok_or_else(overflow)?;
            Ok(format!("{}.0.0", major))
        } else {
            let minor = self.minor.checked_add(1).ok_or_else(overflow)?;
            Ok(format!("{}.{}.0", self.major, minor))
        }
    }
}

impl std::fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.bugfix)
    }
}

/// Whether a release opens a new major line (`X.0.0` or `X.0.x`)
pub fn is_major(version: &ReleaseVersion) -> bool {
    version.minor == 0 && (version.bugfix == "0" || version.bugfix == "x")
}

/// Index of the line right after the table header
pub fn find_header_marker(lines: &[&str]) -> Result<usize> {
    lines
        .iter()
        .position(|line| TABLE_HEADER.is_match(line))
        .map(|index| index + 1)
        .ok_or_else(|| DocError::MarkerNotFound("EOL table header".to_string()))
}

/// The first row of the previous major line, with the version in its first cell
pub fn last_minor_line(lines: &[&str], current: &ReleaseVersion) -> Result<(usize, String)> {
    let previous_major = current
        .major
        .checked_sub(1)
        .ok_or_else(|| DocError::MarkerNotFound("no major before 0".to_string()))?;
    let prefix = format!("|{}.", previous_major);

    lines
        .iter()
        .enumerate()
        .find(|(_, line)| line.starts_with(&prefix))
        .map(|(index, line)| {
            let version = line.split('|').nth(1).unwrap_or("").trim().to_string();
            (index, version)
        })
        .ok_or_else(|| DocError::MarkerNotFound(format!("row for major {}", previous_major)))
}

/// `|<release> |<eol date> | <next release>` with a trailing newline
pub fn generate_eol_entry(
    release: &ReleaseVersion,
    next_major: bool,
    today: NaiveDate,
    support_days: i64,
) -> Result<String> {
    let eol_date = u64::try_from(support_days)
        .ok()
        .and_then(|days| today.checked_add_days(Days::new(days)))
        .ok_or_else(|| {
            DocError::OutOfRange(format!("{} + {} days is not a valid date", today, support_days))
        })?;
    Ok(format!(
        "|{} |{} | {}\n",
        release,
        eol_date.format("%Y-%m-%d"),
        release.successor(next_major)?
    ))
}

/// Insert the row for `release` and, on a major release, point the previous
/// major's newest row at the new major.
#[instrument(skip(text, release), fields(release = %release))]
pub fn update_eol_table(
    text: &str,
    release: &ReleaseVersion,
    today: NaiveDate,
    support_days: i64,
) -> Result<String> {
    let entry = generate_eol_entry(release, false, today, support_days)?;
    let rewritten;
    let mut lines: Vec<&str> = text.split_inclusive('\n').collect();

    let position = find_header_marker(&lines)?;
    lines.insert(position, &entry);
    debug!(position, "inserted EOL row");

    if is_major(release) {
        let (index, previous) = last_minor_line(&lines, release)?;
        let previous = ReleaseVersion::parse(&previous)?;
        rewritten = generate_eol_entry(&previous, true, today, support_days)?;
        lines[index] = &rewritten;
        info!(previous = %previous, index, "rewrote last minor of previous major");
    }

    Ok(lines.concat())
}

/// Read a document and return it with the new EOL row
#[instrument(skip(path, release), fields(path = %path.display(), release = %release))]
pub fn update_eol_file(
    path: &Path,
    release: &ReleaseVersion,
    today: NaiveDate,
    support_days: i64,
) -> Result<String> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DocError::FileNotFound(path.to_path_buf())
        } else {
            DocError::Io(e)
        }
    })?;
    update_eol_table(&text, release, today, support_days)
}
