//! Offline inspection of saved street query responses.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use formats::{FormatError, StreetRecord, parse_response};
use foundation::{LatLngBounds, Year};
use serde::Serialize;
use thiserror::Error;
use timeline::{TimelineBlock, TimelineDataset};
use tracing::debug;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub fn load_records(path: &Path) -> Result<Vec<StreetRecord>, ToolError> {
    let payload = fs::read_to_string(path).map_err(|source| ToolError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_response(&payload)?;
    debug!(path = %path.display(), count = records.len(), "loaded saved response");
    Ok(records)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub records: usize,
    pub blocks: usize,
    pub lines: usize,
    pub points_dropped: usize,
    pub invalid_geometries: usize,
    pub first_year: Option<String>,
    pub last_year: Option<String>,
    /// `[[north, east], [south, west]]`
    pub bounds: Option<[[f64; 2]; 2]>,
}

impl SummaryReport {
    pub fn from_dataset(dataset: &TimelineDataset) -> Self {
        let s = &dataset.summary;
        Self {
            records: s.records,
            blocks: s.blocks,
            lines: s.lines,
            points_dropped: s.points_dropped,
            invalid_geometries: s.invalid_geometries,
            first_year: s.first_year.as_ref().map(|y| y.label().to_string()),
            last_year: s.last_year.as_ref().map(|y| y.label().to_string()),
            bounds: s.bounds.as_ref().map(corners),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "records:            {}", self.records);
        let _ = writeln!(out, "timeline blocks:    {}", self.blocks);
        let _ = writeln!(out, "map lines:          {}", self.lines);
        let _ = writeln!(out, "points dropped:     {}", self.points_dropped);
        let _ = writeln!(out, "invalid geometries: {}", self.invalid_geometries);
        if let (Some(first), Some(last)) = (&self.first_year, &self.last_year) {
            let _ = writeln!(out, "years:              {first} .. {last}");
        }
        if let Some([[n, e], [s, w]]) = self.bounds {
            let _ = writeln!(out, "bounds:             N {n} E {e} S {s} W {w}");
        }
        out
    }
}

fn corners(b: &LatLngBounds) -> [[f64; 2]; 2] {
    [
        [b.north_east.lat, b.north_east.lng],
        [b.south_west.lat, b.south_west.lng],
    ]
}

/// Leading blocks whose year is at or before `until`; all blocks without a limit.
pub fn blocks_until<'a>(blocks: &'a [TimelineBlock], until: Option<&Year>) -> &'a [TimelineBlock] {
    match until {
        Some(until) => {
            let end = blocks.partition_point(|b| &b.year <= until);
            &blocks[..end]
        }
        None => blocks,
    }
}

pub fn format_blocks(blocks: &[TimelineBlock]) -> String {
    let mut out = String::new();
    for block in blocks {
        let _ = writeln!(out, "{} ({})", block.year, block.streets.len());
        for name in &block.streets {
            let _ = writeln!(out, "  {name}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{SummaryReport, ToolError, blocks_until, format_blocks, load_records};
    use formats::StreetRecord;
    use foundation::Year;
    use pretty_assertions::assert_eq;
    use timeline::TimelineDataset;

    fn dataset() -> TimelineDataset {
        TimelineDataset::build(&[
            StreetRecord::new("Damrak", "1850", "LINESTRING(4.89 52.37, 4.90 52.38)"),
            StreetRecord::new("Rokin", "1850", "LINESTRING(4.88 52.36, 4.89 52.37)"),
            StreetRecord::new("Pomp", "1870", "POINT(4.90 52.37)"),
            StreetRecord::new("Nieuw", "1900", "LINESTRING(4.91 52.35, 4.92 52.39)"),
        ])
    }

    #[test]
    fn summary_counts_lines_and_points() {
        let report = SummaryReport::from_dataset(&dataset());
        assert_eq!(report.records, 4);
        assert_eq!(report.blocks, 3);
        assert_eq!(report.lines, 3);
        assert_eq!(report.points_dropped, 1);
        assert_eq!(report.first_year.as_deref(), Some("1850"));
        assert_eq!(report.last_year.as_deref(), Some("1900"));
        assert_eq!(report.bounds, Some([[52.39, 4.92], [52.35, 4.88]]));
        assert!(report.to_text().contains("years:              1850 .. 1900"));
    }

    #[test]
    fn until_keeps_leading_blocks() {
        let data = dataset();
        let until = Year::from("1870");
        let kept = blocks_until(&data.blocks, Some(&until));
        assert_eq!(kept.len(), 2);
        assert_eq!(blocks_until(&data.blocks, None).len(), 3);
        assert!(blocks_until(&data.blocks, Some(&Year::from("1700"))).is_empty());
    }

    #[test]
    fn blocks_render_as_indented_list() {
        let data = dataset();
        let text = format_blocks(&data.blocks[..1]);
        assert_eq!(text, "1850 (2)\n  Damrak\n  Rokin\n");
    }

    #[test]
    fn unreadable_response_names_the_path() {
        let err = load_records(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ToolError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read does/not/exist.json"));
    }
}
