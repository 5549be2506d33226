use formats::StreetRecord;
use foundation::{LatLngBounds, Year};
use tracing::info;

use crate::grouping::{TimelineBlock, group_into_blocks};
use crate::lines::{LineSet, build_lines};

/// Blocks and drawable lines derived once from the fetched records.
#[derive(Debug, Default, Clone)]
pub struct TimelineDataset {
    pub blocks: Vec<TimelineBlock>,
    pub lines: LineSet,
    pub summary: DatasetSummary,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct DatasetSummary {
    pub records: usize,
    pub blocks: usize,
    pub lines: usize,
    pub points_dropped: usize,
    pub invalid_geometries: usize,
    pub first_year: Option<Year>,
    pub last_year: Option<Year>,
    pub bounds: Option<LatLngBounds>,
}

impl TimelineDataset {
    pub fn build(records: &[StreetRecord]) -> Self {
        let blocks = group_into_blocks(records);
        let lines = build_lines(records);
        let points_dropped = lines.points_dropped();

        let summary = DatasetSummary {
            records: records.len(),
            blocks: blocks.len(),
            lines: lines.len(),
            points_dropped,
            invalid_geometries: lines.invalid_count(),
            first_year: blocks.first().map(|b| b.year.clone()),
            last_year: blocks.last().map(|b| b.year.clone()),
            bounds: LatLngBounds::union_all(lines.iter().map(|l| &l.geometry.bounds)),
        };
        info!(
            records = summary.records,
            blocks = summary.blocks,
            lines = summary.lines,
            points_dropped,
            invalid = summary.invalid_geometries,
            "built timeline dataset"
        );

        Self {
            blocks,
            lines,
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::TimelineDataset;
    use formats::StreetRecord;
    use foundation::Year;
    use pretty_assertions::assert_eq;

    #[test]
    fn builds_blocks_lines_and_summary() {
        let records = vec![
            StreetRecord::new("A", "1850", "LINESTRING(4.80 52.30, 4.85 52.35)"),
            StreetRecord::new("B", "1850", "POINT(4.9 52.37)"),
            StreetRecord::new("C", "1900", "LINESTRING(4.90 52.36, 4.95 52.40)"),
            StreetRecord::new("D", "1910", "LINESTRING("),
        ];
        let ds = TimelineDataset::build(&records);

        assert_eq!(ds.blocks.len(), 3);
        assert_eq!(ds.blocks[0].streets, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(ds.lines.len(), 2);
        assert_eq!(ds.summary.points_dropped, 1);
        assert_eq!(ds.summary.invalid_geometries, 1);
        assert_eq!(ds.summary.first_year, Some(Year::from("1850")));
        assert_eq!(ds.summary.last_year, Some(Year::from("1910")));

        let bounds = ds.summary.bounds.expect("bounds");
        assert_eq!(bounds.south_west.lat, 52.30);
        assert_eq!(bounds.north_east.lng, 4.95);
    }

    #[test]
    fn empty_dataset() {
        let ds = TimelineDataset::build(&[]);
        assert!(ds.is_empty());
        assert_eq!(ds.summary.bounds, None);
    }
}
