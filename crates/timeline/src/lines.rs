use formats::{ParsedGeometry, StreetRecord, parse_wkt};
use foundation::Year;
use tracing::warn;

/// A drawable street shape tagged with its earliest year.
#[derive(Debug, Clone, PartialEq)]
pub struct MapLine {
    pub name: String,
    pub year: Year,
    pub geometry: ParsedGeometry,
}

/// Every street shape known for the session, in source order.
#[derive(Debug, Default, Clone)]
pub struct LineSet {
    lines: Vec<MapLine>,
    invalid: usize,
    points_dropped: usize,
}

/// Parse every record and keep only line and area shapes.
pub fn build_lines<'a>(records: impl IntoIterator<Item = &'a StreetRecord>) -> LineSet {
    let mut set = LineSet::from_records(records);
    set.retain_lines();
    set
}

impl LineSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse each record's WKT. Records whose shape fails to parse are skipped.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a StreetRecord>) -> Self {
        let mut out = LineSet::new();
        for record in records {
            match parse_wkt(&record.geometry_wkt) {
                Ok(geometry) => out.lines.push(MapLine {
                    name: record.name.clone(),
                    year: record.earliest_year.clone(),
                    geometry,
                }),
                Err(err) => {
                    out.invalid += 1;
                    warn!(street = %record.name, year = %record.earliest_year, %err, "skipping street with unreadable geometry");
                }
            }
        }
        out
    }

    /// Drop point shapes so only lines and areas are drawn. Returns how many were removed.
    pub fn retain_lines(&mut self) -> usize {
        let before = self.lines.len();
        self.lines.retain(|line| !line.geometry.is_point());
        let dropped = before - self.lines.len();
        self.points_dropped += dropped;
        dropped
    }

    /// All lines whose year is at or before `cutoff`, in source order.
    pub fn up_to_year(&self, cutoff: &Year) -> Vec<&MapLine> {
        self.lines.iter().filter(|line| &line.year <= cutoff).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Point shapes removed by [`LineSet::retain_lines`].
    pub fn points_dropped(&self) -> usize {
        self.points_dropped
    }

    /// Records skipped because their geometry did not parse.
    pub fn invalid_count(&self) -> usize {
        self.invalid
    }

    pub fn iter(&self) -> impl Iterator<Item = &MapLine> {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{LineSet, build_lines};
    use formats::StreetRecord;
    use foundation::Year;
    use pretty_assertions::assert_eq;

    fn line(year: &str, name: &str) -> StreetRecord {
        StreetRecord::new(name, year, "LINESTRING(4.89 52.37, 4.90 52.38)")
    }

    fn years(set: &LineSet, cutoff: &str) -> Vec<String> {
        set.up_to_year(&Year::from(cutoff))
            .iter()
            .map(|l| l.year.to_string())
            .collect()
    }

    #[test]
    fn filters_by_cutoff_inclusive() {
        let set = LineSet::from_records(&[line("1850", "a"), line("1900", "b"), line("1700", "c")]);
        assert_eq!(years(&set, "1850"), vec!["1850", "1700"]);
    }

    #[test]
    fn cutoff_filter_is_monotonic() {
        let set = LineSet::from_records(&[
            line("1300", "a"),
            line("1382", "b"),
            line("1600", "c"),
            line("1850", "d"),
            line("1900", "e"),
        ]);
        let cutoffs = ["1000", "1300", "1500", "1850", "2000"];
        for pair in cutoffs.windows(2) {
            let low = years(&set, pair[0]);
            let high = years(&set, pair[1]);
            assert!(low.iter().all(|y| high.contains(y)), "{low:?} not in {high:?}");
        }
        assert!(years(&set, "1000").is_empty());
        assert_eq!(years(&set, "2000").len(), 5);
    }

    #[test]
    fn invalid_geometry_is_skipped_not_fatal() {
        let records = [
            line("1850", "a"),
            StreetRecord::new("broken", "1860", "LINESTRING(4.9"),
        ];
        let set = LineSet::from_records(&records);
        assert_eq!(set.len(), 1);
        assert_eq!(set.invalid_count(), 1);
    }

    #[test]
    fn retain_lines_drops_points() {
        let records = [
            line("1850", "a"),
            StreetRecord::new("p", "1850", "POINT(4.9 52.37)"),
        ];
        let mut set = LineSet::from_records(&records);
        assert_eq!(set.retain_lines(), 1);
        assert_eq!(set.points_dropped(), 1);
        assert_eq!(set.invalid_count(), 0);
        let names: Vec<_> = set.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["a"]);
    }

    #[test]
    fn build_lines_parses_then_filters() {
        let records = [
            line("1850", "a"),
            StreetRecord::new("p", "1850", "MULTIPOINT((4.9 52.37),(4.8 52.36))"),
            StreetRecord::new("broken", "1860", ""),
        ];
        let set = build_lines(&records);
        assert_eq!(set.len(), 1);
        assert_eq!(set.points_dropped(), 1);
        assert_eq!(set.invalid_count(), 1);
    }
}
