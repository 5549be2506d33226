use foundation::Year;

/// One street as delivered by the query endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetRecord {
    pub name: String,
    pub earliest_year: Year,
    pub geometry_wkt: String,
}

impl StreetRecord {
    pub fn new(
        name: impl Into<String>,
        earliest_year: impl Into<Year>,
        geometry_wkt: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            earliest_year: earliest_year.into(),
            geometry_wkt: geometry_wkt.into(),
        }
    }
}

/// Stable sort by earliest year; records sharing a year keep their source order.
pub fn sort_by_year(records: &mut [StreetRecord]) {
    records.sort_by(|a, b| a.earliest_year.cmp(&b.earliest_year));
}

#[cfg(test)]
mod tests {
    use super::{StreetRecord, sort_by_year};
    use pretty_assertions::assert_eq;

    #[test]
    fn sort_is_stable_within_a_year() {
        let mut records = vec![
            StreetRecord::new("C", "1900", ""),
            StreetRecord::new("A", "1850", ""),
            StreetRecord::new("B", "1850", ""),
        ];
        sort_by_year(&mut records);
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
