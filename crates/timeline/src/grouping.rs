use formats::StreetRecord;
use foundation::Year;

/// A year heading and the streets first recorded in that year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineBlock {
    pub year: Year,
    pub streets: Vec<String>,
}

/// Group year-sorted records into timeline blocks.
///
/// A new block opens only when a record's year is strictly greater than the
/// running maximum; otherwise the street joins the latest block. The first
/// record always opens a block.
///
/// Input is expected in ascending year order (DataSource sorts it). Out-of-order
/// years merge into the latest block rather than reopening an earlier one.
pub fn group_into_blocks<'a>(
    records: impl IntoIterator<Item = &'a StreetRecord>,
) -> Vec<TimelineBlock> {
    let mut blocks: Vec<TimelineBlock> = Vec::new();
    let mut running_max: Option<&Year> = None;

    for record in records {
        let year = &record.earliest_year;
        let opens_block = running_max.is_none_or(|max| year > max);

        if opens_block {
            running_max = Some(year);
            blocks.push(TimelineBlock {
                year: year.clone(),
                streets: vec![record.name.clone()],
            });
        } else if let Some(latest) = blocks.last_mut() {
            latest.streets.push(record.name.clone());
        }
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::{TimelineBlock, group_into_blocks};
    use formats::StreetRecord;
    use foundation::Year;
    use pretty_assertions::assert_eq;

    fn rec(year: &str, name: &str) -> StreetRecord {
        StreetRecord::new(name, year, "LINESTRING(0 0, 1 1)")
    }

    fn block(year: &str, streets: &[&str]) -> TimelineBlock {
        TimelineBlock {
            year: Year::from(year),
            streets: streets.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn shared_years_merge_into_one_block() {
        let records = [rec("1850", "A"), rec("1850", "B"), rec("1900", "C")];
        let blocks = group_into_blocks(&records);
        assert_eq!(blocks, vec![block("1850", &["A", "B"]), block("1900", &["C"])]);
    }

    #[test]
    fn empty_input_yields_no_blocks() {
        assert!(group_into_blocks(&Vec::<StreetRecord>::new()).is_empty());
    }

    #[test]
    fn first_record_always_opens_a_block() {
        let blocks = group_into_blocks(&[rec("unknown", "A")]);
        assert_eq!(blocks, vec![block("unknown", &["A"])]);
    }

    #[test]
    fn sorted_input_gives_strictly_increasing_years_and_a_stable_partition() {
        let records = [
            rec("1300", "a"),
            rec("1382", "b"),
            rec("1382", "c"),
            rec("1382", "d"),
            rec("1600", "e"),
            rec("1850", "f"),
            rec("1850", "g"),
        ];
        let blocks = group_into_blocks(&records);

        for pair in blocks.windows(2) {
            assert!(pair[0].year < pair[1].year);
        }

        let flattened: Vec<&str> = blocks
            .iter()
            .flat_map(|b| b.streets.iter().map(String::as_str))
            .collect();
        let input: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(flattened, input);

        for b in &blocks {
            for name in &b.streets {
                let r = records.iter().find(|r| &r.name == name).expect("present");
                assert_eq!(r.earliest_year, b.year);
            }
        }
    }

    #[test]
    fn out_of_order_year_joins_the_latest_block() {
        let records = [rec("1850", "A"), rec("1900", "B"), rec("1700", "C")];
        let blocks = group_into_blocks(&records);
        assert_eq!(blocks, vec![block("1850", &["A"]), block("1900", &["B", "C"])]);
    }
}
