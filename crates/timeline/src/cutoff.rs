use foundation::Year;

use crate::grouping::TimelineBlock;

/// Which timeline blocks are scrolled into view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visibility {
    /// One flag per block, in block order.
    pub active: Vec<bool>,
    /// Index of the block that sets the cutoff year. `None` only when there are no blocks.
    pub cutoff_index: Option<usize>,
}

/// A block is visible when its top offset is at or above the bottom edge of the
/// viewport (`offset <= scroll_top + viewport_height`).
///
/// The cutoff is the last visible block. When nothing is visible the first
/// block is used instead.
pub fn visible_blocks(offsets: &[f64], scroll_top: f64, viewport_height: f64) -> Visibility {
    let bottom = scroll_top + viewport_height;
    let active: Vec<bool> = offsets.iter().map(|&offset| offset <= bottom).collect();

    let cutoff_index = active
        .iter()
        .rposition(|&visible| visible)
        .or(if active.is_empty() { None } else { Some(0) });

    Visibility {
        active,
        cutoff_index,
    }
}

pub fn cutoff_year<'a>(blocks: &'a [TimelineBlock], visibility: &Visibility) -> Option<&'a Year> {
    visibility
        .cutoff_index
        .and_then(|i| blocks.get(i))
        .map(|b| &b.year)
}

#[cfg(test)]
mod tests {
    use super::{cutoff_year, visible_blocks};
    use crate::grouping::TimelineBlock;
    use foundation::Year;
    use pretty_assertions::assert_eq;

    fn blocks(years: &[&str]) -> Vec<TimelineBlock> {
        years
            .iter()
            .map(|y| TimelineBlock {
                year: Year::from(*y),
                streets: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn last_visible_block_sets_cutoff() {
        let offsets = [0.0, 300.0, 900.0, 1500.0];
        let v = visible_blocks(&offsets, 200.0, 800.0);
        assert_eq!(v.active, vec![true, true, true, false]);
        assert_eq!(v.cutoff_index, Some(2));

        let b = blocks(&["1300", "1382", "1600", "1850"]);
        assert_eq!(cutoff_year(&b, &v), Some(&Year::from("1600")));
    }

    #[test]
    fn boundary_offset_counts_as_visible() {
        let v = visible_blocks(&[0.0, 1000.0], 0.0, 1000.0);
        assert_eq!(v.cutoff_index, Some(1));
    }

    #[test]
    fn nothing_visible_falls_back_to_first_block() {
        let v = visible_blocks(&[500.0, 800.0], 0.0, 100.0);
        assert_eq!(v.active, vec![false, false]);
        assert_eq!(v.cutoff_index, Some(0));
        let b = blocks(&["1850", "1900"]);
        assert_eq!(cutoff_year(&b, &v), Some(&Year::from("1850")));
    }

    #[test]
    fn no_blocks_has_no_cutoff() {
        let v = visible_blocks(&[], 0.0, 800.0);
        assert_eq!(v.cutoff_index, None);
        assert_eq!(cutoff_year(&[], &v), None);
    }
}
