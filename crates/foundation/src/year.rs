use core::cmp::Ordering;
use core::fmt;

/// Earliest-known date of a street, kept as the raw label from the source.
///
/// Ordering is year-aware: the leading (optionally signed) integer is compared
/// numerically first and the full label breaks ties lexically. For labels of
/// equal width this is exactly lexical order, and `"950"` still sorts before
/// `"1850"`. Labels without a leading integer sort before all numeric ones.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Year(String);

impl Year {
    pub fn new(label: impl Into<String>) -> Self {
        Year(label.into().trim().to_string())
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    /// The leading integer of the label, if any and if it fits in an `i64`.
    pub fn numeric(&self) -> Option<i64> {
        let (negative, digits) = self.leading_integer()?;
        if digits.is_empty() {
            return Some(0);
        }
        let value = digits.parse::<i64>().ok()?;
        Some(if negative { -value } else { value })
    }

    /// Sign and significant digits of the leading integer. Zero is never negative.
    fn leading_integer(&self) -> Option<(bool, &str)> {
        let s = self.0.as_str();
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        let digits = rest[..end].trim_start_matches('0');
        Some((negative && !digits.is_empty(), digits))
    }

    /// Label usable inside a CSS class name (`year-1850`).
    pub fn css_token(&self) -> String {
        self.0
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect()
    }
}

impl Ord for Year {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_leading(self.leading_integer(), other.leading_integer())
            .then_with(|| self.0.cmp(&other.0))
    }
}

/// Digit strings without leading zeros order by length, then lexically.
fn compare_magnitude(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_leading(a: Option<(bool, &str)>, b: Option<(bool, &str)>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some((true, _)), Some((false, _))) => Ordering::Less,
        (Some((false, _)), Some((true, _))) => Ordering::Greater,
        (Some((false, a)), Some((false, b))) => compare_magnitude(a, b),
        (Some((true, a)), Some((true, b))) => compare_magnitude(b, a),
    }
}

impl PartialOrd for Year {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Year {
    fn from(s: &str) -> Self {
        Year::new(s)
    }
}

impl From<String> for Year {
    fn from(s: String) -> Self {
        Year::new(s)
    }
}
