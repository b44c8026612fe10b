use std::cmp::Ordering;

// ---------------------------------------------------------------------------
// Segment – one run of a file name
// ---------------------------------------------------------------------------

/// A run of either ASCII digits or anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Text(String),
    /// Digit runs longer than `u128` allows saturate to `u128::MAX`.
    Digits(u128),
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        use Segment::*;
        match (self, other) {
            (Digits(a), Digits(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            // Differing kinds at one position: digits sort first.
            (Digits(_), Text(_)) => Ordering::Less,
            (Text(_), Digits(_)) => Ordering::Greater,
        }
    }
}

// ---------------------------------------------------------------------------
// NaturalKey – sort key for "sam_2.csv" < "sam_10.csv"
// ---------------------------------------------------------------------------

/// Sort key that compares embedded numbers by value.
///
/// ```
/// use spikes_data::data::natural::NaturalKey;
///
/// assert!(NaturalKey::new("sam_2.csv") < NaturalKey::new("sam_10.csv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NaturalKey(Vec<Segment>);

impl NaturalKey {
    pub fn new(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut rest = text;

        while let Some(first) = rest.chars().next() {
            let is_digit = first.is_ascii_digit();
            let end = rest
                .find(|c: char| c.is_ascii_digit() != is_digit)
                .unwrap_or(rest.len());
            let (run, tail) = rest.split_at(end);

            segments.push(if is_digit {
                Segment::Digits(run.parse().unwrap_or(u128::MAX))
            } else {
                Segment::Text(run.to_string())
            });
            rest = tail;
        }

        NaturalKey(segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

/// Sort file names in place by their [`NaturalKey`].
pub fn natural_sort<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by_cached_key(|name| NaturalKey::new(name.as_ref()));
}
