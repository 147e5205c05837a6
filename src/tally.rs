//! Per-axis tallies over response collections.
//!
//! A tally seeds a zero bucket for every predefined label (in order),
//! then counts each record into its bucket. A value outside the fixed
//! list — data drift after an axis was relabeled — gets its own bucket
//! appended after the predefined ones, so no record is ever dropped
//! from the totals.

/// Bucket used for records that carry no value for the tallied axis.
pub const UNSET_LABEL: &str = "(unset)";

/// Ordered label -> count mapping for one category axis.
///
/// `labels()` and `counts()` are the `{labels, values}` pair the chart
/// renderer consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    buckets: Vec<(String, u64)>,
}

impl Tally {
    /// Labels in bucket order: predefined first, drift buckets after.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.buckets.iter().map(|(label, _)| label.as_str()).collect()
    }

    /// Counts in the same order as [`Tally::labels`].
    #[must_use]
    pub fn counts(&self) -> Vec<u64> {
        self.buckets.iter().map(|&(_, count)| count).collect()
    }

    /// Count for a single label, if the bucket exists.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<u64> {
        self.buckets
            .iter()
            .find(|(l, _)| l == label)
            .map(|&(_, count)| count)
    }

    /// Sum over all buckets; equals the number of tallied records.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|&(_, count)| count).sum()
    }

    /// Iterate over `(label, count)` pairs in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.buckets.iter().map(|(label, count)| (label.as_str(), *count))
    }
}

/// Tally `records` by the value `selector` extracts, against the fixed
/// ordered `labels`.
///
/// Records where the selector yields `None` count under
/// [`UNSET_LABEL`]. Deterministic for a given input order.
pub fn tally<R, F>(records: &[R], selector: F, labels: &[String]) -> Tally
where
    F: Fn(&R) -> Option<&str>,
{
    let mut buckets: Vec<(String, u64)> =
        labels.iter().map(|label| (label.clone(), 0)).collect();

    // Linear bucket lookup: label lists are a handful of entries.
    for record in records {
        let value = selector(record).unwrap_or(UNSET_LABEL);
        match buckets.iter_mut().find(|(label, _)| label == value) {
            Some((_, count)) => *count += 1,
            None => buckets.push((value.to_string(), 1)),
        }
    }

    Tally { buckets }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rec {
        mood: Option<&'static str>,
    }

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_counts_and_zero_buckets() {
        let records = [
            Rec { mood: Some("Happy") },
            Rec { mood: Some("Calm") },
            Rec { mood: Some("Happy") },
        ];

        let t = tally(&records, |r| r.mood, &labels(&["Happy", "Calm", "Tense"]));

        assert_eq!(t.get("Happy"), Some(2));
        assert_eq!(t.get("Calm"), Some(1));
        assert_eq!(t.get("Tense"), Some(0));
        assert_eq!(t.total(), records.len() as u64);
    }

    #[test]
    fn test_empty_records_keep_all_buckets() {
        let records: [Rec; 0] = [];
        let t = tally(&records, |r| r.mood, &labels(&["Happy", "Calm"]));

        assert_eq!(t.labels(), vec!["Happy", "Calm"]);
        assert_eq!(t.counts(), vec![0, 0]);
        assert_eq!(t.total(), 0);
    }

    #[test]
    fn test_drift_label_appends_after_predefined() {
        let records = [
            Rec { mood: Some("Euphoric") },
            Rec { mood: Some("Happy") },
            Rec { mood: Some("Euphoric") },
        ];

        let t = tally(&records, |r| r.mood, &labels(&["Happy", "Calm"]));

        assert_eq!(t.labels(), vec!["Happy", "Calm", "Euphoric"]);
        assert_eq!(t.counts(), vec![1, 0, 2]);
        assert_eq!(t.total(), 3);
    }

    #[test]
    fn test_missing_value_counts_as_unset() {
        let records = [Rec { mood: Some("Happy") }, Rec { mood: None }];

        let t = tally(&records, |r| r.mood, &labels(&["Happy"]));

        assert_eq!(t.labels(), vec!["Happy", UNSET_LABEL]);
        assert_eq!(t.total(), 2);
    }
}
