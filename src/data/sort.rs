use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidModeError, ParseError};

use super::model::Record;
use super::number::extract_number;

// ---------------------------------------------------------------------------
// SortMode
// ---------------------------------------------------------------------------

/// The orders the list can be shown in. Wire names are camelCase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    /// Oldest `date` first.
    CreatedAt,
    /// Embedded number ascending, then name.
    FileNameAscend,
    /// Embedded number descending, then name descending.
    FileNameDescend,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [
        SortMode::CreatedAt,
        SortMode::FileNameAscend,
        SortMode::FileNameDescend,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::CreatedAt => "createdAt",
            SortMode::FileNameAscend => "fileNameAscend",
            SortMode::FileNameDescend => "fileNameDescend",
        }
    }

    /// Menu text in the viewer.
    pub fn label(self) -> &'static str {
        match self {
            SortMode::CreatedAt => "Sort by created at ascendent",
            SortMode::FileNameAscend => "Sort by filename ascendent",
            SortMode::FileNameDescend => "Sort by filename descendent",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| InvalidModeError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Comparators
// ---------------------------------------------------------------------------

/// Number-aware file-name order.
///
/// When both names carry a number the numbers decide and the full names
/// break ties; otherwise the pair is compared as plain strings.
pub fn compare_file_names(a: &str, b: &str) -> Ordering {
    match (extract_number(a), extract_number(b)) {
        (Some(na), Some(nb)) => na.cmp(&nb).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

/// Parsed dates ascending; unparsable dates after every parsable one.
fn compare_timestamps(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Return a sorted copy of `records`. The input is left as it was and
/// equal elements keep their relative order.
pub fn sort_records(records: &[Record], mode: SortMode) -> Vec<Record> {
    log::debug!("Sorting {} records by {mode}", records.len());

    let order = match mode {
        SortMode::CreatedAt => {
            let keys: Vec<Option<i64>> = records.iter().map(Record::timestamp).collect();
            for (rec, key) in records.iter().zip(&keys) {
                if key.is_none() {
                    log::warn!("Unparsable date in {rec}");
                }
            }
            // Keys form a total preorder.
            let mut order: Vec<usize> = (0..records.len()).collect();
            order.sort_by(|&a, &b| compare_timestamps(keys[a], keys[b]));
            order
        }
        SortMode::FileNameAscend => settled_order(records.len(), |a, b| {
            compare_file_names(&records[a].file_name, &records[b].file_name)
        }),
        SortMode::FileNameDescend => settled_order(records.len(), |a, b| {
            compare_file_names(&records[b].file_name, &records[a].file_name)
        }),
    };

    order.into_iter().map(|i| records[i].clone()).collect()
}

/// Like [`sort_records`], but a `createdAt` sort refuses unparsable dates.
pub fn sort_records_strict(records: &[Record], mode: SortMode) -> Result<Vec<Record>, ParseError> {
    if mode == SortMode::CreatedAt {
        if let Some((i, rec)) = records
            .iter()
            .enumerate()
            .find(|(_, rec)| rec.timestamp().is_none())
        {
            return Err(ParseError {
                row: i + 1,
                value: rec.date.clone(),
            });
        }
    }
    Ok(sort_records(records, mode))
}

/// Insertion sort over indices `0..len`.
///
/// The file-name order is not transitive for mixed numeric and plain
/// names, which `slice::sort_by` is allowed to panic on. Each element only
/// moves left past a predecessor it is strictly less than, so the result
/// has no inverted neighbours: sorting it again leaves it unchanged.
fn settled_order<F>(len: usize, compare: F) -> Vec<usize>
where
    F: Fn(usize, usize) -> Ordering,
{
    let mut order: Vec<usize> = (0..len).collect();

    for i in 1..len {
        let mut j = i;
        while j > 0 && compare(order[j], order[j - 1]) == Ordering::Less {
            order.swap(j, j - 1);
            j -= 1;
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn named(names: &[&str]) -> Vec<Record> {
        names
            .iter()
            .map(|n| Record::new("2023-01-01", *n))
            .collect()
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.file_name.as_str()).collect()
    }

    fn sorted_multiset(records: &[Record]) -> Vec<(String, String)> {
        let mut v: Vec<_> = records
            .iter()
            .map(|r| (r.date.clone(), r.file_name.clone()))
            .collect();
        v.sort();
        v
    }

    #[test]
    fn mode_wire_names() {
        for mode in SortMode::ALL {
            assert_eq!(mode.as_str().parse::<SortMode>(), Ok(mode));
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
        assert_eq!(
            "fileName".parse::<SortMode>(),
            Err(InvalidModeError("fileName".into()))
        );
        // Case matters.
        assert!("CreatedAt".parse::<SortMode>().is_err());
    }

    #[test]
    fn created_at_ascending() {
        let records = vec![
            Record::new("2023-01-02", "b.csv"),
            Record::new("2023-01-01", "a.csv"),
        ];
        let sorted = sort_records(&records, SortMode::CreatedAt);
        let dates: Vec<_> = sorted.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2023-01-01", "2023-01-02"]);
    }

    #[test]
    fn created_at_ties_keep_input_order_and_bad_dates_go_last() {
        let records = vec![
            Record::new("garbage", "x.csv"),
            Record::new("2023-01-02", "late.csv"),
            Record::new("2023-01-01T00:00:00Z", "first.csv"),
            Record::new("2023-01-01", "second.csv"),
            Record::new("", "y.csv"),
        ];
        let sorted = sort_records(&records, SortMode::CreatedAt);
        assert_eq!(
            names(&sorted),
            ["first.csv", "second.csv", "late.csv", "x.csv", "y.csv"]
        );
    }

    #[test]
    fn file_name_ascend_is_numeric() {
        let records = named(&["file2.csv", "file10.csv", "file1.csv"]);
        let sorted = sort_records(&records, SortMode::FileNameAscend);
        assert_eq!(names(&sorted), ["file1.csv", "file2.csv", "file10.csv"]);
    }

    #[test]
    fn file_name_descend_is_numeric() {
        let records = named(&["file2.csv", "file10.csv", "file1.csv"]);
        let sorted = sort_records(&records, SortMode::FileNameDescend);
        assert_eq!(names(&sorted), ["file10.csv", "file2.csv", "file1.csv"]);
    }

    #[test]
    fn equal_numbers_break_ties_by_name() {
        let records = named(&["b3.csv", "a3.csv", "A3.csv"]);
        assert_eq!(
            names(&sort_records(&records, SortMode::FileNameAscend)),
            ["A3.csv", "a3.csv", "b3.csv"]
        );
        assert_eq!(
            names(&sort_records(&records, SortMode::FileNameDescend)),
            ["b3.csv", "a3.csv", "A3.csv"]
        );
    }

    #[test]
    fn pair_without_number_falls_back_to_strings() {
        assert_eq!(compare_file_names("report.csv", "file3.csv"), Ordering::Greater);
        assert_eq!(compare_file_names("file3.csv", "report.csv"), Ordering::Less);
        assert_eq!(compare_file_names("a.csv", "b.csv"), Ordering::Less);
        assert_eq!(compare_file_names("file9.csv", "file10.csv"), Ordering::Less);
    }

    #[test]
    fn mixed_names_are_deterministic() {
        // z1 < a2 (numbers), a2 < m (strings), m < z1 (strings): a cycle.
        let records = named(&["report.csv", "z1.csv", "m.csv", "a2.csv", "file3.csv"]);
        for mode in [SortMode::FileNameAscend, SortMode::FileNameDescend] {
            let first = sort_records(&records, mode);
            for _ in 0..5 {
                assert_eq!(sort_records(&records, mode), first);
            }
            assert_eq!(sorted_multiset(&first), sorted_multiset(&records));
        }
    }

    #[test]
    fn mixed_names_are_idempotent() {
        let base = ["z1.csv", "a2.csv", "m.csv", "report.csv", "file3.csv", "b10.csv"];
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..300 {
            let mut shuffled = base;
            shuffled.shuffle(&mut rng);
            let records = named(&shuffled);
            for mode in [SortMode::FileNameAscend, SortMode::FileNameDescend] {
                let once = sort_records(&records, mode);
                assert_eq!(sort_records(&once, mode), once, "{mode} from {shuffled:?}");
            }
        }
    }

    #[test]
    fn random_mixed_names_are_idempotent_permutations() {
        const STEMS: [&str; 6] = ["a", "m", "z", "file", "Report", "b"];
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..100 {
            let len = rng.random_range(0..30);
            let mut seen = std::collections::HashSet::new();
            let mut records = Vec::new();
            while records.len() < len {
                let stem = STEMS[rng.random_range(0..STEMS.len())];
                let name = if rng.random_bool(0.4) {
                    format!("{stem}{}.csv", records.len())
                } else {
                    format!("{stem}{}", "x".repeat(records.len()))
                };
                if seen.insert(name.clone()) {
                    records.push(Record::new("2023-01-01", name));
                }
            }

            for mode in [SortMode::FileNameAscend, SortMode::FileNameDescend] {
                let once = sort_records(&records, mode);
                assert_eq!(sorted_multiset(&once), sorted_multiset(&records));
                assert_eq!(sort_records(&once, mode), once);
            }
        }
    }

    #[test]
    fn sorted_output_has_no_inverted_neighbours() {
        let records = named(&["report.csv", "z1.csv", "m.csv", "a2.csv", "file3.csv", "b10.csv"]);
        let sorted = sort_records(&records, SortMode::FileNameAscend);
        for pair in sorted.windows(2) {
            assert_ne!(
                compare_file_names(&pair[1].file_name, &pair[0].file_name),
                Ordering::Less
            );
        }
    }

    #[test]
    fn input_is_untouched() {
        let records = named(&["file2.csv", "file10.csv", "file1.csv"]);
        let before = records.clone();
        let _ = sort_records(&records, SortMode::FileNameAscend);
        assert_eq!(records, before);
    }

    #[test]
    fn every_mode_is_a_permutation_and_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let len = rng.random_range(0..40);
            let mut numbers: Vec<u32> = (1..=len).collect();
            numbers.shuffle(&mut rng);

            // Distinct names and distinct dates, so every key is unique.
            let records: Vec<Record> = numbers
                .iter()
                .map(|n| {
                    let day = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
                        + chrono::Duration::days(i64::from(*n) * 3);
                    Record::new(day.format("%Y-%m-%d").to_string(), format!("file{n}.csv"))
                })
                .collect();

            for mode in SortMode::ALL {
                let once = sort_records(&records, mode);
                assert_eq!(sorted_multiset(&once), sorted_multiset(&records));
                assert_eq!(sort_records(&once, mode), once);
            }
        }
    }

    #[test]
    fn strict_mode_rejects_bad_dates() {
        let records = vec![
            Record::new("2023-01-01", "a.csv"),
            Record::new("31.02.2023", "b.csv"),
        ];
        let err = sort_records_strict(&records, SortMode::CreatedAt).unwrap_err();
        assert_eq!(
            err,
            ParseError {
                row: 2,
                value: "31.02.2023".into()
            }
        );

        // Other modes do not look at dates.
        let sorted = sort_records_strict(&records, SortMode::FileNameAscend).unwrap();
        assert_eq!(names(&sorted), ["a.csv", "b.csv"]);
    }

    #[test]
    fn empty_and_single() {
        for mode in SortMode::ALL {
            assert!(sort_records(&[], mode).is_empty());
            let one = named(&["only.csv"]);
            assert_eq!(sort_records(&one, mode), one);
        }
    }
}
