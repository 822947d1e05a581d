#![forbid(unsafe_code)]

//! Algorithm catalog: stable keys and descriptive metadata.

use std::fmt;
use std::str::FromStr;

/// Static description of an algorithm, for an info panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
}

/// The sorting procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Tim,
}

/// The searching procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchAlgorithm {
    Linear,
    Binary,
    Hash,
    Interpolation,
}

impl SortAlgorithm {
    pub const ALL: [Self; 6] = [
        Self::Bubble,
        Self::Insertion,
        Self::Selection,
        Self::Merge,
        Self::Quick,
        Self::Tim,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Tim => "tim",
        }
    }

    #[must_use]
    pub const fn info(self) -> AlgorithmInfo {
        match self {
            Self::Bubble => AlgorithmInfo {
                name: "Bubble Sort",
                description: "A simple comparison-based algorithm that repeatedly steps through \
                    the list, compares adjacent elements and swaps them if they are in the \
                    wrong order.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            Self::Insertion => AlgorithmInfo {
                name: "Insertion Sort",
                description: "Builds the final sorted array one item at a time. It is efficient \
                    for small data sets and adaptive for nearly sorted data.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            Self::Selection => AlgorithmInfo {
                name: "Selection Sort",
                description: "Divides the input list into sorted and unsorted regions, \
                    repeatedly selecting the smallest element from the unsorted region.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            Self::Merge => AlgorithmInfo {
                name: "Merge Sort",
                description: "A divide-and-conquer algorithm that divides the array into \
                    halves, sorts them separately, and then merges them back together.",
                time_complexity: "O(n log n)",
                space_complexity: "O(n)",
            },
            Self::Quick => AlgorithmInfo {
                name: "Quick Sort",
                description: "A divide-and-conquer algorithm that picks a pivot element and \
                    partitions the array around it, then recursively sorts the sub-arrays.",
                time_complexity: "O(n log n) avg, O(n²) worst",
                space_complexity: "O(log n)",
            },
            Self::Tim => AlgorithmInfo {
                name: "Tim Sort",
                description: "A hybrid stable sorting algorithm derived from merge sort and \
                    insertion sort. It is the algorithm used by Python's built-in sort.",
                time_complexity: "O(n log n)",
                space_complexity: "O(n)",
            },
        }
    }
}

impl SearchAlgorithm {
    pub const ALL: [Self; 4] = [Self::Linear, Self::Binary, Self::Hash, Self::Interpolation];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Binary => "binary",
            Self::Hash => "hash",
            Self::Interpolation => "interpolation",
        }
    }

    /// Whether the procedure only works on ascending input.
    #[must_use]
    pub const fn requires_sorted(self) -> bool {
        matches!(self, Self::Binary | Self::Interpolation)
    }

    #[must_use]
    pub const fn info(self) -> AlgorithmInfo {
        match self {
            Self::Linear => AlgorithmInfo {
                name: "Linear Search",
                description: "A simple search algorithm that checks every element in the list \
                    sequentially until the target element is found.",
                time_complexity: "O(n)",
                space_complexity: "O(1)",
            },
            Self::Binary => AlgorithmInfo {
                name: "Binary Search",
                description: "An efficient search algorithm that works on sorted arrays by \
                    repeatedly dividing the search interval in half.",
                time_complexity: "O(log n)",
                space_complexity: "O(1)",
            },
            Self::Hash => AlgorithmInfo {
                name: "Hash Search",
                description: "Uses a hash table to store key-value pairs, providing very fast \
                    average-case search times through direct indexing.",
                time_complexity: "O(1) avg, O(n) worst",
                space_complexity: "O(n)",
            },
            Self::Interpolation => AlgorithmInfo {
                name: "Interpolation Search",
                description: "An improved variant of binary search for uniformly distributed \
                    sorted arrays, using interpolation to guess the position.",
                time_complexity: "O(log log n) avg, O(n) worst",
                space_complexity: "O(1)",
            },
        }
    }
}

/// A key that names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm `{key}` (expected one of: {expected})")]
pub struct UnknownAlgorithm {
    pub key: String,
    pub expected: String,
}

fn unknown(key: &str, keys: impl Iterator<Item = &'static str>) -> UnknownAlgorithm {
    UnknownAlgorithm {
        key: key.to_string(),
        expected: keys.collect::<Vec<_>>().join(", "),
    }
}

impl FromStr for SortAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|alg| alg.key() == key)
            .ok_or_else(|| unknown(s, Self::ALL.into_iter().map(Self::key)))
    }
}

impl FromStr for SearchAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|alg| alg.key() == key)
            .ok_or_else(|| unknown(s, Self::ALL.into_iter().map(Self::key)))
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for alg in SortAlgorithm::ALL {
            assert_eq!(alg.key().parse::<SortAlgorithm>().unwrap(), alg);
        }
        for alg in SearchAlgorithm::ALL {
            assert_eq!(alg.key().parse::<SearchAlgorithm>().unwrap(), alg);
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(" Quick ".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Quick);
    }

    #[test]
    fn unknown_key_lists_alternatives() {
        let err = "bogo".parse::<SortAlgorithm>().unwrap_err();
        assert_eq!(err.key, "bogo");
        assert!(err.expected.starts_with("bubble, insertion"));
    }

    #[test]
    fn only_binary_and_interpolation_need_sorted_input() {
        let ordered: Vec<_> = SearchAlgorithm::ALL
            .into_iter()
            .filter(|alg| alg.requires_sorted())
            .collect();
        assert_eq!(
            ordered,
            vec![SearchAlgorithm::Binary, SearchAlgorithm::Interpolation]
        );
    }

    #[test]
    fn info_names_are_distinct() {
        let mut names: Vec<_> = SortAlgorithm::ALL.iter().map(|a| a.info().name).collect();
        names.extend(SearchAlgorithm::ALL.iter().map(|a| a.info().name));
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
