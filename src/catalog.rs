//! Algorithm catalog: descriptive metadata and name lookup
//!
//! The metadata mirrors what the algorithm detail page shows next to each
//! visualization (complexity, stability, category). [`Catalog`] resolves the
//! loose names users type on the command line to an [`Algorithm`].

use crate::sorts::Algorithm;
use rustc_hash::FxHashMap;

/// Static description of a sorting algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub algorithm: Algorithm,
    pub name: &'static str,
    /// Short identifier used on the command line
    pub key: &'static str,
    pub description: &'static str,
    pub best_time: &'static str,
    pub average_time: &'static str,
    pub worst_time: &'static str,
    pub space: &'static str,
    pub category: &'static str,
    pub stable: bool,
    pub in_place: bool,
}

static CATALOG: [AlgorithmInfo; 8] = [
    AlgorithmInfo {
        algorithm: Algorithm::Bubble,
        name: "Bubble Sort",
        key: "bubble",
        description: "Repeatedly walks the list comparing neighbours and swapping \
                      them when they are out of order.",
        best_time: "O(n)",
        average_time: "O(n²)",
        worst_time: "O(n²)",
        space: "O(1)",
        category: "Exchange",
        stable: true,
        in_place: true,
    },
    AlgorithmInfo {
        algorithm: Algorithm::Selection,
        name: "Selection Sort",
        key: "selection",
        description: "Finds the smallest remaining element and moves it to the end \
                      of the sorted prefix.",
        best_time: "O(n²)",
        average_time: "O(n²)",
        worst_time: "O(n²)",
        space: "O(1)",
        category: "Selection",
        stable: false,
        in_place: true,
    },
    AlgorithmInfo {
        algorithm: Algorithm::Insertion,
        name: "Insertion Sort",
        key: "insertion",
        description: "Builds a sorted prefix, scanning it from the back to find \
                      where each new element belongs.",
        best_time: "O(n)",
        average_time: "O(n²)",
        worst_time: "O(n²)",
        space: "O(1)",
        category: "Insertion",
        stable: true,
        in_place: true,
    },
    AlgorithmInfo {
        algorithm: Algorithm::Shell,
        name: "Shell Sort",
        key: "shell",
        description: "Insertion sort over elements a shrinking gap apart, so values \
                      travel far in few moves.",
        best_time: "O(n log n)",
        average_time: "O(n^1.3)",
        worst_time: "O(n²)",
        space: "O(1)",
        category: "Insertion",
        stable: false,
        in_place: true,
    },
    AlgorithmInfo {
        algorithm: Algorithm::Merge,
        name: "Merge Sort",
        key: "merge",
        description: "Divide and conquer: sorts both halves, then merges the two \
                      sorted runs.",
        best_time: "O(n log n)",
        average_time: "O(n log n)",
        worst_time: "O(n log n)",
        space: "O(n)",
        category: "Merge",
        stable: true,
        in_place: false,
    },
    AlgorithmInfo {
        algorithm: Algorithm::Quick,
        name: "Quick Sort",
        key: "quick",
        description: "Partitions around a pivot into smaller and larger parts, then \
                      sorts each part.",
        best_time: "O(n log n)",
        average_time: "O(n log n)",
        worst_time: "O(n²)",
        space: "O(log n)",
        category: "Exchange",
        stable: false,
        in_place: true,
    },
    AlgorithmInfo {
        algorithm: Algorithm::Heap,
        name: "Heap Sort",
        key: "heap",
        description: "Arranges the array as a max-heap and repeatedly moves the root \
                      behind the shrinking heap.",
        best_time: "O(n log n)",
        average_time: "O(n log n)",
        worst_time: "O(n log n)",
        space: "O(1)",
        category: "Selection",
        stable: false,
        in_place: true,
    },
    AlgorithmInfo {
        algorithm: Algorithm::Counting,
        name: "Counting Sort",
        key: "counting",
        description: "Not comparison based: tallies each key, turns the tallies into \
                      positions, and places every element directly.",
        best_time: "O(n+k)",
        average_time: "O(n+k)",
        worst_time: "O(n+k)",
        space: "O(k)",
        category: "Non-comparison",
        stable: true,
        in_place: false,
    },
];

/// Metadata for `algorithm`
pub fn info(algorithm: Algorithm) -> &'static AlgorithmInfo {
    match algorithm {
        Algorithm::Bubble => &CATALOG[0],
        Algorithm::Selection => &CATALOG[1],
        Algorithm::Insertion => &CATALOG[2],
        Algorithm::Shell => &CATALOG[3],
        Algorithm::Merge => &CATALOG[4],
        Algorithm::Quick => &CATALOG[5],
        Algorithm::Heap => &CATALOG[6],
        Algorithm::Counting => &CATALOG[7],
    }
}

/// Every catalog entry in display order
pub fn all() -> &'static [AlgorithmInfo] {
    &CATALOG
}

/// Case-insensitive name index over the catalog
#[derive(Debug)]
pub struct Catalog {
    by_name: FxHashMap<String, Algorithm>,
}

impl Catalog {
    pub fn new() -> Self {
        let mut by_name = FxHashMap::default();
        for entry in &CATALOG {
            let full = entry.name.to_ascii_lowercase();
            by_name.insert(entry.key.to_string(), entry.algorithm);
            by_name.insert(format!("{}sort", entry.key), entry.algorithm);
            by_name.insert(full.replace(' ', "-"), entry.algorithm);
            by_name.insert(full.replace(' ', "_"), entry.algorithm);
            by_name.insert(full, entry.algorithm);
        }
        Catalog { by_name }
    }

    /// Resolve names like `quick`, `Quick Sort`, `quick-sort` or `quicksort`
    pub fn lookup(&self, name: &str) -> Option<Algorithm> {
        let normalized = name.trim().to_ascii_lowercase();
        self.by_name.get(&normalized).copied()
    }

    /// Command-line keys of every algorithm, for error messages
    pub fn keys(&self) -> Vec<&'static str> {
        CATALOG.iter().map(|entry| entry.key).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
