// Per-index highlight classification

/// How a single array slot should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Nothing interesting happening here
    Idle,
    /// One side of the current comparison
    Comparing,
    /// Just moved by a swap, shift or placement
    Swapped,
    /// Quick Sort pivot or Selection Sort running minimum
    Pivot,
    /// Known to be in its final position
    Sorted,
    /// Outside the region the algorithm is currently working on
    Inactive,
}

/// Set `marks[index]` if it exists
pub(crate) fn set(marks: &mut [Mark], index: usize, mark: Mark) {
    if let Some(slot) = marks.get_mut(index) {
        *slot = mark;
    }
}

/// Set both indices of a pair
pub(crate) fn set_pair(marks: &mut [Mark], pair: Option<(usize, usize)>, mark: Mark) {
    if let Some((a, b)) = pair {
        set(marks, a, mark);
        set(marks, b, mark);
    }
}

/// Mark every index in `range` (clamped to the slice)
pub(crate) fn fill(marks: &mut [Mark], range: std::ops::Range<usize>, mark: Mark) {
    let end = range.end.min(marks.len());
    let start = range.start.min(end);
    for slot in &mut marks[start..end] {
        *slot = mark;
    }
}
