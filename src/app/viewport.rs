//! Scroll offset computation for the visible window.

/// Returns the scroll offset that brings `highlight` into a window of `capacity` rows
/// starting at `offset`.
///
/// The offset only moves when it has to: up to the highlight when the highlight is
/// above the window, down just far enough when it is below. A capacity of zero is
/// treated as one row.
///
/// # Examples
///
/// ```
/// use mlaunch::app::viewport::adjust;
///
/// assert_eq!(adjust(0, 1, 2), 0);
/// assert_eq!(adjust(0, 2, 2), 1);
/// assert_eq!(adjust(5, 3, 2), 3);
/// ```
#[must_use]
pub fn adjust(offset: usize, highlight: usize, capacity: usize) -> usize {
    let capacity = capacity.max(1);
    if highlight < offset {
        highlight
    } else if highlight >= offset + capacity {
        highlight + 1 - capacity
    } else {
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_inside_window() {
        assert_eq!(adjust(3, 3, 4), 3);
        assert_eq!(adjust(3, 6, 4), 3);
    }

    #[test]
    fn scrolls_up_to_highlight() {
        assert_eq!(adjust(10, 0, 5), 0);
        assert_eq!(adjust(10, 9, 5), 9);
    }

    #[test]
    fn scrolls_down_minimally() {
        assert_eq!(adjust(0, 7, 5), 3);
        assert_eq!(adjust(2, 7, 5), 3);
    }

    #[test]
    fn zero_capacity_acts_as_one() {
        assert_eq!(adjust(0, 4, 0), 4);
        assert_eq!(adjust(4, 4, 0), 4);
    }

    #[test]
    fn highlight_always_contained() {
        for offset in 0..12 {
            for highlight in 0..12 {
                for capacity in 1..6 {
                    let new_offset = adjust(offset, highlight, capacity);
                    assert!(new_offset <= highlight);
                    assert!(highlight < new_offset + capacity);
                }
            }
        }
    }
}
