//! Placement of the launcher box on the screen.

use crate::Config;

/// Rows taken by the box itself: top border, search line, separator, bottom border.
pub const CHROME_ROWS: usize = 4;

/// Position and size of the centered launcher box.
///
/// Coordinates are 1-indexed terminal cells, matching `position_cursor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowLayout {
    /// Row of the top border.
    pub top: usize,
    /// Column of the left border.
    pub left: usize,
    /// Total height including borders.
    pub height: usize,
    /// Total width including borders.
    pub width: usize,
}

impl WindowLayout {
    /// Centers a box of at most `config.window_height` × `config.window_width` cells in
    /// a `rows` × `cols` terminal, keeping one spare line above and below.
    ///
    /// The box is never shorter than its chrome plus one list row unless the terminal
    /// itself is shorter than that; the spare lines are given up first.
    ///
    /// # Examples
    ///
    /// ```
    /// use mlaunch::ui::WindowLayout;
    /// use mlaunch::Config;
    ///
    /// let layout = WindowLayout::compute(40, 100, &Config::default());
    /// assert_eq!((layout.height, layout.width), (22, 60));
    /// assert_eq!(layout.visible_rows(), 18);
    ///
    /// let small = WindowLayout::compute(12, 100, &Config::default());
    /// assert_eq!(small.height, 10);
    /// ```
    #[must_use]
    pub fn compute(rows: usize, cols: usize, config: &Config) -> Self {
        let height = config
            .window_height
            .min(rows.saturating_sub(2))
            .max(CHROME_ROWS + 1)
            .min(rows)
            .max(1);
        let width = config.window_width.min(cols).max(1);

        Self {
            top: rows.saturating_sub(height) / 2 + 1,
            left: cols.saturating_sub(width) / 2 + 1,
            height,
            width,
        }
    }

    /// Number of list rows that fit inside the box, at least one.
    #[must_use]
    pub const fn visible_rows(&self) -> usize {
        let rows = self.height.saturating_sub(CHROME_ROWS);
        if rows == 0 {
            1
        } else {
            rows
        }
    }

    /// Width available for text inside the borders, leaving one cell of margin on
    /// each side.
    #[must_use]
    pub const fn text_width(&self) -> usize {
        self.width.saturating_sub(4)
    }

    /// Screen row of the `index`-th list row.
    #[must_use]
    pub const fn list_row(&self, index: usize) -> usize {
        self.top + 3 + index
    }

    /// Whether `row` lies strictly between the top and bottom borders.
    #[must_use]
    pub const fn is_interior_row(&self, row: usize) -> bool {
        row > self.top && row < self.bottom()
    }

    /// Screen row of the bottom border.
    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.top + self.height.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_in_large_terminal() {
        let layout = WindowLayout::compute(24, 80, &Config::default());
        assert_eq!(layout.height, 22);
        assert_eq!(layout.top, 2);
        assert_eq!(layout.left, 11);
        assert_eq!(layout.bottom(), 23);
    }

    #[test]
    fn narrow_terminal_shrinks_width() {
        let layout = WindowLayout::compute(30, 40, &Config::default());
        assert_eq!(layout.width, 40);
        assert_eq!(layout.left, 1);
        assert_eq!(layout.text_width(), 36);
    }

    #[test]
    fn short_terminal_still_fits_one_list_row() {
        for rows in 5..=7 {
            let layout = WindowLayout::compute(rows, 80, &Config::default());
            assert_eq!(layout.height, 5, "rows = {rows}");
            assert!(layout.is_interior_row(layout.list_row(0)), "rows = {rows}");
            assert!(layout.bottom() <= rows);
        }
    }

    #[test]
    fn tiny_terminal_never_exceeds_screen() {
        let layout = WindowLayout::compute(3, 10, &Config::default());
        assert_eq!(layout.height, 3);
        assert_eq!((layout.top, layout.bottom()), (1, 3));
        assert_eq!(layout.visible_rows(), 1);
        assert!(!layout.is_interior_row(layout.list_row(0)));
    }

    #[test]
    fn honors_configured_size() {
        let config = Config {
            window_height: 8,
            window_width: 30,
            ..Config::default()
        };
        let layout = WindowLayout::compute(50, 120, &config);
        assert_eq!((layout.height, layout.width), (8, 30));
        assert_eq!(layout.visible_rows(), 4);
    }
}
