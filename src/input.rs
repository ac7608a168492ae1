//! Shared input handling: event types, click targets, and coordinate conversion.
//!
//! The render pass registers rectangular click targets tagged with semantic
//! action IDs (see `game::actions`); the mouse handler converts browser pixel
//! coordinates to terminal cells and hit-tests them here.

use ratzilla::ratatui::layout::Rect;

/// All possible input events, normalized from keyboard, mouse, and touch sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A key press from keyboard.
    Key(char),
    /// A click/tap on a registered target, identified by a semantic action ID.
    Click(u16),
}

/// A region on screen that can be tapped/clicked to trigger an action.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// Rectangular hit region in terminal cell coordinates.
    pub rect: Rect,
    pub action_id: u16,
}

/// Shared state between the render loop and the click handler.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Register a click target with a rectangular hit region.
    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Convenience: register a full-width target at one row within an area.
    /// Rows outside the area are silently dropped.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.targets.push(ClickTarget {
                rect: Rect::new(area.x, row, area.width, 1),
                action_id,
            });
        }
    }

    /// Register click targets for a horizontal tab bar.
    ///
    /// `tab_widths` holds `(display_width, action_id)` for each padded tab
    /// label; `separator_width` is the display width of the string between
    /// tabs. Target boundaries fall on the midpoints of the separators, with
    /// the first and last tab extended to the area edges so the whole bar is
    /// tappable with no dead columns.
    pub fn register_tab_targets(
        &mut self,
        tab_widths: &[(u16, u16)],
        separator_width: u16,
        x: u16,
        y: u16,
        total_width: u16,
        height: u16,
    ) {
        let n = tab_widths.len();
        if n == 0 || total_width == 0 {
            return;
        }

        // Starting column of each tab label
        let mut starts: Vec<u16> = Vec::with_capacity(n);
        let mut cursor: u16 = 0;
        for (i, &(w, _)) in tab_widths.iter().enumerate() {
            if i > 0 {
                cursor += separator_width;
            }
            starts.push(cursor);
            cursor += w;
        }

        for i in 0..n {
            let (_, action_id) = tab_widths[i];

            let left = if i == 0 {
                0
            } else {
                let prev_end = starts[i - 1] + tab_widths[i - 1].0;
                prev_end + (starts[i] - prev_end) / 2
            };
            let right = if i == n - 1 {
                total_width
            } else {
                let cur_end = starts[i] + tab_widths[i].0;
                cur_end + (starts[i + 1] - cur_end) / 2
            };

            let w = right.saturating_sub(left);
            if w > 0 {
                self.add_click_target(Rect::new(x + left, y, w, height), action_id);
            }
        }
    }

    /// Hit-test a terminal cell against all registered targets.
    /// Later-registered targets win on overlap (they render on top).
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }
}

/// Whether a screen width (in columns) should use the stacked narrow layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 80
}

/// Convert a browser pixel coordinate (relative to the grid container's
/// top-left corner) to a terminal cell.
///
/// Returns `None` when the point falls outside the grid or the grid has no
/// usable dimensions yet (first frames).
pub fn pixel_to_cell(
    click_x: f64,
    click_y: f64,
    grid_width: f64,
    grid_height: f64,
    terminal_cols: u16,
    terminal_rows: u16,
) -> Option<(u16, u16)> {
    if grid_width <= 0.0 || grid_height <= 0.0 || terminal_cols == 0 || terminal_rows == 0 {
        return None;
    }
    if click_x < 0.0 || click_y < 0.0 {
        return None;
    }

    let col = (click_x / (grid_width / terminal_cols as f64)) as u16;
    let row = (click_y / (grid_height / terminal_rows as f64)) as u16;

    if col >= terminal_cols || row >= terminal_rows {
        return None;
    }
    Some((col, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hit_test ───────────────────────────────────────────────────

    #[test]
    fn hit_test_basic_rows() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 80, 1), 1);
        cs.add_click_target(Rect::new(0, 11, 80, 1), 2);

        assert_eq!(cs.hit_test(5, 10), Some(1));
        assert_eq!(cs.hit_test(5, 11), Some(2));
        assert_eq!(cs.hit_test(5, 12), None);
    }

    #[test]
    fn hit_test_multi_row_rect() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 5, 40, 3), 42);

        assert_eq!(cs.hit_test(10, 4), None);
        assert_eq!(cs.hit_test(10, 5), Some(42));
        assert_eq!(cs.hit_test(10, 7), Some(42));
        assert_eq!(cs.hit_test(10, 8), None);
    }

    #[test]
    fn hit_test_respects_columns() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 5, 10, 1), 1);
        cs.add_click_target(Rect::new(10, 5, 10, 1), 2);

        assert_eq!(cs.hit_test(9, 5), Some(1));
        assert_eq!(cs.hit_test(10, 5), Some(2));
        assert_eq!(cs.hit_test(20, 5), None);
    }

    #[test]
    fn hit_test_overlap_topmost_wins() {
        let mut cs = ClickState::new();
        // Full-width orb surface registered first, buy row on top
        cs.add_click_target(Rect::new(0, 5, 80, 1), 1);
        cs.add_click_target(Rect::new(5, 5, 10, 1), 2);

        assert_eq!(cs.hit_test(7, 5), Some(2));
        assert_eq!(cs.hit_test(0, 5), Some(1));
    }

    #[test]
    fn clear_targets_empties_state() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 1, 80, 1), 1);
        cs.clear_targets();
        assert!(cs.targets.is_empty());
        assert_eq!(cs.hit_test(0, 1), None);
    }

    // ── add_row_target ─────────────────────────────────────────────

    #[test]
    fn row_target_outside_area_dropped() {
        let mut cs = ClickState::new();
        let area = Rect::new(5, 10, 30, 5);
        cs.add_row_target(area, 12, 99);
        cs.add_row_target(area, 9, 98);
        cs.add_row_target(area, 15, 97);

        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(15, 12), Some(99));
    }

    // ── register_tab_targets ───────────────────────────────────────

    #[test]
    fn tab_targets_cover_full_bar() {
        // Two store tabs, 8 cols each, " │ " separator (3 cols)
        let mut cs = ClickState::new();
        let tabs: Vec<(u16, u16)> = vec![(8, 20), (8, 21)];
        cs.register_tab_targets(&tabs, 3, 0, 5, 60, 1);

        assert_eq!(cs.targets.len(), 2);
        // Tab 0: cols 0..9 (half the separator belongs to it)
        assert_eq!(cs.hit_test(0, 5), Some(20));
        assert_eq!(cs.hit_test(8, 5), Some(20));
        // Tab 1 extends to the right edge
        assert_eq!(cs.hit_test(10, 5), Some(21));
        assert_eq!(cs.hit_test(59, 5), Some(21));
    }

    #[test]
    fn tab_targets_with_offset_and_height() {
        let mut cs = ClickState::new();
        let tabs: Vec<(u16, u16)> = vec![(6, 20), (6, 21)];
        cs.register_tab_targets(&tabs, 1, 5, 3, 30, 2);

        assert_eq!(cs.hit_test(5, 3), Some(20));
        assert_eq!(cs.hit_test(5, 4), Some(20));
        assert_eq!(cs.hit_test(4, 3), None);
    }

    #[test]
    fn tab_targets_empty_input() {
        let mut cs = ClickState::new();
        cs.register_tab_targets(&[], 3, 0, 0, 80, 1);
        assert!(cs.targets.is_empty());
    }

    // ── layout ─────────────────────────────────────────────────────

    #[test]
    fn narrow_layout_threshold() {
        assert!(is_narrow_layout(40));
        assert!(is_narrow_layout(79));
        assert!(!is_narrow_layout(80));
    }

    // ── pixel_to_cell ──────────────────────────────────────────────

    #[test]
    fn pixel_to_cell_basic() {
        // 80x30 grid at 10px per col, 15px per row
        assert_eq!(pixel_to_cell(0.0, 0.0, 800.0, 450.0, 80, 30), Some((0, 0)));
        assert_eq!(pixel_to_cell(15.0, 16.0, 800.0, 450.0, 80, 30), Some((1, 1)));
        assert_eq!(
            pixel_to_cell(799.0, 449.0, 800.0, 450.0, 80, 30),
            Some((79, 29))
        );
    }

    #[test]
    fn pixel_to_cell_out_of_bounds() {
        assert_eq!(pixel_to_cell(800.0, 10.0, 800.0, 450.0, 80, 30), None);
        assert_eq!(pixel_to_cell(10.0, 450.0, 800.0, 450.0, 80, 30), None);
        assert_eq!(pixel_to_cell(-1.0, 10.0, 800.0, 450.0, 80, 30), None);
    }

    #[test]
    fn pixel_to_cell_degenerate_grid() {
        assert_eq!(pixel_to_cell(10.0, 10.0, 0.0, 450.0, 80, 30), None);
        assert_eq!(pixel_to_cell(10.0, 10.0, 800.0, 450.0, 0, 30), None);
    }

    #[test]
    fn pixel_to_cell_cell_centers() {
        let (cols, rows) = (40u16, 20u16);
        let (gw, gh) = (400.0, 300.0);
        for row in 0..rows {
            let y = row as f64 * (gh / rows as f64) + gh / rows as f64 / 2.0;
            let x = gw / 2.0;
            let (c, r) = pixel_to_cell(x, y, gw, gh, cols, rows).unwrap();
            assert_eq!(r, row);
            assert_eq!(c, cols / 2);
        }
    }

    // ── integration-style pipeline ─────────────────────────────────

    #[test]
    fn full_click_pipeline() {
        let mut cs = ClickState::new();
        cs.terminal_cols = 80;
        cs.terminal_rows = 30;

        // Orb surface + two store rows
        cs.add_click_target(Rect::new(0, 3, 80, 12), 0);
        cs.add_click_target(Rect::new(0, 17, 80, 1), 100);
        cs.add_click_target(Rect::new(0, 18, 80, 1), 101);

        let (gw, gh) = (800.0, 450.0);
        let cell_h = gh / 30.0;

        let (col, row) = pixel_to_cell(100.0, 5.0 * cell_h + 2.0, gw, gh, 80, 30).unwrap();
        assert_eq!(cs.hit_test(col, row), Some(0));

        let (col, row) = pixel_to_cell(100.0, 17.0 * cell_h + 2.0, gw, gh, 80, 30).unwrap();
        assert_eq!(cs.hit_test(col, row), Some(100));
    }
}
