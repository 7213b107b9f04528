//! The fixed hexagon cluster, in abstract grid units.

/// One hexagon position in the abstract grid, bound to a theme color slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexagonSlot {
    /// Column, in units of the horizontal hexagon spacing.
    pub grid_x: i32,
    /// Row level, in units of the vertical row spacing.
    pub grid_y: i32,
    /// Index into [`Theme::hexagon_colors`](crate::theme::Theme::hexagon_colors).
    pub color_index: usize,
}

impl HexagonSlot {
    const fn new(grid_x: i32, grid_y: i32, color_index: usize) -> Self {
        Self {
            grid_x,
            grid_y,
            color_index,
        }
    }
}

/// Two staggered rows of three hexagons.
///
/// Odd columns sit on the lower row, so every hexagon is the same distance
/// from its horizontal and diagonal neighbours.
pub const HEXAGON_SLOTS: [HexagonSlot; 6] = [
    HexagonSlot::new(0, 0, 0),
    HexagonSlot::new(2, 0, 1),
    HexagonSlot::new(4, 0, 2),
    HexagonSlot::new(1, 2, 3),
    HexagonSlot::new(3, 2, 4),
    HexagonSlot::new(5, 2, 5),
];

/// Largest color slot referenced by [`HEXAGON_SLOTS`].
pub fn max_color_index() -> usize {
    HEXAGON_SLOTS
        .iter()
        .map(|slot| slot.color_index)
        .max()
        .unwrap_or(0)
}
