//! Debug colours for inspecting automaton state cell by cell.
use crate::config::WALL_SURVIVAL_THRESHOLD;
use crate::grid::{Cell, WALL};

/// Flat colour for one cell in a debug view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellColor {
    Red,
    Green,
    Black,
    White,
}

impl CellColor {
    /// `#rrggbb` form.
    pub fn hex(self) -> &'static str {
        match self {
            CellColor::Red => "#aa0000",
            CellColor::Green => "#00aa00",
            CellColor::Black => "#000000",
            CellColor::White => "#ffffff",
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            CellColor::Red => [0xaa, 0x00, 0x00],
            CellColor::Green => [0x00, 0xaa, 0x00],
            CellColor::Black => [0x00, 0x00, 0x00],
            CellColor::White => [0xff, 0xff, 0xff],
        }
    }
}

/// Red for cells with fewer wall neighbours than the survival threshold, green otherwise.
///
/// Missing cells and cells that were never counted are black.
pub fn cell_color(cell: Option<&Cell>) -> CellColor {
    match cell.and_then(Cell::friend_count) {
        None => CellColor::Black,
        Some(count) if count < WALL_SURVIVAL_THRESHOLD => CellColor::Red,
        Some(_) => CellColor::Green,
    }
}

/// Like [`cell_color`], but cells in an active stroke show their raw value in black or
/// white, and settled cells are coloured by value instead of neighbour count.
pub fn cell_color_with_drawing_state(cell: Option<&Cell>) -> CellColor {
    let Some(cell) = cell else {
        return CellColor::Black;
    };
    if cell.is_being_drawn() {
        return if cell.value() == WALL {
            CellColor::White
        } else {
            CellColor::Black
        };
    }
    match cell.friend_count() {
        None => CellColor::Black,
        Some(_) if cell.value() != WALL => CellColor::Red,
        Some(_) => CellColor::Green,
    }
}
