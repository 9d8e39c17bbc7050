//! Square grids, terrain cells, and single-cell edits.
//!
//! Every grid is a flat row-major buffer (`index = y * size + x`). Lookups take signed
//! coordinates and return `None` outside the grid, so neighbourhood scans never wrap
//! and never panic.
use glam::IVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod automaton;
pub mod noise;

pub use automaton::{
    apply_cave_rules, apply_iterations, calculate_all_friend_counts, count_neighbor_friends,
    generate_organic_grid,
};
pub use noise::{
    generate_noise_grid, generate_random_noise_grid, generate_weighted_grid, pick_weighted,
};

/// Cell value for open floor (or "tree present" on the tree layer).
pub const FLOOR: u8 = 0;

/// Cell value for wall (or "water present" on the water layer).
pub const WALL: u8 = 1;

/// Offsets of the 8 surrounding cells, row by row.
pub(crate) const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A square grid of `size * size` values.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid<T>"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

/// Unchecked wire shape of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawGrid<T> {
    size: usize,
    cells: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = String;

    fn try_from(raw: RawGrid<T>) -> Result<Self, Self::Error> {
        let (size, len) = (raw.size, raw.cells.len());
        Grid::from_cells(size, raw.cells)
            .ok_or_else(|| format!("grid of size {} cannot hold {} cells", size, len))
    }
}

/// Binary terrain values with their derived neighbour counts.
pub type ValueGrid = Grid<Cell>;

/// Per-cell "painted during the current stroke" overlay.
pub type DrawMask = Grid<bool>;

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid of default values.
    pub fn new(size: usize) -> Self {
        Self::filled(size, T::default())
    }
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f(x, y)` for each cell in row-major order.
    pub fn from_fn(size: usize, mut f: impl FnMut(i32, i32) -> T) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for y in 0..size as i32 {
            for x in 0..size as i32 {
                cells.push(f(x, y));
            }
        }
        Self { size, cells }
    }

    /// Wrap a row-major buffer, or `None` unless it holds exactly `size * size` cells.
    pub fn from_cells(size: usize, cells: Vec<T>) -> Option<Self> {
        (size.checked_mul(size) == Some(cells.len())).then_some(Self { size, cells })
    }

    /// Side length in cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| (y as usize) * self.size + (x as usize))
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Cells of row `y`, or `None` outside the grid.
    pub fn row(&self, y: i32) -> Option<&[T]> {
        if y < 0 || y as usize >= self.size {
            return None;
        }
        let start = y as usize * self.size;
        Some(&self.cells[start..start + self.size])
    }

    /// Iterate `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (IVec2, &T)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let (x, y) = (i % size, i / size);
            (IVec2::new(x as i32, y as i32), cell)
        })
    }

    /// Build a same-sized grid from a per-cell projection.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            size: self.size,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl DrawMask {
    /// Reset every cell of the mask to unpainted.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of painted cells.
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|painted| **painted).count()
    }
}

/// A single terrain cell.
///
/// `value` is always [`FLOOR`] or [`WALL`]. `friend_count` caches the number of wall
/// neighbours as of the last recount and goes stale on edits until the next automaton
/// run. `is_being_drawn` only drives stroke feedback colours.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    value: u8,
    friend_count: Option<u8>,
    is_being_drawn: bool,
}

impl Cell {
    /// Cell with the given value, or `None` unless `value` is 0 or 1.
    pub fn try_new(value: u8) -> Option<Self> {
        is_valid_value(value).then_some(Self {
            value,
            friend_count: None,
            is_being_drawn: false,
        })
    }

    pub fn floor() -> Self {
        Self::default()
    }

    pub fn wall() -> Self {
        Self {
            value: WALL,
            ..Self::default()
        }
    }

    #[inline]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.value == WALL
    }

    #[inline]
    pub fn friend_count(&self) -> Option<u8> {
        self.friend_count
    }

    #[inline]
    pub fn is_being_drawn(&self) -> bool {
        self.is_being_drawn
    }

    pub(crate) fn set_friend_count(&mut self, count: u8) {
        self.friend_count = Some(count);
    }

    pub(crate) fn set_value_unchecked(&mut self, value: u8) {
        debug_assert!(is_valid_value(value));
        self.value = value;
    }

    pub(crate) fn clear_drawing(&mut self) {
        self.is_being_drawn = false;
    }
}

#[inline]
pub(crate) fn is_valid_value(value: u8) -> bool {
    value == FLOOR || value == WALL
}

impl ValueGrid {
    /// Build a value grid from square rows of 0/1 values.
    ///
    /// Returns `None` if the rows are not square or contain any other value.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Option<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return None;
            }
            for &value in row {
                cells.push(Cell::try_new(value)?);
            }
        }
        Some(Self { size, cells })
    }

    /// Value at `(x, y)`, or `None` outside the grid.
    pub fn value_at(&self, x: i32, y: i32) -> Option<u8> {
        self.get(x, y).map(Cell::value)
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_wall()).count()
    }

    /// Set a cell in place and flag it as being drawn.
    ///
    /// Returns `false` and leaves the grid untouched when the coordinates are outside the
    /// grid or `value` is not 0 or 1. The cached friend count is kept as is.
    pub fn set_value(&mut self, x: i32, y: i32, value: u8) -> bool {
        if !is_valid_value(value) {
            return false;
        }
        match self.get_mut(x, y) {
            Some(cell) => {
                cell.value = value;
                cell.is_being_drawn = true;
                true
            }
            None => false,
        }
    }

    /// Clear every `is_being_drawn` flag in place.
    pub fn clear_drawing_flags(&mut self) {
        for cell in &mut self.cells {
            cell.clear_drawing();
        }
    }
}

/// Copy of `grid` with `(x, y)` set to `value` and flagged as being drawn.
///
/// Out-of-range coordinates or a value other than 0/1 yield an unmodified copy.
pub fn set_cell_value(grid: &ValueGrid, x: i32, y: i32, value: u8) -> ValueGrid {
    let mut next = grid.clone();
    next.set_value(x, y, value);
    next
}

/// Copy of `grid` with `(x, y)` flipped between floor and wall and flagged as being drawn.
pub fn toggle_cell_value(grid: &ValueGrid, x: i32, y: i32) -> ValueGrid {
    match grid.value_at(x, y) {
        Some(value) => set_cell_value(grid, x, y, value ^ 1),
        None => grid.clone(),
    }
}
