use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Palette entry painted into a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CellColor {
    /// Unpainted cell (palette index 0).
    Empty,
    /// Palette index 1.
    Red,
    /// Palette index 2.
    Blue,
    /// Palette index 3.
    Yellow,
    /// Palette index 4.
    Green,
    /// Palette index 5.
    Purple,
}

impl CellColor {
    /// Every palette entry ordered by index.
    pub const ALL: [CellColor; 6] = [
        Self::Empty,
        Self::Red,
        Self::Blue,
        Self::Yellow,
        Self::Green,
        Self::Purple,
    ];

    /// Resolves a palette index, returning `None` above 5.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Empty),
            1 => Some(Self::Red),
            2 => Some(Self::Blue),
            3 => Some(Self::Yellow),
            4 => Some(Self::Green),
            5 => Some(Self::Purple),
            _ => None,
        }
    }

    /// Palette index of the color.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Red => 1,
            Self::Blue => 2,
            Self::Yellow => 3,
            Self::Green => 4,
            Self::Purple => 5,
        }
    }

    /// Human-readable color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Purple => "Purple",
        }
    }
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Reasons grid data may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid has no rows or no columns.
    #[error("grid must contain at least one row and one column")]
    Empty,
    /// A cell holds a palette index outside `0..=5`.
    #[error("palette index {index} at column {column}, row {row} is not a known color")]
    InvalidColor {
        /// Offending palette index.
        index: u8,
        /// Column of the offending cell.
        column: u32,
        /// Row of the offending cell.
        row: u32,
    },
}

/// Dense, row-major rectangle of painted cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    columns: u32,
    rows: u32,
    cells: Vec<CellColor>,
}

impl Grid {
    /// Creates a grid of the given dimensions with every cell empty.
    #[must_use]
    pub fn blank(columns: u32, rows: u32) -> Self {
        let capacity_u64 = u64::from(columns) * u64::from(rows);
        let capacity = usize::try_from(capacity_u64).unwrap_or(0);
        Self {
            columns,
            rows,
            cells: vec![CellColor::Empty; capacity],
        }
    }

    /// Builds a grid from rows of palette indices.
    pub fn from_palette_rows<const C: usize>(rows: &[[u8; C]]) -> Result<Self, GridError> {
        if rows.is_empty() || C == 0 {
            return Err(GridError::Empty);
        }

        let columns = u32::try_from(C).map_err(|_| GridError::Empty)?;
        let row_count = u32::try_from(rows.len()).map_err(|_| GridError::Empty)?;
        let mut cells = Vec::with_capacity(rows.len() * C);
        for (row, values) in (0..row_count).zip(rows) {
            for (column, &index) in (0..columns).zip(values) {
                let color = CellColor::from_index(index).ok_or(GridError::InvalidColor {
                    index,
                    column,
                    row,
                })?;
                cells.push(color);
            }
        }

        Ok(Self {
            columns,
            rows: row_count,
            cells,
        })
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Provides the `(columns, rows)` dimensions of the grid.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    /// Reports whether both grids share the same dimensions.
    #[must_use]
    pub fn same_dimensions(&self, other: &Grid) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Returns the color painted at the provided cell, if it lies inside the grid.
    #[must_use]
    pub fn get(&self, cell: CellCoord) -> Option<CellColor> {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Paints the provided cell, returning `false` when it lies outside the grid.
    pub fn set(&mut self, cell: CellCoord, color: CellColor) -> bool {
        let Some(index) = self.index(cell) else {
            return false;
        };
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = color;
                true
            }
            None => false,
        }
    }

    /// Resets every cell to [`CellColor::Empty`].
    pub fn clear(&mut self) {
        self.cells.fill(CellColor::Empty);
    }

    /// Iterator over the grid's rows in top-to-bottom order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellColor]> {
        let width = usize::try_from(self.columns).unwrap_or(0).max(1);
        self.cells.chunks(width)
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.columns && cell.row() < self.rows {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.columns).ok()?;
            Some(row * width + column)
        } else {
            None
        }
    }
}
