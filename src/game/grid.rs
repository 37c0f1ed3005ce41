use super::direction::Direction;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::{Position, Positions, Rect, Size};
use std::collections::HashSet;

/// A square on the grid.  Both coordinates are always less than the size of
/// the grid the cell belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: u16,
    pub(crate) y: u16,
}

impl Cell {
    pub(crate) const fn new(x: u16, y: u16) -> Cell {
        Cell { x, y }
    }
}

impl From<Position> for Cell {
    fn from(Position { x, y }: Position) -> Cell {
        Cell { x, y }
    }
}

/// Anything that can say whether a given cell is taken
pub(crate) trait Occupancy {
    fn occupies(&self, cell: Cell) -> bool;
}

impl Occupancy for HashSet<Cell> {
    fn occupies(&self, cell: Cell) -> bool {
        self.contains(&cell)
    }
}

/// The N×N playing field.  Moving off any edge reappears on the opposite
/// edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GridModel {
    size: u16,
}

impl GridModel {
    /// Create a grid `size` cells on a side.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub(crate) fn new(size: u16) -> GridModel {
        assert!(size > 0, "grid size must be nonzero");
        GridModel { size }
    }

    pub(crate) fn size(self) -> u16 {
        self.size
    }

    /// The number of cells on the grid, i.e., the length of a snake that has
    /// filled it
    pub(crate) fn capacity(self) -> usize {
        usize::from(self.size) * usize::from(self.size)
    }

    /// Map an arbitrary coordinate onto `[0, size)`.  One step past the far
    /// edge lands on 0, and one step before 0 lands on `size - 1`.
    pub(crate) fn wrap(self, coord: i32) -> u16 {
        let wrapped = coord.rem_euclid(i32::from(self.size));
        u16::try_from(wrapped).expect("coordinate reduced modulo a u16 should fit in a u16")
    }

    /// Return the cell one step from `cell` in `direction`, wrapping around
    /// the edges
    pub(crate) fn step(self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.vector();
        Cell {
            x: self.wrap(i32::from(cell.x) + dx),
            y: self.wrap(i32::from(cell.y) + dy),
        }
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        cell.x < self.size && cell.y < self.size
    }

    /// Iterate over every cell of the grid, row by row
    pub(crate) fn cells(self) -> impl Iterator<Item = Cell> {
        self.positions().map(Cell::from)
    }

    /// Pick a cell uniformly at random from those not in `occupied`.  Returns
    /// `None` if every cell is taken.
    ///
    /// This always makes a single pass over the grid, so it stays cheap no
    /// matter how crowded the board gets.
    pub(crate) fn random_free_cell<O, R>(self, occupied: &O, rng: &mut R) -> Option<Cell>
    where
        O: Occupancy + ?Sized,
        R: Rng + ?Sized,
    {
        self.cells().filter(|&c| !occupied.occupies(c)).choose(rng)
    }

    pub(crate) fn dimensions(self) -> Size {
        Size {
            width: self.size,
            height: self.size,
        }
    }

    fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.dimensions())).positions()
    }
}
