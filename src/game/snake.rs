use super::direction::Direction;
use super::grid::{Cell, GridModel, Occupancy};

/// Snake state.  Snaaake.
///
/// The body is kept as a flat run of cells, head first and tail last.  Moving
/// rewrites the cells in place instead of pushing and popping, so the only
/// allocation the snake ever does is the occasional append when it grows.
///
/// The body doesn't refuse to overlap itself; it is up to the caller to check
/// [`SnakeBody::check_self_collision()`] after each move and end the game.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SnakeBody {
    grid: GridModel,

    /// Never empty
    cells: Vec<Cell>,
}

impl SnakeBody {
    /// Create a snake of length 1 at `start`
    pub(crate) fn new(grid: GridModel, start: Cell) -> SnakeBody {
        debug_assert!(grid.contains(start), "snake should start on the grid");
        SnakeBody {
            grid,
            cells: vec![start],
        }
    }

    /// Create a snake occupying `cells`, head first
    #[cfg(test)]
    pub(crate) fn from_cells<I: IntoIterator<Item = Cell>>(grid: GridModel, cells: I) -> SnakeBody {
        let cells = cells.into_iter().collect::<Vec<_>>();
        assert!(!cells.is_empty(), "snake should have at least one cell");
        SnakeBody { grid, cells }
    }

    pub(crate) fn head(&self) -> Cell {
        self.cells[0]
    }

    pub(crate) fn tail(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Return the positions of all segments, head first
    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Return where the head would be after moving one step in `direction`,
    /// without moving
    pub(crate) fn peek_next_head(&self, direction: Direction) -> Cell {
        self.grid.step(self.head(), direction)
    }

    /// Move the snake one step in `direction`.  Every segment takes the place
    /// of the one ahead of it and the head moves on, wrapping around the
    /// edges.  If `grow` is true, the old tail position is kept as a new last
    /// segment, so the snake ends up one cell longer.
    ///
    /// Growing onto the last free cell of the grid is allowed; deciding that
    /// the game has been won is the caller's job.
    pub(crate) fn advance(&mut self, direction: Direction, grow: bool) {
        let new_head = self.peek_next_head(direction);
        let old_tail = self.tail();
        let len = self.cells.len();
        // Shifting towards the tail end, so nothing is overwritten before it
        // has been copied.
        self.cells.copy_within(..len - 1, 1);
        self.cells[0] = new_head;
        if grow {
            self.cells.push(old_tail);
        }
    }

    /// Returns `true` if the head shares a cell with any other segment
    pub(crate) fn check_self_collision(&self) -> bool {
        let head = self.head();
        self.cells[1..].contains(&head)
    }

    /// Returns `true` if any segment is on `cell`
    pub(crate) fn occupies(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

impl Occupancy for SnakeBody {
    fn occupies(&self, cell: Cell) -> bool {
        SnakeBody::occupies(self, cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn grid() -> GridModel {
        GridModel::new(20)
    }

    fn snake<const N: usize>(cells: [(u16, u16); N]) -> SnakeBody {
        SnakeBody::from_cells(grid(), cells.map(|(x, y)| Cell::new(x, y)))
    }

    fn cells<const N: usize>(cells: [(u16, u16); N]) -> Vec<Cell> {
        cells.map(|(x, y)| Cell::new(x, y)).to_vec()
    }

    #[test]
    fn new_snake() {
        let s = SnakeBody::new(grid(), Cell::new(0, 2));
        assert_eq!(s.len(), 1);
        assert_eq!(s.head(), Cell::new(0, 2));
        assert_eq!(s.tail(), Cell::new(0, 2));
        assert!(!s.check_self_collision());
    }

    #[test]
    fn single_cell_moves() {
        let mut s = snake([(5, 5)]);
        s.advance(Direction::Right, false);
        assert_eq!(s.cells(), cells([(6, 5)]));
        assert!(!s.check_self_collision());
    }

    #[test]
    fn single_cell_wraps() {
        let mut s = snake([(19, 5)]);
        s.advance(Direction::Right, false);
        assert_eq!(s.cells(), cells([(0, 5)]));
        assert!(!s.check_self_collision());
    }

    #[test]
    fn grow_keeps_old_tail() {
        let mut s = snake([(5, 5), (4, 5), (3, 5)]);
        s.advance(Direction::Right, true);
        assert_eq!(s.cells(), cells([(6, 5), (5, 5), (4, 5), (3, 5)]));
        assert_eq!(s.len(), 4);
        assert!(!s.check_self_collision());
    }

    #[test]
    fn grow_single_cell() {
        let mut s = snake([(0, 0)]);
        s.advance(Direction::Up, true);
        assert_eq!(s.cells(), cells([(0, 19), (0, 0)]));
    }

    #[test]
    fn move_onto_own_body() {
        let mut s = snake([(5, 5), (6, 5), (5, 6), (4, 5)]);
        assert_eq!(s.peek_next_head(Direction::Right), Cell::new(6, 5));
        s.advance(Direction::Right, false);
        assert_eq!(s.cells(), cells([(6, 5), (5, 5), (6, 5), (5, 6)]));
        assert!(s.check_self_collision());
    }

    #[test]
    fn chase_own_tail() {
        // A 2×2 loop: the head moves into the cell the tail is leaving
        let mut s = snake([(5, 5), (5, 6), (6, 6), (6, 5)]);
        s.advance(Direction::Right, false);
        assert_eq!(s.cells(), cells([(6, 5), (5, 5), (5, 6), (6, 6)]));
        assert!(!s.check_self_collision());
    }

    #[test]
    fn grow_into_own_tail() {
        let mut s = snake([(5, 5), (5, 6), (6, 6), (6, 5)]);
        s.advance(Direction::Right, true);
        assert_eq!(s.cells(), cells([(6, 5), (5, 5), (5, 6), (6, 6), (6, 5)]));
        assert!(s.check_self_collision());
    }

    #[rstest]
    #[case(Direction::Up, false)]
    #[case(Direction::Up, true)]
    #[case(Direction::Right, false)]
    #[case(Direction::Right, true)]
    #[case(Direction::Down, false)]
    #[case(Direction::Down, true)]
    #[case(Direction::Left, false)]
    #[case(Direction::Left, true)]
    fn advance_shifts_body(#[case] d: Direction, #[case] grow: bool) {
        let before = snake([(10, 10), (10, 11), (11, 11), (12, 11), (12, 12)]);
        let mut after = before.clone();
        after.advance(d, grow);
        assert_eq!(after.head(), before.peek_next_head(d));
        assert_eq!(&after.cells()[1..5], &before.cells()[..4]);
        if grow {
            assert_eq!(after.len(), before.len() + 1);
            assert_eq!(after.tail(), before.tail());
        } else {
            assert_eq!(after.len(), before.len());
        }
    }

    #[test]
    fn peek_does_not_move() {
        let s = snake([(0, 0), (1, 0)]);
        assert_eq!(s.peek_next_head(Direction::Left), Cell::new(19, 0));
        assert_eq!(s.peek_next_head(Direction::Up), Cell::new(0, 19));
        assert_eq!(s.cells(), cells([(0, 0), (1, 0)]));
    }

    #[test]
    fn occupies() {
        let s = snake([(5, 5), (4, 5), (3, 5)]);
        assert!(s.occupies(Cell::new(5, 5)));
        assert!(s.occupies(Cell::new(3, 5)));
        assert!(!s.occupies(Cell::new(6, 5)));
        assert!(!s.occupies(Cell::new(5, 4)));
    }

    #[test]
    fn fill_grid() {
        // Snake back and forth across a 3×3 grid, eating on every step
        let grid = GridModel::new(3);
        let mut s = SnakeBody::new(grid, Cell::new(0, 0));
        let route = [
            Direction::Right,
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Left,
            Direction::Down,
            Direction::Right,
            Direction::Right,
        ];
        for d in route {
            s.advance(d, true);
            assert!(!s.check_self_collision());
        }
        assert_eq!(s.len(), grid.capacity());
        assert!(grid.cells().all(|c| s.occupies(c)));
    }
}
