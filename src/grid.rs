//! Rectangular grid of cells
//!
//! Cells are stored in a flat arena, addressed by `y * width + x`. All
//! relations between cells (neighbours, the carving predecessor) are plain
//! arena indices, so the grid is the single owner of every cell.

use std::fmt;

use crate::error::MazeError;

/// Side of a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions, in the order candidate moves are enumerated
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The side facing this one on the neighbouring cell
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Coordinate step `(dx, dy)`; y grows southwards
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        write!(f, "{}", name)
    }
}

/// One position of the maze
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    /// Arena indices of adjacent cells, `None` at the grid boundary
    neighbours: [Option<usize>; 4],
    /// Passage carved towards each side
    open: [bool; 4],
    pub(crate) visited: bool,
    pub(crate) came_from: Option<usize>,
    pub(crate) on_solution_path: bool,
}

impl Cell {
    fn new(x: usize, y: usize) -> Self {
        Cell {
            x,
            y,
            neighbours: [None; 4],
            open: [false; 4],
            visited: false,
            came_from: None,
            on_solution_path: false,
        }
    }

    /// `(x, y)` coordinates
    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Index of the adjacent cell in `direction`
    pub fn neighbour(&self, direction: Direction) -> Option<usize> {
        self.neighbours[direction.index()]
    }

    /// Whether no wall separates this cell from its `direction` side
    pub fn is_open(&self, direction: Direction) -> bool {
        self.open[direction.index()]
    }

    /// Whether carving has reached this cell
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Index of the cell this one was first carved from
    pub fn came_from(&self) -> Option<usize> {
        self.came_from
    }

    /// Whether this cell is on the recorded start-to-goal path
    pub fn on_solution_path(&self) -> bool {
        self.on_solution_path
    }
}

/// Owning collection of all cells of a maze
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a `width` x `height` grid with all walls closed.
    ///
    /// Neighbour relations are wired before the grid is returned.
    ///
    /// Returns [MazeError::InvalidDimension] if either dimension is not
    /// positive.
    ///
    /// # Examples
    /// ```
    /// use dfs_maze::grid::{Direction, Grid};
    ///
    /// let grid = Grid::build(3, 2).unwrap();
    /// assert_eq!(grid.len(), 6);
    /// let corner = grid.cell_at(2, 1).unwrap();
    /// assert_eq!(corner.neighbour(Direction::East), None);
    /// assert!(Grid::build(0, 5).is_err());
    /// ```
    pub fn build(width: i64, height: i64) -> Result<Self, MazeError> {
        let invalid = || MazeError::InvalidDimension { width, height };
        if width <= 0 || height <= 0 {
            return Err(invalid());
        }
        let columns = usize::try_from(width).map_err(|_| invalid())?;
        let rows = usize::try_from(height).map_err(|_| invalid())?;
        let total = columns.checked_mul(rows).ok_or_else(invalid)?;
        isize::try_from(total).map_err(|_| invalid())?;

        let mut cells = Vec::with_capacity(total);
        for y in 0..rows {
            for x in 0..columns {
                cells.push(Cell::new(x, y));
            }
        }

        let mut grid = Grid {
            width: columns,
            height: rows,
            cells,
        };
        grid.wire();
        Ok(grid)
    }

    /// Derive the neighbour relations of every cell from its coordinates.
    fn wire(&mut self) {
        for index in 0..self.cells.len() {
            let (x, y) = self.cells[index].position();
            for direction in Direction::ALL {
                let (dx, dy) = direction.offset();
                let neighbour = self.index_at(x as isize + dx, y as isize + dy);
                self.cells[index].neighbours[direction.index()] = neighbour;
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Arena index of `(x, y)`, or `None` outside the grid
    pub fn index_at(&self, x: isize, y: isize) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Cell at `(x, y)`, or `None` outside the grid
    pub fn cell_at(&self, x: isize, y: isize) -> Option<&Cell> {
        self.index_at(x, y).map(|index| &self.cells[index])
    }

    /// Cell by arena index.
    ///
    /// Panics if `index` is out of range.
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    /// Iterate cells row by row, north to south and west to east
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells of row `y`, west to east
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Index of the neighbour of cell `index` in `direction`
    pub fn neighbour(&self, index: usize, direction: Direction) -> Option<usize> {
        self.cells[index].neighbour(direction)
    }

    /// Open the wall between cell `index` and its `direction` neighbour.
    ///
    /// Both sides of the wall are opened together. Returns the neighbour
    /// index, or `None` without touching anything when there is no
    /// neighbour on that side.
    pub fn carve(&mut self, index: usize, direction: Direction) -> Option<usize> {
        let neighbour = self.cells[index].neighbour(direction)?;
        self.cells[index].open[direction.index()] = true;
        self.cells[neighbour].open[direction.opposite().index()] = true;
        Some(neighbour)
    }

    /// Open a wall on the outer edge of the grid (entrance or exit).
    pub(crate) fn open_boundary(&mut self, index: usize, direction: Direction) {
        debug_assert!(
            self.cells[index].neighbour(direction).is_none(),
            "boundary opening towards an existing neighbour"
        );
        self.cells[index].open[direction.index()] = true;
    }

    /// Unvisited neighbours of cell `index` with the direction leading to
    /// them, in north, east, south, west order
    pub fn unvisited_neighbours(&self, index: usize) -> Vec<(Direction, usize)> {
        let cell = &self.cells[index];
        Direction::ALL
            .into_iter()
            .filter_map(|direction| {
                cell.neighbour(direction)
                    .filter(|&neighbour| !self.cells[neighbour].visited)
                    .map(|neighbour| (direction, neighbour))
            })
            .collect()
    }
}
