//! Text rendering of a maze
//!
//! Every cell is drawn as three stacked five character glyphs. Side by side
//! the glyphs of a row form a continuous wall grid:
//!
//! ```text
//! X   XX X X
//! X        X
//! X X XX   X
//! ```

use itertools::Itertools;

use crate::grid::{Cell, Direction, Grid};

/// Draws wall state as fixed-width text
#[derive(Clone, Copy, Debug, Default)]
pub struct Renderer {
    show_solution: bool,
}

impl Renderer {
    const CORNER: &'static str = "X ";
    const RIGHT_CORNER: &'static str = "X";
    const WALL: &'static str = "X ";
    const GAP: &'static str = "  ";
    const SIDE_WALL: &'static str = "X";
    const SIDE_GAP: &'static str = " ";
    const INTERIOR: &'static str = "  ";
    const SOLUTION_INTERIOR: &'static str = ". ";

    /// Renderer for plain walls
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer that also marks cells on the recorded solution path
    pub fn with_solution() -> Self {
        Renderer {
            show_solution: true,
        }
    }

    /// Render the whole grid as `height * 3` lines joined by `\n`
    pub fn render(&self, grid: &Grid) -> String {
        (0..grid.height())
            .flat_map(|y| {
                let row = grid.row(y);
                [
                    row.iter().map(|cell| self.top(cell)).join(""),
                    row.iter().map(|cell| self.middle(cell)).join(""),
                    row.iter().map(|cell| self.bottom(cell)).join(""),
                ]
            })
            .join("\n")
    }

    fn top(&self, cell: &Cell) -> String {
        Self::edge(cell, Direction::North)
    }

    fn middle(&self, cell: &Cell) -> String {
        let west = if cell.is_open(Direction::West) {
            Self::GAP
        } else {
            Self::WALL
        };
        let interior = if self.show_solution && cell.on_solution_path() {
            Self::SOLUTION_INTERIOR
        } else {
            Self::INTERIOR
        };
        let east = if cell.is_open(Direction::East) {
            Self::SIDE_GAP
        } else {
            Self::SIDE_WALL
        };
        [west, interior, east].concat()
    }

    fn bottom(&self, cell: &Cell) -> String {
        Self::edge(cell, Direction::South)
    }

    /// Horizontal edge; corners are always walled
    fn edge(cell: &Cell, direction: Direction) -> String {
        let wall = if cell.is_open(direction) {
            Self::GAP
        } else {
            Self::WALL
        };
        [Self::CORNER, wall, Self::RIGHT_CORNER].concat()
    }
}

#[cfg(test)]
mod tests {
    use super::Renderer;
    use crate::grid::{Direction, Grid};

    #[test]
    fn closed_cell_is_a_full_box() {
        let grid = Grid::build(1, 1).unwrap();
        assert_eq!(Renderer::new().render(&grid), "X X X\nX   X\nX X X");
    }

    #[test]
    fn open_walls_render_as_gaps() {
        let mut grid = Grid::build(2, 1).unwrap();
        grid.carve(0, Direction::East);
        grid.open_boundary(0, Direction::North);
        grid.open_boundary(1, Direction::South);

        let lines = Renderer::new().render(&grid);
        let lines: Vec<&str> = lines.lines().collect();
        assert_eq!(lines, vec!["X   XX X X", "X        X", "X X XX   X"]);
    }

    #[test]
    fn output_has_three_lines_per_row_of_fixed_width() {
        let grid = Grid::build(4, 3).unwrap();
        let text = Renderer::new().render(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines.iter().all(|line| line.len() == 20));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn solution_marks_only_flagged_cells() {
        let mut grid = Grid::build(2, 1).unwrap();
        grid.cell_mut(1).on_solution_path = true;

        assert_eq!(
            Renderer::with_solution().render(&grid),
            "X X XX X X\nX   XX . X\nX X XX X X"
        );
        assert_eq!(
            Renderer::new().render(&grid),
            "X X XX X X\nX   XX   X\nX X XX X X"
        );
    }
}
