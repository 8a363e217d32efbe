//! Generate perfect mazes and draw them as text
//!
//! Passages are carved by randomized depth-first search from the
//! north-west cell. The result has exactly one path between any two cells.
//! The entrance is on the north side of the north-west cell and the exit on
//! the south side of the south-east cell.
//!
//! # Examples
//! ## Random maze
//! ```
//! use dfs_maze::Maze;
//!
//! let maze = Maze::new(6, 4, false).unwrap();
//! println!("{}", maze.render());
//! assert_eq!(maze.render().lines().count(), 12);
//! ```
//!
//! ## Reproducible maze with its solution
//! ```
//! use dfs_maze::maze_generator::MazeGenerator;
//!
//! let maze = MazeGenerator::new(Some(13)).generate(5, 5).unwrap();
//! println!("{}", maze.render_solution());
//!
//! let path = maze.solution();
//! assert_eq!(path[0], (0, 0));
//! assert_eq!(path[path.len() - 1], (4, 4));
//! ```

use std::fmt;

use petgraph::graph::{NodeIndex, UnGraph};

pub mod error;
pub mod grid;
pub mod maze_generator;
pub mod renderer;

pub use error::MazeError;

use grid::{Direction, Grid};
use maze_generator::MazeGenerator;
use renderer::Renderer;

/// A fully carved maze
#[derive(Clone, Debug)]
pub struct Maze {
    /// Carved grid
    grid: Grid,
    /// Cell indices from start to goal, as first discovered while carving
    solution: Vec<usize>,
}

impl Maze {
    /// Carve a new random `width` x `height` maze
    ///
    /// - `width`, `height`: maze size in cells, both positive.
    /// - `debug_trace`: print the maze to standard output every time
    ///   carving enters a cell.
    ///
    /// Returns [MazeError::InvalidDimension] if either dimension is not
    /// positive.
    pub fn new(width: i64, height: i64, debug_trace: bool) -> Result<Self, MazeError> {
        let mut generator = MazeGenerator::new(None);
        if debug_trace {
            let renderer = Renderer::new();
            generator.generate_with_trace(width, height, |grid| {
                println!("{}\n", renderer.render(grid))
            })
        } else {
            generator.generate(width, height)
        }
    }

    pub(crate) fn from_parts(grid: Grid, solution: Vec<usize>) -> Self {
        Maze { grid, solution }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Carved grid, for inspecting individual cells
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Text drawing of the maze walls
    pub fn render(&self) -> String {
        Renderer::new().render(&self.grid)
    }

    /// Text drawing with the solution path marked by dots
    pub fn render_solution(&self) -> String {
        Renderer::with_solution().render(&self.grid)
    }

    /// Path from `(0, 0)` to `(width - 1, height - 1)` as `(x, y)` pairs
    pub fn solution(&self) -> Vec<(usize, usize)> {
        self.solution
            .iter()
            .map(|&index| self.grid.cell(index).position())
            .collect()
    }

    /// Graph of the open passages between cells
    ///
    /// Nodes are weighted with the `(x, y)` coordinates of the cell and
    /// node indices follow the row-major cell order. Only passages towards
    /// east and south are inspected, because the graph is undirected.
    pub fn passage_graph(&self) -> UnGraph<(usize, usize), ()> {
        let mut graph =
            UnGraph::with_capacity(self.grid.len(), self.grid.len().saturating_sub(1));
        for cell in self.grid.cells() {
            graph.add_node(cell.position());
        }
        for (index, cell) in self.grid.cells().enumerate() {
            for direction in [Direction::East, Direction::South] {
                if let Some(other) = self.grid.neighbour(index, direction) {
                    if cell.is_open(direction) {
                        graph.add_edge(NodeIndex::new(index), NodeIndex::new(other), ());
                    }
                }
            }
        }
        graph
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use crate::maze_generator::MazeGenerator;
    use crate::{Maze, MazeError};

    #[test]
    fn zero_width_is_invalid() {
        assert_eq!(
            Maze::new(0, 5, false).unwrap_err(),
            MazeError::InvalidDimension {
                width: 0,
                height: 5
            }
        );
    }

    #[test]
    fn negative_height_is_invalid() {
        assert!(Maze::new(3, -4, true).is_err());
    }

    #[test]
    fn single_cell_renders_three_lines() {
        let maze = Maze::new(1, 1, false).unwrap();
        let text = maze.render();
        assert_eq!(text.lines().count(), 3);
        assert!(text.lines().all(|line| line.len() == 5));
        assert_eq!(maze.solution(), vec![(0, 0)]);
    }

    #[test]
    fn display_matches_render() {
        let maze = MazeGenerator::new(Some(3)).generate(4, 4).unwrap();
        assert_eq!(maze.to_string(), maze.render());
        assert_eq!((maze.width(), maze.height()), (4, 4));
    }

    #[test]
    fn passage_graph_is_a_spanning_tree() {
        let maze = MazeGenerator::new(Some(11)).generate(7, 5).unwrap();
        let graph = maze.passage_graph();

        assert_eq!(graph.node_count(), 35);
        assert_eq!(graph.edge_count(), 34);
        assert_eq!(petgraph::algo::connected_components(&graph), 1);
        assert!(!petgraph::algo::is_cyclic_undirected(&graph));
    }

    #[test]
    fn solution_render_marks_path_cells() {
        let maze = MazeGenerator::new(Some(5)).generate(6, 6).unwrap();
        let marks = maze.render_solution().matches('.').count();
        assert_eq!(marks, maze.solution().len());
        assert!(!maze.render().contains('.'));
    }
}
