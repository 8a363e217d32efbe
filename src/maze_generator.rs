//! Maze generation
//!
//! Randomized depth-first carving ("recursive backtracker"). Starting from
//! the north-west cell, the generator repeatedly opens a wall towards a
//! random unvisited neighbour and moves there. At a dead end it steps back
//! to the cell it came from. Because walls are only ever opened towards
//! unvisited cells the carved passages form a spanning tree of the grid.

use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::error::MazeError;
use crate::grid::{Direction, Grid};
use crate::Maze;

/// Bookkeeping of a single carving run
#[derive(Debug)]
struct GenerationState {
    /// Cells reached so far; never decremented
    visited_count: usize,
    total: usize,
    /// Set the first time the goal is reached
    solution_frozen: bool,
    /// Provisional start-to-goal path, as arena indices
    path: Vec<usize>,
}

impl GenerationState {
    fn new(total: usize) -> Self {
        GenerationState {
            visited_count: 0,
            total,
            solution_frozen: false,
            path: Vec::new(),
        }
    }

    fn all_visited(&self) -> bool {
        self.visited_count == self.total
    }
}

/// Perfect maze generator
pub struct MazeGenerator<R = StdRng> {
    random: R,
}

impl MazeGenerator<StdRng> {
    /// Generator seeded with `seed`, or from system entropy when `None`
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Generator drawing all choices from `random`
    pub fn with_rng(random: R) -> Self {
        Self { random }
    }

    /// Carve a `width` x `height` maze
    ///
    /// # Examples
    /// ```
    /// use dfs_maze::maze_generator::MazeGenerator;
    ///
    /// let maze = MazeGenerator::new(Some(7)).generate(4, 3).unwrap();
    /// assert_eq!(maze.solution().first(), Some(&(0, 0)));
    /// assert_eq!(maze.solution().last(), Some(&(3, 2)));
    /// ```
    pub fn generate(&mut self, width: i64, height: i64) -> Result<Maze, MazeError> {
        self.generate_with_trace(width, height, |_| ())
    }

    /// Carve a maze, calling `on_step` with the grid every time carving
    /// enters a cell, both when moving forward and when backtracking.
    pub fn generate_with_trace<F>(
        &mut self,
        width: i64,
        height: i64,
        mut on_step: F,
    ) -> Result<Maze, MazeError>
    where
        F: FnMut(&Grid),
    {
        let mut grid = Grid::build(width, height)?;
        let solution = self.carve(&mut grid, &mut on_step);
        Ok(Maze::from_parts(grid, solution))
    }

    /// Carve passages into a fresh grid, returning the start-to-goal path.
    ///
    /// Backtracking walks `came_from` links instead of unwinding a call
    /// stack, so the depth of the carving tree is not limited by the stack.
    fn carve(&mut self, grid: &mut Grid, on_step: &mut dyn FnMut(&Grid)) -> Vec<usize> {
        let start = 0;
        let goal = grid.len() - 1;
        let mut state = GenerationState::new(grid.len());
        let mut steps = 0usize;

        debug!(
            "Carving {}x{} maze from (0, 0) to ({}, {})",
            grid.width(),
            grid.height(),
            grid.width() - 1,
            grid.height() - 1
        );

        let mut current = Some(start);
        while let Some(index) = current {
            if !state.solution_frozen && !grid.cell(index).visited {
                state.path.push(index);
                grid.cell_mut(index).on_solution_path = true;
            }
            if index == goal && !state.solution_frozen {
                state.solution_frozen = true;
                debug!("Goal reached, solution length {}", state.path.len());
            }

            steps += 1;
            on_step(&*grid);

            if state.all_visited() {
                break;
            }

            let cell = grid.cell_mut(index);
            if !cell.visited {
                cell.visited = true;
                state.visited_count += 1;
            }

            let candidates = grid.unvisited_neighbours(index);
            current = match candidates.choose(&mut self.random) {
                None => {
                    if !state.solution_frozen {
                        state.path.pop();
                        grid.cell_mut(index).on_solution_path = false;
                    }
                    let previous = grid.cell(index).came_from;
                    trace!("Dead end at {:?}, backtracking", grid.cell(index).position());
                    previous
                }
                Some(&(direction, next)) => {
                    grid.carve(index, direction);
                    grid.cell_mut(next).came_from = Some(index);
                    trace!(
                        "Carved {} from {:?}",
                        direction,
                        grid.cell(index).position()
                    );
                    Some(next)
                }
            };
        }

        // Carving also ends when the start cell runs out of moves, which
        // only happens once every cell has been reached (e.g. a 1x1 grid).
        debug_assert!(state.all_visited());
        grid.open_boundary(start, Direction::North);
        grid.open_boundary(goal, Direction::South);
        debug!("Carving complete after {} steps", steps);

        state.path
    }
}
