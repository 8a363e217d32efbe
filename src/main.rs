//! CLI for maze generation

use std::thread;
use std::time::Duration;

use clap::Parser;
use dfs_maze::maze_generator::MazeGenerator;
use dfs_maze::renderer::Renderer;
use itertools::Itertools;
use log::info;

/// Perfect maze generator, drawn as text
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    width: i64,

    /// Maze height in cells
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    height: i64,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the maze every time carving enters a cell
    #[arg(short, long)]
    debug: bool,

    /// Debug frame length in milliseconds; when positive, the terminal is
    /// cleared before each frame
    #[arg(short, long, default_value_t = 0)]
    frame_length: u64,

    /// Mark the solution path in the final maze
    #[arg(short, long)]
    solution: bool,

    /// Also print the solution as (x, y) coordinates
    #[arg(long)]
    print_path: bool,
}

/// Carve maze, print output
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut gen = MazeGenerator::new(args.seed);
    let maze = if args.debug {
        let renderer = Renderer::new();
        let frame_length = Duration::from_millis(args.frame_length);
        gen.generate_with_trace(args.width, args.height, |grid| {
            if frame_length.is_zero() {
                println!("{}\n", renderer.render(grid));
            } else {
                print!("\x1B[2J\x1B[1;1H");
                println!("{}", renderer.render(grid));
                thread::sleep(frame_length);
            }
        })?
    } else {
        gen.generate(args.width, args.height)?
    };
    info!(
        "Generated {}x{} maze, solution length {}",
        maze.width(),
        maze.height(),
        maze.solution().len()
    );

    if args.solution {
        println!("{}", maze.render_solution());
    } else {
        println!("{}", maze.render());
    }
    if args.print_path {
        println!(
            "{}",
            maze.solution()
                .iter()
                .map(|(x, y)| format!("({}, {})", x, y))
                .join(" ")
        );
    }
    Ok(())
}
