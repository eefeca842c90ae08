mod agent;
mod default_observer;
mod exploration;
mod game;
mod game_observer;
mod game_state;
mod maze;
mod simplifier;
mod types;

use std::env;

use dotenv::dotenv;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use agent::GreedyExplorer;
use default_observer::DefaultObserver;
use game::Game;
use game_state::GameState;
use maze::Maze;
use types::Vertex;

fn get_env_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|val| val.parse::<T>().ok())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ratbot=debug,info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_logging();

    let width = get_env_var::<i32>("RATBOT_WIDTH").unwrap_or(15);
    let height = get_env_var::<i32>("RATBOT_HEIGHT").unwrap_or(11);
    let cheese_count = get_env_var::<usize>("RATBOT_CHEESE").unwrap_or(8);
    let max_turns = get_env_var::<i32>("RATBOT_MAX_TURNS").unwrap_or(400);
    let seed = get_env_var::<u64>("RATBOT_SEED").unwrap_or_else(rand::random::<u64>);

    tracing::info!(
        "maze {}x{}, {} cheese, max {} turns, seed {}",
        width,
        height,
        cheese_count,
        max_turns,
        seed
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let maze = Maze::generate(width, height, &mut rng);

    let start = Vertex::new(0, 0);
    let mut cells: Vec<Vertex> = maze.vertices().filter(|v| *v != start).collect();
    if cells.len() < cheese_count {
        return Err(format!(
            "{} cheese requested but the maze only has {} free cells",
            cheese_count,
            cells.len()
        )
        .into());
    }
    // Sort before shuffling so placement is reproducible from the seed
    cells.sort_by_key(|v| (v.y, v.x));
    cells.shuffle(&mut rng);
    cells.truncate(cheese_count);

    let state = GameState::new(start, cells);
    let mut game = Game::new(maze, state, DefaultObserver, max_turns);
    let mut agent = GreedyExplorer::new(seed);
    game.run(&mut agent);

    Ok(())
}
