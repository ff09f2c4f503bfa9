//! Acorn Maze entry point
//!
//! Native headless run: an autopilot walks the shortest route to each exit
//! while the enemy chases, then the final score goes to the JSON score store.
//!
//! Usage: `acorn-maze [settings.json] [identity]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use acorn_maze::consts::LEADERBOARD_COLLECTION;
    use acorn_maze::persistence::{JsonFileScoreStore, ScoreStore, submit_score};
    use acorn_maze::platform::{Clock, ManualClock};
    use acorn_maze::sim::{Direction, GameEvent, GameState, TickInput, shortest_path_step, tick};
    use acorn_maze::{Leaderboard, Settings};

    /// Simulated time between autopilot moves (ms)
    const PLAYER_STEP_MS: u64 = 150;
    /// Upper bound on simulated ticks
    const MAX_TICKS: u32 = 100_000;
    const SCORES_PATH: &str = "acorn-maze-scores.json";

    env_logger::init();
    log::info!("Acorn Maze (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("acorn-maze.json"));
    let identity = args.next().unwrap_or_else(|| "autopilot".to_string());

    let settings = Settings::load_or_default(&settings_path);
    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut state = GameState::new(seed, settings, identity);
    println!("{}", state.render_ascii());

    let clock = ManualClock::new(0);
    let mut ticks = 0;
    while !state.is_over() && ticks < MAX_TICKS {
        let direction = shortest_path_step(&state.grid, state.player, state.exit)
            .and_then(|next| Direction::between(state.player, next));

        for event in tick(&mut state, &TickInput { direction }, clock.now_ms()) {
            match event {
                GameEvent::MazeCleared {
                    score,
                    mazes_completed,
                } => println!("Maze cleared! score {score}, mazes {mazes_completed}"),
                GameEvent::PlayerCaptured { lives } => println!("Caught! {lives} lives left"),
                GameEvent::NewMaze { .. } => println!("{}", state.render_ascii()),
                GameEvent::SessionOver(submission) => {
                    println!("Session over with {} points", submission.score)
                }
                _ => {}
            }
        }

        clock.advance(PLAYER_STEP_MS);
        ticks += 1;
    }

    let Some(submission) = state.submission() else {
        log::warn!("Stopped after {} ticks without finishing the session", ticks);
        return;
    };

    let mut store = JsonFileScoreStore::new(SCORES_PATH);
    pollster::block_on(async {
        if submit_score(&mut store, &submission).await.is_err() {
            return;
        }
        match store.fetch_scores(LEADERBOARD_COLLECTION).await {
            Ok(records) => {
                let board = Leaderboard::from_records(records);
                println!("\nLeaderboard");
                print!("{}", board.render());
                println!("(saved to {})", store.path().display());
                if let Some(rank) = board.rank_of(&submission.identity) {
                    println!("{} is ranked #{}", submission.identity, rank);
                }
            }
            Err(e) => log::warn!("Error retrieving scores: {}", e),
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The host page drives `acorn_maze::sim::tick` directly
}
