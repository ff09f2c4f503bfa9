//! Game state and core simulation types
//!
//! All state needed to resume or replay a session lives here. The grid is
//! rebuilt from `(seed, maze_index)` on every new maze, so no RNG internals
//! are stored.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{Direction, Grid, Pos};
use super::maze_gen::{MazeLayout, generate_maze, maze_seed};
use super::pursuit::PursuitTimer;
use super::session::{GamePhase, Session, Trigger, transition};
use crate::settings::{Settings, SettingsError};

/// Final result handed to the score store when a session ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    /// Opaque authenticated player identity
    pub identity: String,
    pub score: u64,
}

/// Things that happened during a tick, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    PlayerMoved(Pos),
    MoveBlocked(Direction),
    EnemyMoved(Pos),
    MazeCleared { score: u64, mazes_completed: u32 },
    PlayerCaptured { lives: u8 },
    NewMaze { index: u32 },
    SessionOver(ScoreSubmission),
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Player identity for the leaderboard handoff
    pub identity: String,
    pub settings: Settings,
    /// Mazes generated so far in this session (0-based index of the current one)
    pub maze_index: u32,
    pub grid: Grid,
    pub player: Pos,
    pub enemy: Pos,
    pub exit: Pos,
    pub session: Session,
    pub phase: GamePhase,
    /// Enemy pacing
    pub pursuit: PursuitTimer,
}

impl GameState {
    /// Create a new session with its first maze, rejecting unusable settings
    pub fn try_new(
        seed: u64,
        settings: Settings,
        identity: impl Into<String>,
    ) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self::new(seed, settings, identity))
    }

    /// Create a new session with its first maze. `settings` must be valid.
    pub fn new(seed: u64, settings: Settings, identity: impl Into<String>) -> Self {
        debug_assert!(settings.validate().is_ok(), "invalid settings: {settings:?}");
        let grid = Self::build_grid(&settings, seed, 0);
        let layout = MazeLayout::for_grid(&grid);
        log::info!(
            "Game initialized with seed {} ({}x{}, {} pursuit)",
            seed,
            settings.cols,
            settings.rows,
            settings.pursuit.as_str()
        );
        Self::with_maze(seed, settings, identity, grid, layout.player, layout.start, layout.exit)
    }

    /// Start a session on a caller-supplied maze and marker placement
    pub fn with_maze(
        seed: u64,
        settings: Settings,
        identity: impl Into<String>,
        grid: Grid,
        player: Pos,
        enemy: Pos,
        exit: Pos,
    ) -> Self {
        let rules = settings.rules();
        Self {
            seed,
            identity: identity.into(),
            pursuit: settings.pursuit_timer(),
            settings,
            maze_index: 0,
            grid,
            player,
            enemy,
            exit,
            session: Session::new(&rules),
            phase: GamePhase::Playing,
        }
    }

    fn build_grid(settings: &Settings, seed: u64, index: u32) -> Grid {
        let mut rng = Pcg32::seed_from_u64(maze_seed(seed, index));
        let layout = MazeLayout::for_size(settings.cols, settings.rows);
        generate_maze(settings.cols, settings.rows, layout.start, &mut rng)
    }

    /// Replace the grid and reset all markers to their spawn cells
    pub fn regenerate(&mut self, now_ms: u64) -> GameEvent {
        self.maze_index += 1;
        self.grid = Self::build_grid(&self.settings, self.seed, self.maze_index);

        let layout = MazeLayout::for_grid(&self.grid);
        self.player = layout.player;
        self.enemy = layout.start;
        self.exit = layout.exit;
        self.pursuit.hold(now_ms);

        log::info!(
            "Maze {} generated (lives {}, score {})",
            self.maze_index + 1,
            self.session.lives,
            self.session.score
        );
        GameEvent::NewMaze {
            index: self.maze_index,
        }
    }

    /// Resolve the exit if the player stands on it. No-op otherwise.
    pub fn check_exit(&mut self, now_ms: u64) -> Vec<GameEvent> {
        if self.phase != GamePhase::Playing || self.player != self.exit {
            return Vec::new();
        }
        self.resolve(Trigger::ReachedExit, now_ms)
    }

    /// Resolve a capture if the enemy shares the player's cell. No-op otherwise.
    pub fn check_capture(&mut self, now_ms: u64) -> Vec<GameEvent> {
        if self.phase != GamePhase::Playing || self.player != self.enemy {
            return Vec::new();
        }
        self.resolve(Trigger::Captured, now_ms)
    }

    fn resolve(&mut self, trigger: Trigger, now_ms: u64) -> Vec<GameEvent> {
        let (session, phase) = transition(self.session, trigger, &self.settings.rules());
        self.session = session;
        self.phase = phase;

        let mut events = vec![match trigger {
            Trigger::ReachedExit => GameEvent::MazeCleared {
                score: session.score,
                mazes_completed: session.mazes_completed,
            },
            Trigger::Captured => GameEvent::PlayerCaptured {
                lives: session.lives,
            },
        }];

        if phase == GamePhase::SessionOver {
            log::info!(
                "Session over: score {}, {} mazes, {} lives left",
                session.score,
                session.mazes_completed,
                session.lives
            );
            events.push(GameEvent::SessionOver(ScoreSubmission {
                identity: self.identity.clone(),
                score: session.score,
            }));
        } else {
            events.push(self.regenerate(now_ms));
            self.phase = GamePhase::Playing;
        }
        events
    }

    /// Final score handoff, available once the session is over
    pub fn submission(&self) -> Option<ScoreSubmission> {
        (self.phase == GamePhase::SessionOver).then(|| ScoreSubmission {
            identity: self.identity.clone(),
            score: self.session.score,
        })
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::SessionOver
    }

    /// ASCII view: `P` player, `E` enemy, `X` exit
    pub fn render_ascii(&self) -> String {
        self.grid.render_with(|pos| {
            if pos == self.enemy {
                Some('E')
            } else if pos == self.player {
                Some('P')
            } else if pos == self.exit {
                Some('X')
            } else {
                None
            }
        })
    }
}
