//! Single-threaded game tick
//!
//! The host calls [`tick`] from its redraw/input loop with a timestamp from an
//! injectable clock. One call applies at most one player move and at most one
//! enemy step.

use super::grid::Direction;
use super::movement::{MoveOutcome, attempt_move};
use super::session::GamePhase;
use super::state::{GameEvent, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Discrete move intent, already translated from touch/keys by the host
    pub direction: Option<Direction>,
}

impl TickInput {
    pub fn step(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
        }
    }
}

/// Advance the game by one tick at `now_ms`
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase == GamePhase::SessionOver {
        return events;
    }

    if let Some(dir) = input.direction {
        match attempt_move(&state.grid, state.player, dir) {
            MoveOutcome::Moved(to) => {
                log::debug!("Player {} -> {}", state.player, to);
                state.player = to;
                events.push(GameEvent::PlayerMoved(to));
                events.extend(state.check_exit(now_ms));
            }
            MoveOutcome::Blocked => events.push(GameEvent::MoveBlocked(dir)),
        }
    }

    if state.phase != GamePhase::Playing {
        return events;
    }

    if state.pursuit.due(now_ms) {
        let strategy = state.settings.pursuit;
        if let Some(to) = strategy.next_step(&state.grid, state.enemy, state.player) {
            log::debug!("Enemy {} -> {} ({})", state.enemy, to, strategy.as_str());
            state.enemy = to;
            events.push(GameEvent::EnemyMoved(to));
        }
    }

    // Covers both the enemy stepping in and the player walking into the enemy
    events.extend(state.check_capture(now_ms));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::PursuitStrategy;
    use crate::sim::grid::{Grid, Pos};
    use crate::sim::maze_gen::tests::reachable;

    const INTERVAL: u64 = crate::consts::PURSUIT_INTERVAL_MS;

    /// Fully walled 15x15 grid with the given passages opened
    fn grid_with(passages: &[(Pos, Pos)]) -> Grid {
        let mut grid = Grid::new(15, 15);
        for &(a, b) in passages {
            grid.clear_wall(a, b).unwrap();
        }
        grid
    }

    #[test]
    fn test_generated_session_maze_is_connected() {
        let state = GameState::new(2024, Settings::default(), "id");
        assert_eq!(state.grid.open_wall_pairs(), 224);
        assert_eq!(reachable(&state.grid, Pos::new(0, 0)).len(), 225);
    }

    #[test]
    fn test_blocked_move_keeps_position() {
        let player = Pos::new(4, 4);
        let grid = grid_with(&[]);
        assert!(grid.has_wall(player, Direction::Up));
        let mut state = GameState::with_maze(
            1,
            Settings::default(),
            "id",
            grid,
            player,
            Pos::new(0, 0),
            Pos::new(14, 14),
        );
        // Keep the enemy out of the picture
        state.pursuit.hold(0);

        let events = tick(&mut state, &TickInput::step(Direction::Up), 1);
        assert_eq!(events, vec![GameEvent::MoveBlocked(Direction::Up)]);
        assert_eq!(state.player, player);
    }

    #[test]
    fn test_reaching_exit_clears_maze() {
        let grid = grid_with(&[(Pos::new(13, 14), Pos::new(14, 14))]);
        let mut state = GameState::with_maze(
            1,
            Settings::default(),
            "id",
            grid.clone(),
            Pos::new(13, 14),
            Pos::new(0, 0),
            Pos::new(14, 14),
        );

        let events = tick(&mut state, &TickInput::step(Direction::Right), 0);
        assert_eq!(
            events,
            vec![
                GameEvent::PlayerMoved(Pos::new(14, 14)),
                GameEvent::MazeCleared {
                    score: 1000,
                    mazes_completed: 1
                },
                GameEvent::NewMaze { index: 1 },
            ]
        );
        assert_eq!(state.session.score, 1000);
        assert_eq!(state.session.mazes_completed, 1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_ne!(state.grid, grid);
        assert_eq!(state.grid.open_wall_pairs(), 224);
        assert!(state.grid.positions().all(|p| !state.grid[p].visited));
        assert_eq!(state.player, Pos::new(1, 14));
        assert_eq!(state.enemy, Pos::new(0, 0));
    }

    #[test]
    fn test_pursuit_along_corridor_captures() {
        let grid = grid_with(&[
            (Pos::new(0, 0), Pos::new(1, 0)),
            (Pos::new(1, 0), Pos::new(2, 0)),
        ]);
        let mut state = GameState::with_maze(
            1,
            Settings::default(),
            "id",
            grid,
            Pos::new(2, 0),
            Pos::new(0, 0),
            Pos::new(14, 14),
        );

        let events = tick(&mut state, &TickInput::default(), 0);
        assert_eq!(events, vec![GameEvent::EnemyMoved(Pos::new(1, 0))]);
        assert_eq!(state.enemy.manhattan(state.player), 1);

        // Too early for another step
        assert!(tick(&mut state, &TickInput::default(), INTERVAL - 1).is_empty());

        let events = tick(&mut state, &TickInput::default(), INTERVAL);
        assert_eq!(events[0], GameEvent::EnemyMoved(Pos::new(2, 0)));
        assert_eq!(events[1], GameEvent::PlayerCaptured { lives: 2 });
        assert_eq!(events[2], GameEvent::NewMaze { index: 1 });
        assert_eq!(state.session.lives, 2);
        assert_eq!(state.session.mazes_completed, 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_last_life_ends_session() {
        let grid = grid_with(&[(Pos::new(0, 0), Pos::new(1, 0))]);
        let mut state = GameState::with_maze(
            1,
            Settings::default(),
            "squirrel@example.com",
            grid.clone(),
            Pos::new(1, 0),
            Pos::new(0, 0),
            Pos::new(14, 14),
        );
        state.session.lives = 1;
        state.session.score = 2000;

        let events = tick(&mut state, &TickInput::default(), 0);
        assert_eq!(events[1], GameEvent::PlayerCaptured { lives: 0 });
        assert_eq!(
            events[2],
            GameEvent::SessionOver(crate::sim::ScoreSubmission {
                identity: "squirrel@example.com".into(),
                score: 2000,
            })
        );
        assert_eq!(state.phase, GamePhase::SessionOver);
        // No new maze on the terminal transition
        assert_eq!(state.maze_index, 0);
        assert_eq!(state.grid, grid);
        assert_eq!(state.submission().map(|s| s.score), Some(2000));

        // Further ticks do nothing
        let frozen = state.clone();
        assert!(tick(&mut state, &TickInput::step(Direction::Left), 10_000).is_empty());
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_walking_into_enemy_captures() {
        let grid = grid_with(&[(Pos::new(5, 5), Pos::new(6, 5))]);
        let mut state = GameState::with_maze(
            1,
            Settings::default(),
            "id",
            grid,
            Pos::new(5, 5),
            Pos::new(6, 5),
            Pos::new(14, 14),
        );
        state.pursuit.hold(0);

        let events = tick(&mut state, &TickInput::step(Direction::Right), 1);
        assert_eq!(events[0], GameEvent::PlayerMoved(Pos::new(6, 5)));
        assert_eq!(events[1], GameEvent::PlayerCaptured { lives: 2 });
    }

    #[test]
    fn test_three_exits_end_session() {
        let mut state = GameState::new(31337, Settings::default(), "id");
        let mut now = 0;
        for cleared in 1..=3 {
            // Teleport next to a connected neighbor of the exit
            let approach = state.grid.open_neighbors(state.exit).next().unwrap();
            state.player = approach;
            state.enemy = Pos::new(0, 0);
            let dir = Direction::between(approach, state.exit).unwrap();
            now += 1;
            let events = tick(&mut state, &TickInput::step(dir), now);
            assert!(events.contains(&GameEvent::MazeCleared {
                score: cleared as u64 * 1000,
                mazes_completed: cleared
            }));
        }
        assert!(state.is_over());
        assert_eq!(state.session.score, 3000);
        assert_eq!(state.maze_index, 2);
    }

    #[test]
    fn test_greedy_pursuit_walks_through_walls() {
        let settings = Settings {
            pursuit: PursuitStrategy::Greedy,
            ..Settings::default()
        };
        let mut state = GameState::with_maze(
            1,
            settings,
            "id",
            grid_with(&[]),
            Pos::new(3, 0),
            Pos::new(0, 0),
            Pos::new(14, 14),
        );

        tick(&mut state, &TickInput::default(), 0);
        assert_eq!(state.enemy, Pos::new(1, 0));
    }

    #[test]
    fn test_start_delay_holds_enemy() {
        let settings = Settings {
            start_delay_ms: 1_000,
            ..Settings::default()
        };
        let mut state = GameState::new(5, settings, "id");
        let spawn = state.enemy;

        tick(&mut state, &TickInput::default(), 500);
        tick(&mut state, &TickInput::default(), 1_499);
        assert_eq!(state.enemy, spawn);

        tick(&mut state, &TickInput::default(), 1_500);
        assert_ne!(state.enemy, spawn);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999, Settings::default(), "id");
        let mut state2 = GameState::new(99999, Settings::default(), "id");

        let inputs = [
            TickInput::step(Direction::Up),
            TickInput::default(),
            TickInput::step(Direction::Right),
            TickInput::step(Direction::Left),
            TickInput::step(Direction::Down),
        ];

        for (i, input) in inputs.iter().enumerate() {
            let now = i as u64 * 250;
            let e1 = tick(&mut state1, input, now);
            let e2 = tick(&mut state2, input, now);
            assert_eq!(e1, e2);
        }
        assert_eq!(state1, state2);
    }
}
