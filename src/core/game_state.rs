//! Game state module - the active piece controller and everything it owns
//!
//! Ties the board, piece catalog, RNG, hold slot, ghost projection and score
//! together behind a single `GameState` value. There are no globals: every
//! operation takes `&mut self`, so independent games can coexist and tests
//! drive the core directly.
//!
//! The core is event-driven and synchronous. External stimuli are `apply`
//! (discrete commands) and `tick` (one gravity step); each runs to
//! completion before the next, and after game over both become no-ops until
//! a restart.

use crate::core::pieces::{Shape, SPAWN_POSITION};
use crate::core::rng::PiecePicker;
use crate::core::scoring::line_reward;
use crate::core::Board;
use crate::types::{GameCommand, PieceKind};

/// The piece currently falling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at the spawn origin in its canonical rotation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Shape of the current rotation (shared static data, never copied)
    pub fn shape(&self) -> &'static Shape {
        &self.kind.shapes()[self.rotation]
    }
}

/// Landing preview for the active piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GhostPiece {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i8,
    pub y: i8,
}

impl GhostPiece {
    pub fn shape(&self) -> &'static Shape {
        &self.kind.shapes()[self.rotation]
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    hold: Option<PieceKind>,
    /// One hold per piece lifetime; rearmed at each natural lock.
    swap_used: bool,
    picker: PiecePicker,
    score: u32,
    started: bool,
    game_over: bool,
    /// One-shot game-over notification carrying the final score.
    game_over_event: Option<u32>,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            hold: None,
            swap_used: false,
            picker: PiecePicker::new(seed),
            score: 0,
            started: false,
            game_over: false,
            game_over_event: None,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn(None);
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    /// Whether a hold/swap is currently permitted
    pub fn can_hold(&self) -> bool {
        !self.swap_used && !self.game_over
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Spawn a piece: uniform-random unless a kind is given (unholding)
    ///
    /// A colliding spawn is the sole game-over condition: the board is left
    /// untouched, the active piece is cleared and the notification latch is
    /// armed. Returns whether a piece entered play.
    pub fn spawn(&mut self, kind: Option<PieceKind>) -> bool {
        if self.game_over {
            return false;
        }

        let kind = kind.unwrap_or_else(|| self.picker.next());
        let piece = ActivePiece::new(kind);

        if self.board.collides(piece.x, piece.y, piece.shape()) {
            self.active = None;
            self.game_over = true;
            self.game_over_event = Some(self.score);
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Try to translate the active piece by (dx, dy)
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if self.board.collides(active.x + dx, active.y + dy, active.shape()) {
            return false;
        }

        self.active = Some(ActivePiece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        true
    }

    /// One gravity step: descend, or lock when the floor or stack is reached
    fn step_down(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if self.board.collides(active.x, active.y + 1, active.shape()) {
            self.lock_active();
        } else {
            self.active = Some(ActivePiece {
                y: active.y + 1,
                ..active
            });
        }
        true
    }

    /// Rotate to the next rotation state, resolving wall kicks
    ///
    /// Tries each kick offset in the kind's fixed order; the first
    /// non-colliding one applies rotation index and origin together. When no
    /// offset fits the rotation is rejected outright and nothing changes.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let shapes = active.kind.shapes();
        let next = (active.rotation + 1) % shapes.len();
        let shape = &shapes[next];

        for &(dx, dy) in active.kind.kick_offsets() {
            if !self.board.collides(active.x + dx, active.y + dy, shape) {
                self.active = Some(ActivePiece {
                    rotation: next,
                    x: active.x + dx,
                    y: active.y + dy,
                    ..active
                });
                return true;
            }
        }

        false
    }

    /// Drop straight to the landing row and lock immediately
    pub fn hard_drop(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let shape = active.shape();
        let mut offset: i8 = 1;
        while !self.board.collides(active.x, active.y + offset, shape) {
            offset += 1;
        }

        self.active = Some(ActivePiece {
            y: active.y + offset - 1,
            ..active
        });
        self.lock_active();
        true
    }

    /// Stash or swap the active piece
    ///
    /// Empty slot: stash the active kind and spawn a random piece. Occupied
    /// slot: the held kind spawns and the slot takes the active kind. Either
    /// way the swap is spent until the next natural lock.
    pub fn hold(&mut self) -> bool {
        if self.swap_used {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let unheld = self.hold.replace(active.kind);
        self.spawn(unheld);
        self.swap_used = true;
        true
    }

    /// Lock the active piece, clear lines, score, rearm hold, spawn next
    ///
    /// Observers never see an intermediate state: by the time control
    /// returns, either the next piece is falling or the game is over.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.lock(active.x, active.y, active.shape(), active.kind);
        let cleared = self.board.clear_full_lines();
        self.score += line_reward(cleared);
        self.swap_used = false;
        self.spawn(None);
    }

    /// Landing row for the active piece, by the hard-drop trial algorithm
    ///
    /// Pure: neither the board nor the piece moves.
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let shape = active.shape();

        let mut offset: i8 = 1;
        while !self.board.collides(active.x, active.y + offset, shape) {
            offset += 1;
        }
        Some(active.y + offset - 1)
    }

    /// Landing projection, or None when the piece already rests on the stack
    pub fn ghost(&self) -> Option<GhostPiece> {
        let active = self.active?;
        let y = self.ghost_y()?;
        if y == active.y {
            return None;
        }
        Some(GhostPiece {
            kind: active.kind,
            rotation: active.rotation,
            x: active.x,
            y,
        })
    }

    /// One gravity step. The surrounding driver decides when to call this.
    pub fn tick(&mut self) {
        if !self.started || self.game_over {
            return;
        }
        self.step_down();
    }

    /// Consume the one-shot game-over notification (final score)
    pub fn take_game_over(&mut self) -> Option<u32> {
        self.game_over_event.take()
    }

    /// Apply a command from the input collaborator
    ///
    /// Illegal commands are no-ops; after game over only `Restart` does
    /// anything. Returns whether the state changed.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        if self.game_over && command != GameCommand::Restart {
            return false;
        }

        match command {
            GameCommand::MoveLeft => self.try_move(-1, 0),
            GameCommand::MoveRight => self.try_move(1, 0),
            GameCommand::SoftDrop => self.step_down(),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::Rotate => self.rotate(),
            GameCommand::Hold => self.hold(),
            GameCommand::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Reset for a new game, carrying the RNG sequence position forward
    pub fn restart(&mut self) {
        let seed = self.picker.state();
        *self = Self::new(seed);
        self.start();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
