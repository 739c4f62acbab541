//! Game entity types and fixed dimensions. Pure data, no logic.
//!
//! All coordinates are in playfield pixels (540×380); the display layer
//! owns the projection onto terminal cells.

// ── Screen & sprite dimensions ───────────────────────────────────────────────

pub const SCR_WIDTH: i32 = 540;
pub const SCR_HEIGHT: i32 = 380;

pub const ALIEN0_WIDTH: i32 = 24;
pub const ALIEN1_WIDTH: i32 = 22;
pub const ALIEN2_WIDTH: i32 = 16;
pub const SPRITE_HEIGHT: i32 = 16;
pub const PLAYER_WIDTH: i32 = 26;

// ── Directions ───────────────────────────────────────────────────────────────

/// Travel direction. `Right`/`Left` describe the swarm, `Up`/`Down` a
/// projectile (up = player laser, down = alien bomb).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

// ── Aliens ───────────────────────────────────────────────────────────────────

/// The three alien body types. The bottom two formation rows are octopuses,
/// the middle two are crabs, the top row is squids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlienKind {
    Octopus,
    Crab,
    Squid,
}

impl AlienKind {
    /// Sprite width in pixels; all sprites share `SPRITE_HEIGHT`.
    pub fn width(self) -> i32 {
        match self {
            AlienKind::Octopus => ALIEN0_WIDTH,
            AlienKind::Crab => ALIEN1_WIDTH,
            AlienKind::Squid => ALIEN2_WIDTH,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    pub kind: AlienKind,
}

/// The full alien formation, moved as one rigid unit. Rows outer,
/// columns inner; destroying an alien shrinks its row.
#[derive(Clone, Debug)]
pub struct Swarm {
    pub aliens: Vec<Vec<Alien>>,
    /// Horizontal step applied to every alien each frame.
    pub vel_x: i32,
    /// Vertical drop applied to every alien on a direction flip.
    pub vel_y: i32,
    pub direction: Direction,
    /// Shared animation frame index (0 or 1).
    pub sprite_number: usize,
}

/// Formation bounding extremes, used for edge-of-screen detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edges {
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

// ── Player & projectiles ─────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub vel: i32,
}

#[derive(Clone, Debug)]
pub struct Projectile {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
    pub vel: i32,
    /// Cleared when the projectile leaves the screen or a laser connects;
    /// invalid projectiles are pruned at the end of the same tick.
    pub valid: bool,
}

// ── Input ────────────────────────────────────────────────────────────────────

/// Per-frame input intent, polled once at the top of each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Action {
    pub left: bool,
    pub fire: bool,
    pub right: bool,
}

// ── Master game state ────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// The entire game state. Cloneable so pure update functions can return
/// a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub swarm: Swarm,
    pub player: Player,
    pub projectiles: Vec<Projectile>,
    pub frame: u64,
    pub status: GameStatus,
}
