//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current state
//! and returns a brand-new value. Side effects are limited to the injected
//! RNG used for bomb drops, so callers control determinism (tests pass a
//! seeded `StdRng`).

use rand::Rng;

use crate::entities::{
    Action, Alien, AlienKind, Direction, Edges, GameState, GameStatus, Player, Projectile,
    Swarm, ALIEN0_WIDTH, PLAYER_WIDTH, SCR_HEIGHT, SCR_WIDTH, SPRITE_HEIGHT,
};

// ── Tuning constants ─────────────────────────────────────────────────────────

/// Frames between swarm animation-frame toggles.
const ANIM_INTERVAL: u64 = 10;

/// Per-alien, per-frame bomb-drop chance, in parts per 10,000.
const BOMB_CHANCE: i32 = 8;

const PROJECTILE_VEL: i32 = 10;
const PLAYER_VEL: i32 = 3;
const PLAYER_SPAWN_Y: i32 = 340;

const SWARM_ROWS: usize = 5;
const SWARM_COLS: usize = 11;
/// Horizontal and vertical pitch of the formation grid.
const SWARM_SPACING: i32 = ALIEN0_WIDTH + 10;
const SWARM_X_INIT: i32 = 20;
const SWARM_Y_INIT: i32 = 10;
const SWARM_VEL_X: i32 = 1;
const SWARM_VEL_Y: i32 = 10;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: full formation, player at spawn, no
/// projectiles in flight. Also used to restart a session.
pub fn init_state() -> GameState {
    GameState {
        swarm: init_swarm(),
        player: Player {
            x: SCR_WIDTH / 2,
            y: PLAYER_SPAWN_Y,
            vel: PLAYER_VEL,
        },
        projectiles: Vec::new(),
        frame: 0,
        status: GameStatus::Playing,
    }
}

fn kind_for_row(row: usize) -> AlienKind {
    match row / 2 {
        0 => AlienKind::Octopus,
        1 => AlienKind::Crab,
        _ => AlienKind::Squid,
    }
}

fn init_swarm() -> Swarm {
    let mut rows = Vec::with_capacity(SWARM_ROWS);
    for row in 0..SWARM_ROWS {
        let kind = kind_for_row(row);
        // Centre the narrower sprites within the octopus-wide column slot.
        let nudge = match kind {
            AlienKind::Octopus => 0,
            AlienKind::Crab => 1,
            AlienKind::Squid => 4,
        };
        // Row 0 sits lowest on screen, row 4 highest.
        let y = (SWARM_ROWS as i32 - 1 - row as i32) * SWARM_SPACING + SWARM_Y_INIT;
        let mut alien_row = Vec::with_capacity(SWARM_COLS);
        for col in 0..SWARM_COLS {
            let x = col as i32 * SWARM_SPACING + SWARM_X_INIT + nudge;
            alien_row.push(Alien { x, y, kind });
        }
        rows.push(alien_row);
    }
    Swarm {
        aliens: rows,
        vel_x: SWARM_VEL_X,
        vel_y: SWARM_VEL_Y,
        direction: Direction::Right,
        sprite_number: 0,
    }
}

// ── Swarm movement ───────────────────────────────────────────────────────────

/// Bounding extremes of the live formation. An empty swarm degenerates to
/// the accumulator seeds (left = screen width, bottom = right = 0), which
/// keeps the movement policy total.
pub fn swarm_edges(swarm: &Swarm) -> Edges {
    let mut edges = Edges {
        left: SCR_WIDTH,
        bottom: 0,
        right: 0,
    };
    for alien in swarm.aliens.iter().flatten() {
        edges.left = edges.left.min(alien.x);
        edges.right = edges.right.max(alien.x + alien.kind.width());
        edges.bottom = edges.bottom.max(alien.y + SPRITE_HEIGHT);
    }
    edges
}

/// Advance the formation one frame in lockstep.
///
/// While the leading edge has room for one more horizontal step the whole
/// grid shifts by `vel_x`; otherwise it drops by `vel_y` and reverses.
/// The edge test runs against the would-be post-move position, so the flip
/// lands on exactly the frame the edge would overflow.
pub fn step_swarm(swarm: &Swarm, frame: u64) -> Swarm {
    let sprite_number = if frame % ANIM_INTERVAL == 0 {
        (swarm.sprite_number + 1) % 2
    } else {
        swarm.sprite_number
    };

    let edges = swarm_edges(swarm);
    let (dx, dy, direction) = if swarm.direction == Direction::Right {
        if edges.right < SCR_WIDTH - swarm.vel_x {
            (swarm.vel_x, 0, Direction::Right)
        } else {
            (0, swarm.vel_y, Direction::Left)
        }
    } else if edges.left > swarm.vel_x {
        (-swarm.vel_x, 0, Direction::Left)
    } else {
        (0, swarm.vel_y, Direction::Right)
    };

    let aliens = swarm
        .aliens
        .iter()
        .map(|row| {
            row.iter()
                .map(|a| Alien {
                    x: a.x + dx,
                    y: a.y + dy,
                    kind: a.kind,
                })
                .collect()
        })
        .collect();

    Swarm {
        aliens,
        vel_x: swarm.vel_x,
        vel_y: swarm.vel_y,
        direction,
        sprite_number,
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────

/// Fire the player's laser. A no-op while another laser is in flight:
/// at most one up-moving projectile exists at a time. Bombs never block it.
pub fn fire_laser(state: &GameState) -> GameState {
    let laser_active = state
        .projectiles
        .iter()
        .any(|p| p.direction == Direction::Up);
    if laser_active {
        return state.clone();
    }
    let laser = Projectile {
        x: state.player.x + PLAYER_WIDTH / 2 - 1,
        y: state.player.y,
        direction: Direction::Up,
        vel: PROJECTILE_VEL,
        valid: true,
    };
    let mut projectiles = state.projectiles.clone();
    projectiles.push(laser);
    GameState {
        projectiles,
        ..state.clone()
    }
}

/// Move the player by the polled input intent, clamped to the playfield.
pub fn step_player(player: &Player, action: &Action) -> Player {
    let mut x = player.x;
    if action.left {
        x -= player.vel;
    } else if action.right {
        x += player.vel;
    }

    if x <= 0 {
        x = 0;
    } else if x + PLAYER_WIDTH >= SCR_WIDTH {
        x = SCR_WIDTH - PLAYER_WIDTH;
    }

    Player {
        x,
        ..player.clone()
    }
}

// ── Collision tests ──────────────────────────────────────────────────────────

/// Point-vs-box: the laser's position against an alien's bounding box.
/// The projectile is deliberately treated as a point, not a box.
fn laser_hits(laser: &Projectile, alien: &Alien) -> bool {
    laser.x >= alien.x
        && laser.x < alien.x + alien.kind.width()
        && laser.y >= alien.y
        && laser.y < alien.y + SPRITE_HEIGHT
}

/// Point-vs-box against the player's box widened by one pixel on each side.
fn bomb_hits(bomb: &Projectile, player: &Player) -> bool {
    bomb.x >= player.x - 1
        && bomb.x <= player.x + PLAYER_WIDTH
        && bomb.y >= player.y
        && bomb.y < player.y + SPRITE_HEIGHT
}

// ── Per-frame tick (nearly pure — RNG is injected) ───────────────────────────

/// Advance the simulation by one frame.
///
/// The order is fixed and load-bearing for determinism: fire, swarm step,
/// projectile advance with same-frame collision resolution, bomb drops,
/// pruning, player movement, frame increment. The swarm animation check
/// uses the pre-increment frame number.
pub fn tick(state: &GameState, action: &Action, rng: &mut impl Rng) -> GameState {
    let state = if action.fire {
        fire_laser(state)
    } else {
        state.clone()
    };

    let mut swarm = step_swarm(&state.swarm, state.frame);
    let mut projectiles = state.projectiles.clone();
    let mut status = state.status;

    // Advance each projectile in flight order, then resolve its hit the
    // same frame: lasers against the already-moved formation, bombs against
    // the not-yet-moved player.
    for projectile in projectiles.iter_mut() {
        projectile.y = match projectile.direction {
            Direction::Up => projectile.y - projectile.vel,
            _ => projectile.y + projectile.vel,
        };
        if projectile.y <= 0 || projectile.y >= SCR_HEIGHT {
            projectile.valid = false;
        }

        if projectile.direction == Direction::Up {
            // First match in row-major scan order wins: one kill per laser.
            for row in swarm.aliens.iter_mut() {
                if let Some(i) = row.iter().position(|a| laser_hits(projectile, a)) {
                    row.remove(i);
                    projectile.valid = false;
                    break;
                }
            }
        } else if bomb_hits(projectile, &state.player) {
            // The bomb stays in place; the frame still runs to completion.
            status = GameStatus::GameOver;
        }
    }

    // Every surviving alien may drop a bomb this frame, independently.
    for alien in swarm.aliens.iter().flatten() {
        if rng.gen_range(1..=10_000) <= BOMB_CHANCE {
            projectiles.push(Projectile {
                x: alien.x + alien.kind.width() / 2 - 1,
                y: alien.y + SPRITE_HEIGHT,
                direction: Direction::Down,
                vel: PROJECTILE_VEL,
                valid: true,
            });
        }
    }

    projectiles.retain(|p| p.valid);

    let player = step_player(&state.player, action);

    GameState {
        swarm,
        player,
        projectiles,
        frame: state.frame + 1,
        status,
    }
}
