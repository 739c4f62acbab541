//! Rendering layer — all terminal I/O lives here.
//!
//! The simulation runs in 540×380 pixel space; this module projects it
//! onto a terminal cell grid and translates state into crossterm commands.
//! No game logic is performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use space_invaders::entities::{
    Alien, AlienKind, Direction, GameState, GameStatus, Player, Projectile, SCR_HEIGHT,
    SCR_WIDTH,
};

// ── Pixel → cell projection ──────────────────────────────────────────────────

/// One terminal cell covers an 8×20 pixel tile of the playfield.
const CELL_W: i32 = 8;
const CELL_H: i32 = 20;

/// Playfield size in cells (68×19 for the 540×380 field).
const GRID_COLS: u16 = (SCR_WIDTH / CELL_W + 1) as u16;
const GRID_ROWS: u16 = (SCR_HEIGHT / CELL_H) as u16;

// Screen layout: HUD row, border, playfield, border, controls hint.
const HUD_ROW: u16 = 0;
const TOP_BORDER_ROW: u16 = 1;
const PLAY_ROW_MIN: u16 = 2;
const PLAY_ROW_MAX: u16 = PLAY_ROW_MIN + GRID_ROWS - 1;
const BOTTOM_BORDER_ROW: u16 = PLAY_ROW_MAX + 1;
const HINT_ROW: u16 = BOTTOM_BORDER_ROW + 1;

/// Smallest terminal that can host the layout; checked once at startup.
pub const MIN_COLS: u16 = GRID_COLS + 2;
pub const MIN_ROWS: u16 = HINT_ROW + 1;

/// Map a playfield pixel position to its terminal cell. Positions below
/// the playfield (a swarm that has descended past the bottom) land outside
/// the drawable band and are clipped by the callers.
fn project(x: i32, y: i32) -> (u16, u16) {
    let col = 1 + (x / CELL_W) as u16;
    let row = PLAY_ROW_MIN + (y / CELL_H) as u16;
    (col, row)
}

// ── Sprite tables ────────────────────────────────────────────────────────────
// The pre-built, immutable glyph set, keyed by sprite role. Alien kinds
// carry two animation frames selected by the swarm's shared frame index.

const OCTOPUS_FRAMES: [&str; 2] = ["/ô\\", "\\ô/"];
const CRAB_FRAMES: [&str; 2] = ["<ö>", ">ö<"];
const SQUID_FRAMES: [&str; 2] = ["▞▚", "▚▞"];
const PLAYER_SPRITE: &str = "◢▲◣";
const LASER_SPRITE: &str = "│";
const BOMB_SPRITE: &str = "▼";

fn alien_frames(kind: AlienKind) -> [&'static str; 2] {
    match kind {
        AlienKind::Octopus => OCTOPUS_FRAMES,
        AlienKind::Crab => CRAB_FRAMES,
        AlienKind::Squid => SQUID_FRAMES,
    }
}

// ── Colour palette ───────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::Yellow;
const C_PLAYER: Color = Color::White;
const C_OCTOPUS: Color = Color::Green;
const C_CRAB: Color = Color::Yellow;
const C_SQUID: Color = Color::Magenta;
const C_LASER: Color = Color::Cyan;
const C_BOMB: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;

fn alien_color(kind: AlienKind) -> Color {
    match kind {
        AlienKind::Octopus => C_OCTOPUS,
        AlienKind::Crab => C_CRAB,
        AlienKind::Squid => C_SQUID,
    }
}

// ── Public entry point ───────────────────────────────────────────────────────

/// Render one complete frame. Paint order matters for overlap: aliens,
/// then projectiles, then the player.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, state)?;
    draw_border(out)?;

    for alien in state.swarm.aliens.iter().flatten() {
        draw_alien(out, alien, state.swarm.sprite_number)?;
    }
    for projectile in &state.projectiles {
        draw_projectile(out, projectile)?;
    }
    draw_player(out, &state.player)?;

    draw_controls_hint(out)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, HINT_ROW))?;
    out.flush()?;
    Ok(())
}

// ── HUD (row 0) ──────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, HUD_ROW))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print("★ SPACE INVADERS ★"))?;

    let remaining: usize = state.swarm.aliens.iter().map(|row| row.len()).sum();
    let aliens_str = format!("Aliens:{:>3}", remaining);
    let rx = MIN_COLS.saturating_sub(aliens_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, HUD_ROW))?;
    out.queue(Print(&aliens_str))?;

    Ok(())
}

// ── Border ───────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W) -> std::io::Result<()> {
    let inner = GRID_COLS as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, TOP_BORDER_ROW))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(inner))))?;

    out.queue(cursor::MoveTo(0, BOTTOM_BORDER_ROW))?;
    out.queue(Print(format!("└{}┘", "─".repeat(inner))))?;

    for row in PLAY_ROW_MIN..=PLAY_ROW_MAX {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(GRID_COLS + 1, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── Entities ─────────────────────────────────────────────────────────────────

fn draw_alien<W: Write>(
    out: &mut W,
    alien: &Alien,
    sprite_number: usize,
) -> std::io::Result<()> {
    let (col, row) = project(alien.x, alien.y);
    if row > PLAY_ROW_MAX {
        return Ok(()); // descended past the playfield; clipped
    }
    out.queue(style::SetForegroundColor(alien_color(alien.kind)))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(alien_frames(alien.kind)[sprite_number]))?;
    Ok(())
}

fn draw_projectile<W: Write>(out: &mut W, projectile: &Projectile) -> std::io::Result<()> {
    let (col, row) = project(projectile.x, projectile.y);
    if row > PLAY_ROW_MAX {
        return Ok(());
    }
    match projectile.direction {
        Direction::Up => {
            out.queue(style::SetForegroundColor(C_LASER))?;
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print(LASER_SPRITE))?;
        }
        _ => {
            out.queue(style::SetForegroundColor(C_BOMB))?;
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print(BOMB_SPRITE))?;
        }
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, player: &Player) -> std::io::Result<()> {
    let (col, row) = project(player.x, player.y);
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(PLAYER_SPRITE))?;
    Ok(())
}

// ── Controls hint (last row) ─────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, HINT_ROW))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Fire   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W) -> std::io::Result<()> {
    let lines: &[&str] = &[
        "╔══════════════════╗",
        "║    GAME  OVER    ║",
        "╚══════════════════╝",
    ];
    let cx = MIN_COLS / 2;
    let start_row = PLAY_ROW_MIN + GRID_ROWS / 2 - 2;

    out.queue(style::SetForegroundColor(Color::Red))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }

    let hint = "R - Restart  Q - Quit";
    let col = cx.saturating_sub(hint.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, start_row + lines.len() as u16))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print(hint))?;

    Ok(())
}
