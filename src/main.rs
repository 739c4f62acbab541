mod display;

use std::collections::HashMap;
use std::io::{self, stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use space_invaders::compute::{init_state, tick};
use space_invaders::entities::{Action, GameState, GameStatus};

const FRAME: Duration = Duration::from_millis(50); // 20 FPS

/// A key counts as "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 3 frames (150 ms at
/// 20 FPS) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 3;

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs one session to completion. Returns `true` → quit program,
/// `false` → start a fresh session.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key, and each frame the currently "fresh"
/// keys are folded into one `Action` triple. This emulates level-triggered
/// key polling on both classes of terminal:
/// * **Keyboard-enhancement capable** (kitty protocol): proper
///   `Press` / `Repeat` / `Release` events; keys are removed on release.
/// * **Classic terminals**: only `Press` events (OS key-repeat shows as
///   repeated `Press`). Keys expire after `HOLD_WINDOW` frames of silence,
///   which is shorter than the OS repeat interval, so a held key stays
///   live while it is actively generating repeats.
///
/// Quit and restart requests are honored after the current frame
/// completes, never mid-frame.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
) -> io::Result<bool> {
    let mut rng = thread_rng();

    // Maps each held key → the frame it was last seen (press or repeat).
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        let mut quit_requested = false;
        let mut restart_requested = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            quit_requested = true;
                        }
                        KeyCode::Char('c')
                            if modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            quit_requested = true;
                        }
                        KeyCode::Char('r') | KeyCode::Char('R')
                            if state.status == GameStatus::GameOver =>
                        {
                            restart_requested = true;
                        }
                        _ => {}
                    }
                }
                // Repeat: refresh timestamp so the key stays "held"
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                // Release: remove key immediately (keyboard-enhancement path)
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        // ── Fold held keys into this frame's action and advance ───────────────
        if state.status == GameStatus::Playing {
            // Poll precedence: right wins over left when both are held.
            let right = is_held(&key_frame, &KeyCode::Right, frame)
                || is_held(&key_frame, &KeyCode::Char('d'), frame)
                || is_held(&key_frame, &KeyCode::Char('D'), frame);
            let left = !right
                && (is_held(&key_frame, &KeyCode::Left, frame)
                    || is_held(&key_frame, &KeyCode::Char('a'), frame)
                    || is_held(&key_frame, &KeyCode::Char('A'), frame));
            let fire = is_held(&key_frame, &KeyCode::Char(' '), frame);

            let action = Action { left, fire, right };
            *state = tick(state, &action, &mut rng);
        }

        // ── Throttle to the target frame rate, then present ───────────────────
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }

        display::render(out, state)?;

        if quit_requested {
            return Ok(true);
        }
        if restart_requested {
            return Ok(false);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> io::Result<()> {
    // The layout is fixed by the playfield projection; refuse to start on
    // a terminal that cannot hold it.
    let (cols, rows) = terminal::size()?;
    if cols < display::MIN_COLS || rows < display::MIN_ROWS {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!(
                "terminal too small: need {}×{} cells, have {}×{}",
                display::MIN_COLS,
                display::MIN_ROWS,
                cols,
                rows
            ),
        ));
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> io::Result<()> {
    loop {
        let mut state = init_state();
        let quit = game_loop(out, &mut state, rx)?;
        if quit {
            break;
        }
        // Otherwise R was pressed at the game-over screen: fresh session
    }
    Ok(())
}
