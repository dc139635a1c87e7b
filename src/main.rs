use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use galaxy_defender::assets::Assets;
use galaxy_defender::canvas::{Canvas, Viewport};
use galaxy_defender::compute::init_state;
use galaxy_defender::config::{Settings, SETTINGS_FILE};
use galaxy_defender::controller::Game;
use galaxy_defender::display;
use galaxy_defender::entities::GameEvent;
use galaxy_defender::error::GameError;
use galaxy_defender::input::{Command, InputState};

/// Upper bound on how long the loop waits for input once no timer is armed.
const IDLE_WAIT: Duration = Duration::from_millis(250);

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is busy drawing the game, so logs go to a file, and only
/// when one is configured.
fn init_logging(settings: &Settings) {
    let Some(path) = &settings.log_file else {
        return;
    };
    match File::create(path) {
        Ok(file) => {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or("info"),
            )
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init();
        }
        Err(e) => eprintln!("cannot open log file {}: {e}", path.display()),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.  Timers drive the simulation; in between
/// the loop blocks on the input channel for at most the time to the next
/// timer.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    settings: &Settings,
    assets: &Assets,
) -> Result<(), GameError> {
    let state = init_state(assets.player_extent(), assets.enemy_extent());
    let mut game = Game::new(state, thread_rng());
    let mut input = InputState::new();

    let (cols, rows) = terminal::size()?;
    let mut canvas = Canvas::new(Viewport::fit(cols, rows));
    display::clear(out)?;

    let start = Instant::now();
    let mut dirty = true;

    loop {
        let now = start.elapsed();
        let wait = game
            .next_due()
            .map(|due| due.saturating_sub(now))
            .unwrap_or(IDLE_WAIT);

        // ── Input: block for the first event, then drain the rest ─────────────
        let mut pending = Vec::new();
        match rx.recv_timeout(wait) {
            Ok(ev) => pending.push(ev),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
        pending.extend(rx.try_iter());

        let now = start.elapsed();
        for ev in pending {
            match ev {
                Event::Key(key) => match input.handle_key(key, now) {
                    Some(Command::Quit) => return Ok(()),
                    Some(Command::Fire) => game.fire(),
                    None => {}
                },
                Event::Resize(cols, rows) => {
                    canvas = Canvas::new(Viewport::fit(cols, rows));
                    display::clear(out)?;
                    dirty = true;
                }
                _ => {}
            }
        }

        // ── Timers ────────────────────────────────────────────────────────────
        if game.run_due(now, input.steering(now)) > 0 {
            dirty = true;
        }

        for event in game.drain_events() {
            if settings.sound {
                display::play_sound(out, assets.sound_for(&event));
            }
            if let GameEvent::GameOver { score } = event {
                info!("game over, final score {score}");
            }
        }

        if dirty {
            display::draw_scene(&mut canvas, game.state(), assets);
            display::render(out, &canvas)?;
            dirty = false;
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    let settings = Settings::load(Path::new(SETTINGS_FILE))?;
    init_logging(&settings);
    info!("starting with {settings:?}");

    let assets = Assets::load(&settings.resolve_assets_dir());

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &rx, &settings, &assets);
    if let Err(e) = &result {
        warn!("game loop aborted: {e}");
    }

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
