//! Terminal dice runner (default binary).
//!
//! Interactive play uses crossterm for keyboard and mouse input and the
//! framebuffer renderer from `tui_dice::term`. `tui-dice headless` plays
//! without a terminal and prints JSON lines instead.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::{info, Level};

use tui_dice::cli::{Cli, Command};
use tui_dice::engine::{App, AppConfig};
use tui_dice::input::{
    handle_key_event, handle_mouse_event, handle_text_key, is_interrupt, should_quit,
};
use tui_dice::term::{FrameBuffer, GameView, Layout, RenderThrottle, TerminalRenderer, Viewport};
use tui_dice::types::{GameAction, TICK_MS};
use tui_dice::{headless, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config()?;

    match cli.command {
        Some(Command::Headless {
            rolls,
            freeze,
            log_level,
        }) => {
            match &config.log_path {
                Some(path) => logging::init_file(path, log_level)?,
                None => logging::init_stderr(log_level),
            }
            let stdout = io::stdout();
            let mut out = stdout.lock();
            headless::run(&config, rolls, &freeze, &mut out)?;
            Ok(())
        }
        None => {
            if let Some(path) = &config.log_path {
                logging::init_file(path, Level::DEBUG)?;
            }
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, &config);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut app = App::new(config);
    info!(seed = app.game().seed(), theme = %app.theme(), "interactive session started");

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::default();
    let mut layout: Option<Layout> = None;

    let started = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let frame = app.view();
        let now_ms = started.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, frame.fingerprint(), frame.game.rolling) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            layout = Some(view.render_into(&frame, Viewport::new(w, h), &mut fb));
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key(&mut app, key) {
                        info!("quit requested");
                        return Ok(());
                    }
                }
                Event::Mouse(ev) => {
                    if let Some(p) = handle_mouse_event(ev) {
                        let target = layout.as_ref().and_then(|l| l.hit_test(p.column, p.row));
                        app.pointer(p.kind, target);
                    }
                }
                Event::Resize(..) => {
                    app.cancel_pointer();
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(TICK_MS);
        }
    }
}

/// Route one key press. Returns `true` when the player wants to quit.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    if is_interrupt(key) {
        return true;
    }
    if app.editing_custom() {
        if let Some(edit) = handle_text_key(key) {
            app.edit_custom(edit);
        }
        return false;
    }
    if should_quit(key) {
        return true;
    }
    match handle_key_event(key) {
        // Esc peels back one layer at a time before quitting.
        Some(GameAction::CloseOverlay) => {
            if app.apply(GameAction::CloseOverlay) {
                false
            } else if app.show_options() {
                app.apply(GameAction::ToggleOptions);
                false
            } else {
                true
            }
        }
        Some(action) => {
            app.apply(action);
            false
        }
        None => false,
    }
}
