//! Terminal Game of Life runner (default binary).
//!
//! It uses crossterm for keyboard/mouse input and a framebuffer-based
//! renderer. Logs go to `tui-life.log` in the system temp directory so they
//! never land on the alternate screen; set `RUST_LOG` to adjust verbosity.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info, warn};

use tui_life::core::GridSnapshot;
use tui_life::engine::Controller;
use tui_life::input::{should_quit, InputHandler};
use tui_life::term::{FrameBuffer, GridView, RenderThrottle, TerminalRenderer, Viewport};
use tui_life::types::LifeConfig;

/// Redraw an unchanged screen at most this often.
const IDLE_REFRESH_MS: u64 = 1000;

fn main() -> Result<()> {
    init_logging();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        warn!("exiting with error: {:#}", e);
    }
    result
}

fn init_logging() {
    let path = std::env::temp_dir().join("tui-life.log");
    // No stderr fallback: it would draw over the alternate screen.
    if let Ok(file) = File::create(path) {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let view = GridView::default();
    let config = view.fit(LifeConfig::default(), Viewport::new(w, h));
    info!(
        "starting {}x{} grid, step every {}ms",
        config.cols, config.rows, config.step_interval_ms
    );

    let mut controller = Controller::new(&config);
    let mut input = InputHandler::with_config(config.repeat_delay_ticks, config.repeat_interval_ticks);

    let clock = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(config.tick_ms as u64);

    let mut snap = GridSnapshot::default();
    let mut fb = FrameBuffer::new(w, h);
    let mut throttle = RenderThrottle::new(IDLE_REFRESH_MS);

    loop {
        // Render.
        controller.snapshot_into(&mut snap);
        let now_ms = clock.elapsed().as_millis() as u64;
        if throttle.should_render(now_ms, snap.fingerprint()) {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            info!("quit");
                            return Ok(());
                        }
                        if let Err(reason) = input.handle_key_press(key.code) {
                            debug!("ignored input: {} ({:?})", reason, key.code);
                        }
                    }
                    KeyEventKind::Release => {
                        input.handle_key_release(key.code);
                    }
                },
                Event::Mouse(mouse) => {
                    let (x, y) = view.pointer_to_pixel(mouse.column, mouse.row);
                    input.handle_mouse(mouse.kind, x, y);
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for event in input.update() {
                controller.push_event(event);
            }
            controller.tick(clock.elapsed().as_millis() as u64);
        }
    }
}
