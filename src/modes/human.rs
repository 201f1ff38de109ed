use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, interval_at};

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::{GameMetrics, StatsFile};
use crate::render::Renderer;

const COUNTDOWN_FROM: u8 = 3;
const COUNTDOWN_STEP: Duration = Duration::from_millis(500);
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Where the driver is in one game's lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Pre-game countdown overlay; ticks are not running yet
    Countdown(u8),
    /// The session is live and advancing once per tick
    Running,
    /// The session ended; waiting for restart or quit
    GameOver,
}

pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    phase: Phase,
    metrics: GameMetrics,
    stats_file: StatsFile,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_interval: Duration,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, tick_interval: Duration, stats_file: StatsFile) -> Result<Self> {
        let mut engine = GameEngine::new(config);
        let state = engine.new_session()?;
        let stats = stats_file.load()?;

        Ok(Self {
            engine,
            state,
            phase: Phase::Countdown(COUNTDOWN_FROM),
            metrics: GameMetrics::new(stats),
            stats_file,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick_interval,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.tick_interval);

        // Render at 30 FPS
        let mut render_timer = interval(RENDER_INTERVAL);

        // First countdown step lands a full period in, so "3" gets shown
        let mut countdown_timer = interval_at(Instant::now() + COUNTDOWN_STEP, COUNTDOWN_STEP);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        if self.handle_event(event)? {
                            countdown_timer.reset();
                        }
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if self.phase == Phase::Running {
                        self.advance_game()?;
                    }
                }

                // Countdown step
                _ = countdown_timer.tick() => {
                    self.advance_countdown();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let countdown = match self.phase {
                        Phase::Countdown(remaining) => Some(remaining),
                        _ => None,
                    };
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics, countdown);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Returns true when a fresh countdown began and its timer needs resetting
    fn handle_event(&mut self, event: Event) -> Result<bool> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(false);
            }

            let action = self.input_handler.handle_key_event(key);

            match action {
                KeyAction::Turn(direction) => {
                    // Turns feed the engine's input queue; it applies its own
                    // admission rules. Ignored outside of live play.
                    if self.phase == Phase::Running {
                        self.state.change_direction(direction);
                    }
                }
                KeyAction::Restart => {
                    self.reset_game()?;
                    return Ok(true);
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(false)
    }

    fn advance_game(&mut self) -> Result<()> {
        let outcome = self.engine.advance(&mut self.state);

        if outcome.terminated {
            self.phase = Phase::GameOver;
            self.metrics.on_game_over(self.state.score);
            self.stats_file
                .save(&self.metrics.stats)
                .context("Failed to persist game stats")?;
        }

        Ok(())
    }

    fn advance_countdown(&mut self) {
        if let Phase::Countdown(remaining) = self.phase {
            if remaining <= 1 {
                self.phase = Phase::Running;
                self.metrics.on_game_start();
            } else {
                self.phase = Phase::Countdown(remaining - 1);
            }
        }
    }

    fn reset_game(&mut self) -> Result<()> {
        self.state = self.engine.new_session()?;
        self.phase = Phase::Countdown(COUNTDOWN_FROM);
        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
