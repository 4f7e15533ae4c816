//! The single owner of a running session.
//!
//! Everything that changes the session goes through [`Coordinator::apply`],
//! one command at a time. Draws go through the `GameView`, which also
//! resyncs the grid to the viewport.

use anyhow::Result;
use arrayvec::ArrayVec;
use tracing::{debug, info, warn};

use crate::command::{Command, Flow};
use crate::config::GameConfig;
use crate::core::Session;
use crate::scheduler::LoopState;
use crate::term::{FrameBuffer, GameView, Surface};
use crate::types::{GameAction, Speed};

pub struct Coordinator {
    session: Session,
    view: GameView,
    fb: FrameBuffer,
    speed_step: u16,
    max_speed: u16,
    title: String,
}

impl Coordinator {
    pub fn new(session: Session, view: GameView, config: &GameConfig) -> Self {
        Self {
            session,
            view,
            fb: FrameBuffer::new(0, 0),
            speed_step: config.speed_step,
            max_speed: config.max_speed,
            title: String::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> LoopState {
        LoopState::of(&self.session)
    }

    /// Commands an accepted game action translates into.
    pub fn commands_for(&self, action: GameAction) -> ArrayVec<Command, 2> {
        let mut out = ArrayVec::new();
        match action {
            GameAction::TogglePause => {
                out.push(Command::SetPaused(!self.session.paused()));
                out.push(Command::Draw { force: true });
            }
            GameAction::SpeedUp => {
                let speed = self
                    .session
                    .speed()
                    .faster(self.speed_step, self.max_speed);
                out.push(Command::SetSpeed(speed));
                out.push(Command::Draw { force: true });
            }
            GameAction::SpeedDown => {
                let speed = self
                    .session
                    .speed()
                    .slower(self.speed_step, self.max_speed);
                out.push(Command::SetSpeed(speed));
                out.push(Command::Draw { force: true });
            }
            GameAction::ReturnToMenu => out.push(Command::Terminate),
        }
        out
    }

    /// Apply one command. Returns [`Flow::Stop`] once the session is over.
    pub fn apply(&mut self, command: Command, surface: &mut impl Surface) -> Result<Flow> {
        if !self.session.is_active() {
            return Ok(Flow::Stop);
        }

        match command {
            Command::Evolve => {
                self.session.advance();
            }
            Command::Draw { force } => {
                if !force && self.session.paused() {
                    return Ok(Flow::Continue);
                }
                let (cols, rows) = surface.size()?;
                self.draw(cols, rows, surface)?;
            }
            Command::SetPaused(paused) => {
                self.session.set_paused(paused);
                info!(paused, iteration = self.session.iteration(), "pause toggled");
            }
            Command::SetSpeed(speed) => {
                let speed = speed.clamped(self.speed_step, self.max_speed);
                self.set_speed(speed);
            }
            Command::Resize { cols, rows } => {
                debug!(cols, rows, "terminal resized");
                surface.invalidate();
                self.draw(cols, rows, surface)?;
            }
            Command::Terminate => {
                info!(
                    name = self.session.name(),
                    iteration = self.session.iteration(),
                    "session terminated"
                );
                self.session.terminate();
                return Ok(Flow::Stop);
            }
        }
        Ok(Flow::Continue)
    }

    fn set_speed(&mut self, speed: Speed) {
        if speed != self.session.speed() {
            self.session.set_speed(speed);
            info!(%speed, "speed changed");
        }
    }

    fn draw(&mut self, cols: u16, rows: u16, surface: &mut impl Surface) -> Result<()> {
        // Settle the pause state first so the frame shows it.
        if self.view.check(&self.session, cols, rows).is_too_small() {
            if self.session.force_pause() {
                warn!(cols, rows, "terminal too small, pausing");
            }
        } else if self.session.release_forced_pause() {
            info!(cols, rows, "terminal large enough again, resuming");
        }

        let report = self.view.draw(&mut self.session, cols, rows, &mut self.fb);
        if report.viewport_changed {
            debug!(
                width = report.viewport.width,
                height = report.viewport.height,
                resynced = report.resynced,
                "viewport changed"
            );
        }
        surface.present(&mut self.fb)?;

        let title = GameView::title(&self.session);
        if title != self.title {
            surface.set_title(&title)?;
            self.title = title;
        }
        Ok(())
    }
}
