//! The async frame loop of one session.
//!
//! Single task, single thread: the tick deadline and the terminal event
//! stream are multiplexed with `tokio::select!`, and every resulting command
//! is applied before the next event is polled.

use std::io;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::Event;
use futures::{Stream, StreamExt};
use tokio::time::Instant;
use tracing::info;

use crate::command::{Command, Flow};
use crate::coordinator::Coordinator;
use crate::input::{Input, InputController};
use crate::scheduler::{Scheduler, TICK};
use crate::term::Surface;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Escape: back to the menu.
    ReturnToMenu,
    /// Ctrl+C or the input stream closed: leave the program.
    Quit,
}

/// Run `coordinator`'s session until it terminates or the player quits.
///
/// The session is drawn once up front (forced, since sessions start paused).
pub async fn run_session<S, E>(
    coordinator: &mut Coordinator,
    base_frame_ms: u64,
    controller: &mut InputController,
    surface: &mut S,
    events: &mut E,
) -> Result<SessionEnd>
where
    S: Surface,
    E: Stream<Item = io::Result<Event>> + Unpin,
{
    info!(name = coordinator.session().name(), "session started");
    coordinator.apply(Command::Draw { force: true }, surface)?;

    let mut scheduler = Scheduler::new(
        base_frame_ms,
        Instant::now(),
        coordinator.session().speed(),
    );

    loop {
        tokio::select! {
            biased;

            maybe_event = events.next() => {
                let commands = match maybe_event {
                    Some(Ok(Event::Key(key))) => {
                        match controller.on_key(key, Instant::now().into_std()) {
                            Some(Input::Quit) => return Ok(SessionEnd::Quit),
                            Some(Input::Game(action)) => coordinator.commands_for(action),
                            _ => continue,
                        }
                    }
                    Some(Ok(Event::Resize(cols, rows))) => {
                        let mut cmds = ArrayVec::new();
                        cmds.push(Command::Resize { cols, rows });
                        cmds
                    }
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(SessionEnd::Quit),
                };

                for command in commands {
                    if coordinator.apply(command, surface)? == Flow::Stop {
                        return Ok(SessionEnd::ReturnToMenu);
                    }
                }
            }

            _ = tokio::time::sleep_until(scheduler.deadline()) => {
                for command in TICK {
                    if coordinator.apply(command, surface)? == Flow::Stop {
                        return Ok(SessionEnd::ReturnToMenu);
                    }
                }
                scheduler.schedule_next(Instant::now(), coordinator.session().speed());
            }
        }
    }
}
