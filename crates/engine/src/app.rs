//! Top level: menus in between sessions.

use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::Event;
use futures::{Stream, StreamExt};
use tokio::time::Instant;
use tracing::{info, warn};

use crate::config::GameConfig;
use crate::coordinator::Coordinator;
use crate::core::{random_grid, Session};
use crate::input::{Input, InputController};
use crate::menu::{Menu, MenuOutcome};
use crate::runtime::{run_session, SessionEnd};
use crate::store::Preferences;
use crate::term::{FrameBuffer, GameView, Glyphs, MenuView, Rgb, Surface};
use crate::types::APP_NAME;

pub struct App {
    config: GameConfig,
    menu: Menu,
    view: GameView,
    fb: FrameBuffer,
}

impl App {
    /// Build the app, reading the preferences file. A broken preferences
    /// file is logged and replaced by defaults.
    pub fn new(config: GameConfig) -> Self {
        let preferences = match Preferences::load(&config.preferences_path) {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "ignoring preferences file");
                Preferences::default()
            }
        };
        let view = GameView::new(glyphs_for(&preferences), config.padding, config.size_slack);
        let menu = Menu::new(config.presets_dir.clone(), preferences);
        Self {
            config,
            menu,
            view,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Run menus and sessions until the player exits.
    pub async fn run<S, E>(&mut self, surface: &mut S, events: &mut E) -> Result<()>
    where
        S: Surface,
        E: Stream<Item = io::Result<Event>> + Unpin,
    {
        let mut controller = InputController::menu(self.config.input_cooldown);
        surface.set_title(APP_NAME)?;

        loop {
            self.draw_menu(surface)?;

            let action = match events.next().await {
                Some(Ok(Event::Key(key))) => {
                    match controller.on_key(key, Instant::now().into_std()) {
                        Some(Input::Quit) => return Ok(()),
                        Some(Input::Menu(action)) => action,
                        _ => continue,
                    }
                }
                Some(Ok(Event::Resize(..))) => {
                    surface.invalidate();
                    continue;
                }
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            };

            let session = match self.menu.handle(action) {
                MenuOutcome::Stay => continue,
                MenuOutcome::Exit => return Ok(()),
                MenuOutcome::SavePreferences(preferences) => {
                    self.save_preferences(&preferences);
                    continue;
                }
                MenuOutcome::StartPreset(preset) => {
                    Session::new(preset.session_name(), preset.grid)
                }
                MenuOutcome::StartRandom(kind) => {
                    let (cols, rows) = surface.size()?;
                    let vp = self.view.viewport(cols, rows);
                    let grid =
                        random_grid(usize::from(vp.width), usize::from(vp.height), time_seed());
                    Session::new(format!("Random ({})", kind), grid)
                }
            };

            if self.play(session, surface, events).await? == SessionEnd::Quit {
                return Ok(());
            }
            self.menu.reset();
            controller.reset();
            surface.invalidate();
            surface.set_title(APP_NAME)?;
        }
    }

    async fn play<S, E>(
        &mut self,
        session: Session,
        surface: &mut S,
        events: &mut E,
    ) -> Result<SessionEnd>
    where
        S: Surface,
        E: Stream<Item = io::Result<Event>> + Unpin,
    {
        surface.invalidate();
        let mut coordinator = Coordinator::new(session, self.view.clone(), &self.config);
        let mut controller = InputController::game(self.config.input_cooldown);
        let end = run_session(
            &mut coordinator,
            self.config.base_frame_ms,
            &mut controller,
            surface,
            events,
        )
        .await?;
        info!(?end, "session ended");
        Ok(end)
    }

    fn draw_menu(&mut self, surface: &mut impl Surface) -> Result<()> {
        let (cols, rows) = surface.size()?;
        MenuView.draw(&self.menu.screen(), cols, rows, &mut self.fb);
        surface.present(&mut self.fb)
    }

    fn save_preferences(&mut self, preferences: &Preferences) {
        self.view.set_glyphs(glyphs_for(preferences));
        match preferences.save(&self.config.preferences_path) {
            Ok(()) => info!(path = %self.config.preferences_path.display(), "preferences saved"),
            Err(e) => warn!(error = %e, "cannot save preferences"),
        }
    }
}

fn glyphs_for(preferences: &Preferences) -> Glyphs {
    Glyphs::new(preferences.alive_cell_char, preferences.dead_cell_char).with_colors(
        preferences.alive_rgb().map(Rgb::from),
        preferences.dead_rgb().map(Rgb::from),
    )
}

/// Seed for random grids: the current time, folded into 32 bits.
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::HeadlessSurface;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use futures::channel::mpsc;
    use std::fs;
    use std::time::Duration;

    fn key(code: KeyCode) -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn config_in(dir: &std::path::Path) -> GameConfig {
        GameConfig {
            presets_dir: dir.join("presets"),
            preferences_path: dir.join("preferences.json"),
            ..GameConfig::default()
        }
    }

    /// Feed `keys` one by one, 150 ms apart so the cooldown never drops one.
    async fn feed(tx: mpsc::UnboundedSender<io::Result<Event>>, keys: Vec<KeyCode>) {
        for code in keys {
            tokio::time::sleep(Duration::from_millis(150)).await;
            tx.unbounded_send(key(code)).unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_escape_on_main_menu_exits() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(config_in(dir.path()));
        let mut surface = HeadlessSurface::new(60, 20);
        let (tx, mut rx) = mpsc::unbounded();

        let (res, ()) = tokio::join!(
            app.run(&mut surface, &mut rx),
            feed(tx, vec![KeyCode::Esc])
        );
        res.unwrap();
        assert!(surface.last_text().contains("Presets"));
        assert_eq!(surface.title(), "Conway's CLIfe");
    }

    #[tokio::test(start_paused = true)]
    async fn test_preset_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("presets")).unwrap();
        fs::write(
            dir.path().join("presets").join("glider.json"),
            r#"{"name":"Glider","size":[8,8],"pattern":[[0,1,0],[0,0,1],[1,1,1]]}"#,
        )
        .unwrap();

        let mut app = App::new(config_in(dir.path()));
        let mut surface = HeadlessSurface::new(60, 20);
        let (tx, mut rx) = mpsc::unbounded();

        let keys = vec![
            KeyCode::Enter, // Presets
            KeyCode::Enter, // start Glider
            KeyCode::Esc,   // back to menu
            KeyCode::Esc,   // exit
        ];
        let (res, ()) = tokio::join!(app.run(&mut surface, &mut rx), feed(tx, keys));
        res.unwrap();

        // The game frame was shown and then the main menu again.
        assert!(surface.frames() >= 4);
        assert!(surface.last_text().contains("Settings"));
        assert_eq!(surface.title(), "Conway's CLIfe");
    }

    #[tokio::test(start_paused = true)]
    async fn test_settings_are_saved_and_applied() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = App::new(config_in(dir.path()));
        let mut surface = HeadlessSurface::new(60, 20);
        let (tx, mut rx) = mpsc::unbounded();

        let keys = vec![
            KeyCode::Down,
            KeyCode::Down,
            KeyCode::Enter, // Settings
            KeyCode::Right, // alive glyph: next choice
            KeyCode::Enter, // save
            KeyCode::Esc,
        ];
        let (res, ()) = tokio::join!(app.run(&mut surface, &mut rx), feed(tx, keys));
        res.unwrap();

        let saved = Preferences::load(&dir.path().join("preferences.json")).unwrap();
        assert_eq!(saved.alive_cell_char, '♦');
        assert_eq!(app.view().glyphs().alive, '♦');
    }

    #[test]
    fn test_broken_preferences_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("preferences.json"), "not json").unwrap();
        let app = App::new(config_in(dir.path()));
        assert_eq!(app.menu().preferences(), &Preferences::default());
    }
}
