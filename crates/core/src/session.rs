//! Session module - state of the game currently being played
//!
//! A session owns the grid and every parameter the frame loop and renderer
//! read: pause flag, speed, iteration counter and the last viewport the grid
//! was drawn into. It is created when a game starts and reset when the player
//! returns to the menu.

use crate::grid::Grid;
use crate::rules::evolve;
use crate::types::Speed;
use crate::viewport::ViewportGeometry;

/// Complete state of one running game.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    name: String,
    active: bool,
    paused: bool,
    /// Set when the pause was imposed by a too-small viewport rather than the player.
    forced_pause: bool,
    speed: Speed,
    iteration: u64,
    last_viewport: Option<ViewportGeometry>,
}

impl Session {
    /// Start a new active session. Sessions always begin paused.
    pub fn new(name: impl Into<String>, grid: Grid) -> Self {
        Self {
            grid,
            name: name.into(),
            active: true,
            paused: true,
            forced_pause: false,
            speed: Speed::NORMAL,
            iteration: 0,
            last_viewport: None,
        }
    }

    /// An empty, inactive session (the state while menus are shown).
    pub fn inactive() -> Self {
        let mut s = Self::new(String::new(), Grid::default());
        s.active = false;
        s
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn forced_pause(&self) -> bool {
        self.forced_pause
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn last_viewport(&self) -> Option<ViewportGeometry> {
        self.last_viewport
    }

    /// Run one generation. Returns whether the grid advanced.
    ///
    /// While paused the grid is left as it is and the counter does not move.
    pub fn advance(&mut self) -> bool {
        let paused = self.paused;
        self.grid = evolve(&self.grid, paused);
        if !paused {
            self.iteration += 1;
        }
        !paused
    }

    /// Swap in a new authoritative grid (used by the renderer's resync).
    pub fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Player-driven pause/resume. Clears any forced pause.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        self.forced_pause = false;
    }

    /// Pause because the viewport can no longer show the grid.
    ///
    /// Returns true if this call changed the pause state.
    pub fn force_pause(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.paused = true;
        self.forced_pause = true;
        true
    }

    /// Lift a pause previously imposed by [`Session::force_pause`].
    ///
    /// A pause chosen by the player is left alone. Returns true if resumed.
    pub fn release_forced_pause(&mut self) -> bool {
        if !self.forced_pause {
            return false;
        }
        self.forced_pause = false;
        self.paused = false;
        true
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn speed_up(&mut self, step: u16, max: u16) -> Speed {
        self.speed = self.speed.faster(step, max);
        self.speed
    }

    pub fn speed_down(&mut self, step: u16, max: u16) -> Speed {
        self.speed = self.speed.slower(step, max);
        self.speed
    }

    /// Record the viewport the grid is about to be drawn into.
    ///
    /// Returns true if it differs from the previous one.
    pub fn observe_viewport(&mut self, viewport: ViewportGeometry) -> bool {
        let changed = self.last_viewport != Some(viewport);
        self.last_viewport = Some(viewport);
        changed
    }

    /// End the session: clear the grid and mark it inactive.
    pub fn terminate(&mut self) {
        self.active = false;
        self.paused = true;
        self.forced_pause = false;
        self.iteration = 0;
        self.last_viewport = None;
        self.grid.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MAX_SPEED_TENTHS, SPEED_STEP_TENTHS};
    use proptest::prelude::*;

    fn blinker() -> Grid {
        Grid::from_ascii(
            "
            ...
            ###
            ...
            ",
        )
    }

    #[test]
    fn test_new_session_starts_paused_and_active() {
        let s = Session::new("Preset: Blinker", blinker());
        assert!(s.is_active());
        assert!(s.paused());
        assert_eq!(s.iteration(), 0);
        assert_eq!(s.speed(), Speed::NORMAL);
    }

    #[test]
    fn test_advance_counts_only_real_generations() {
        let mut s = Session::new("t", blinker());
        assert!(!s.advance());
        assert_eq!(s.iteration(), 0);
        assert_eq!(s.grid(), &blinker());

        s.set_paused(false);
        assert!(s.advance());
        assert!(s.advance());
        assert_eq!(s.iteration(), 2);
        assert_eq!(s.grid(), &blinker());
    }

    #[test]
    fn test_forced_pause_is_released_but_player_pause_is_not() {
        let mut s = Session::new("t", blinker());
        assert!(!s.force_pause(), "already paused by the player");
        assert!(!s.release_forced_pause());
        assert!(s.paused());

        s.set_paused(false);
        assert!(s.force_pause());
        assert!(s.forced_pause());
        assert!(s.release_forced_pause());
        assert!(!s.paused());
    }

    #[test]
    fn test_observe_viewport_detects_changes() {
        let mut s = Session::new("t", blinker());
        assert!(s.observe_viewport(ViewportGeometry::new(10, 5)));
        assert!(!s.observe_viewport(ViewportGeometry::new(10, 5)));
        assert!(s.observe_viewport(ViewportGeometry::new(11, 5)));
    }

    #[test]
    fn test_terminate_clears_grid() {
        let mut s = Session::new("t", blinker());
        s.set_paused(false);
        s.advance();
        s.terminate();
        assert!(!s.is_active());
        assert!(s.grid().is_empty());
        assert_eq!(s.iteration(), 0);
    }

    proptest! {
        #[test]
        fn test_speed_stays_within_step_and_max(presses in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut s = Session::new("t", Grid::default());
            for up in presses {
                let speed = if up {
                    s.speed_up(SPEED_STEP_TENTHS, MAX_SPEED_TENTHS)
                } else {
                    s.speed_down(SPEED_STEP_TENTHS, MAX_SPEED_TENTHS)
                };
                prop_assert!(speed.tenths() >= SPEED_STEP_TENTHS);
                prop_assert!(speed.tenths() <= MAX_SPEED_TENTHS);
            }
        }
    }
}
