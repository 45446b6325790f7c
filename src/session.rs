//! One mount's session
//!
//! The Idle -> Running state machine plus the per-frame procedure. The
//! platform shell owns the actual frame callback and input listeners; this
//! type owns all state they touch, so the whole loop is testable with a
//! synthetic frame driver.

use serde::Serialize;

use crate::renderer::{self, DrawCmd};
use crate::settings::Settings;
use crate::sim::{self, GameState, IdleScene, SessionPhase, TickInput, Viewport};

#[derive(Serialize)]
struct DumpView<'a> {
    phase: SessionPhase,
    idle: &'a IdleScene,
    game: &'a GameState,
}

pub struct Session {
    phase: SessionPhase,
    viewport: Viewport,
    idle: IdleScene,
    game: GameState,
    /// Latched input, consumed and cleared by the next frame
    input: TickInput,
}

impl Session {
    /// A freshly mounted session starts idle
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self {
            phase: SessionPhase::Idle,
            viewport,
            idle: IdleScene::new(seed, viewport),
            game: GameState::new(seed, viewport),
            input: TickInput::default(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The start trigger. One-way: a second trigger is ignored.
    /// Per-session entities are recreated on entry with the given seed.
    pub fn start(&mut self, seed: u64) {
        if self.phase == SessionPhase::Running {
            return;
        }
        self.game = GameState::new(seed, self.viewport);
        self.input = TickInput::default();
        self.phase = SessionPhase::Running;
        log::info!("session started with seed {seed}");
    }

    /// Latch a jump input for the next frame. Returns false while idle,
    /// where the input is ignored (and the caller should not swallow the
    /// key's default behavior).
    pub fn queue_flap(&mut self) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }
        self.input.flap = true;
        true
    }

    /// Reflect a window resize into every sizing-dependent component
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.idle.set_viewport(viewport);
        self.game.set_viewport(viewport);
        log::debug!("viewport now {}x{}", viewport.width, viewport.height);
    }

    /// One display frame: advance whichever loop is active and return the
    /// commands to paint. Once Running, the idle animator never draws again.
    pub fn advance_frame(&mut self, settings: &Settings) -> Vec<DrawCmd> {
        match self.phase {
            SessionPhase::Idle => {
                self.idle.tick();
                renderer::idle_frame(&self.idle)
            }
            SessionPhase::Running => {
                let input = self.input;
                self.input = TickInput::default();
                sim::tick(&mut self.game, &input);
                renderer::game_frame(&self.game, settings.starfield)
            }
        }
    }

    /// Serialized snapshot for the debug dump key
    pub fn debug_dump(&self) -> String {
        let view = DumpView {
            phase: self.phase,
            idle: &self.idle,
            game: &self.game,
        };
        serde_json::to_string(&view).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FLAP_VELOCITY, GRAVITY, ORNAMENT_ALPHA};

    const VIEW: Viewport = Viewport {
        width: 800.0,
        height: 600.0,
    };

    fn ornament_draws(cmds: &[DrawCmd]) -> usize {
        cmds.iter()
            .filter(|c| matches!(c, DrawCmd::Polygon { alpha, .. } if *alpha == ORNAMENT_ALPHA))
            .count()
    }

    #[test]
    fn test_idle_draws_cease_after_start() {
        let settings = Settings::default();
        let mut session = Session::new(4, VIEW);

        for _ in 0..5 {
            let cmds = session.advance_frame(&settings);
            assert!(ornament_draws(&cmds) > 0, "idle frames draw ornaments");
        }

        session.start(17);
        for _ in 0..5 {
            let cmds = session.advance_frame(&settings);
            assert_eq!(ornament_draws(&cmds), 0, "no idle draws once running");
        }
    }

    #[test]
    fn test_flap_ignored_while_idle() {
        let settings = Settings::default();
        let mut session = Session::new(4, VIEW);
        assert!(!session.queue_flap());

        session.start(17);
        session.advance_frame(&settings);
        // The pre-start flap must not have leaked into the run
        assert!(session.game().ship.vy > 0.0);
    }

    #[test]
    fn test_flap_latch_consumed_once() {
        let settings = Settings::default();
        let mut session = Session::new(4, VIEW);
        session.start(17);

        assert!(session.queue_flap());
        session.advance_frame(&settings);
        let vy = session.game().ship.vy;
        assert!((vy - (FLAP_VELOCITY + GRAVITY)).abs() < 1e-5);

        // Next frame has no input: gravity only
        session.advance_frame(&settings);
        assert!((session.game().ship.vy - (FLAP_VELOCITY + 2.0 * GRAVITY)).abs() < 1e-5);
    }

    #[test]
    fn test_start_is_one_way() {
        let settings = Settings::default();
        let mut session = Session::new(4, VIEW);
        session.start(17);
        for _ in 0..10 {
            session.advance_frame(&settings);
        }
        let ticks = session.game().time_ticks;
        session.start(99);
        assert_eq!(session.game().time_ticks, ticks, "restart trigger ignored");
        assert_eq!(session.phase(), SessionPhase::Running);
    }

    #[test]
    fn test_resize_reaches_running_game() {
        let settings = Settings::default();
        let mut session = Session::new(4, VIEW);
        session.start(17);
        session.set_viewport(Viewport::new(1024.0, 768.0));
        session.advance_frame(&settings);
        assert_eq!(session.game().viewport.width, 1024.0);
    }

    #[test]
    fn test_debug_dump_is_json() {
        let session = Session::new(4, VIEW);
        let dump = session.debug_dump();
        let value: serde_json::Value = serde_json::from_str(&dump).expect("valid json");
        assert!(value.get("phase").is_some());
    }
}
