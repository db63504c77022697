use std::time::Duration;

use glam::Vec2;
use web_time::Instant;

const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(400);

/// Pixels the cursor may travel while pressed before the press becomes a
/// drag.
const DRAG_THRESHOLD: f32 = 4.0;

/// Pixels two releases may be apart and still count as one double-click.
const DOUBLE_CLICK_SLOP: f32 = 6.0;

/// Result of processing a mouse-up event through the click state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ClickResult {
    /// Release ended a drag, or there was no matching press.
    NoAction,
    /// First release at this spot.
    SingleClick { pos: Vec2 },
    /// Second release at the same spot inside the threshold.
    DoubleClick { pos: Vec2 },
}

/// Tracks mouse position, drag state, and the double-click window.
pub(crate) struct InputState {
    mouse_pos: Vec2,
    press_pos: Option<Vec2>,
    pub(crate) is_dragging: bool,
    last_click: Option<(Instant, Vec2)>,
}

impl InputState {
    pub(crate) fn new() -> Self {
        Self {
            mouse_pos: Vec2::ZERO,
            press_pos: None,
            is_dragging: false,
            last_click: None,
        }
    }

    /// Whether the primary button is held.
    pub(crate) fn is_pressed(&self) -> bool {
        self.press_pos.is_some()
    }

    pub(crate) fn handle_mouse_down(&mut self) {
        self.press_pos = Some(self.mouse_pos);
        self.is_dragging = false;
    }

    /// Update cursor position, returning the delta since the last move.
    /// Promotes a held press to a drag once it leaves the threshold.
    pub(crate) fn handle_mouse_position(&mut self, pos: Vec2) -> Vec2 {
        let delta = pos - self.mouse_pos;
        self.mouse_pos = pos;
        if let Some(press) = self.press_pos {
            if press.distance(pos) > DRAG_THRESHOLD {
                self.is_dragging = true;
            }
        }
        delta
    }

    /// Process a mouse-up event at time `now`.
    pub(crate) fn process_mouse_up(&mut self, now: Instant) -> ClickResult {
        let pressed = self.press_pos.take();
        let was_dragging = self.is_dragging;
        self.is_dragging = false;

        if pressed.is_none() || was_dragging {
            self.last_click = None;
            return ClickResult::NoAction;
        }

        let pos = self.mouse_pos;
        let is_double = self.last_click.is_some_and(|(at, last_pos)| {
            now.saturating_duration_since(at) < DOUBLE_CLICK_THRESHOLD
                && last_pos.distance(pos) <= DOUBLE_CLICK_SLOP
        });

        if is_double {
            // A third click starts a fresh pair.
            self.last_click = None;
            ClickResult::DoubleClick { pos }
        } else {
            self.last_click = Some((now, pos));
            ClickResult::SingleClick { pos }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(state: &mut InputState, at: Instant) -> ClickResult {
        state.handle_mouse_down();
        state.process_mouse_up(at)
    }

    #[test]
    fn two_quick_clicks_make_a_double() {
        let mut state = InputState::new();
        let t0 = Instant::now();
        let _ = state.handle_mouse_position(Vec2::new(10.0, 10.0));
        assert!(matches!(click(&mut state, t0), ClickResult::SingleClick { .. }));
        assert!(matches!(
            click(&mut state, t0 + Duration::from_millis(200)),
            ClickResult::DoubleClick { .. }
        ));
        assert!(matches!(
            click(&mut state, t0 + Duration::from_millis(300)),
            ClickResult::SingleClick { .. }
        ));
    }

    #[test]
    fn slow_clicks_stay_single() {
        let mut state = InputState::new();
        let t0 = Instant::now();
        let _ = click(&mut state, t0);
        assert!(matches!(
            click(&mut state, t0 + Duration::from_millis(500)),
            ClickResult::SingleClick { .. }
        ));
    }

    #[test]
    fn drag_suppresses_click() {
        let mut state = InputState::new();
        state.handle_mouse_down();
        let _ = state.handle_mouse_position(Vec2::new(50.0, 0.0));
        assert!(state.is_dragging);
        assert_eq!(state.process_mouse_up(Instant::now()), ClickResult::NoAction);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut state = InputState::new();
        assert_eq!(state.process_mouse_up(Instant::now()), ClickResult::NoAction);
    }
}
