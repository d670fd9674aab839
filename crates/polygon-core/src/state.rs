//! Render state mutated by the UI controls and read once per tick.
//!
//! The state has a single owner (the UI/animation thread). Hosts share it as
//! `Rc<RefCell<RenderState>>` between the tick loop and their event handlers.

use crate::constants::{ALTERNATE_COLOR, PRIMARY_COLOR, ROTATION_SPEED_X, ROTATION_SPEED_Y};
use glam::Vec4;

/// Whether the frame driver advances the rotation angles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopMode {
    #[default]
    Running,
    Paused,
}

impl LoopMode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            LoopMode::Running => LoopMode::Paused,
            LoopMode::Paused => LoopMode::Running,
        }
    }
}

/// The two fixed fill colors cycled by [`Control::ChangeColor`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorPreset {
    #[default]
    Primary,
    Alternate,
}

impl ColorPreset {
    #[inline]
    pub fn next(self) -> Self {
        match self {
            ColorPreset::Primary => ColorPreset::Alternate,
            ColorPreset::Alternate => ColorPreset::Primary,
        }
    }

    pub fn rgba(self) -> Vec4 {
        match self {
            ColorPreset::Primary => Vec4::from_array(PRIMARY_COLOR),
            ColorPreset::Alternate => Vec4::from_array(ALTERNATE_COLOR),
        }
    }
}

/// Host-facing controls. Each one is an independent mutation of the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    TogglePause,
    ChangeColor,
    ResetView,
    ToggleShare,
}

/// What the host still has to do after a control was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlOutcome {
    /// Only render state changed; the next tick picks it up.
    Updated,
    /// The pause mode changed; the host should relabel its pause button.
    ModeChanged(LoopMode),
    /// Share info visibility is owned by the host UI, not by the render state.
    ToggleShareInfo,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    pub mode: LoopMode,
    pub color: ColorPreset,
}

impl Default for RenderState {
    fn default() -> Self {
        Self::with_speeds(ROTATION_SPEED_X, ROTATION_SPEED_Y)
    }
}

impl RenderState {
    pub fn with_speeds(speed_x: f32, speed_y: f32) -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            speed_x,
            speed_y,
            mode: LoopMode::Running,
            color: ColorPreset::Primary,
        }
    }

    #[inline]
    pub fn is_rotating(&self) -> bool {
        self.mode == LoopMode::Running
    }

    /// Advance both angles by one tick's increment. Angles are left unbounded.
    pub fn advance(&mut self) {
        if self.is_rotating() {
            self.rotation_x += self.speed_x;
            self.rotation_y += self.speed_y;
        }
    }

    pub fn toggle_pause(&mut self) -> LoopMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn change_color(&mut self) -> ColorPreset {
        self.color = self.color.next();
        self.color
    }

    pub fn reset_view(&mut self) {
        self.rotation_x = 0.0;
        self.rotation_y = 0.0;
    }

    pub fn apply(&mut self, control: Control) -> ControlOutcome {
        match control {
            Control::TogglePause => ControlOutcome::ModeChanged(self.toggle_pause()),
            Control::ChangeColor => {
                self.change_color();
                ControlOutcome::Updated
            }
            Control::ResetView => {
                self.reset_view();
                ControlOutcome::Updated
            }
            Control::ToggleShare => ControlOutcome::ToggleShareInfo,
        }
    }

    /// Label for the pause button in the current mode.
    pub fn pause_label(&self) -> &'static str {
        match self.mode {
            LoopMode::Running => "Pause",
            LoopMode::Paused => "Resume",
        }
    }
}

/// Keyboard shortcut mapping shared by the web and native frontends.
#[inline]
pub fn control_for_key(key: &str) -> Option<Control> {
    match key {
        " " | "p" | "P" => Some(Control::TogglePause),
        "c" | "C" => Some(Control::ChangeColor),
        "r" | "R" => Some(Control::ResetView),
        "s" | "S" => Some(Control::ToggleShare),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paused_state_does_not_advance() {
        let mut state = RenderState::with_speeds(0.5, 0.25);
        state.toggle_pause();
        state.advance();
        assert_eq!(state.rotation_x, 0.0);
        assert_eq!(state.rotation_y, 0.0);
    }

    #[test]
    fn reset_keeps_mode_and_color() {
        let mut state = RenderState::default();
        state.advance();
        state.toggle_pause();
        state.change_color();
        state.reset_view();
        assert_eq!(state.mode, LoopMode::Paused);
        assert_eq!(state.color, ColorPreset::Alternate);
        assert_eq!(state.rotation_x, 0.0);
    }

    #[test]
    fn share_does_not_touch_render_state() {
        let mut state = RenderState::default();
        state.advance();
        let before = state.clone();
        assert_eq!(state.apply(Control::ToggleShare), ControlOutcome::ToggleShareInfo);
        assert_eq!(state, before);
    }

    #[test]
    fn pause_label_follows_mode() {
        let mut state = RenderState::default();
        assert_eq!(state.pause_label(), "Pause");
        assert_eq!(
            state.apply(Control::TogglePause),
            ControlOutcome::ModeChanged(LoopMode::Paused)
        );
        assert_eq!(state.pause_label(), "Resume");
    }
}
