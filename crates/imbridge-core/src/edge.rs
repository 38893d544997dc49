//! Frame-to-frame edge detection.

use crate::keys::GuiModifier;

/// Updates `last` to `now` and returns `Some(now)` if it changed.
pub fn transition(last: &mut bool, now: bool) -> Option<bool> {
    if *last == now {
        return None;
    }
    *last = now;
    Some(now)
}

/// The level-triggered state seen on the previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeState {
    pub focused: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub super_: bool,
}

impl Default for EdgeState {
    fn default() -> Self {
        // A freshly created window starts out focused.
        Self {
            focused: true,
            ctrl: false,
            shift: false,
            alt: false,
            super_: false,
        }
    }
}

impl EdgeState {
    pub fn modifier(&self, modifier: GuiModifier) -> bool {
        match modifier {
            GuiModifier::Ctrl => self.ctrl,
            GuiModifier::Shift => self.shift,
            GuiModifier::Alt => self.alt,
            GuiModifier::Super => self.super_,
        }
    }

    pub fn modifier_mut(&mut self, modifier: GuiModifier) -> &mut bool {
        match modifier {
            GuiModifier::Ctrl => &mut self.ctrl,
            GuiModifier::Shift => &mut self.shift,
            GuiModifier::Alt => &mut self.alt,
            GuiModifier::Super => &mut self.super_,
        }
    }
}
