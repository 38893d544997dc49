//! Per-frame translation of host input into GUI events.
//!
//! Each call to [`InputTranslator::translate`] compares the host's current
//! input state against the snapshot kept from the previous frame and emits only
//! the transitions. Held keys and held modifiers never re-emit.

use std::collections::HashSet;

use glam::Vec2;

use crate::edge::{transition, EdgeState};
use crate::event::GuiEvent;
use crate::key_map::{KeyMap, ModifierMap, GAMEPAD_AXES, GAMEPAD_BUTTONS};
use crate::keys::{GuiKey, GuiModifier, HostKey, KeyAction, MouseButton};
use crate::options::{InputMode, InputOptions};
use crate::platform::{GuiIo, InputSource, IoRequests};

/// Gamepad slot polled for navigation.
const NAV_GAMEPAD: u32 = 0;

/// Translates host input into GUI events, one frame at a time.
#[derive(Debug, Clone)]
pub struct InputTranslator {
    key_map: KeyMap,
    modifier_map: ModifierMap,
    state: EdgeState,
    options: InputOptions,
    /// Modifier host keys held according to key callbacks.
    held_modifiers: HashSet<HostKey>,
}

impl InputTranslator {
    /// Creates a translator with the standard key and modifier tables.
    pub fn new(options: InputOptions) -> Self {
        Self::with_maps(KeyMap::standard(), ModifierMap::standard(), options)
    }

    pub fn with_maps(key_map: KeyMap, modifier_map: ModifierMap, options: InputOptions) -> Self {
        Self {
            key_map,
            modifier_map,
            state: EdgeState::default(),
            options,
            held_modifiers: HashSet::new(),
        }
    }

    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    pub fn modifier_map(&self) -> &ModifierMap {
        &self.modifier_map
    }

    /// The snapshot taken at the end of the last translated frame.
    pub fn state(&self) -> EdgeState {
        self.state
    }

    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    pub fn mode(&self) -> InputMode {
        self.options.mode
    }

    /// Translates one frame of host input and pushes the events into `io`.
    ///
    /// Returns the number of events pushed.
    pub fn process_frame<I, G>(&mut self, input: &mut I, io: &mut G) -> usize
    where
        I: InputSource,
        G: GuiIo + ?Sized,
    {
        let requests = IoRequests::from_io(io);
        let events = self.translate(input, requests);
        let count = events.len();
        for event in events {
            io.add_event(event);
        }
        count
    }

    /// Translates one frame of host input.
    pub fn translate(
        &mut self,
        input: &mut impl InputSource,
        requests: IoRequests,
    ) -> Vec<GuiEvent> {
        let mut events = Vec::new();

        if let Some(focused) = transition(&mut self.state.focused, input.is_window_focused()) {
            log::debug!("window focus changed: {focused}");
            events.push(GuiEvent::Focus(focused));
        }

        for modifier in GuiModifier::ALL {
            let down = self
                .modifier_map
                .is_down(modifier, |key| input.is_key_down(key));
            if let Some(down) = transition(self.state.modifier_mut(modifier), down) {
                if !down {
                    let modifier_map = &self.modifier_map;
                    self.held_modifiers
                        .retain(|key| modifier_map.get(*key) != Some(modifier));
                }
                events.push(GuiEvent::Key {
                    key: modifier.key(),
                    down,
                });
            }
        }

        if self.options.mode == InputMode::Polled {
            for (host, gui) in self.key_map.iter() {
                for down in edges(
                    input.is_key_pressed(host),
                    input.is_key_released(host),
                    input.is_key_down(host),
                ) {
                    events.push(GuiEvent::Key { key: gui, down });
                }
            }

            if requests.want_capture_keyboard {
                while let Some(c) = input.next_char() {
                    events.extend(Self::char_event(c));
                }
            }
        }

        if !requests.want_set_mouse_pos {
            events.push(GuiEvent::MousePos(input.mouse_position()));
        }

        for button in MouseButton::ALL {
            for down in edges(
                input.is_mouse_button_pressed(button),
                input.is_mouse_button_released(button),
                input.is_mouse_button_down(button),
            ) {
                events.push(GuiEvent::MouseButton { button, down });
            }
        }

        let wheel = input.mouse_wheel_move();
        if wheel != Vec2::ZERO {
            events.push(GuiEvent::MouseWheel(wheel));
        }

        if requests.nav_gamepad && input.is_gamepad_available(NAV_GAMEPAD) {
            self.gamepad_events(input, &mut events);
        }

        log::trace!("translated frame into {} GUI events", events.len());
        events
    }

    fn gamepad_events(&self, input: &impl InputSource, events: &mut Vec<GuiEvent>) {
        for &(button, key) in GAMEPAD_BUTTONS {
            if input.is_gamepad_button_pressed(NAV_GAMEPAD, button) {
                events.push(GuiEvent::key_down(key));
            } else if input.is_gamepad_button_released(NAV_GAMEPAD, button) {
                events.push(GuiEvent::key_up(key));
            }
        }

        let dead_zone = self.options.gamepad_dead_zone;
        for &(axis, negative, positive) in GAMEPAD_AXES {
            let value = input.gamepad_axis(NAV_GAMEPAD, axis);
            events.push(stick_event(negative, -value, dead_zone));
            events.push(stick_event(positive, value, dead_zone));
        }
    }

    /// Translates a raw key action delivered by a host key callback.
    ///
    /// Repeats are dropped; the GUI generates its own key repeat. A modifier
    /// key also reports its `Mod*` key, routed through the same snapshot the
    /// per-frame scan uses so the transition is only reported once. The
    /// modifier stays down while any of its host keys is held.
    pub fn key_event(&mut self, host: HostKey, action: KeyAction) -> Vec<GuiEvent> {
        let Some(key) = self.key_map.get(host) else {
            return Vec::new();
        };
        let down = match action {
            KeyAction::Press => true,
            KeyAction::Release => false,
            KeyAction::Repeat => return Vec::new(),
        };

        let mut events = vec![GuiEvent::Key { key, down }];
        if let Some(modifier) = self.modifier_map.get(host) {
            if down {
                self.held_modifiers.insert(host);
            } else {
                self.held_modifiers.remove(&host);
            }
            let any_held = self
                .modifier_map
                .is_down(modifier, |key| self.held_modifiers.contains(&key));
            if let Some(down) = transition(self.state.modifier_mut(modifier), any_held) {
                events.push(GuiEvent::Key {
                    key: modifier.key(),
                    down,
                });
            }
        }
        events
    }

    /// Translates a typed character. Only the basic multilingual plane is passed on.
    pub fn char_event(c: char) -> Option<GuiEvent> {
        let code = u32::from(c);
        (code > 0 && code < 0x10000).then_some(GuiEvent::Char(c))
    }
}

/// Orders the down/up edges seen for one key during a frame.
///
/// When both edges happened, the current level tells which came last.
fn edges(pressed: bool, released: bool, down: bool) -> impl Iterator<Item = bool> {
    let pair = match (pressed, released) {
        (true, false) => [Some(true), None],
        (false, true) => [Some(false), None],
        (true, true) if down => [Some(false), Some(true)],
        (true, true) => [Some(true), Some(false)],
        (false, false) => [None, None],
    };
    pair.into_iter().flatten()
}

fn stick_event(key: GuiKey, deflection: f32, dead_zone: f32) -> GuiEvent {
    let down = deflection > dead_zone;
    GuiEvent::KeyAnalog {
        key,
        down,
        value: if down { deflection } else { 0.0 },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet, VecDeque};

    use proptest::prelude::*;

    use super::*;
    use crate::keys::{GamepadAxis, GamepadButton};
    use crate::platform::EventQueue;

    /// Scripted host input for one frame at a time.
    #[derive(Default)]
    struct MockInput {
        down: HashSet<HostKey>,
        pressed: HashSet<HostKey>,
        released: HashSet<HostKey>,
        buttons_down: HashSet<MouseButton>,
        buttons_pressed: HashSet<MouseButton>,
        buttons_released: HashSet<MouseButton>,
        mouse: Vec2,
        wheel: Vec2,
        unfocused: bool,
        chars: VecDeque<char>,
        gamepad: bool,
        pad_pressed: HashSet<GamepadButton>,
        pad_released: HashSet<GamepadButton>,
        axes: HashMap<GamepadAxis, f32>,
    }

    impl MockInput {
        /// Starts a new frame with `held` as the keys held down.
        fn frame(&mut self, held: &[HostKey]) {
            let now: HashSet<HostKey> = held.iter().copied().collect();
            self.pressed = now.difference(&self.down).copied().collect();
            self.released = self.down.difference(&now).copied().collect();
            self.down = now;
            self.buttons_pressed.clear();
            self.buttons_released.clear();
            self.wheel = Vec2::ZERO;
        }

        fn click(&mut self, button: MouseButton, down: bool) {
            if down {
                self.buttons_down.insert(button);
                self.buttons_pressed.insert(button);
            } else {
                self.buttons_down.remove(&button);
                self.buttons_released.insert(button);
            }
        }
    }

    impl InputSource for MockInput {
        fn is_key_pressed(&self, key: HostKey) -> bool {
            self.pressed.contains(&key)
        }
        fn is_key_released(&self, key: HostKey) -> bool {
            self.released.contains(&key)
        }
        fn is_key_down(&self, key: HostKey) -> bool {
            self.down.contains(&key)
        }
        fn mouse_position(&self) -> Vec2 {
            self.mouse
        }
        fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
            self.buttons_pressed.contains(&button)
        }
        fn is_mouse_button_released(&self, button: MouseButton) -> bool {
            self.buttons_released.contains(&button)
        }
        fn is_mouse_button_down(&self, button: MouseButton) -> bool {
            self.buttons_down.contains(&button)
        }
        fn mouse_wheel_move(&self) -> Vec2 {
            self.wheel
        }
        fn is_window_focused(&self) -> bool {
            !self.unfocused
        }
        fn window_size(&self) -> Vec2 {
            Vec2::new(800.0, 450.0)
        }
        fn framebuffer_size(&self) -> Vec2 {
            Vec2::new(800.0, 450.0)
        }
        fn frame_time(&self) -> f32 {
            1.0 / 60.0
        }
        fn next_char(&mut self) -> Option<char> {
            self.chars.pop_front()
        }
        fn is_gamepad_available(&self, gamepad: u32) -> bool {
            self.gamepad && gamepad == 0
        }
        fn is_gamepad_button_pressed(&self, _gamepad: u32, button: GamepadButton) -> bool {
            self.pad_pressed.contains(&button)
        }
        fn is_gamepad_button_released(&self, _gamepad: u32, button: GamepadButton) -> bool {
            self.pad_released.contains(&button)
        }
        fn gamepad_axis(&self, _gamepad: u32, axis: GamepadAxis) -> f32 {
            self.axes.get(&axis).copied().unwrap_or(0.0)
        }
    }

    fn key_events(events: &[GuiEvent]) -> Vec<(GuiKey, bool)> {
        events
            .iter()
            .filter_map(|e| match e {
                GuiEvent::Key { key, down } => Some((*key, *down)),
                _ => None,
            })
            .collect()
    }

    fn translator() -> InputTranslator {
        InputTranslator::new(InputOptions::default())
    }

    #[test]
    fn test_held_key_fires_once() {
        let mut t = translator();
        let mut input = MockInput::default();

        input.frame(&[HostKey::A]);
        let first = t.translate(&mut input, IoRequests::default());
        assert_eq!(key_events(&first), vec![(GuiKey::A, true)]);

        for _ in 0..5 {
            input.frame(&[HostKey::A]);
            let held = t.translate(&mut input, IoRequests::default());
            assert!(key_events(&held).is_empty());
        }

        input.frame(&[]);
        let released = t.translate(&mut input, IoRequests::default());
        assert_eq!(key_events(&released), vec![(GuiKey::A, false)]);

        input.frame(&[]);
        assert!(key_events(&t.translate(&mut input, IoRequests::default())).is_empty());
    }

    #[test]
    fn test_modifier_fires_on_transition_only() {
        let mut t = translator();
        let mut input = MockInput::default();

        input.frame(&[HostKey::LeftControl]);
        let events = t.translate(&mut input, IoRequests::default());
        assert_eq!(
            key_events(&events),
            vec![(GuiKey::ModCtrl, true), (GuiKey::LeftCtrl, true)]
        );
        assert!(t.state().ctrl);

        input.frame(&[HostKey::LeftControl]);
        assert!(key_events(&t.translate(&mut input, IoRequests::default())).is_empty());

        // Switching hands keeps ctrl held: only the physical keys change.
        input.frame(&[HostKey::RightControl]);
        let events = t.translate(&mut input, IoRequests::default());
        assert_eq!(
            key_events(&events),
            vec![(GuiKey::LeftCtrl, false), (GuiKey::RightCtrl, true)]
        );

        input.frame(&[]);
        let events = t.translate(&mut input, IoRequests::default());
        assert_eq!(
            key_events(&events),
            vec![(GuiKey::ModCtrl, false), (GuiKey::RightCtrl, false)]
        );
        assert!(!t.state().ctrl);
    }

    #[test]
    fn test_modifier_order() {
        let mut t = translator();
        let mut input = MockInput::default();
        input.frame(&[HostKey::RightSuper, HostKey::LeftAlt, HostKey::LeftShift, HostKey::RightControl]);
        let mods: Vec<GuiKey> = key_events(&t.translate(&mut input, IoRequests::default()))
            .into_iter()
            .map(|(k, _)| k)
            .filter(|k| k.is_modifier())
            .collect();
        assert_eq!(
            mods,
            vec![GuiKey::ModCtrl, GuiKey::ModShift, GuiKey::ModAlt, GuiKey::ModSuper]
        );
    }

    #[test]
    fn test_mouse_position_suppressed_while_gui_warps() {
        let mut t = translator();
        let mut input = MockInput {
            mouse: Vec2::new(10.0, 20.0),
            ..MockInput::default()
        };

        let events = t.translate(&mut input, IoRequests::default());
        assert!(events.contains(&GuiEvent::MousePos(Vec2::new(10.0, 20.0))));

        let warping = IoRequests {
            want_set_mouse_pos: true,
            ..IoRequests::default()
        };
        let events = t.translate(&mut input, warping);
        assert!(!events.iter().any(|e| matches!(e, GuiEvent::MousePos(_))));
    }

    #[test]
    fn test_mouse_position_every_frame() {
        let mut t = translator();
        let mut input = MockInput::default();
        for _ in 0..3 {
            let events = t.translate(&mut input, IoRequests::default());
            assert_eq!(
                events
                    .iter()
                    .filter(|e| matches!(e, GuiEvent::MousePos(_)))
                    .count(),
                1
            );
        }
    }

    #[test]
    fn test_focus_edges() {
        let mut t = translator();
        let mut input = MockInput::default();

        // Starts focused: no event.
        let events = t.translate(&mut input, IoRequests::default());
        assert!(!events.iter().any(|e| matches!(e, GuiEvent::Focus(_))));

        input.unfocused = true;
        let events = t.translate(&mut input, IoRequests::default());
        assert_eq!(events[0], GuiEvent::Focus(false));
        let events = t.translate(&mut input, IoRequests::default());
        assert!(!events.iter().any(|e| matches!(e, GuiEvent::Focus(_))));

        input.unfocused = false;
        let events = t.translate(&mut input, IoRequests::default());
        assert_eq!(events[0], GuiEvent::Focus(true));
    }

    #[test]
    fn test_mouse_buttons_and_wheel() {
        let mut t = translator();
        let mut input = MockInput::default();

        input.frame(&[]);
        input.click(MouseButton::Left, true);
        input.click(MouseButton::Back, true);
        input.wheel = Vec2::new(0.0, -1.0);
        let events = t.translate(&mut input, IoRequests::default());
        let tail: Vec<GuiEvent> = events
            .into_iter()
            .filter(|e| !matches!(e, GuiEvent::MousePos(_)))
            .collect();
        assert_eq!(
            tail,
            vec![
                GuiEvent::MouseButton {
                    button: MouseButton::Left,
                    down: true
                },
                GuiEvent::MouseButton {
                    button: MouseButton::Back,
                    down: true
                },
                GuiEvent::MouseWheel(Vec2::new(0.0, -1.0)),
            ]
        );

        // Held: nothing, and no zero wheel event.
        input.frame(&[]);
        let events = t.translate(&mut input, IoRequests::default());
        assert_eq!(events.len(), 1);

        input.frame(&[]);
        input.click(MouseButton::Left, false);
        let events = t.translate(&mut input, IoRequests::default());
        assert!(events.contains(&GuiEvent::MouseButton {
            button: MouseButton::Left,
            down: false
        }));
    }

    #[test]
    fn test_tap_within_one_frame() {
        let mut t = translator();
        let mut input = MockInput::default();
        input.pressed.insert(HostKey::Enter);
        input.released.insert(HostKey::Enter);
        let events = t.translate(&mut input, IoRequests::default());
        assert_eq!(
            key_events(&events),
            vec![(GuiKey::Enter, true), (GuiKey::Enter, false)]
        );
    }

    #[test]
    fn test_text_only_when_captured() {
        let mut t = translator();
        let mut input = MockInput::default();
        input.chars.extend(['h', 'i']);

        let events = t.translate(&mut input, IoRequests::default());
        assert!(!events.iter().any(|e| matches!(e, GuiEvent::Char(_))));
        assert_eq!(input.chars.len(), 2);

        let typing = IoRequests {
            want_capture_keyboard: true,
            ..IoRequests::default()
        };
        let events = t.translate(&mut input, typing);
        let chars: Vec<char> = events
            .iter()
            .filter_map(|e| match e {
                GuiEvent::Char(c) => Some(*c),
                _ => None,
            })
            .collect();
        assert_eq!(chars, vec!['h', 'i']);
        assert!(input.chars.is_empty());
    }

    #[test]
    fn test_char_range() {
        assert_eq!(InputTranslator::char_event('a'), Some(GuiEvent::Char('a')));
        assert_eq!(InputTranslator::char_event('\u{00e9}'), Some(GuiEvent::Char('\u{00e9}')));
        assert_eq!(InputTranslator::char_event('\0'), None);
        assert_eq!(InputTranslator::char_event('\u{1F600}'), None);
    }

    #[test]
    fn test_callback_mode() {
        let mut t = InputTranslator::new(InputOptions {
            mode: InputMode::Callbacks,
            ..InputOptions::default()
        });

        assert_eq!(
            t.key_event(HostKey::Tab, KeyAction::Press),
            vec![GuiEvent::key_down(GuiKey::Tab)]
        );
        assert!(t.key_event(HostKey::Tab, KeyAction::Repeat).is_empty());
        assert_eq!(
            t.key_event(HostKey::Tab, KeyAction::Release),
            vec![GuiEvent::key_up(GuiKey::Tab)]
        );

        assert_eq!(
            t.key_event(HostKey::LeftShift, KeyAction::Press),
            vec![
                GuiEvent::key_down(GuiKey::LeftShift),
                GuiEvent::key_down(GuiKey::ModShift)
            ]
        );

        // The frame scan sees shift held but the edge was already reported.
        let mut input = MockInput::default();
        input.frame(&[HostKey::LeftShift]);
        input.chars.push_back('x');
        let typing = IoRequests {
            want_capture_keyboard: true,
            ..IoRequests::default()
        };
        let events = t.translate(&mut input, typing);
        assert!(key_events(&events).is_empty());
        assert!(!events.iter().any(|e| matches!(e, GuiEvent::Char(_))));
    }

    #[test]
    fn test_callback_modifier_held_by_other_key() {
        let mut t = InputTranslator::new(InputOptions {
            mode: InputMode::Callbacks,
            ..InputOptions::default()
        });
        let mut mod_ctrl = Vec::new();
        let mut record = |events: Vec<GuiEvent>| {
            mod_ctrl.extend(
                key_events(&events)
                    .into_iter()
                    .filter(|(k, _)| *k == GuiKey::ModCtrl)
                    .map(|(_, d)| d),
            );
            events
        };

        record(t.key_event(HostKey::LeftControl, KeyAction::Press));
        let events = record(t.key_event(HostKey::RightControl, KeyAction::Press));
        assert_eq!(events, vec![GuiEvent::key_down(GuiKey::RightCtrl)]);

        // Right control still holds the modifier down.
        let events = record(t.key_event(HostKey::LeftControl, KeyAction::Release));
        assert_eq!(events, vec![GuiEvent::key_up(GuiKey::LeftCtrl)]);
        assert!(t.state().ctrl);

        let mut input = MockInput::default();
        input.frame(&[HostKey::RightControl]);
        record(t.translate(&mut input, IoRequests::default()));

        let events = record(t.key_event(HostKey::RightControl, KeyAction::Release));
        assert_eq!(
            events,
            vec![
                GuiEvent::key_up(GuiKey::RightCtrl),
                GuiEvent::key_up(GuiKey::ModCtrl)
            ]
        );
        input.frame(&[]);
        record(t.translate(&mut input, IoRequests::default()));

        assert_eq!(mod_ctrl, vec![true, false]);
    }

    #[test]
    fn test_polled_release_clears_callback_modifiers() {
        let mut t = InputTranslator::new(InputOptions {
            mode: InputMode::Callbacks,
            ..InputOptions::default()
        });
        t.key_event(HostKey::LeftAlt, KeyAction::Press);

        // Focus loss: the host drops the key without a release callback.
        let mut input = MockInput::default();
        input.frame(&[]);
        let events = t.translate(&mut input, IoRequests::default());
        assert_eq!(key_events(&events), vec![(GuiKey::ModAlt, false)]);

        t.key_event(HostKey::RightAlt, KeyAction::Press);
        let events = t.key_event(HostKey::RightAlt, KeyAction::Release);
        assert_eq!(
            events,
            vec![
                GuiEvent::key_up(GuiKey::RightAlt),
                GuiEvent::key_up(GuiKey::ModAlt)
            ]
        );
    }

    #[test]
    fn test_full_frame_event_order() {
        let mut t = translator();
        let mut input = MockInput {
            unfocused: true,
            mouse: Vec2::new(1.0, 2.0),
            gamepad: true,
            ..MockInput::default()
        };
        input.frame(&[HostKey::LeftShift]);
        input.chars.push_back('x');
        input.click(MouseButton::Left, true);
        input.wheel = Vec2::new(0.0, 1.0);
        input.pad_pressed.insert(GamepadButton::RightFaceDown);

        let requests = IoRequests {
            want_capture_keyboard: true,
            nav_gamepad: true,
            ..IoRequests::default()
        };
        let events = t.translate(&mut input, requests);

        let idle = |key| GuiEvent::KeyAnalog {
            key,
            down: false,
            value: 0.0,
        };
        assert_eq!(
            events,
            vec![
                GuiEvent::Focus(false),
                GuiEvent::key_down(GuiKey::ModShift),
                GuiEvent::key_down(GuiKey::LeftShift),
                GuiEvent::Char('x'),
                GuiEvent::MousePos(Vec2::new(1.0, 2.0)),
                GuiEvent::MouseButton {
                    button: MouseButton::Left,
                    down: true
                },
                GuiEvent::MouseWheel(Vec2::new(0.0, 1.0)),
                GuiEvent::key_down(GuiKey::GamepadFaceDown),
                idle(GuiKey::GamepadLStickLeft),
                idle(GuiKey::GamepadLStickRight),
                idle(GuiKey::GamepadLStickUp),
                idle(GuiKey::GamepadLStickDown),
                idle(GuiKey::GamepadRStickLeft),
                idle(GuiKey::GamepadRStickRight),
                idle(GuiKey::GamepadRStickUp),
                idle(GuiKey::GamepadRStickDown),
            ]
        );
    }

    #[test]
    fn test_gamepad_button_release() {
        let mut t = translator();
        let mut input = MockInput {
            gamepad: true,
            ..MockInput::default()
        };
        let nav = IoRequests {
            nav_gamepad: true,
            ..IoRequests::default()
        };
        let buttons = |events: &[GuiEvent]| -> Vec<(GuiKey, bool)> {
            key_events(events)
                .into_iter()
                .filter(|(k, _)| k.is_gamepad())
                .collect()
        };

        input.pad_pressed.insert(GamepadButton::MiddleRight);
        let events = t.translate(&mut input, nav);
        assert_eq!(buttons(&events), vec![(GuiKey::GamepadStart, true)]);

        input.pad_pressed.clear();
        let events = t.translate(&mut input, nav);
        assert!(buttons(&events).is_empty());

        input.pad_released.insert(GamepadButton::MiddleRight);
        let events = t.translate(&mut input, nav);
        assert_eq!(buttons(&events), vec![(GuiKey::GamepadStart, false)]);
    }

    #[test]
    fn test_unmapped_callback_key_ignored() {
        let mut t = InputTranslator::with_maps(
            KeyMap::new(),
            ModifierMap::standard(),
            InputOptions::default(),
        );
        assert!(t.key_event(HostKey::A, KeyAction::Press).is_empty());
        assert!(t.key_event(HostKey::LeftControl, KeyAction::Press).is_empty());
    }

    #[test]
    fn test_gamepad_navigation() {
        let mut t = translator();
        let mut input = MockInput {
            gamepad: true,
            ..MockInput::default()
        };
        input.pad_pressed.insert(GamepadButton::RightFaceDown);
        input.axes.insert(GamepadAxis::LeftX, -0.5);
        input.axes.insert(GamepadAxis::RightY, 0.1);

        // Not enabled in the GUI: nothing.
        let events = t.translate(&mut input, IoRequests::default());
        assert!(!events.iter().any(|e| matches!(e, GuiEvent::KeyAnalog { .. })));

        let nav = IoRequests {
            nav_gamepad: true,
            ..IoRequests::default()
        };
        let events = t.translate(&mut input, nav);
        assert!(events.contains(&GuiEvent::key_down(GuiKey::GamepadFaceDown)));
        assert!(events.contains(&GuiEvent::KeyAnalog {
            key: GuiKey::GamepadLStickLeft,
            down: true,
            value: 0.5
        }));
        assert!(events.contains(&GuiEvent::KeyAnalog {
            key: GuiKey::GamepadLStickRight,
            down: false,
            value: 0.0
        }));
        // Inside the dead zone.
        assert!(events.contains(&GuiEvent::KeyAnalog {
            key: GuiKey::GamepadRStickDown,
            down: false,
            value: 0.0
        }));
        let analog = events
            .iter()
            .filter(|e| matches!(e, GuiEvent::KeyAnalog { .. }))
            .count();
        assert_eq!(analog, 8);
    }

    #[test]
    fn test_process_frame_feeds_io() {
        let mut t = translator();
        let mut input = MockInput::default();
        input.frame(&[HostKey::Escape]);
        let mut queue = EventQueue::new();
        queue.requests.want_set_mouse_pos = true;

        let count = t.process_frame(&mut input, &mut queue);
        assert_eq!(count, 1);
        assert_eq!(queue.drain(), vec![GuiEvent::key_down(GuiKey::Escape)]);
        assert!(queue.events.is_empty());
    }

    proptest! {
        #[test]
        fn prop_key_events_match_transitions(held in proptest::collection::vec(any::<bool>(), 1..64)) {
            let mut t = translator();
            let mut input = MockInput::default();
            let mut level = false;
            let mut expected = Vec::new();
            let mut seen = Vec::new();

            for &down in &held {
                if down != level {
                    expected.push(down);
                    level = down;
                }
                let keys: &[HostKey] = if down { &[HostKey::Space] } else { &[] };
                input.frame(keys);
                let events = t.translate(&mut input, IoRequests::default());
                seen.extend(
                    key_events(&events)
                        .into_iter()
                        .filter(|(k, _)| *k == GuiKey::Space)
                        .map(|(_, d)| d),
                );
            }

            prop_assert_eq!(&seen, &expected);
            prop_assert!(seen.windows(2).all(|w| w[0] != w[1]));
        }

        #[test]
        fn prop_modifier_events_match_transitions(held in proptest::collection::vec(0u8..4, 1..64)) {
            let mut t = translator();
            let mut input = MockInput::default();
            let mut level = false;
            let mut expected = Vec::new();
            let mut seen = Vec::new();

            for &which in &held {
                let keys: &[HostKey] = match which {
                    0 => &[],
                    1 => &[HostKey::LeftAlt],
                    2 => &[HostKey::RightAlt],
                    _ => &[HostKey::LeftAlt, HostKey::RightAlt],
                };
                let down = !keys.is_empty();
                if down != level {
                    expected.push(down);
                    level = down;
                }
                input.frame(keys);
                let events = t.translate(&mut input, IoRequests::default());
                seen.extend(
                    key_events(&events)
                        .into_iter()
                        .filter(|(k, _)| *k == GuiKey::ModAlt)
                        .map(|(_, d)| d),
                );
            }

            prop_assert_eq!(seen, expected);
        }
    }
}
