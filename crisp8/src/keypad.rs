//! Host keyboard tracking and mapping onto the 4x4 CHIP-8 keypad.
//!
//! The host reports raw key events through [`Keyboard::key_down`] and
//! [`Keyboard::key_up`] and calls [`Keyboard::begin_frame`] once per logical
//! tick, before delivering that tick's events. Each key then runs through a
//! small edge-state machine:
//!
//! ```text
//!  Default --down--> PressedOnce --tick--> Wait --down--> Pressed
//!     ^                   |                  |               |
//!     +--tick-- Released <+-------up---------+------up-------+
//! ```
//!
//! A key that is not confirmed down by the raw snapshot at the start of a tick
//! (for instance because focus was lost while it was held) is forced into
//! `Released` so it can never stick.

/// Host keys used by either keypad layout
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum HostKey {
    Num1,
    Num2,
    Num3,
    Num4,
    Q,
    W,
    E,
    R,
    A,
    S,
    D,
    F,
    Z,
    X,
    C,
    V,
}

impl HostKey {
    pub const ALL: [HostKey; 16] = [
        HostKey::Num1,
        HostKey::Num2,
        HostKey::Num3,
        HostKey::Num4,
        HostKey::Q,
        HostKey::W,
        HostKey::E,
        HostKey::R,
        HostKey::A,
        HostKey::S,
        HostKey::D,
        HostKey::F,
        HostKey::Z,
        HostKey::X,
        HostKey::C,
        HostKey::V,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look a key up by the character printed on it
    pub fn from_char(c: char) -> Option<Self> {
        let key = match c.to_ascii_uppercase() {
            '1' => HostKey::Num1,
            '2' => HostKey::Num2,
            '3' => HostKey::Num3,
            '4' => HostKey::Num4,
            'Q' => HostKey::Q,
            'W' => HostKey::W,
            'E' => HostKey::E,
            'R' => HostKey::R,
            'A' => HostKey::A,
            'S' => HostKey::S,
            'D' => HostKey::D,
            'F' => HostKey::F,
            'Z' => HostKey::Z,
            'X' => HostKey::X,
            'C' => HostKey::C,
            'V' => HostKey::V,
            _ => return None,
        };
        Some(key)
    }
}

/// Host key for each logical key 0x0..=0xF
#[rustfmt::skip]
const DEFAULT_LAYOUT: [HostKey; 16] = {
    use HostKey::*;
    [
        X,    Num1, Num2, Num3,
        Q,    W,    E,    A,
        S,    D,    Z,    C,
        Num4, R,    F,    V,
    ]
};

#[rustfmt::skip]
const ALTERNATE_LAYOUT: [HostKey; 16] = {
    use HostKey::*;
    [
        Num1, Num2, Num3, Num4,
        Q,    W,    E,    R,
        A,    S,    D,    F,
        Z,    X,    C,    V,
    ]
};

fn layout(alternate: bool) -> &'static [HostKey; 16] {
    if alternate {
        &ALTERNATE_LAYOUT
    } else {
        &DEFAULT_LAYOUT
    }
}

/// Host key bound to a logical key
pub fn host_key(logical: u8, alternate: bool) -> HostKey {
    layout(alternate)[(logical & 0xF) as usize]
}

/// Logical key bound to a host key
pub fn logical_key(key: HostKey, alternate: bool) -> u8 {
    layout(alternate)
        .iter()
        .position(|&k| k == key)
        .map(|pos| pos as u8)
        .unwrap_or(0)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EdgeState {
    Default,
    PressedOnce,
    Wait,
    Pressed,
    Released,
}

impl Default for EdgeState {
    fn default() -> Self {
        EdgeState::Default
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
struct KeyState {
    state: EdgeState,
    held: bool,
}

/// Edge-state tracker for the 16 host keys
#[derive(Debug, Default, Clone)]
pub struct Keyboard {
    keys: [KeyState; 16],
    any_pressed: bool,
    any_released: bool,
    any_held: bool,
    pressed_key: Option<HostKey>,
    held_key: Option<HostKey>,
    released_key: Option<HostKey>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance edges at the start of a tick
    ///
    /// `raw` is the host's own view of which keys are physically down, indexed by
    /// [`HostKey::index`].
    pub fn begin_frame(&mut self, raw: &[bool; 16]) {
        self.any_pressed = false;
        self.any_held = false;
        self.any_released = false;
        self.pressed_key = None;
        self.held_key = None;
        self.released_key = None;

        for (&key, ks) in HostKey::ALL.iter().zip(self.keys.iter_mut()) {
            if ks.state != EdgeState::Default && ks.state != EdgeState::Released && !self.any_held {
                self.any_held = true;
                self.held_key = Some(key);
            }

            ks.state = match ks.state {
                EdgeState::PressedOnce => EdgeState::Wait,
                EdgeState::Released => EdgeState::Default,
                other => other,
            };

            if raw[key.index()] {
                continue;
            }

            ks.held = false;
            if let EdgeState::PressedOnce | EdgeState::Wait | EdgeState::Pressed = ks.state {
                ks.state = EdgeState::Released;
            }
        }
    }

    pub fn key_down(&mut self, key: HostKey) {
        self.any_pressed = true;
        self.pressed_key = Some(key);

        let ks = &mut self.keys[key.index()];
        ks.held = true;
        ks.state = match ks.state {
            EdgeState::Default => EdgeState::PressedOnce,
            EdgeState::Wait => EdgeState::Pressed,
            other => other,
        };
    }

    pub fn key_up(&mut self, key: HostKey) {
        self.any_released = true;
        self.released_key = Some(key);

        let ks = &mut self.keys[key.index()];
        ks.held = false;
        if ks.state != EdgeState::Default {
            ks.state = EdgeState::Released;
        }
    }

    pub fn state(&self, key: HostKey) -> EdgeState {
        self.keys[key.index()].state
    }

    pub fn is_pressed_once(&self, key: HostKey) -> bool {
        self.state(key) == EdgeState::PressedOnce
    }

    pub fn is_pressed(&self, key: HostKey) -> bool {
        self.state(key) == EdgeState::Pressed
    }

    pub fn is_released(&self, key: HostKey) -> bool {
        self.state(key) == EdgeState::Released
    }

    /// Raw held flag, independent of edges
    pub fn is_held(&self, key: HostKey) -> bool {
        self.keys[key.index()].held
    }

    pub fn any_pressed(&self) -> bool {
        self.any_pressed
    }

    pub fn any_released(&self) -> bool {
        self.any_released
    }

    pub fn any_held(&self) -> bool {
        self.any_held
    }

    pub fn pressed_key(&self) -> Option<HostKey> {
        self.pressed_key
    }

    /// First key found down at the start of the current tick
    pub fn held_key(&self) -> Option<HostKey> {
        self.held_key
    }

    pub fn released_key(&self) -> Option<HostKey> {
        self.released_key
    }

    /// Raw snapshot to feed back into [`Keyboard::begin_frame`] when the host has
    /// no independent source of physical key state
    pub fn raw_snapshot(&self) -> [bool; 16] {
        let mut raw = [false; 16];
        raw.iter_mut()
            .zip(self.keys.iter())
            .for_each(|(r, ks)| *r = ks.held);
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next_frame(kb: &mut Keyboard) {
        let raw = kb.raw_snapshot();
        kb.begin_frame(&raw);
    }

    #[test]
    fn layouts_are_bijective() {
        for &alternate in &[false, true] {
            for logical in 0..16u8 {
                assert_eq!(logical_key(host_key(logical, alternate), alternate), logical);
            }
        }
        assert_eq!(logical_key(HostKey::X, false), 0x0);
        assert_eq!(logical_key(HostKey::Num4, false), 0xC);
        assert_eq!(logical_key(HostKey::Num1, true), 0x0);
        assert_eq!(logical_key(HostKey::X, true), 0xD);
    }

    #[test]
    fn press_hold_release_cycle() {
        let mut kb = Keyboard::new();
        next_frame(&mut kb);
        kb.key_down(HostKey::W);
        assert!(kb.is_pressed_once(HostKey::W));
        assert!(kb.is_held(HostKey::W));
        assert_eq!(kb.pressed_key(), Some(HostKey::W));

        next_frame(&mut kb);
        assert_eq!(kb.state(HostKey::W), EdgeState::Wait);
        assert_eq!(kb.held_key(), Some(HostKey::W));

        // key repeat while down
        kb.key_down(HostKey::W);
        assert!(kb.is_pressed(HostKey::W));

        next_frame(&mut kb);
        assert!(kb.is_pressed(HostKey::W));
        kb.key_up(HostKey::W);
        assert!(kb.is_released(HostKey::W));
        assert_eq!(kb.released_key(), Some(HostKey::W));

        next_frame(&mut kb);
        assert_eq!(kb.state(HostKey::W), EdgeState::Default);
        assert_eq!(kb.held_key(), None);
        assert!(!kb.any_held());
    }

    #[test]
    fn unconfirmed_key_is_forced_released() {
        let mut kb = Keyboard::new();
        kb.key_down(HostKey::A);
        kb.begin_frame(&[true; 16]);
        assert_eq!(kb.state(HostKey::A), EdgeState::Wait);

        kb.begin_frame(&[false; 16]);
        assert!(kb.is_released(HostKey::A));
        assert!(!kb.is_held(HostKey::A));

        kb.begin_frame(&[false; 16]);
        assert_eq!(kb.state(HostKey::A), EdgeState::Default);
    }

    #[test]
    fn first_held_key_wins() {
        let mut kb = Keyboard::new();
        kb.key_down(HostKey::V);
        kb.key_down(HostKey::Num2);
        next_frame(&mut kb);
        assert_eq!(kb.held_key(), Some(HostKey::Num2));
        assert!(kb.any_held());
    }

    #[test]
    fn host_key_from_char() {
        assert_eq!(HostKey::from_char('q'), Some(HostKey::Q));
        assert_eq!(HostKey::from_char('4'), Some(HostKey::Num4));
        assert_eq!(HostKey::from_char('p'), None);
    }
}
