//! Sun type 5 keymap, US Unix layout.
//!
//! The keyboard scans as a 16x8 matrix, with the scan code of a key being its
//! matrix position: row in the high nibble-and-a-bit, column in the low three
//! bits.  Writing layers directly in matrix order is hopeless, so the
//! [`sun_unix_us_keymap!`] macro takes the 119 populated positions in the
//! order they sit on the physical keyboard, top-left to bottom-right, and
//! reorders them into the matrix.  Positions with no key (0x00, 0x4b, 0x6f,
//! 0x73..0x75, 0x7c, 0x7e, 0x7f) are filled with [`Key::None`].
//!
//! Three layers: the base US Unix layout, a "txt" layer that turns the left
//! shift into a one-shot shift, and a "code" layer where the shift keys tap
//! to parentheses.  Layer switching itself is the host firmware's business; the
//! layers here just name which function slots do what.

use crate::tap_hold::TapFunction;
use crate::{Keyboard, Mods};

pub const MATRIX_ROWS: usize = 16;
pub const MATRIX_COLS: usize = 8;
pub const NUM_LAYERS: usize = 3;

/// One layer of the keymap.
pub type Layer = [[Key; MATRIX_COLS]; MATRIX_ROWS];

/// A single keymap entry.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Key {
    /// An ordinary HID keycode.
    Plain(Keyboard),
    /// Index into [`FN_ACTIONS`].
    Fn(u8),
    /// Transparent: use the entry from the default layer.
    Trans,
    /// Nothing here, either a dead matrix position or deliberately unbound.
    None,
}

/// Map one keymap token to a [`Key`].  `NO` and `TRNS` name the dead and
/// transparent entries, `FN0`..`FN10` the action slots, and anything else is
/// taken as a [`Keyboard`] variant name.
#[macro_export]
macro_rules! sun_key {
    (NO) => { $crate::keymap::Key::None };
    (TRNS) => { $crate::keymap::Key::Trans };
    (FN0) => { $crate::keymap::Key::Fn(0) };
    (FN1) => { $crate::keymap::Key::Fn(1) };
    (FN2) => { $crate::keymap::Key::Fn(2) };
    (FN3) => { $crate::keymap::Key::Fn(3) };
    (FN4) => { $crate::keymap::Key::Fn(4) };
    (FN5) => { $crate::keymap::Key::Fn(5) };
    (FN6) => { $crate::keymap::Key::Fn(6) };
    (FN7) => { $crate::keymap::Key::Fn(7) };
    (FN8) => { $crate::keymap::Key::Fn(8) };
    (FN9) => { $crate::keymap::Key::Fn(9) };
    (FN10) => { $crate::keymap::Key::Fn(10) };
    ($k:ident) => { $crate::keymap::Key::Plain($crate::Keyboard::$k) };
}

/// Build one [`Layer`] from keys given in physical keyboard order.
///
/// The argument rows follow the six visual rows of the type 5: function row,
/// number row, and so on, each prefixed by its left-block pair and suffixed
/// by the editing cluster and keypad, exactly as the keys sit on the board.
#[macro_export]
macro_rules! sun_unix_us_keymap {
    (
        $k76:tt, $k0f:tt,
            $k05:tt, $k06:tt, $k08:tt, $k0a:tt, $k0c:tt, $k0e:tt, $k10:tt, $k11:tt,
            $k12:tt, $k07:tt, $k09:tt, $k0b:tt,
            $k16:tt, $k17:tt, $k15:tt, $k2d:tt, $k02:tt, $k04:tt, $k30:tt,
        $k01:tt, $k03:tt,
            $k1d:tt, $k1e:tt, $k1f:tt, $k20:tt, $k21:tt, $k22:tt, $k23:tt, $k24:tt,
            $k25:tt, $k26:tt, $k27:tt, $k28:tt, $k29:tt, $k58:tt, $k2a:tt,
            $k2c:tt, $k34:tt, $k60:tt, $k62:tt, $k2e:tt, $k2f:tt, $k47:tt,
        $k19:tt, $k1a:tt,
            $k35:tt, $k36:tt, $k37:tt, $k38:tt, $k39:tt, $k3a:tt, $k3b:tt, $k3c:tt,
            $k3d:tt, $k3e:tt, $k3f:tt, $k40:tt, $k41:tt, $k2b:tt,
            $k42:tt, $k4a:tt, $k7b:tt, $k44:tt, $k45:tt, $k46:tt, $k7d:tt,
        $k31:tt, $k33:tt,
            $k4c:tt, $k4d:tt, $k4e:tt, $k4f:tt, $k50:tt, $k51:tt, $k52:tt, $k53:tt,
            $k54:tt, $k55:tt, $k56:tt, $k57:tt, $k59:tt,
            $k5b:tt, $k5c:tt, $k5d:tt,
        $k48:tt, $k49:tt,
            $k63:tt, $k64:tt, $k65:tt, $k66:tt, $k67:tt, $k68:tt, $k69:tt, $k6a:tt,
            $k6b:tt, $k6c:tt, $k6d:tt, $k6e:tt, $k14:tt,
            $k70:tt, $k71:tt, $k72:tt, $k5a:tt,
        $k5f:tt, $k61:tt,
            $k77:tt, $k13:tt, $k78:tt, $k79:tt, $k7a:tt, $k43:tt, $k0d:tt,
            $k18:tt, $k1b:tt, $k1c:tt, $k5e:tt, $k32:tt
    ) => {
        [
            [ $crate::sun_key!(NO),   $crate::sun_key!($k01), $crate::sun_key!($k02), $crate::sun_key!($k03),
              $crate::sun_key!($k04), $crate::sun_key!($k05), $crate::sun_key!($k06), $crate::sun_key!($k07) ],
            [ $crate::sun_key!($k08), $crate::sun_key!($k09), $crate::sun_key!($k0a), $crate::sun_key!($k0b),
              $crate::sun_key!($k0c), $crate::sun_key!($k0d), $crate::sun_key!($k0e), $crate::sun_key!($k0f) ],
            [ $crate::sun_key!($k10), $crate::sun_key!($k11), $crate::sun_key!($k12), $crate::sun_key!($k13),
              $crate::sun_key!($k14), $crate::sun_key!($k15), $crate::sun_key!($k16), $crate::sun_key!($k17) ],
            [ $crate::sun_key!($k18), $crate::sun_key!($k19), $crate::sun_key!($k1a), $crate::sun_key!($k1b),
              $crate::sun_key!($k1c), $crate::sun_key!($k1d), $crate::sun_key!($k1e), $crate::sun_key!($k1f) ],
            [ $crate::sun_key!($k20), $crate::sun_key!($k21), $crate::sun_key!($k22), $crate::sun_key!($k23),
              $crate::sun_key!($k24), $crate::sun_key!($k25), $crate::sun_key!($k26), $crate::sun_key!($k27) ],
            [ $crate::sun_key!($k28), $crate::sun_key!($k29), $crate::sun_key!($k2a), $crate::sun_key!($k2b),
              $crate::sun_key!($k2c), $crate::sun_key!($k2d), $crate::sun_key!($k2e), $crate::sun_key!($k2f) ],
            [ $crate::sun_key!($k30), $crate::sun_key!($k31), $crate::sun_key!($k32), $crate::sun_key!($k33),
              $crate::sun_key!($k34), $crate::sun_key!($k35), $crate::sun_key!($k36), $crate::sun_key!($k37) ],
            [ $crate::sun_key!($k38), $crate::sun_key!($k39), $crate::sun_key!($k3a), $crate::sun_key!($k3b),
              $crate::sun_key!($k3c), $crate::sun_key!($k3d), $crate::sun_key!($k3e), $crate::sun_key!($k3f) ],
            [ $crate::sun_key!($k40), $crate::sun_key!($k41), $crate::sun_key!($k42), $crate::sun_key!($k43),
              $crate::sun_key!($k44), $crate::sun_key!($k45), $crate::sun_key!($k46), $crate::sun_key!($k47) ],
            [ $crate::sun_key!($k48), $crate::sun_key!($k49), $crate::sun_key!($k4a), $crate::sun_key!(NO),
              $crate::sun_key!($k4c), $crate::sun_key!($k4d), $crate::sun_key!($k4e), $crate::sun_key!($k4f) ],
            [ $crate::sun_key!($k50), $crate::sun_key!($k51), $crate::sun_key!($k52), $crate::sun_key!($k53),
              $crate::sun_key!($k54), $crate::sun_key!($k55), $crate::sun_key!($k56), $crate::sun_key!($k57) ],
            [ $crate::sun_key!($k58), $crate::sun_key!($k59), $crate::sun_key!($k5a), $crate::sun_key!($k5b),
              $crate::sun_key!($k5c), $crate::sun_key!($k5d), $crate::sun_key!($k5e), $crate::sun_key!($k5f) ],
            [ $crate::sun_key!($k60), $crate::sun_key!($k61), $crate::sun_key!($k62), $crate::sun_key!($k63),
              $crate::sun_key!($k64), $crate::sun_key!($k65), $crate::sun_key!($k66), $crate::sun_key!($k67) ],
            [ $crate::sun_key!($k68), $crate::sun_key!($k69), $crate::sun_key!($k6a), $crate::sun_key!($k6b),
              $crate::sun_key!($k6c), $crate::sun_key!($k6d), $crate::sun_key!($k6e), $crate::sun_key!(NO) ],
            [ $crate::sun_key!($k70), $crate::sun_key!($k71), $crate::sun_key!($k72), $crate::sun_key!(NO),
              $crate::sun_key!(NO),   $crate::sun_key!(NO),   $crate::sun_key!($k76), $crate::sun_key!($k77) ],
            [ $crate::sun_key!($k78), $crate::sun_key!($k79), $crate::sun_key!($k7a), $crate::sun_key!($k7b),
              $crate::sun_key!(NO),   $crate::sun_key!($k7d), $crate::sun_key!(NO),   $crate::sun_key!(NO) ],
        ]
    };
}

// Scan positions referenced from outside the table.
pub const SCAN_LSHIFT: u8 = 0x63;
pub const SCAN_RSHIFT: u8 = 0x6e;
pub const SCAN_CAPS: u8 = 0x77;

/// The three keymap layers.
///
/// - 0: the plain US Unix layout, with the left-block keys bound to the
///   GUI shortcuts and layer toggles from [`FN_ACTIONS`].
/// - 1 "txt": the left shift position becomes a one-shot shift.
/// - 2 "code": both shifts become tap/hold parenthesis keys.
#[rustfmt::skip]
pub static LAYERS: [Layer; NUM_LAYERS] = [
    // 0: default
    sun_unix_us_keymap!(
        Help,         FN10,   F1, F2, F3, F4,   F5, F6, F7, F8,   F9, F10, F11, F12,
                                              PrintScreen, ScrollLock, Pause,   Mute, VolumeDown, VolumeUp, Power,
        Stop,   FN4,    Escape, Keyboard1, Keyboard2, Keyboard3, Keyboard4, Keyboard5, Keyboard6, Keyboard7,
                        Keyboard8, Keyboard9, Keyboard0, Minus, Equal, Backslash, Grave,
                                              Insert, Home, PageUp,   KeypadNumLockAndClear, KeypadDivide, KeypadMultiply, KeypadSubtract,
        Menu,   FN3,    Tab, Q, W, E, R, T, Y, U, I, O, P, LeftBrace, RightBrace, DeleteBackspace,
                                              DeleteForward, End, PageDown,   Keypad7, Keypad8, Keypad9, KeypadAdd,
        Select, FN1,    LeftControl, A, S, D, F, G, H, J, K, L, Semicolon, Apostrophe, ReturnEnter,
                                              Keypad4, Keypad5, Keypad6,
        FN9,    FN2,    LeftShift, Z, X, C, V, B, N, M, Comma, Dot, ForwardSlash, RightShift, UpArrow,
                                              Keypad1, Keypad2, Keypad3, KeypadEnter,
        FN5,    FN0,    CapsLock, LeftGUI, LeftAlt, Space, RightGUI, Application, RightAlt,
                                              LeftArrow, DownArrow, RightArrow,   Keypad0, KeypadDot
    ),
    // 1: txt
    sun_unix_us_keymap!(
        TRNS,         TRNS,   TRNS, TRNS, TRNS, TRNS,   TRNS, TRNS, TRNS, TRNS,   TRNS, TRNS, TRNS, TRNS,
                                              TRNS, TRNS, TRNS,   TRNS, TRNS, TRNS, TRNS,
        TRNS,   TRNS,   TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS,
                        TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS,
                                              TRNS, TRNS, TRNS,   TRNS, TRNS, TRNS, TRNS,
        TRNS,   TRNS,   TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS,
                                              TRNS, TRNS, TRNS,   TRNS, TRNS, TRNS, TRNS,
        TRNS,   TRNS,   TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS,
                                              TRNS, TRNS, TRNS,
        TRNS,   TRNS,   FN6, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS,
                                              TRNS, TRNS, TRNS, TRNS,
        TRNS,   TRNS,   TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS,
                                              TRNS, TRNS, TRNS,   TRNS, TRNS
    ),
    // 2: code
    sun_unix_us_keymap!(
        TRNS,         TRNS,   TRNS, TRNS, TRNS, TRNS,   TRNS, TRNS, TRNS, TRNS,   TRNS, TRNS, TRNS, TRNS,
                                              TRNS, TRNS, TRNS,   TRNS, TRNS, TRNS, TRNS,
        TRNS,   TRNS,   TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS,
                        TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS,
                                              TRNS, TRNS, TRNS,   TRNS, TRNS, TRNS, TRNS,
        TRNS,   TRNS,   TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS,
                                              TRNS, TRNS, TRNS,   TRNS, TRNS, TRNS, TRNS,
        TRNS,   TRNS,   TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS,
                                              TRNS, TRNS, TRNS,
        TRNS,   TRNS,   FN7, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, FN8, TRNS,
                                              TRNS, TRNS, TRNS, TRNS,
        TRNS,   TRNS,   TRNS, TRNS, TRNS, TRNS, TRNS, TRNS, TRNS,
                                              TRNS, TRNS, TRNS,   TRNS, TRNS
    ),
];

/// What a function slot does.  Only the tap functions are resolved in this
/// crate; the rest is data the host firmware acts on.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Action {
    /// Send the key with the modifiers applied, as one unit.
    ModsKey(Mods, Keyboard),
    /// Toggle a layer on the host's layer stack.
    LayerToggle(u8),
    /// Apply the modifiers to the next keypress only.
    OneShot(Mods),
    /// Dual-role tap/hold key, see [`crate::tap_hold`].
    TapFn(TapFunction),
}

/// The function slots the layers refer to as `FN0`..`FN10`.  Slots 0..4 and
/// 10 are the usual GUI clipboard and undo shortcuts for the left-block keys.
pub static FN_ACTIONS: [Action; 11] = [
    Action::ModsKey(Mods::LEFT_GUI, Keyboard::X),
    Action::ModsKey(Mods::LEFT_GUI, Keyboard::C),
    Action::ModsKey(Mods::LEFT_GUI, Keyboard::V),
    Action::ModsKey(Mods::LEFT_GUI, Keyboard::Z),
    Action::ModsKey(Mods::LEFT_GUI.union(Mods::LEFT_SHIFT), Keyboard::Z),
    Action::LayerToggle(1),
    Action::OneShot(Mods::LEFT_SHIFT),
    Action::TapFn(TapFunction::LShiftLParen),
    Action::TapFn(TapFunction::RShiftRParen),
    Action::LayerToggle(2),
    Action::ModsKey(Mods::LEFT_GUI, Keyboard::Grave),
];

/// Look up a function slot.  Slots outside the table are ignored by callers.
pub fn fn_action(id: u8) -> Option<Action> {
    FN_ACTIONS.get(id as usize).copied()
}

/// The entry at a matrix position on one layer, without transparency
/// resolution.  Out-of-range layers and scan codes read as [`Key::None`].
pub fn key_at(layer: usize, code: u8) -> Key {
    if layer >= NUM_LAYERS || (code as usize) >= MATRIX_ROWS * MATRIX_COLS {
        return Key::None;
    }
    LAYERS[layer][(code >> 3) as usize][(code & 0x7) as usize]
}

/// The entry at a matrix position, with transparent entries falling through
/// to the default layer.
pub fn lookup(layer: usize, code: u8) -> Key {
    match key_at(layer, code) {
        Key::Trans => key_at(0, code),
        key => key,
    }
}

#[cfg(test)]
mod testing {
    use super::*;

    #[test]
    fn base_layer_positions() {
        // Spot checks against the type 5 service manual scan codes.
        assert_eq!(key_at(0, 0x76), Key::Plain(Keyboard::Help));
        assert_eq!(key_at(0, 0x05), Key::Plain(Keyboard::F1));
        assert_eq!(key_at(0, 0x1d), Key::Plain(Keyboard::Escape));
        assert_eq!(key_at(0, 0x26), Key::Plain(Keyboard::Keyboard9));
        assert_eq!(key_at(0, 0x27), Key::Plain(Keyboard::Keyboard0));
        assert_eq!(key_at(0, 0x4d), Key::Plain(Keyboard::A));
        assert_eq!(key_at(0, SCAN_LSHIFT), Key::Plain(Keyboard::LeftShift));
        assert_eq!(key_at(0, SCAN_RSHIFT), Key::Plain(Keyboard::RightShift));
        assert_eq!(key_at(0, SCAN_CAPS), Key::Plain(Keyboard::CapsLock));
        assert_eq!(key_at(0, 0x79), Key::Plain(Keyboard::Space));
        assert_eq!(key_at(0, 0x5e), Key::Plain(Keyboard::Keypad0));
        assert_eq!(key_at(0, 0x30), Key::Plain(Keyboard::Power));
    }

    #[test]
    fn function_slots() {
        // Left-block keys on the base layer.
        assert_eq!(key_at(0, 0x61), Key::Fn(0));
        assert_eq!(key_at(0, 0x0f), Key::Fn(10));
        assert_eq!(key_at(0, 0x5f), Key::Fn(5));
        assert_eq!(key_at(0, 0x48), Key::Fn(9));
        // The dual-role shifts on the code layer.
        assert_eq!(key_at(2, SCAN_LSHIFT), Key::Fn(7));
        assert_eq!(key_at(2, SCAN_RSHIFT), Key::Fn(8));
        // And the one-shot shift on the txt layer.
        assert_eq!(key_at(1, SCAN_LSHIFT), Key::Fn(6));
    }

    #[test]
    fn dead_positions() {
        for code in [0x00u8, 0x4b, 0x6f, 0x73, 0x74, 0x75, 0x7c, 0x7e, 0x7f] {
            assert_eq!(key_at(0, code), Key::None, "code {:#x}", code);
        }
        // Out of range reads as dead too.
        assert_eq!(key_at(0, 0x80), Key::None);
        assert_eq!(key_at(3, 0x4d), Key::None);
    }

    #[test]
    fn transparency_falls_to_base() {
        assert_eq!(lookup(2, 0x4d), Key::Plain(Keyboard::A));
        assert_eq!(lookup(1, SCAN_CAPS), Key::Plain(Keyboard::CapsLock));
        // Non-transparent entries are returned as-is.
        assert_eq!(lookup(2, SCAN_RSHIFT), Key::Fn(8));
        // Dead spots stay dead on every layer.
        assert_eq!(lookup(2, 0x4b), Key::None);
    }

    #[test]
    fn action_table() {
        assert_eq!(fn_action(5), Some(Action::LayerToggle(1)));
        assert_eq!(fn_action(6), Some(Action::OneShot(Mods::LEFT_SHIFT)));
        assert_eq!(fn_action(7), Some(Action::TapFn(TapFunction::LShiftLParen)));
        assert_eq!(fn_action(8), Some(Action::TapFn(TapFunction::RShiftRParen)));
        assert_eq!(
            fn_action(4),
            Some(Action::ModsKey(
                Mods::LEFT_GUI.union(Mods::LEFT_SHIFT),
                Keyboard::Z
            ))
        );
        assert_eq!(fn_action(11), None);
    }
}
