//! Sun type 5 converter keymap
//!
//! Keymap and key behavior for a Sun type 5 (US Unix layout) keyboard wired
//! through a USB converter.  The keymap itself is static data: three layers
//! mapping the Sun scan positions to HID keycodes, described in
//! [`keymap`].  The interesting behavior is in [`tap_hold`], which makes the
//! two shift keys double as parenthesis keys when tapped.
//!
//! The converter's scanning, layer stack, and USB transmission live in the
//! host firmware.  This crate only decides what a key event means, and hands
//! the resulting report state to a [`report::ReportSink`].

#![cfg_attr(not(any(feature = "std", test)), no_std)]

use bitflags::bitflags;

pub use usbd_human_interface_device::page::Keyboard;

pub mod keymap;
pub mod report;
pub mod tap_hold;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "defmt", not(test)))] {
        mod log {
            pub use defmt::info;
        }
    } else {
        mod log {
            pub use log::info;
        }
    }
}

/// Key events indicate keys going up or down.  The payload is the Sun scan
/// code of the key, which is also its position in the keymap matrix.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum KeyEvent {
    Press(u8),
    Release(u8),
}

#[cfg(feature = "defmt")]
impl defmt::Format for KeyEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            KeyEvent::Press(k) => defmt::write!(fmt, "KeyEvent::Press({})", k),
            KeyEvent::Release(k) => defmt::write!(fmt, "KeyEvent::Release({})", k),
        }
    }
}

impl KeyEvent {
    pub fn key(&self) -> u8 {
        match self {
            KeyEvent::Press(k) => *k,
            KeyEvent::Release(k) => *k,
        }
    }

    pub fn is_press(&self) -> bool {
        match self {
            KeyEvent::Press(_) => true,
            KeyEvent::Release(_) => false,
        }
    }

    pub fn is_release(&self) -> bool {
        !self.is_press()
    }
}

bitflags! {
    /// Modifier state, laid out like the modifier byte of a HID boot report,
    /// so left and right hand modifiers stay distinct.
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
    pub struct Mods: u8 {
        const LEFT_CONTROL = 0b0000_0001;
        const LEFT_SHIFT = 0b0000_0010;
        const LEFT_ALT = 0b0000_0100;
        const LEFT_GUI = 0b0000_1000;
        const RIGHT_CONTROL = 0b0001_0000;
        const RIGHT_SHIFT = 0b0010_0000;
        const RIGHT_ALT = 0b0100_0000;
        const RIGHT_GUI = 0b1000_0000;
    }
}
