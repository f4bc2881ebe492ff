//! Pending keyboard report state.
//!
//! The converter keeps one report's worth of state: the modifier byte and the
//! six key slots of a boot-protocol report.  Handlers mutate this state and
//! then flush it through a [`ReportSink`], which is the host firmware's USB
//! endpoint.  Keeping the state in an explicit struct, rather than behind the
//! sink, is what lets the tap/hold handler compose a modifier with a key and
//! send them as one report.

use arrayvec::ArrayVec;

use crate::{Keyboard, Mods};

/// Key slots in a boot-protocol report.
pub const REPORT_KEYS: usize = 6;

/// The pending report: which modifiers and keys are currently considered
/// down.  All mutations are idempotent, so redundant releases are harmless.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ReportState {
    mods: Mods,
    keys: ArrayVec<Keyboard, REPORT_KEYS>,
}

impl ReportState {
    pub fn new() -> Self {
        Default::default()
    }

    /// Press the given modifiers, leaving others alone.
    pub fn add_mods(&mut self, mods: Mods) {
        self.mods |= mods;
    }

    /// Release the given modifiers.  Releasing an inactive modifier does
    /// nothing.
    pub fn del_mods(&mut self, mods: Mods) {
        self.mods &= !mods;
    }

    /// Press a key.  A key that is already down stays down, and keys past the
    /// six slots are dropped, as a boot report cannot carry them.
    pub fn add_key(&mut self, key: Keyboard) {
        if self.keys.contains(&key) {
            return;
        }
        let _ = self.keys.try_push(key);
    }

    /// Release a key.  Releasing a key that is not down does nothing.
    pub fn del_key(&mut self, key: Keyboard) {
        if let Some(pos) = self.keys.iter().position(|k| *k == key) {
            self.keys.remove(pos);
        }
    }

    pub fn mods(&self) -> Mods {
        self.mods
    }

    pub fn keys(&self) -> &[Keyboard] {
        &self.keys
    }

    /// The modifier byte as it would appear on the wire.
    pub fn modifier_byte(&self) -> u8 {
        self.mods.bits()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty() && self.keys.is_empty()
    }
}

/// Something that can carry a report to the host OS.  The firmware side wraps
/// its USB HID class here; tests record what would have been sent.
pub trait ReportSink {
    fn send(&mut self, report: &ReportState);
}

#[cfg(test)]
mod testing {
    use super::{ReportState, REPORT_KEYS};
    use crate::{Keyboard, Mods};

    #[test]
    fn mods_are_idempotent() {
        let mut report = ReportState::new();
        report.add_mods(Mods::LEFT_SHIFT);
        report.add_mods(Mods::LEFT_SHIFT);
        assert_eq!(report.mods(), Mods::LEFT_SHIFT);
        report.del_mods(Mods::LEFT_SHIFT);
        assert!(report.is_empty());
        report.del_mods(Mods::LEFT_SHIFT);
        assert!(report.is_empty());
    }

    #[test]
    fn keys_are_idempotent() {
        let mut report = ReportState::new();
        report.add_key(Keyboard::A);
        report.add_key(Keyboard::A);
        assert_eq!(report.keys(), &[Keyboard::A]);
        report.del_key(Keyboard::A);
        assert!(report.is_empty());
        report.del_key(Keyboard::A);
        assert!(report.is_empty());
    }

    #[test]
    fn rollover_caps_at_report_size() {
        let mut report = ReportState::new();
        let keys = [
            Keyboard::A,
            Keyboard::B,
            Keyboard::C,
            Keyboard::D,
            Keyboard::E,
            Keyboard::F,
            Keyboard::G,
        ];
        for key in keys {
            report.add_key(key);
        }
        assert_eq!(report.keys().len(), REPORT_KEYS);
        assert_eq!(report.keys(), &keys[..REPORT_KEYS]);
        // The dropped key was never down, so releasing it is a no-op.
        report.del_key(Keyboard::G);
        assert_eq!(report.keys().len(), REPORT_KEYS);
    }

    #[test]
    fn modifier_byte_layout() {
        let mut report = ReportState::new();
        report.add_mods(Mods::LEFT_SHIFT | Mods::RIGHT_SHIFT);
        assert_eq!(report.modifier_byte(), 0x22);
    }
}
