//! Tap/hold shift keys.
//!
//! On the "code" layer, the two shift keys do double duty: held down they are
//! ordinary shifts, but a quick tap produces the matching parenthesis, which
//! on a US layout is shift-9 for the left hand and shift-0 for the right.
//! The host framework does the timing.  By the time we are called it has
//! already classified the actuation into a [`TapState`], and we only decide
//! what reports to emit for it.
//!
//! The handler holds no state of its own.  Everything it needs is in the
//! event, the tap descriptor, and the shared [`ReportState`] passed in by the
//! dispatch loop.

use crate::log::info;
use crate::report::{ReportSink, ReportState};
use crate::{KeyEvent, Keyboard, Mods};

/// How the physical key was actuated, as classified by the host framework's
/// tap timer: how many quick taps preceded this event, and whether another
/// key was pressed while this one was down.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct TapState {
    pub count: u8,
    pub interrupted: bool,
}

impl TapState {
    /// A key that was never tapped, or whose tap was interrupted by another
    /// key, acts as a hold.  Interruption wins even when taps were counted:
    /// rolling from shift into a letter must shift that letter, not emit a
    /// parenthesis.
    pub fn is_hold(&self) -> bool {
        self.count == 0 || self.interrupted
    }
}

/// The two dual-role keys.  The ids match the function slots the keymap's
/// action table assigns them.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum TapFunction {
    LShiftLParen,
    RShiftRParen,
}

#[cfg(feature = "defmt")]
impl defmt::Format for TapFunction {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            TapFunction::LShiftLParen => defmt::write!(fmt, "lshift-lparen"),
            TapFunction::RShiftRParen => defmt::write!(fmt, "rshift-rparen"),
        }
    }
}

impl TapFunction {
    /// Decode a raw function id from the host's callback interface.  Ids
    /// outside the table are not an error to be reported anywhere, the
    /// caller just ignores the event.
    pub fn from_id(id: u8) -> Option<TapFunction> {
        match id {
            0 => Some(TapFunction::LShiftLParen),
            1 => Some(TapFunction::RShiftRParen),
            _ => None,
        }
    }

    /// The modifier this key produces when held.
    fn modifier(self) -> Mods {
        match self {
            TapFunction::LShiftLParen => Mods::LEFT_SHIFT,
            TapFunction::RShiftRParen => Mods::RIGHT_SHIFT,
        }
    }

    /// The key that, combined with the modifier, produces the tapped
    /// character.  '(' is shift-9, ')' is shift-0.
    fn companion(self) -> Keyboard {
        match self {
            TapFunction::LShiftLParen => Keyboard::Keyboard9,
            TapFunction::RShiftRParen => Keyboard::Keyboard0,
        }
    }
}

/// Resolve one event on a dual-role key into report changes.
///
/// A held press activates the modifier and leaves it active until the
/// matching release.  A tapped press sends the modifier together with the
/// companion key as one report, then a second report with both released, so
/// the host OS sees a single shifted keystroke and no latched shift.  The
/// release after a tap does nothing, the press already cleaned up.
///
/// Every branch that changes the report flushes it; the sink is the only
/// path to the host OS.
pub fn resolve(
    func: TapFunction,
    event: KeyEvent,
    tap: TapState,
    report: &mut ReportState,
    sink: &mut dyn ReportSink,
) {
    let modifier = func.modifier();
    if event.is_press() {
        if tap.is_hold() {
            info!("tap_hold: hold {:?} (count {})", func, tap.count);
            report.add_mods(modifier);
            // Holding could additionally bring up the txt layer here.  Left
            // out until plain shift proves insufficient.
            sink.send(report);
        } else {
            info!("tap_hold: tap {:?}", func);
            // Can't go through the usual per-key registration: the modifier
            // and the digit have to land in the same report, and must both
            // be gone in the next one.
            report.add_mods(modifier);
            report.add_key(func.companion());
            sink.send(report);
            report.del_mods(modifier);
            report.del_key(func.companion());
            sink.send(report);
        }
    } else if tap.is_hold() {
        report.del_mods(modifier);
        sink.send(report);
    }
    // Release after a resolved tap: nothing held, nothing to do.
}

/// Entry point for the host framework's function-key callback.  Unknown ids
/// produce no state change.
pub fn handle_function(
    id: u8,
    event: KeyEvent,
    tap: TapState,
    report: &mut ReportState,
    sink: &mut dyn ReportSink,
) {
    if let Some(func) = TapFunction::from_id(id) {
        resolve(func, event, tap, report, sink);
    }
}
