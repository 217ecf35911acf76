//! Copy-to-clipboard feedback shared by both copy buttons.
//!
//! A click starts a copy, the clipboard write settles into `Copied` or
//! `Error`, and a timer brings the button back to `Idle`. The clipboard,
//! the timer and the error sink are injected through [`Platform`], so the
//! whole sequence runs the same way in the browser and in native tests.

use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use crate::config::CONFIG;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard API (insecure context, old browser, server render).
    #[error("clipboard is not available")]
    Unavailable,
    /// The write promise rejected, usually a denied permission.
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Asynchronous text clipboard.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

/// Source of delays for reverting feedback.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Where copy failures are reported.
pub trait Diagnostics {
    fn copy_failed(&self, error: &ClipboardError);
}

/// The capabilities one copy needs.
#[derive(Debug, Clone, Default)]
pub struct Platform<C, T, D> {
    pub clipboard: C,
    pub timer: T,
    pub diagnostics: D,
}

/// The two ways a button shows the result of a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyVariant {
    /// Button text switches to "Copied!" / "Error".
    Label,
    /// Button gains a `copied` / `error` class, text unchanged.
    Class,
}

impl CopyVariant {
    pub fn revert_after(self) -> Duration {
        match self {
            CopyVariant::Label => CONFIG.behavior.label_revert,
            CopyVariant::Class => CONFIG.behavior.class_revert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,
    Copying,
    Copied,
    Error,
}

impl CopyState {
    /// Text shown by a [`CopyVariant::Label`] button.
    pub fn label(&self) -> &'static str {
        match self {
            CopyState::Idle | CopyState::Copying => "Copy",
            CopyState::Copied => "Copied!",
            CopyState::Error => "Error",
        }
    }

    /// Extra class carried by a [`CopyVariant::Class`] button.
    pub fn feedback_class(&self) -> Option<&'static str> {
        match self {
            CopyState::Copied => Some("copied"),
            CopyState::Error => Some("error"),
            CopyState::Idle | CopyState::Copying => None,
        }
    }
}

/// Identifies the transition a pending revert belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Per-button copy state.
///
/// Every transition bumps a generation counter. A revert only applies if no
/// transition happened since it was scheduled, so a stale timer can never
/// clear a newer label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyMachine {
    state: CopyState,
    generation: u64,
}

impl CopyMachine {
    pub fn state(&self) -> CopyState {
        self.state
    }

    /// Click: enter `Copying` from any state.
    pub fn start(&mut self) -> Ticket {
        self.transition(CopyState::Copying)
    }

    /// Clipboard write settled. Last completion wins.
    pub fn finish(&mut self, copied: bool) -> Ticket {
        self.transition(if copied { CopyState::Copied } else { CopyState::Error })
    }

    /// Timer fired. Returns true if the button went back to `Idle`.
    pub fn revert(&mut self, ticket: Ticket) -> bool {
        let showing_feedback = matches!(self.state, CopyState::Copied | CopyState::Error);
        if ticket.0 == self.generation && showing_feedback {
            self.state = CopyState::Idle;
            true
        } else {
            false
        }
    }

    fn transition(&mut self, state: CopyState) -> Ticket {
        self.state = state;
        self.generation += 1;
        Ticket(self.generation)
    }
}

/// Holder of a [`CopyMachine`] that may go away while a copy is in flight.
pub trait MachineStore {
    /// Run `f` against the machine, or return `None` if it no longer exists.
    fn with_machine<R>(&self, f: impl FnOnce(&mut CopyMachine) -> R) -> Option<R>;
}

impl MachineStore for RefCell<CopyMachine> {
    fn with_machine<R>(&self, f: impl FnOnce(&mut CopyMachine) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Copy `text`, show feedback, then revert after the variant's delay.
///
/// Returns the feedback state that was shown, or `None` if the store was
/// dropped before the write settled.
pub async fn copy_with_feedback<C, T, D, S>(
    text: &str,
    variant: CopyVariant,
    platform: &Platform<C, T, D>,
    store: &S,
) -> Option<CopyState>
where
    C: Clipboard,
    T: Timer,
    D: Diagnostics,
    S: MachineStore,
{
    store.with_machine(|m| m.start())?;

    let result = platform.clipboard.write_text(text).await;
    if let Err(e) = &result {
        platform.diagnostics.copy_failed(e);
    }

    let ticket = store.with_machine(|m| m.finish(result.is_ok()))?;
    let shown = if result.is_ok() { CopyState::Copied } else { CopyState::Error };

    platform.timer.sleep(variant.revert_after()).await;
    store.with_machine(|m| m.revert(ticket));

    Some(shown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_cycle() {
        let mut m = CopyMachine::default();
        assert_eq!(m.state().label(), "Copy");

        m.start();
        assert_eq!(m.state(), CopyState::Copying);
        assert_eq!(m.state().label(), "Copy");

        let ticket = m.finish(true);
        assert_eq!(m.state().label(), "Copied!");

        assert!(m.revert(ticket));
        assert_eq!(m.state(), CopyState::Idle);
        assert_eq!(m.state().label(), "Copy");
    }

    #[test]
    fn failure_cycle() {
        let mut m = CopyMachine::default();
        m.start();
        let ticket = m.finish(false);
        assert_eq!(m.state().label(), "Error");
        assert_eq!(m.state().feedback_class(), Some("error"));
        assert!(m.revert(ticket));
        assert_eq!(m.state().label(), "Copy");
    }

    #[test]
    fn click_during_feedback_supersedes_pending_revert() {
        let mut m = CopyMachine::default();
        m.start();
        let first = m.finish(true);

        m.start();
        assert!(!m.revert(first), "old timer must not touch the new copy");
        assert_eq!(m.state(), CopyState::Copying);

        let second = m.finish(false);
        assert!(!m.revert(first));
        assert_eq!(m.state(), CopyState::Error);
        assert!(m.revert(second));
        assert_eq!(m.state(), CopyState::Idle);
    }

    #[test]
    fn revert_is_applied_once() {
        let mut m = CopyMachine::default();
        m.start();
        let ticket = m.finish(true);
        assert!(m.revert(ticket));
        assert!(!m.revert(ticket));
    }

    #[test]
    fn class_variant_feedback() {
        assert_eq!(CopyState::Idle.feedback_class(), None);
        assert_eq!(CopyState::Copying.feedback_class(), None);
        assert_eq!(CopyState::Copied.feedback_class(), Some("copied"));
    }

    #[test]
    fn variants_use_their_own_delays() {
        assert_eq!(CopyVariant::Label.revert_after(), Duration::from_millis(1000));
        assert_eq!(CopyVariant::Class.revert_after(), Duration::from_millis(2000));
    }
}
