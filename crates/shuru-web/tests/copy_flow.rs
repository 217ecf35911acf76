//! Copy button behavior with scripted clipboards and timers.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use futures::channel::oneshot;
use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

use shuru_web::behavior::{
    Clipboard, ClipboardError, CopyMachine, CopyState, CopyVariant, Diagnostics, MachineStore, Platform, Timer,
    copy_with_feedback,
};

// ── Immediate fakes ───────────────────────────────────────────────────────────

struct FakeClipboard {
    written: RefCell<Vec<String>>,
    fail_with: Option<ClipboardError>,
}

impl FakeClipboard {
    fn ok() -> Self {
        Self {
            written: RefCell::new(Vec::new()),
            fail_with: None,
        }
    }

    fn failing(err: ClipboardError) -> Self {
        Self {
            written: RefCell::new(Vec::new()),
            fail_with: Some(err),
        }
    }
}

impl Clipboard for FakeClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.written.borrow_mut().push(text.to_string());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// Returns at once, remembering how long it was asked to wait and what the
/// button showed while waiting.
struct SnapshotTimer {
    machine: Rc<RefCell<CopyMachine>>,
    waits: RefCell<Vec<(Duration, CopyState)>>,
}

impl Timer for SnapshotTimer {
    async fn sleep(&self, duration: Duration) {
        let state = self.machine.borrow().state();
        self.waits.borrow_mut().push((duration, state));
    }
}

#[derive(Default)]
struct RecordingDiagnostics {
    failures: RefCell<Vec<ClipboardError>>,
}

impl Diagnostics for RecordingDiagnostics {
    fn copy_failed(&self, error: &ClipboardError) {
        self.failures.borrow_mut().push(error.clone());
    }
}

fn platform_with(
    clipboard: FakeClipboard,
    machine: &Rc<RefCell<CopyMachine>>,
) -> Platform<FakeClipboard, SnapshotTimer, RecordingDiagnostics> {
    Platform {
        clipboard,
        timer: SnapshotTimer {
            machine: Rc::clone(machine),
            waits: RefCell::new(Vec::new()),
        },
        diagnostics: RecordingDiagnostics::default(),
    }
}

#[test]
fn successful_copy_shows_copied_then_reverts() {
    let machine = Rc::new(RefCell::new(CopyMachine::default()));
    let platform = platform_with(FakeClipboard::ok(), &machine);

    assert_eq!(machine.borrow().state().label(), "Copy");
    let shown = block_on(copy_with_feedback("shuru test", CopyVariant::Label, &platform, &*machine));

    assert_eq!(shown, Some(CopyState::Copied));
    assert_eq!(
        *platform.timer.waits.borrow(),
        vec![(Duration::from_millis(1000), CopyState::Copied)]
    );
    assert_eq!(machine.borrow().state().label(), "Copy");
    assert_eq!(*platform.clipboard.written.borrow(), vec!["shuru test".to_string()]);
    assert!(platform.diagnostics.failures.borrow().is_empty());
}

#[test]
fn failed_copy_shows_error_and_logs_once() {
    let machine = Rc::new(RefCell::new(CopyMachine::default()));
    let denied = ClipboardError::Rejected("Write permission denied.".to_string());
    let platform = platform_with(FakeClipboard::failing(denied.clone()), &machine);

    let shown = block_on(copy_with_feedback("shuru build", CopyVariant::Label, &platform, &*machine));

    assert_eq!(shown, Some(CopyState::Error));
    let waits = platform.timer.waits.borrow();
    assert_eq!(waits.len(), 1);
    assert_eq!(waits[0].1.label(), "Error");
    assert_eq!(*platform.diagnostics.failures.borrow(), vec![denied]);
    assert_eq!(machine.borrow().state().label(), "Copy");
}

#[test]
fn class_variant_holds_feedback_for_two_seconds() {
    let machine = Rc::new(RefCell::new(CopyMachine::default()));
    let platform = platform_with(FakeClipboard::ok(), &machine);

    block_on(copy_with_feedback("cargo install shuru", CopyVariant::Class, &platform, &*machine));

    let waits = platform.timer.waits.borrow();
    assert_eq!(waits[0].0, Duration::from_millis(2000));
    assert_eq!(waits[0].1.feedback_class(), Some("copied"));
    assert_eq!(machine.borrow().state().feedback_class(), None);
}

#[test]
fn class_variant_failure_shows_error_class_for_two_seconds() {
    let machine = Rc::new(RefCell::new(CopyMachine::default()));
    let platform = platform_with(FakeClipboard::failing(ClipboardError::Unavailable), &machine);

    let shown = block_on(copy_with_feedback("cargo install shuru", CopyVariant::Class, &platform, &*machine));

    assert_eq!(shown, Some(CopyState::Error));
    assert_eq!(
        *platform.timer.waits.borrow(),
        vec![(Duration::from_millis(2000), CopyState::Error)]
    );
    assert_eq!(CopyState::Error.feedback_class(), Some("error"));
    assert_eq!(*platform.diagnostics.failures.borrow(), vec![ClipboardError::Unavailable]);
    assert_eq!(machine.borrow().state().feedback_class(), None);
}

#[test]
fn copies_exactly_the_given_text() {
    let code = "[[task]]\nname = \"dev\"\ncommand = \"npm run dev\"\n";
    let machine = Rc::new(RefCell::new(CopyMachine::default()));
    let platform = platform_with(FakeClipboard::ok(), &machine);

    block_on(copy_with_feedback(code, CopyVariant::Label, &platform, &*machine));

    assert_eq!(platform.clipboard.written.borrow()[0], code);
}

struct DisposedStore;

impl MachineStore for DisposedStore {
    fn with_machine<R>(&self, _f: impl FnOnce(&mut CopyMachine) -> R) -> Option<R> {
        None
    }
}

#[test]
fn disposed_widget_skips_the_copy() {
    let machine = Rc::new(RefCell::new(CopyMachine::default()));
    let platform = platform_with(FakeClipboard::ok(), &machine);

    let shown = block_on(copy_with_feedback("ignored", CopyVariant::Label, &platform, &DisposedStore));

    assert_eq!(shown, None);
    assert!(platform.clipboard.written.borrow().is_empty());
    assert!(platform.timer.waits.borrow().is_empty());
}

#[test]
fn native_build_has_no_clipboard() {
    let machine = RefCell::new(CopyMachine::default());
    let platform = shuru_web::platform::browser();

    let shown = block_on(copy_with_feedback("shuru", CopyVariant::Label, &platform, &machine));

    assert_eq!(shown, Some(CopyState::Error));
    assert_eq!(machine.borrow().state(), CopyState::Idle);
}

// ── Gated fakes for interleaved clicks ────────────────────────────────────────

/// Each write waits for the next scripted outcome.
#[derive(Default)]
struct GatedClipboard {
    outcomes: RefCell<VecDeque<oneshot::Receiver<Result<(), ClipboardError>>>>,
}

impl Clipboard for GatedClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        let gate = self.outcomes.borrow_mut().pop_front();
        match gate {
            Some(rx) => rx.await.unwrap_or(Err(ClipboardError::Unavailable)),
            None => Err(ClipboardError::Unavailable),
        }
    }
}

/// Each sleep waits for the next scripted tick.
#[derive(Default)]
struct GatedTimer {
    ticks: RefCell<VecDeque<oneshot::Receiver<()>>>,
}

impl Timer for GatedTimer {
    async fn sleep(&self, _duration: Duration) {
        let gate = self.ticks.borrow_mut().pop_front();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }
}

#[test]
fn overlapping_clicks_last_completion_wins() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();

    let (write_a, write_a_rx) = oneshot::channel();
    let (write_b, write_b_rx) = oneshot::channel();
    let (tick_first, tick_first_rx) = oneshot::channel();
    let (tick_second, tick_second_rx) = oneshot::channel();

    let platform = Rc::new(Platform {
        clipboard: GatedClipboard {
            outcomes: RefCell::new(VecDeque::from([write_a_rx, write_b_rx])),
        },
        timer: GatedTimer {
            ticks: RefCell::new(VecDeque::from([tick_first_rx, tick_second_rx])),
        },
        diagnostics: RecordingDiagnostics::default(),
    });
    let machine = Rc::new(RefCell::new(CopyMachine::default()));

    let click = |text: &'static str| {
        let platform = Rc::clone(&platform);
        let machine = Rc::clone(&machine);
        async move {
            copy_with_feedback(text, CopyVariant::Label, &*platform, &*machine).await;
        }
    };

    spawner.spawn_local(click("first")).unwrap();
    pool.run_until_stalled();
    spawner.spawn_local(click("second")).unwrap();
    pool.run_until_stalled();
    assert_eq!(machine.borrow().state(), CopyState::Copying);

    // Second click settles first, with an error.
    write_b.send(Err(ClipboardError::Rejected("denied".into()))).unwrap();
    pool.run_until_stalled();
    assert_eq!(machine.borrow().state().label(), "Error");
    assert_eq!(platform.diagnostics.failures.borrow().len(), 1);

    // First click settles afterwards and overwrites the label.
    write_a.send(Ok(())).unwrap();
    pool.run_until_stalled();
    assert_eq!(machine.borrow().state().label(), "Copied!");

    // The error's revert timer is stale and must not clear "Copied!".
    tick_first.send(()).unwrap();
    pool.run_until_stalled();
    assert_eq!(machine.borrow().state().label(), "Copied!");

    tick_second.send(()).unwrap();
    pool.run_until_stalled();
    assert_eq!(machine.borrow().state(), CopyState::Idle);
    assert_eq!(platform.diagnostics.failures.borrow().len(), 1);
}
