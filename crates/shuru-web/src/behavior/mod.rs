//! Page behavior as plain state, independent of the DOM.

pub mod anchor;
pub mod copy;
pub mod menu;
pub mod scroll;

pub use anchor::anchor_target;
pub use copy::{
    Clipboard, ClipboardError, CopyMachine, CopyState, CopyVariant, Diagnostics, MachineStore, Platform, Timer,
    copy_with_feedback,
};
pub use menu::{ClickTarget, LinkClosePolicy, MenuState};
pub use scroll::NavbarBackground;
