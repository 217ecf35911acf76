//! Open/closed state for the collapsible navigation panels.
//!
//! The state is plain data so it can live inside a signal and be exercised
//! without a document. Components translate DOM events into the calls below.

/// When a click on a link inside the panel closes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinkClosePolicy {
    /// Every link click closes the panel.
    Always,
    /// Only close when the viewport is at most `breakpoint` pixels wide.
    NarrowViewport { breakpoint: f64 },
}

impl LinkClosePolicy {
    pub fn closes_at(&self, viewport_width: f64) -> bool {
        match *self {
            LinkClosePolicy::Always => true,
            LinkClosePolicy::NarrowViewport { breakpoint } => viewport_width <= breakpoint,
        }
    }
}

/// Where a document-level click landed relative to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Trigger,
    Panel,
    Outside,
}

impl ClickTarget {
    /// Classify a click from containment checks against both elements.
    /// The trigger wins when it sits inside the panel.
    pub fn classify(in_trigger: bool, in_panel: bool) -> Self {
        if in_trigger {
            ClickTarget::Trigger
        } else if in_panel {
            ClickTarget::Panel
        } else {
            ClickTarget::Outside
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuState {
    open: bool,
    policy: LinkClosePolicy,
}

impl MenuState {
    pub fn new(policy: LinkClosePolicy) -> Self {
        Self { open: false, policy }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn policy(&self) -> LinkClosePolicy {
        self.policy
    }

    /// Trigger activation.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Any click seen at document level. Returns true if the panel closed.
    pub fn document_click(&mut self, target: ClickTarget) -> bool {
        if self.open && target == ClickTarget::Outside {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// A navigation link inside the panel was followed. Returns true if the
    /// panel closed.
    pub fn link_click(&mut self, viewport_width: f64) -> bool {
        if self.open && self.policy.closes_at(viewport_width) {
            self.open = false;
            true
        } else {
            false
        }
    }
}
