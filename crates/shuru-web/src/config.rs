//! Site-wide constants: copy, links, navigation and behavior tuning.

use std::time::Duration;

use crate::behavior::LinkClosePolicy;

pub struct SiteConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub base_url: &'static str,
    pub install_command: &'static str,
    pub links: Links,
    /// Top nav entries on the landing page (label, in-page href).
    pub nav: &'static [NavEntry],
    /// Sidebar entries on the docs page.
    pub docs_nav: &'static [NavEntry],
    pub behavior: BehaviorConfig,
}

pub struct Links {
    pub repository: &'static str,
    pub releases: &'static str,
    pub issues: &'static str,
}

pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
}

/// Thresholds and delays used by the interactive widgets.
pub struct BehaviorConfig {
    /// Widest viewport, in CSS pixels, treated as mobile.
    pub mobile_breakpoint: f64,
    /// Scroll offset past which the navbar switches background.
    pub navbar_scroll_threshold: f64,
    /// How long "Copied!" / "Error" stays on a code block button.
    pub label_revert: Duration,
    /// How long the `copied` / `error` class stays on a snippet button.
    pub class_revert: Duration,
}

impl BehaviorConfig {
    pub const fn sidebar_policy(&self) -> LinkClosePolicy {
        LinkClosePolicy::NarrowViewport {
            breakpoint: self.mobile_breakpoint,
        }
    }
}

pub const CONFIG: SiteConfig = SiteConfig {
    name: "shuru",
    tagline: "A task runner that pins the toolchain your tasks run on.",
    base_url: "https://shuru.dev",
    install_command: "cargo install shuru",
    links: Links {
        repository: "https://github.com/shuru-project/shuru",
        releases: "https://github.com/shuru-project/shuru/releases",
        issues: "https://github.com/shuru-project/shuru/issues",
    },
    nav: &[
        NavEntry {
            label: "Features",
            href: "#features",
        },
        NavEntry {
            label: "Install",
            href: "#install",
        },
        NavEntry {
            label: "Quick start",
            href: "#quick-start",
        },
        NavEntry {
            label: "Docs",
            href: "/docs",
        },
    ],
    docs_nav: &[
        NavEntry {
            label: "Installation",
            href: "#installation",
        },
        NavEntry {
            label: "Defining tasks",
            href: "#tasks",
        },
        NavEntry {
            label: "Default task",
            href: "#default-task",
        },
        NavEntry {
            label: "Aliases",
            href: "#aliases",
        },
        NavEntry {
            label: "Pinned versions",
            href: "#versions",
        },
        NavEntry {
            label: "Shell completions",
            href: "#completions",
        },
        NavEntry {
            label: "CLI reference",
            href: "#cli",
        },
    ],
    behavior: BehaviorConfig {
        mobile_breakpoint: 768.0,
        navbar_scroll_threshold: 50.0,
        label_revert: Duration::from_millis(1000),
        class_revert: Duration::from_millis(2000),
    },
};
