use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::{AnchorLink, CodeBlock, CodeSnippet, Navbar};
use crate::config::CONFIG;

const QUICK_START_TOML: &str = r#"[[task]]
name = "dev"
command = "npm run dev"
default = true

[[task]]
name = "test"
command = "pytest -q"
aliases = ["t"]

[versions]
node = "v20.11.0"
python = "3.12.2""#;

const QUICK_START_RUN: &str = "shuru        # runs the default task
shuru test   # or by name
shuru t      # or by alias";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="shuru - tasks with pinned toolchains" />
        <Meta name="description" content=CONFIG.tagline />
        <Navbar />
        <main class="landing">
            <header class="hero">
                <h1>{CONFIG.name}</h1>
                <p class="tagline">{CONFIG.tagline}</p>
                <div class="hero-actions">
                    <AnchorLink href="#install" class="button">"Install"</AnchorLink>
                    <a href="/docs" class="button button-secondary">"Read the docs \u{2192}"</a>
                </div>
            </header>

            <section id="features" class="features">
                <h2>"Features"</h2>
                <div class="feature-grid">
                    <div class="feature">
                        <h3>"One file"</h3>
                        <p>"Tasks live in " <code>"shuru.toml"</code> " next to your code."</p>
                    </div>
                    <div class="feature">
                        <h3>"Pinned runtimes"</h3>
                        <p>"Node and Python versions are downloaded on demand and put first on " <code>"PATH"</code> "."</p>
                    </div>
                    <div class="feature">
                        <h3>"Short names"</h3>
                        <p>"A default task and per-task aliases keep everyday commands to a few keystrokes."</p>
                    </div>
                    <div class="feature">
                        <h3>"Completions"</h3>
                        <p>"Generated completions for bash, zsh and fish."</p>
                    </div>
                </div>
            </section>

            <section id="install" class="install">
                <h2>"Install"</h2>
                <CodeSnippet code=CONFIG.install_command />
                <p>
                    "Prebuilt binaries are on the "
                    <a href=CONFIG.links.releases target="_blank" rel="noopener noreferrer">
                        "releases page \u{2197}"
                    </a>
                    "."
                </p>
            </section>

            <section id="quick-start" class="quick-start">
                <h2>"Quick start"</h2>
                <p>"Describe your tasks in " <code>"shuru.toml"</code> ":"</p>
                <CodeBlock code=QUICK_START_TOML language="toml" />
                <p>"Then run them:"</p>
                <CodeBlock code=QUICK_START_RUN language="sh" />
            </section>

            <footer class="footer">
                <a href=CONFIG.links.repository target="_blank" rel="noopener noreferrer">"GitHub \u{2197}"</a>
                " \u{00B7} "
                <a href=CONFIG.links.issues target="_blank" rel="noopener noreferrer">"Issues \u{2197}"</a>
            </footer>
        </main>
    }
}
