use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::components::{CodeBlock, CodeSnippet, Section, Sidebar};
use crate::config::CONFIG;

const TASKS_TOML: &str = r#"[[task]]
name = "build"
command = "cargo build --release"

[[task]]
name = "lint"
command = "cargo clippy --all-targets -- -D warnings""#;

const DEFAULT_TASK_TOML: &str = r#"[[task]]
name = "serve"
command = "python -m http.server 8000"
default = true"#;

const ALIASES_TOML: &str = r#"[[task]]
name = "format"
command = "prettier --write ."
aliases = ["fmt", "f"]"#;

const VERSIONS_TOML: &str = r#"[versions]
node = "v18.19.0"
python = "3.11.7""#;

const COMPLETIONS_SH: &str = "# bash
shuru --completions bash >> ~/.bashrc

# zsh
shuru --completions zsh > \"${fpath[1]}/_shuru\"

# fish
shuru --completions fish > ~/.config/fish/completions/shuru.fish";

const CLI_REFERENCE: &str = "shuru [TASK]             run TASK, or the default task
shuru --list-commands    print every task name
shuru --update-versions  install the pinned runtimes
shuru --clear-cache      remove downloaded runtimes
shuru --completions SH   print completions for bash, zsh or fish";

#[component]
pub fn DocsPage() -> impl IntoView {
    let canonical = format!("{}/docs", CONFIG.base_url);

    view! {
        <Title text="shuru documentation" />
        <Meta name="description" content="Configuring tasks, aliases and pinned Node/Python versions with shuru." />
        <Link rel="canonical" href=canonical />
        <div class="docs-layout">
            <Sidebar />
            <main class="content">
                <header class="docs-header">
                    <h1>"Documentation"</h1>
                    <a href="/">"\u{2190} back to home"</a>
                </header>

                <Section id="installation" title="Installation">
                    <p>"Install from crates.io:"</p>
                    <CodeSnippet code=CONFIG.install_command />
                    <p>
                        "or grab a binary from the "
                        <a href=CONFIG.links.releases target="_blank" rel="noopener noreferrer">
                            "releases page"
                        </a>
                        "."
                    </p>
                </Section>

                <Section id="tasks" title="Defining tasks">
                    <p>
                        "Each " <code>"[[task]]"</code> " table needs a " <code>"name"</code> " and a "
                        <code>"command"</code> ". Commands run through your shell from the directory holding "
                        <code>"shuru.toml"</code> "."
                    </p>
                    <CodeBlock code=TASKS_TOML language="toml" />
                </Section>

                <Section id="default-task" title="Default task">
                    <p>"Mark one task " <code>"default = true"</code> " to run it with a bare " <code>"shuru"</code> "."</p>
                    <CodeBlock code=DEFAULT_TASK_TOML language="toml" />
                </Section>

                <Section id="aliases" title="Aliases">
                    <p>"Aliases are extra names for the same task."</p>
                    <CodeBlock code=ALIASES_TOML language="toml" />
                </Section>

                <Section id="versions" title="Pinned versions">
                    <p>
                        "The " <code>"[versions]"</code>
                        " table pins runtimes. Missing versions are downloaded into the shuru cache the first time a task needs them."
                    </p>
                    <CodeBlock code=VERSIONS_TOML language="toml" />
                </Section>

                <Section id="completions" title="Shell completions">
                    <CodeBlock code=COMPLETIONS_SH language="sh" />
                </Section>

                <Section id="cli" title="CLI reference">
                    <CodeBlock code=CLI_REFERENCE />
                </Section>
            </main>
        </div>
    }
}
