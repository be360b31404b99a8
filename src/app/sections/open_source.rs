use std::time::Duration;

use leptos::prelude::*;

use crate::{
    app::{decrypted_text::DecryptedText, layout::ExternalLink, theme::use_theme},
    content::GITHUB_URL,
    reveal::{CharacterPool, RevealConfig, Shuffle, Trigger, SHUFFLE_POOL},
};

const HEADING: &str = "OPEN SOURCE CONTRIBUTIONS";

fn heading_config() -> RevealConfig {
    RevealConfig::default()
        .shuffle(Shuffle::default())
        .tick_every(Duration::from_millis(20))
        .with_pool(CharacterPool::new(SHUFFLE_POOL).unwrap_or_default())
        .triggered_by(Trigger::Both)
        .looping(Duration::from_millis(500))
}

#[component]
pub fn OpenSource() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section id="open-source" class="py-24 px-6">
            <div class="mb-12 text-center">
                <h2
                    class="text-4xl md:text-5xl font-bold tracking-wide bg-clip-text text-transparent"
                    style:background-image=move || theme.get().heading_gradient()
                >
                    <DecryptedText text=HEADING config=heading_config() />
                </h2>
            </div>
            <div class=move || {
                format!(
                    "mx-auto max-w-4xl rounded-2xl border p-8 text-center {}",
                    theme.get().pick("bg-white border-slate-200", "bg-slate-900/80 border-white/10"),
                )
            }>
                <h3 class="text-2xl font-semibold">"GitHub Contributions"</h3>
                <p class="mt-3 opacity-70">
                    "Issues, pull requests and side projects, all in the open."
                </p>
                <ExternalLink
                    href=GITHUB_URL
                    class="mt-6 inline-block px-6 py-3 rounded-lg font-semibold bg-blue-600 text-white hover:bg-blue-500"
                >
                    "View GitHub Profile"
                </ExternalLink>
            </div>
        </section>
    }
}
