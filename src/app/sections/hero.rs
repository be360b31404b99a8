use std::time::Duration;

use leptos::prelude::*;

use crate::{
    app::{decrypted_text::DecryptedText, layout::ExternalLink, theme::use_theme},
    content::{AVATAR, BLOG_URL, OWNER_NAME},
    reveal::{CharacterPool, RevealConfig, RevealDirection, Trigger},
};

const TAGLINE: &str = "Backend Developer · Cloud Enthusiast · Designer";

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();
    let name_config = RevealConfig::default()
        .sequential(RevealDirection::Center)
        .triggered_by(Trigger::Both)
        .looping(Duration::from_millis(2000));
    let tagline_config = RevealConfig::default()
        .simultaneous(12)
        .tick_every(Duration::from_millis(40))
        .with_pool(CharacterPool::from_text(TAGLINE).unwrap_or_default());

    view! {
        <section
            id="home"
            class="min-h-screen flex flex-col md:flex-row items-center justify-center gap-12 px-6 pt-24"
        >
            <img
                src=AVATAR
                alt=OWNER_NAME
                class=move || {
                    format!(
                        "w-48 h-48 md:w-64 md:h-64 rounded-full object-cover border-4 {}",
                        theme.get().pick("border-slate-900/10", "border-white/10"),
                    )
                }
            />
            <div class="text-center md:text-left max-w-2xl">
                <p class="text-lg opacity-70">"Hi, I'm"</p>
                <h1
                    class="mt-2 text-5xl md:text-7xl font-extrabold bg-clip-text text-transparent"
                    style:background-image=move || theme.get().heading_gradient()
                >
                    <DecryptedText text=OWNER_NAME config=name_config encrypted_class="opacity-50" />
                </h1>
                <p
                    class="mt-6 text-xl md:text-2xl font-medium"
                    style:color=move || theme.get().accent()
                >
                    <DecryptedText text=TAGLINE config=tagline_config encrypted_class="opacity-40" />
                </p>
                <div class="mt-10 flex flex-wrap gap-4 justify-center md:justify-start">
                    <a
                        href="#contact"
                        class="px-6 py-3 rounded-full bg-blue-600 text-white font-semibold hover:bg-blue-500"
                    >
                        "Get in touch"
                    </a>
                    <ExternalLink
                        href=BLOG_URL
                        class="px-6 py-3 rounded-full border border-blue-600 font-semibold hover:bg-blue-600/10"
                    >
                        "Read my blog"
                    </ExternalLink>
                </div>
            </div>
        </section>
    }
}
