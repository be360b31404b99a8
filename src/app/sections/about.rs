use leptos::prelude::*;

use super::body_text;
use crate::{
    app::{layout::SectionHeading, theme::use_theme},
    content::ABOUT_PARAGRAPHS,
};

#[component]
pub fn About() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section id="about" class="py-24 px-6">
            <SectionHeading title="About Me" />
            <div class=move || {
                format!("mx-auto max-w-3xl space-y-6 text-lg leading-relaxed {}", body_text(theme.get()))
            }>
                {ABOUT_PARAGRAPHS.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
            </div>
        </section>
    }
}
