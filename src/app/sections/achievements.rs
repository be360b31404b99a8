use leptos::prelude::*;

use crate::{
    app::{layout::SectionHeading, tilt_card::AchievementCard},
    content::ACHIEVEMENTS,
};

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <section id="achievements" class="py-24 px-6">
            <SectionHeading title="Achievements" />
            <div class="mx-auto max-w-6xl grid gap-8 md:grid-cols-2 lg:grid-cols-3">
                {ACHIEVEMENTS
                    .iter()
                    .map(|&achievement| view! { <AchievementCard achievement /> })
                    .collect_view()}
            </div>
        </section>
    }
}
