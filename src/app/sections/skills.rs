use leptos::prelude::*;

use super::tab_class;
use crate::{
    app::{layout::SectionHeading, theme::use_theme, tilt_card::SkillCard},
    content::SkillCategory,
};

#[component]
pub fn Skills() -> impl IntoView {
    let theme = use_theme();
    let (category, set_category) = signal(SkillCategory::Languages);

    view! {
        <section id="skills" class="py-24 px-6">
            <SectionHeading title="Skills" subtitle="Tools I reach for" />
            <div class="flex flex-wrap justify-center gap-3 mb-10" role="tablist">
                {SkillCategory::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                aria-selected=move || (category.get() == tab).to_string()
                                class=move || tab_class(category.get() == tab, theme.get())
                                on:click=move |_| set_category.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mx-auto max-w-5xl grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-6">
                {move || {
                    category
                        .get()
                        .skills()
                        .iter()
                        .map(|&skill| view! { <SkillCard skill /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
