use leptos::prelude::*;

use super::tab_class;
use crate::{
    app::{layout::SectionHeading, theme::use_theme, tilt_card::ProjectCard},
    content::ProjectTab,
};

#[component]
pub fn Projects() -> impl IntoView {
    let theme = use_theme();
    let (tab, set_tab) = signal(ProjectTab::All);

    view! {
        <section id="projects" class="py-24 px-6">
            <SectionHeading title="Projects" subtitle="Things I've built and designed" />
            <div class="flex flex-wrap justify-center gap-3 mb-6" role="tablist">
                {ProjectTab::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                aria-selected=move || (tab.get() == option).to_string()
                                class=move || tab_class(tab.get() == option, theme.get())
                                on:click=move |_| set_tab.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mx-auto max-w-6xl grid gap-8 md:grid-cols-2">
                {move || {
                    tab.get()
                        .projects()
                        .iter()
                        .map(|&project| view! { <ProjectCard project /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
