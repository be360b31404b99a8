use leptos::prelude::*;

use crate::{
    app::{
        flip_card::{CertificationFlipCard, ExperienceFlipCard},
        layout::SectionHeading,
    },
    content::{CERTIFICATIONS, EXPERIENCES},
};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-24 px-6">
            <SectionHeading title="Experience" subtitle="Hover a card to see what I did there" />
            <div class="mx-auto max-w-6xl grid gap-8 sm:grid-cols-2 lg:grid-cols-3">
                {EXPERIENCES
                    .iter()
                    .map(|&experience| view! { <ExperienceFlipCard experience /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Certifications() -> impl IntoView {
    view! {
        <section id="certifications" class="py-24 px-6">
            <SectionHeading title="Certifications" />
            <div class="mx-auto max-w-6xl flex flex-wrap justify-center gap-8">
                {CERTIFICATIONS
                    .iter()
                    .map(|&certification| {
                        view! {
                            <div class="w-full sm:w-80">
                                <CertificationFlipCard certification />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
