use leptos::prelude::*;

use super::{layout::ExternalLink, media::MediaView, theme::use_theme};
use crate::content::{Certification, Experience};

/// Two faces that swap on hover. The flip itself is CSS (`.flip-card` in
/// `input.css`).
#[component]
pub fn FlipCard(
    #[prop(into)] front: ViewFn,
    #[prop(into)] back: ViewFn,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let theme = use_theme();
    let face = move || {
        theme.get().pick(
            "bg-white border-slate-200 text-slate-900",
            "bg-slate-900/80 border-white/10 text-white",
        )
    };

    view! {
        <div class=format!("flip-card {class}")>
            <div class="flip-card-inner">
                <div class=move || format!("flip-card-front border rounded-2xl {}", face())>
                    {front.run()}
                </div>
                <div class=move || format!("flip-card-back border rounded-2xl {}", face())>
                    {back.run()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ExperienceFlipCard(experience: Experience) -> impl IntoView {
    let Experience {
        company,
        logo,
        role,
        date_range,
        work_link,
    } = experience;

    let front = move || {
        view! {
            <div class="flex flex-col items-center justify-center h-full gap-3 p-6 text-center">
                <MediaView src=logo alt=company class="w-20 h-20 object-contain rounded-xl" />
                <h3 class="text-xl font-bold">{role}</h3>
                <p class="opacity-80">{company}</p>
                <p class="text-sm opacity-60">{date_range}</p>
            </div>
        }
    };
    let back = move || {
        view! {
            <div class="flex flex-col items-center justify-center h-full gap-4 p-6 text-center">
                <h3 class="text-lg font-semibold">{company}</h3>
                <ExternalLink
                    href=work_link
                    class="px-5 py-2 rounded-full bg-blue-600 text-white hover:bg-blue-500"
                >
                    "My Work There"
                </ExternalLink>
            </div>
        }
    };

    view! { <FlipCard front back class="h-80" /> }
}

#[component]
pub fn CertificationFlipCard(certification: Certification) -> impl IntoView {
    let Certification {
        name,
        image,
        issued,
        expires,
        credential_id,
        verify_link,
    } = certification;

    let front = move || {
        view! {
            <div class="flex flex-col items-center justify-center h-full gap-3 p-6 text-center">
                <MediaView src=image alt=name class="w-28 h-28 object-contain" />
                <h3 class="text-lg font-bold">{name}</h3>
            </div>
        }
    };
    let back = move || {
        view! {
            <div class="flex flex-col items-center justify-center h-full gap-2 p-6 text-center text-sm">
                <p>"Issued: " {issued}</p>
                <p>"Expires: " {expires}</p>
                <p class="font-mono opacity-70">"Credential ID: " {credential_id}</p>
                <ExternalLink
                    href=verify_link
                    class="mt-3 px-5 py-2 rounded-full bg-blue-600 text-white hover:bg-blue-500"
                >
                    "Verify"
                </ExternalLink>
            </div>
        }
    };

    view! { <FlipCard front back class="h-80" /> }
}
