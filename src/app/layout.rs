use std::time::Duration;

use leptos::{either::Either, prelude::*};
use leptos_use::use_media_query;

use super::{decrypted_text::DecryptedText, theme::{use_theme, ThemeToggle}};
use crate::{
    content::{mobile_media_query, BLOG_URL, EXTERNAL_REL, NAV_ITEMS, OWNER_NAME, SIGNATURE_SVG},
    reveal::{RevealConfig, RevealDirection, Trigger},
};

/// True at or below the mobile breakpoint. Always false during SSR.
pub fn use_is_mobile() -> Signal<bool> {
    use_media_query(mobile_media_query())
}

/// A link that opens in a new tab without handing over `window.opener`.
#[component]
pub fn ExternalLink(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=class target="_blank" rel=EXTERNAL_REL>
            {children()}
        </a>
    }
}

fn heading_config() -> RevealConfig {
    RevealConfig::default()
        .sequential(RevealDirection::Start)
        .tick_every(Duration::from_millis(200))
        .triggered_by(Trigger::Visibility)
        .looping(Duration::from_millis(1500))
}

#[component]
pub fn SectionHeading(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    let theme = use_theme();
    let config = heading_config();

    view! {
        <div class="mb-12 text-center">
            <h2
                class="text-4xl md:text-5xl font-bold bg-clip-text text-transparent"
                style:background-image=move || theme.get().heading_gradient()
            >
                <DecryptedText text=title config encrypted_class="opacity-60" />
            </h2>
            {subtitle
                .map(|subtitle| {
                    view! {
                        <p class=move || {
                            format!(
                                "mt-4 text-lg {}",
                                theme.get().pick("text-slate-600", "text-slate-400"),
                            )
                        }>{subtitle}</p>
                    }
                })}
        </div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let is_mobile = use_is_mobile();
    let (menu_open, set_menu_open) = signal(false);

    let links = move || {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let class = "px-3 py-2 rounded-md text-sm font-medium hover:opacity-70 transition-opacity";
                if item.is_external() {
                    Either::Left(view! {
                        <ExternalLink href=item.href class=class>
                            {item.name}
                        </ExternalLink>
                    })
                } else {
                    Either::Right(view! {
                        <a href=item.href class=class on:click=move |_| set_menu_open.set(false)>
                            {item.name}
                        </a>
                    })
                }
            })
            .collect_view()
    };

    view! {
        <nav class=move || {
            format!(
                "fixed top-0 inset-x-0 z-50 backdrop-blur-md border-b {}",
                theme.get().pick("bg-white/70 border-slate-200", "bg-black/40 border-white/10"),
            )
        }>
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <a href="#home" class="text-xl font-bold">
                    {OWNER_NAME}
                </a>
                {move || {
                    if is_mobile.get() {
                        Either::Left(view! {
                            <div class="flex items-center gap-2">
                                <ThemeToggle />
                                <button
                                    type="button"
                                    class="w-10 h-10 text-2xl"
                                    aria-label="Toggle navigation"
                                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                                >
                                    {move || if menu_open.get() { "✕" } else { "☰" }}
                                </button>
                            </div>
                        })
                    } else {
                        Either::Right(view! {
                            <div class="flex items-center gap-1">
                                {links()}
                                <ThemeToggle />
                            </div>
                        })
                    }
                }}
            </div>
            <Show when=move || is_mobile.get() && menu_open.get()>
                <div class="flex flex-col px-4 pb-4">{links()}</div>
            </Show>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let theme = use_theme();
    // BUILD_TIME is RFC 3339, so the year is the first four characters
    let year = env!("BUILD_TIME").get(..4).unwrap_or_default();

    view! {
        <footer class=move || {
            format!(
                "py-10 border-t text-center text-sm {}",
                theme.get().pick("border-slate-200 text-slate-600", "border-white/10 text-slate-400"),
            )
        }>
            <img
                src=SIGNATURE_SVG
                alt=format!("{OWNER_NAME} signature")
                class=move || format!("mx-auto h-12 mb-4 {}", theme.get().pick("", "invert"))
            />
            <p>"© " {year} " " {OWNER_NAME}</p>
            <p class="mt-2">
                <ExternalLink href=BLOG_URL class="underline hover:opacity-70">
                    "Blog"
                </ExternalLink>
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealMode;

    #[test]
    fn test_heading_reveals_on_view_and_loops() {
        let config = heading_config();
        assert_eq!(config.mode, RevealMode::Sequential(RevealDirection::Start));
        assert_eq!(config.tick_interval, Duration::from_millis(200));
        assert_eq!(config.trigger, Trigger::Visibility);
        assert_eq!(config.loop_delay, Some(Duration::from_millis(1500)));
    }
}
