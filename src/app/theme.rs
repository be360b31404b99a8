use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::theme::THEME_STORAGE_KEY;
use crate::theme::Theme;

/// The one piece of state every section reads. Only [`ThemeContext::toggle`]
/// writes it.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    set_theme: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn signal(&self) -> Signal<Theme> {
        self.theme
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        log::debug!("theme -> {next}");
        self.set_theme.set(next);
    }
}

/// Builds the theme store and provides it to everything below the caller.
/// In the browser the value lives in local storage.
pub fn provide_theme() -> ThemeContext {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>(THEME_STORAGE_KEY);

    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };

    let ctx = ThemeContext { theme, set_theme };
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let label = move || match theme.get() {
        Theme::Light => "Switch to dark mode",
        Theme::Dark => "Switch to light mode",
    };

    view! {
        <button
            type="button"
            class=move || {
                format!(
                    "w-10 h-10 rounded-full flex items-center justify-center transition-colors {}",
                    theme.get().pick("bg-slate-200 hover:bg-slate-300", "bg-white/10 hover:bg-white/20"),
                )
            }
            title=label
            aria-label=label
            on:click=move |_| theme.toggle()
        >
            {move || theme.get().pick("☾", "☀")}
        </button>
    }
}

#[cfg(all(test, not(feature = "hydrate")))]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    #[test]
    fn test_toggle_flips_provided_theme() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = provide_theme();
            assert_eq!(ctx.signal().get_untracked(), Theme::Dark);

            ctx.toggle();
            assert_eq!(ctx.signal().get_untracked(), Theme::Light);
            assert_eq!(use_theme().signal().get_untracked(), Theme::Light);

            ctx.toggle();
            assert_eq!(ctx.signal().get_untracked(), Theme::Dark);
        });
    }
}
