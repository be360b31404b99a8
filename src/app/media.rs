use leptos::{either::EitherOf3, prelude::*};

use crate::media::{asset_url, MediaKind};

/// An image or a muted looping video, picked by file extension. Anything
/// that can't be classified, or fails to load, becomes an empty slot.
#[component]
pub fn MediaView(
    #[prop(into)] src: String,
    #[prop(optional, into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let kind = match MediaKind::classify(&src) {
        Ok(kind) => Some(kind),
        Err(e) => {
            log::warn!("not rendering {src:?}: {e}");
            None
        }
    };
    let url = asset_url(&src);

    move || {
        let class = class.clone();
        match kind.filter(|_| !failed.get()) {
            Some(MediaKind::Image) => EitherOf3::A(view! {
                <img
                    src=url.clone()
                    alt=alt.clone()
                    class=class
                    loading="lazy"
                    on:error=move |_| set_failed.set(true)
                />
            }),
            Some(MediaKind::Video) => EitherOf3::B(view! {
                <video
                    src=url.clone()
                    class=class
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                    on:error=move |_| set_failed.set(true)
                ></video>
            }),
            None => EitherOf3::C(view! {
                <div
                    class=format!("bg-slate-500/20 {class}")
                    role="img"
                    aria-label=alt.clone()
                ></div>
            }),
        }
    }
}
