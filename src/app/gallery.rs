use leptos::prelude::*;
use leptos_use::{use_raf_fn, UseRafFnCallbackArgs};

use super::{
    layout::{use_is_mobile, SectionHeading},
    media::MediaView,
    theme::use_theme,
};
use crate::{
    carousel::{bend_drop, Carousel, Direction, DEFAULT_SCROLL_EASE, DEFAULT_SCROLL_SPEED},
    content::{GalleryItem, GALLERY},
};

/// Commands a parent can send to a [`CircularGallery`] it rendered.
#[derive(Debug, Clone, Copy)]
pub struct GalleryControls {
    carousel: RwSignal<Carousel>,
}

impl GalleryControls {
    pub fn new(len: usize) -> Self {
        Self::with_motion(len, DEFAULT_SCROLL_SPEED, DEFAULT_SCROLL_EASE)
    }

    pub fn with_motion(len: usize, speed: f64, ease: f64) -> Self {
        Self {
            carousel: RwSignal::new(Carousel::new(len).with_motion(speed, ease)),
        }
    }

    pub fn advance(&self, direction: Direction) {
        self.carousel.update(|carousel| {
            carousel.advance(direction);
        });
    }

    pub fn scroll_next(&self) {
        self.advance(Direction::Next);
    }

    pub fn scroll_prev(&self) {
        self.advance(Direction::Prev);
    }

    pub fn index(&self) -> usize {
        self.carousel.with(Carousel::index)
    }

    fn step(&self, dt_ms: f64) {
        self.carousel.update(|carousel| carousel.step(dt_ms));
    }

    fn offset_of(&self, item: usize) -> f64 {
        self.carousel.with(|carousel| carousel.offset_of(item))
    }
}

/// A bent strip of media that drifts on its own and snaps to the item the
/// controls select.
#[component]
pub fn CircularGallery(
    items: &'static [GalleryItem],
    controls: GalleryControls,
    #[prop(default = 3.0)] bend: f64,
) -> impl IntoView {
    let theme = use_theme();
    let is_mobile = use_is_mobile();
    // stops with the owner
    use_raf_fn(move |args: UseRafFnCallbackArgs| controls.step(args.delta));

    let slots = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = move || {
                let width = if is_mobile.get() { 220.0 } else { 320.0 };
                let offset = controls.offset_of(i);
                let spread = offset.abs().min(3.0);
                format!(
                    "transform: translateX(calc(-50% + {:.1}px)) translateY({:.1}px) rotateZ({:.2}deg); opacity: {:.2}; z-index: {}",
                    offset * width,
                    bend_drop(offset, bend),
                    offset * bend,
                    1.0 - spread * 0.25,
                    100 - (spread * 10.0) as i32,
                )
            };
            view! {
                <figure class="absolute left-1/2 top-0 w-52 md:w-72" style=style>
                    <MediaView
                        src=item.media
                        alt=item.caption
                        class="h-64 md:h-80 w-full object-cover rounded-2xl shadow-xl"
                    />
                    <figcaption class=move || {
                        format!(
                            "mt-3 text-center font-semibold {}",
                            theme.get().pick("text-slate-800", "text-white"),
                        )
                    }>{item.caption}</figcaption>
                </figure>
            }
        })
        .collect_view();

    view! {
        <div class="relative w-full h-[26rem] md:h-[30rem] overflow-hidden" aria-roledescription="carousel">
            {slots}
        </div>
    }
}

#[component]
pub fn PhotoGallery() -> impl IntoView {
    let theme = use_theme();
    let controls = GalleryControls::new(GALLERY.len());
    let button = move || {
        format!(
            "w-12 h-12 rounded-full text-xl transition-colors {}",
            theme.get().pick(
                "bg-slate-200 hover:bg-slate-300 text-slate-900",
                "bg-white/10 hover:bg-white/20 text-white",
            ),
        )
    };

    view! {
        <section id="gallery" class="py-24 px-4">
            <SectionHeading title="Gallery" subtitle="Moments from events, hackathons and more" />
            <CircularGallery items=GALLERY controls />
            <div class="mt-8 flex items-center justify-center gap-6">
                <button
                    type="button"
                    class=button
                    aria-label="Previous"
                    on:click=move |_| controls.scroll_prev()
                >
                    "←"
                </button>
                <span class="tabular-nums opacity-70">
                    {move || format!("{} / {}", controls.index() + 1, GALLERY.len())}
                </span>
                <button
                    type="button"
                    class=button
                    aria-label="Next"
                    on:click=move |_| controls.scroll_next()
                >
                    "→"
                </button>
            </div>
        </section>
    }
}
