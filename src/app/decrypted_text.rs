use std::sync::{Arc, Mutex};

use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_media_query, UseIntersectionObserverOptions,
};
use rand::rngs::ThreadRng;

use crate::reveal::{Directive, RevealConfig, RevealText};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Debug, Default)]
struct TimerSlots {
    ticker: Option<IntervalHandle>,
    looper: Option<TimeoutHandle>,
}

impl TimerSlots {
    fn clear_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.clear();
        }
    }

    fn clear_looper(&mut self) {
        if let Some(handle) = self.looper.take() {
            handle.clear();
        }
    }

    fn clear(&mut self) {
        self.clear_ticker();
        self.clear_looper();
    }
}

/// Runs a [`RevealText`] against browser timers. Every engine call goes
/// through [`RevealDriver::dispatch`], which carries out the returned
/// [`Directive`].
#[derive(Clone)]
struct RevealDriver {
    reveal: RwSignal<RevealText>,
    timers: Arc<Mutex<TimerSlots>>,
}

impl RevealDriver {
    fn new(reveal: RevealText) -> Self {
        Self {
            reveal: RwSignal::new(reveal),
            timers: Arc::new(Mutex::new(TimerSlots::default())),
        }
    }

    fn dispatch(&self, f: impl FnOnce(&mut RevealText, &mut ThreadRng) -> Directive) {
        // None once the owner is gone; nothing left to drive
        let Some(directive) = self
            .reveal
            .try_update(|reveal| f(reveal, &mut rand::thread_rng()))
        else {
            return;
        };
        self.apply(directive);
    }

    fn apply(&self, directive: Directive) {
        let mut timers = self
            .timers
            .lock()
            .expect("should be able to lock reveal timers");
        match directive {
            Directive::Tick { token, every } => {
                timers.clear();
                let driver = self.clone();
                match set_interval_with_handle(
                    move || driver.dispatch(|reveal, rng| reveal.tick(token, rng)),
                    every,
                ) {
                    Ok(handle) => timers.ticker = Some(handle),
                    Err(e) => {
                        log::warn!("could not start reveal ticker: {e:?}");
                        drop(timers);
                        self.reveal.update(|reveal| {
                            reveal.cancel();
                        });
                    }
                }
            }
            Directive::Rearm { token, after } => {
                timers.clear();
                let driver = self.clone();
                match set_timeout_with_handle(
                    move || driver.dispatch(|reveal, rng| reveal.loop_elapsed(token, rng)),
                    after,
                ) {
                    Ok(handle) => timers.looper = Some(handle),
                    Err(e) => {
                        log::warn!("could not schedule reveal loop: {e:?}");
                        drop(timers);
                        self.reveal.update(|reveal| {
                            reveal.cancel();
                        });
                    }
                }
            }
            Directive::Halt => timers.clear(),
            Directive::Keep | Directive::Stale => {}
        }
    }

    fn teardown(&self) {
        self.timers
            .lock()
            .expect("should be able to lock reveal timers")
            .clear();
        self.reveal.try_update(|reveal| reveal.teardown());
    }
}

/// Text that scrambles through random glyphs before settling on `text`.
///
/// `class` styles resolved characters and `encrypted_class` the ones still
/// scrambling. A screen-reader copy of the text is always present, the
/// animated glyphs are hidden from assistive tech.
#[component]
pub fn DecryptedText(
    #[prop(into)] text: String,
    #[prop(optional)] config: RevealConfig,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] encrypted_class: String,
    #[prop(optional, into)] parent_class: String,
) -> impl IntoView {
    let trigger = config.trigger;
    let threshold = config.threshold;
    let driver = RevealDriver::new(RevealText::new(&text, config));
    let reveal = driver.reveal;
    let node = NodeRef::<html::Span>::new();

    if trigger.on_visibility() {
        let driver = driver.clone();
        use_intersection_observer_with_options(
            node,
            move |entries, _| {
                if let Some(entry) = entries.last() {
                    let in_view = entry.is_intersecting();
                    driver.dispatch(|reveal, rng| reveal.visibility_changed(in_view, rng));
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
        );
    }

    let reduced_motion = use_media_query(REDUCED_MOTION_QUERY);
    Effect::watch(
        move || reduced_motion.get(),
        {
            let driver = driver.clone();
            move |reduced, _, _| {
                let reduced = *reduced;
                driver.dispatch(|reveal, _| reveal.set_reduced_motion(reduced));
            }
        },
        true,
    );

    on_cleanup({
        let driver = driver.clone();
        move || driver.teardown()
    });

    let on_hover = move |_: MouseEvent| driver.dispatch(|reveal, rng| reveal.hover(rng));

    view! {
        <span
            node_ref=node
            class=format!("inline-block whitespace-pre-wrap {parent_class}")
            on:mouseenter=on_hover
        >
            <span class="sr-only">{text}</span>
            <span aria-hidden="true">
                {move || {
                    reveal
                        .with(|reveal| {
                            reveal
                                .glyphs()
                                .map(|(glyph, resolved)| {
                                    let class = if resolved {
                                        class.clone()
                                    } else {
                                        encrypted_class.clone()
                                    };
                                    view! { <span class=class>{glyph.to_string()}</span> }
                                })
                                .collect_view()
                        })
                }}
            </span>
        </span>
    }
}
