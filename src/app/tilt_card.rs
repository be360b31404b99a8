use leptos::{ev::MouseEvent, html, prelude::*};

use super::{
    layout::{use_is_mobile, ExternalLink},
    media::MediaView,
    theme::use_theme,
};
use crate::{
    content::{Achievement, Project, Skill, Venue},
    theme::Theme,
    tilt::{tilt, FrameThrottle, ItemOffset, Rotation, TiltModel},
};

/// Whether the pointer is inside the nearest [`CardContainer`].
#[derive(Debug, Clone, Copy)]
struct CardHover(ReadSignal<bool>);

#[derive(Debug, Default, Clone, Copy)]
struct PointerSample {
    pointer: (f64, f64),
    size: (f64, f64),
}

#[component]
pub fn CardContainer(
    children: Children,
    #[prop(into, default = TiltModel::default().into())] model: Signal<TiltModel>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let (hovered, set_hovered) = signal(false);
    let (rotation, set_rotation) = signal(Rotation::ZERO);
    let throttle = StoredValue::new(FrameThrottle::default());
    let frame = StoredValue::new(None::<AnimationFrameRequestHandle>);
    let sample = StoredValue::new(PointerSample::default());

    provide_context(CardHover(hovered));

    let cancel_frame = move || {
        throttle.update_value(|t| t.cancel());
        if let Some(handle) = frame.try_update_value(Option::take).flatten() {
            handle.cancel();
        }
    };

    let on_move = move |ev: MouseEvent| {
        let Some(el) = container.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        sample.set_value(PointerSample {
            pointer: (
                ev.client_x() as f64 - rect.left(),
                ev.client_y() as f64 - rect.top(),
            ),
            size: (rect.width(), rect.height()),
        });
        if !throttle.try_update_value(|t| t.request()).unwrap_or(false) {
            return;
        }
        let res = request_animation_frame_with_handle(move || {
            throttle.update_value(|t| t.fire());
            frame.set_value(None);
            let PointerSample { pointer, size } = sample.get_value();
            set_rotation.set(tilt(model.get_untracked(), pointer, size));
        });
        match res {
            Ok(handle) => frame.set_value(Some(handle)),
            Err(e) => {
                log::warn!("could not request tilt frame: {e:?}");
                throttle.update_value(|t| t.cancel());
            }
        }
    };

    on_cleanup(cancel_frame);

    view! {
        <div
            node_ref=container
            class=format!("flex items-center justify-center {class}")
            style="perspective: 1000px"
            on:mouseenter=move |_| set_hovered.set(true)
            on:mousemove=on_move
            on:mouseleave=move |_| {
                cancel_frame();
                set_hovered.set(false);
                set_rotation.set(Rotation::ZERO);
            }
        >
            <div
                class="relative w-full transition-transform duration-200 ease-linear"
                style="transform-style: preserve-3d"
                style:transform=move || rotation.get().css()
            >
                {children()}
            </div>
        </div>
    }
}

/// The tilting surface, themed.
#[component]
pub fn CardBody(children: Children, #[prop(optional, into)] class: String) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div
            class=move || format!("h-full w-full border {class} {}", card_surface(theme.get()))
            style="transform-style: preserve-3d"
        >
            {children()}
        </div>
    }
}

/// Pops out of the card by `offset` while the container is hovered.
#[component]
pub fn CardItem(
    children: Children,
    #[prop(optional)] offset: ItemOffset,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let hovered = use_context::<CardHover>().map(|CardHover(hovered)| hovered);
    let transform = move || offset.css(hovered.is_some_and(|h| h.get()));

    view! {
        <div class=format!("transition-transform duration-200 ease-linear {class}") style:transform=transform>
            {children()}
        </div>
    }
}

fn card_surface(theme: Theme) -> &'static str {
    theme.pick(
        "bg-white border-slate-200 text-slate-900 shadow-lg",
        "bg-slate-900/80 border-white/10 text-white shadow-2xl shadow-blue-500/10",
    )
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let link_class = "px-4 py-2 rounded-lg text-sm font-semibold bg-blue-600 text-white hover:bg-blue-500";

    view! {
        <CardContainer class="py-6">
            <CardBody class="relative rounded-2xl p-6">
                <CardItem offset=ItemOffset::lift(50.0) class="text-xl font-bold">
                    {project.title}
                    {project
                        .badge
                        .map(|badge| {
                            view! {
                                <span class="ml-2 align-middle text-xs px-2 py-1 rounded-full bg-amber-400 text-black">
                                    {badge}
                                </span>
                            }
                        })}
                </CardItem>
                <CardItem offset=ItemOffset::lift(60.0) class="mt-2 text-sm opacity-80">
                    {project.description}
                </CardItem>
                <CardItem offset=ItemOffset::lift(100.0) class="mt-4 w-full">
                    <MediaView
                        src=project.image
                        alt=project.title
                        class="h-56 w-full object-cover rounded-xl"
                    />
                </CardItem>
                <div class="mt-4 flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="text-xs px-2 py-1 rounded-md bg-blue-500/10 text-blue-500">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <CardItem offset=ItemOffset::lift(20.0) class="mt-6 flex flex-wrap gap-3">
                    {project
                        .blog_link
                        .map(|href| {
                            view! {
                                <ExternalLink href class=link_class>
                                    {project.blog_label()}
                                </ExternalLink>
                            }
                        })}
                    {project
                        .github_link
                        .map(|href| {
                            view! {
                                <ExternalLink href class=link_class>
                                    "GitHub"
                                </ExternalLink>
                            }
                        })}
                    {project
                        .live_link
                        .map(|href| {
                            view! {
                                <ExternalLink href class=link_class>
                                    "Live"
                                </ExternalLink>
                            }
                        })}
                </CardItem>
            </CardBody>
        </CardContainer>
    }
}

#[component]
pub fn AchievementCard(achievement: Achievement) -> impl IntoView {
    let venue = match achievement.venue {
        Venue::Campus => "On Campus",
        Venue::Office => "Industry",
    };

    view! {
        <CardContainer class="py-6">
            <CardBody class="relative rounded-2xl p-6">
                <CardItem offset=ItemOffset::lift(50.0) class="text-xl font-bold">
                    {achievement.title}
                </CardItem>
                <CardItem offset=ItemOffset::lift(40.0) class="mt-1 text-sm opacity-70">
                    {achievement.location} " · " {venue}
                </CardItem>
                <CardItem offset=ItemOffset::lift(100.0) class="mt-4 w-full">
                    <MediaView
                        src=achievement.image
                        alt=achievement.title
                        class="h-56 w-full object-cover rounded-xl"
                    />
                </CardItem>
                <CardItem offset=ItemOffset::lift(30.0) class="mt-4 text-sm opacity-80">
                    {achievement.description}
                </CardItem>
            </CardBody>
        </CardContainer>
    }
}

#[component]
pub fn SkillCard(skill: Skill) -> impl IntoView {
    let theme = use_theme();
    let is_mobile = use_is_mobile();
    let model = Signal::derive(move || {
        TiltModel::Amplitude(if is_mobile.get() { 8.0 } else { 15.0 })
    });

    view! {
        <CardContainer model>
            <CardBody class="flex flex-col items-center gap-2 rounded-xl p-4">
                <CardItem offset=ItemOffset::lift(40.0)>
                    <img
                        src=skill.icon
                        alt=skill.name
                        loading="lazy"
                        class=move || {
                            let invert = skill.invert_on_dark && theme.get().is_dark();
                            format!("w-12 h-12 {}", if invert { "invert" } else { "" })
                        }
                    />
                </CardItem>
                <CardItem offset=ItemOffset::lift(20.0) class="text-sm font-medium">
                    {skill.name}
                </CardItem>
            </CardBody>
        </CardContainer>
    }
}
