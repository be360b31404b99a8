use leptos::{either::Either, ev::SubmitEvent, prelude::*};

use super::body_text;
use crate::{
    app::{
        layout::{ExternalLink, SectionHeading},
        theme::use_theme,
    },
    contact::{ContactError, ContactForm, Field},
    content::{ChannelIcon, CONTACT_CHANNELS, CONTACT_EMAIL},
};

fn icon_glyph(icon: ChannelIcon) -> &'static str {
    match icon {
        ChannelIcon::Mail => "✉",
        ChannelIcon::LinkedIn => "in",
        ChannelIcon::GitHub => "</>",
        ChannelIcon::Steam => "♨",
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Your name",
        Field::Email => "you@example.com",
        Field::Subject => "What's this about?",
        Field::Message => "Say hello...",
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let theme = use_theme();
    let form = RwSignal::new(ContactForm::default());
    let (error, set_error) = signal(None::<ContactError>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let link = match form.with_untracked(|form| form.mailto(CONTACT_EMAIL)) {
            Ok(link) => link,
            Err(e) => {
                set_error.set(Some(e));
                return;
            }
        };
        set_error.set(None);
        // hands off to the visitor's mail client, nothing is sent from here
        if let Err(e) = window().location().set_href(&link) {
            log::warn!("could not open mail client: {e:?}");
        }
    };

    let input_class = move || {
        format!(
            "w-full px-4 py-3 rounded-lg border focus:outline-none focus:ring-2 focus:ring-blue-500 {}",
            theme.get().pick(
                "bg-white border-slate-300 text-slate-900",
                "bg-white/5 border-white/10 text-white",
            ),
        )
    };

    let field_input = move |field: Field| {
        let value = move || form.with(|form| form.field(field).to_string());
        if field == Field::Message {
            Either::Left(view! {
                <textarea
                    name=field.label()
                    rows="6"
                    placeholder=placeholder(field)
                    class=input_class
                    prop:value=value
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|form| *form.field_mut(field) = value);
                    }
                ></textarea>
            })
        } else {
            let kind = if field == Field::Email { "email" } else { "text" };
            Either::Right(view! {
                <input
                    name=field.label()
                    type=kind
                    placeholder=placeholder(field)
                    class=input_class
                    prop:value=value
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|form| *form.field_mut(field) = value);
                    }
                />
            })
        }
    };

    view! {
        <section id="contact" class="py-24 px-6">
            <SectionHeading title="Contact" subtitle="Let's build something together" />
            <div class="mx-auto max-w-5xl grid gap-12 md:grid-cols-2">
                <ul class="space-y-4">
                    {CONTACT_CHANNELS
                        .iter()
                        .map(|channel| {
                            view! {
                                <li>
                                    <ExternalLink
                                        href=channel.link
                                        class="flex items-center gap-4 group"
                                    >
                                        <span class=format!(
                                            "w-12 h-12 flex items-center justify-center rounded-full bg-slate-500/10 font-bold {}",
                                            channel.color,
                                        )>{icon_glyph(channel.icon)}</span>
                                        <span>
                                            <span class="block text-xs tracking-widest opacity-60">
                                                {channel.label}
                                            </span>
                                            <span class="group-hover:underline">{channel.display}</span>
                                        </span>
                                    </ExternalLink>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <form class="space-y-4" on:submit=on_submit novalidate=true>
                    {Field::ALL
                        .into_iter()
                        .map(|field| {
                            view! {
                                <label class="block">
                                    <span class=move || {
                                        format!(
                                            "block mb-1 text-sm capitalize {}",
                                            body_text(theme.get()),
                                        )
                                    }>{field.label()}</span>
                                    {field_input(field)}
                                </label>
                            }
                        })
                        .collect_view()}
                    {move || {
                        error
                            .get()
                            .map(|e| {
                                view! {
                                    <p class="text-sm text-red-500" role="alert">
                                        {e.to_string()}
                                    </p>
                                }
                            })
                    }}
                    <button
                        type="submit"
                        class="w-full py-3 rounded-lg bg-blue-600 text-white font-semibold hover:bg-blue-500"
                    >
                        "Send Message"
                    </button>
                </form>
            </div>
        </section>
    }
}
