use chrono::Utc;
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use super::icon::GlyphIcon;
use super::reveal::{Motion, Reveal};
use super::timer::schedule_scoped;
use crate::contact::{ContactForm, Field, Status};
use crate::content::{CONTACT_METHODS, LOCATION};
use crate::mail::{ConfiguredMailer, Delivery};

const INPUT_CLASS: &str = "w-full bg-gray-800 border border-gray-700 rounded-lg px-4 py-3 text-white focus:outline-none focus:border-secondary disabled:opacity-60";

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let status = Memo::new(move |_| form.with(ContactForm::status));
    let revert_at = Memo::new(move |_| form.with(ContactForm::revert_at));

    // Re-runs whenever the deadline changes; the cleanup from the previous run
    // clears any pending timeout, so a new submission or unmount cancels it.
    Effect::new(move |_| {
        let Some(at) = revert_at.get() else {
            return;
        };
        let remaining = (at - Utc::now()).to_std().unwrap_or_default();
        schedule_scoped(remaining, move || {
            // poll against the scheduled deadline so an early wakeup still reverts
            form.update(|f| {
                f.poll(at);
            });
        });
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let message = match form.try_update(ContactForm::submit) {
            Some(Ok(message)) => message,
            Some(Err(e)) => {
                log::info!("contact form not sent: {e}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let outcome = ConfiguredMailer.deliver(&message).await;
            // no-op if the section was unmounted while the request was in flight
            form.try_update(|f| f.settle(outcome, Utc::now()));
        });
    };

    let is_submitting = move || status.get() == Status::Submitting;

    view! {
        <section id="contact" class="container mx-auto px-4 py-16">
            <Reveal motion=Motion::Fade class="max-w-4xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-12 text-white">
                    "Contact Me"
                </h2>
                <div class="grid md:grid-cols-2 gap-12">
                    <Reveal motion=Motion::FromLeft delay_ms=200 class="bg-gray-800 rounded-lg p-6 space-y-6">
                        <h3 class="text-xl font-semibold text-white mb-4">"Contact Information"</h3>
                        {CONTACT_METHODS
                            .iter()
                            .enumerate()
                            .map(|(i, method)| {
                                view! {
                                    <Reveal delay_ms=(i as u32) * 200>
                                        <a
                                            href=method.target_link
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="flex items-center space-x-4 hover:bg-gray-700 p-3 rounded-lg transition-colors"
                                        >
                                            <GlyphIcon
                                                glyph=method.icon
                                                class=format!("text-2xl {}", method.style_hint)
                                            />
                                            <div>
                                                <p class="text-white font-medium">{method.label}</p>
                                                <p class="text-gray-400 text-sm">{method.display_value}</p>
                                            </div>
                                        </a>
                                    </Reveal>
                                }
                            })
                            .collect_view()}
                        <div class="flex items-center space-x-4 text-gray-400 p-3">
                            <span class="text-2xl text-secondary" aria-hidden="true">"📍"</span>
                            <p>{LOCATION}</p>
                        </div>
                    </Reveal>
                    <Reveal motion=Motion::FromRight delay_ms=200>
                        <form on:submit=on_submit class="space-y-6">
                            <FormInput form field=Field::Name label="Full Name" placeholder="Your Name" />
                            <FormInput
                                form
                                field=Field::Email
                                label="Email Address"
                                placeholder="you@example.com"
                            />
                            <div>
                                <label for="message" class="block text-gray-300 mb-2">
                                    "Your Message"
                                </label>
                                <textarea
                                    id="message"
                                    name="message"
                                    required=true
                                    rows="5"
                                    placeholder="Type your message here..."
                                    class=INPUT_CLASS
                                    disabled=is_submitting
                                    prop:value=move || form.with(|f| f.field(Field::Message).to_string())
                                    on:input=move |ev| {
                                        form.update(|f| {
                                            f.edit(Field::Message, event_target_value(&ev));
                                        })
                                    }
                                ></textarea>
                            </div>
                            <button
                                type="submit"
                                disabled=is_submitting
                                class="w-full bg-secondary text-white py-3 rounded-lg hover:bg-opacity-90 transition-colors flex items-center justify-center space-x-2 group disabled:opacity-60"
                            >
                                <span class="group-hover:animate-bounce" aria-hidden="true">"✈"</span>
                                <span>
                                    {move || if is_submitting() { "Sending..." } else { "Send Message" }}
                                </span>
                            </button>
                            <StatusLine status />
                        </form>
                    </Reveal>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn FormInput(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let id = field.to_string();
    let input_type = if field == Field::Email { "email" } else { "text" };
    let disabled = move || form.with(|f| f.status() == Status::Submitting);

    view! {
        <div>
            <label for=id.clone() class="block text-gray-300 mb-2">
                {label}
            </label>
            <input
                type=input_type
                id=id.clone()
                name=id
                required=true
                placeholder=placeholder
                class=INPUT_CLASS
                disabled=disabled
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| {
                    form.update(|f| {
                        f.edit(field, event_target_value(&ev));
                    })
                }
            />
        </div>
    }
}

#[component]
fn StatusLine(status: Memo<Status>) -> impl IntoView {
    move || match status.get() {
        Status::Success => Some(
            view! {
                <p class="text-center text-accent" role="status">"Message sent successfully!"</p>
            }
            .into_any(),
        ),
        Status::Error => Some(
            view! {
                <p class="text-center text-red-500" role="alert">
                    "Failed to send message. Please try again."
                </p>
            }
            .into_any(),
        ),
        Status::Idle | Status::Submitting => None,
    }
}
