use leptos::{ev::SubmitEvent, prelude::*};

use crate::contact::{ContactState, Field, RESET_DELAY};
use crate::content::PROFILE;
use crate::nav::Section;

use super::icons::{Glyph, Icon};

const INPUT_CLASS: &str = "w-full px-4 py-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-600 focus:border-transparent outline-none transition-all";

#[component]
pub fn Contact() -> impl IntoView {
    let state = RwSignal::new(ContactState::default());

    let value_of = move |field: Field| move || state.with(|s| s.form.get(field).to_string());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match state.try_update(ContactState::submit) {
            Some(Ok(ticket)) => set_timeout(
                move || {
                    // the signal is gone if the section unmounted meanwhile
                    if let Some(true) = state.try_update(|s| s.expire(ticket)) {
                        log::debug!("contact status reset to idle");
                    }
                },
                RESET_DELAY,
            ),
            Some(Err(e)) => log::warn!("contact form rejected: {e}"),
            None => {}
        }
    };

    view! {
        <section id=Section::Contact.id() class="py-20 bg-gradient-to-br from-gray-50 to-blue-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl sm:text-5xl font-bold text-gray-900 mb-4">"Get In Touch"</h2>
                    <p class="text-xl text-gray-600 max-w-3xl mx-auto">
                        "Have a project in mind? Let's work together to create something amazing"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 gap-12 max-w-5xl mx-auto">
                    <div>
                        <h3 class="text-2xl font-bold text-gray-900 mb-6">
                            "Let's talk about your project"
                        </h3>
                        <p class="text-gray-600 mb-8 leading-relaxed">
                            "I'm always interested in hearing about new projects and opportunities. Whether you have a question or just want to say hi, feel free to reach out!"
                        </p>
                        <div class="space-y-6">
                            <div class="flex items-start gap-4">
                                <div class="w-12 h-12 bg-blue-600 text-white rounded-lg flex items-center justify-center flex-shrink-0">
                                    <Glyph icon=Icon::Mail />
                                </div>
                                <div>
                                    <h4 class="font-semibold text-gray-900 mb-1">"Email"</h4>
                                    <a
                                        href=PROFILE.mailto()
                                        class="text-gray-600 hover:text-blue-600 transition-colors"
                                    >
                                        {PROFILE.email}
                                    </a>
                                </div>
                            </div>
                            <div class="flex items-start gap-4">
                                <div class="w-12 h-12 bg-cyan-600 text-white rounded-lg flex items-center justify-center flex-shrink-0">
                                    <Glyph icon=Icon::MapPin />
                                </div>
                                <div>
                                    <h4 class="font-semibold text-gray-900 mb-1">"Location"</h4>
                                    <p class="text-gray-600">{PROFILE.location}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                    <form class="bg-white p-8 rounded-2xl shadow-lg" on:submit=on_submit>
                        <div class="mb-6">
                            <label for="contact_name" class="block text-gray-700 font-medium mb-2">
                                {Field::Name.label()}
                            </label>
                            <input
                                id="contact_name"
                                type="text"
                                required
                                placeholder="Your name"
                                class=INPUT_CLASS
                                prop:value=value_of(Field::Name)
                                on:input=move |ev| state.update(|s| s.form.set(Field::Name, event_target_value(&ev)))
                            />
                        </div>
                        <div class="mb-6">
                            <label for="contact_email" class="block text-gray-700 font-medium mb-2">
                                {Field::Email.label()}
                            </label>
                            <input
                                id="contact_email"
                                type="email"
                                required
                                placeholder="your.email@example.com"
                                class=INPUT_CLASS
                                prop:value=value_of(Field::Email)
                                on:input=move |ev| state.update(|s| s.form.set(Field::Email, event_target_value(&ev)))
                            />
                        </div>
                        <div class="mb-6">
                            <label for="contact_message" class="block text-gray-700 font-medium mb-2">
                                {Field::Message.label()}
                            </label>
                            <textarea
                                id="contact_message"
                                required
                                rows=5
                                placeholder="Tell me about your project..."
                                class=format!("{INPUT_CLASS} resize-none")
                                prop:value=value_of(Field::Message)
                                on:input=move |ev| state.update(|s| s.form.set(Field::Message, event_target_value(&ev)))
                            ></textarea>
                        </div>
                        {move || {
                            state
                                .with(ContactState::is_success)
                                .then(|| {
                                    view! {
                                        <div class="mb-4 p-4 bg-green-50 text-green-700 rounded-lg">
                                            "Thanks for reaching out! I'll get back to you soon."
                                        </div>
                                    }
                                })
                        }}
                        <button
                            type="submit"
                            class="w-full bg-blue-600 text-white py-3 rounded-lg font-medium hover:bg-blue-700 transition-colors flex items-center justify-center gap-2"
                        >
                            <Glyph icon=Icon::Send size=20 />
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}
