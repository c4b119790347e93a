//! Contact request modal form
//!
//! Validates the same rules the API enforces, shows field errors inline,
//! and posts the submission to `/api/contact`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::contact::validation::{
    BRIEF_MAX_LENGTH, ContactInput, validate_brief, validate_email, validate_name,
};
use crate::ui::common::{BaseModal, FormField, TextAreaField};
use crate::ui::notifications::NotificationManager;

/// Contact modal with the demo request form
#[component]
pub fn ContactModal(
    /// Whether the modal is open
    is_open: Signal<bool>,
    /// Callback to close the modal
    on_close: Callback<()>,
    /// Toast manager for submit feedback
    notifications: NotificationManager,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let brief = RwSignal::new(String::new());

    let name_error = RwSignal::new(Option::<String>::None);
    let email_error = RwSignal::new(Option::<String>::None);
    let brief_error = RwSignal::new(Option::<String>::None);

    let is_submitting = RwSignal::new(false);

    let reset_form = move || {
        name.set(String::new());
        email.set(String::new());
        brief.set(String::new());
        name_error.set(None);
        email_error.set(None);
        brief_error.set(None);
    };

    let handle_submit = move |_| {
        let input = ContactInput {
            name: name.get(),
            email: email.get(),
            brief: brief.get(),
        };

        // Client-side validation; the API re-checks the same rules
        name_error.set(validate_name(&input.name).err());
        email_error.set(validate_email(&input.email).err());
        brief_error.set(validate_brief(&input.brief).err());

        if name_error.get_untracked().is_some()
            || email_error.get_untracked().is_some()
            || brief_error.get_untracked().is_some()
        {
            return;
        }

        is_submitting.set(true);

        spawn_local(async move {
            #[cfg(not(feature = "ssr"))]
            {
                use gloo_net::http::Request;

                match Request::post("/api/contact")
                    .header("Content-Type", "application/json")
                    .json(&input)
                {
                    Ok(req) => match req.send().await {
                        Ok(response) => {
                            if response.ok() {
                                notifications.success(
                                    "Message sent!",
                                    "We'll get back to you within 24 hours.",
                                );
                                reset_form();
                                on_close.run(());
                            } else {
                                notifications.error(
                                    "Error",
                                    "Failed to send message. Please try again.",
                                );
                            }
                        }
                        Err(_) => {
                            notifications
                                .error("Error", "Failed to send message. Please try again.");
                        }
                    },
                    Err(_) => {
                        notifications.error("Error", "Failed to send message. Please try again.");
                    }
                }
            }
            #[cfg(feature = "ssr")]
            {
                let _ = &input;
            }
            is_submitting.set(false);
        });
    };

    view! {
        <BaseModal
            title="Request a Demo".to_string()
            subtitle="Tell us about your project and we'll get back to you within 24 hours".to_string()
            is_open=is_open
            on_close=on_close
            max_width="max-w-lg"
        >
            <div class="space-y-6">
                <FormField
                    label="Name".to_string()
                    required=true
                    placeholder="Your name".to_string()
                    value=Signal::from(name)
                    on_input=Callback::new(move |v| name.set(v))
                    disabled=false
                    error=Signal::derive(move || name_error.get())
                />

                <FormField
                    label="Email".to_string()
                    required=true
                    input_type="email"
                    placeholder="your@email.com".to_string()
                    value=Signal::from(email)
                    on_input=Callback::new(move |v| email.set(v))
                    disabled=false
                    error=Signal::derive(move || email_error.get())
                />

                <div>
                    <TextAreaField
                        label="Project Brief (140 chars max)".to_string()
                        required=true
                        placeholder="Tell us about your project...".to_string()
                        value=Signal::from(brief)
                        on_input=Callback::new(move |v| brief.set(v))
                        rows=4
                        max_length=BRIEF_MAX_LENGTH as u32
                        disabled=false
                        error=Signal::derive(move || brief_error.get())
                    />
                    <p class="text-sm text-gray-500 mt-1.5">
                        {move || format!("{}/{} characters", brief.get().chars().count(), BRIEF_MAX_LENGTH)}
                    </p>
                </div>

                <button
                    class="minimal-button minimal-button-primary w-full"
                    disabled=move || is_submitting.get()
                    on:click=handle_submit
                >
                    {move || if is_submitting.get() { "Sending..." } else { "Send Message" }}
                </button>
            </div>
        </BaseModal>
    }
}
