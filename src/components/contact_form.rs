//! Contact Form Component
//!
//! Live-validated contact form with draft autosave and a simulated async
//! submission. Failure keeps the entered values and the saved draft; success
//! clears both and reports through the analytics hook.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::analytics;
use crate::context::{AppContext, ToastKind};
use crate::storage::{self, ContactDraft};
use crate::submit;
use crate::validate;

/// Trailing-edge debounce for draft autosave
const DRAFT_DEBOUNCE_MS: u32 = 1000;

#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());

    let (name_err, set_name_err) = signal(None::<String>);
    let (email_err, set_email_err) = signal(None::<String>);
    let (subject_err, set_subject_err) = signal(None::<String>);
    let (message_err, set_message_err) = signal(None::<String>);

    let (submitting, set_submitting) = signal(false);

    // Restore an in-progress draft; malformed storage reads as empty
    Effect::new(move |_| {
        if let Some(draft) = storage::load_draft() {
            if !draft.name.is_empty() {
                set_name.set(draft.name);
            }
            if !draft.email.is_empty() {
                set_email.set(draft.email);
            }
            if !draft.subject.is_empty() {
                set_subject.set(draft.subject);
            }
            if !draft.message.is_empty() {
                set_message.set(draft.message);
            }
        }
    });

    // Autosave fires once per quiet second of typing; each keystroke resets
    // the pending timer.
    let save_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let schedule_save = {
        let save_timer = save_timer.clone();
        move || {
            save_timer.borrow_mut().take();
            let handle = Timeout::new(DRAFT_DEBOUNCE_MS, move || {
                storage::save_draft(&ContactDraft::from_fields(
                    &name.get_untracked(),
                    &email.get_untracked(),
                    &subject.get_untracked(),
                    &message.get_untracked(),
                ));
            });
            *save_timer.borrow_mut() = Some(handle);
        }
    };

    let on_submit = {
        let save_timer = save_timer.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            if submitting.get_untracked() {
                return;
            }

            let errors = [
                validate::field_error("name", &name.get_untracked()),
                validate::field_error("email", &email.get_untracked()),
                validate::field_error("subject", &subject.get_untracked()),
                validate::field_error("message", &message.get_untracked()),
            ];
            let failed = errors.iter().any(Option::is_some);
            let [e_name, e_email, e_subject, e_message] = errors;
            set_name_err.set(e_name);
            set_email_err.set(e_email);
            set_subject_err.set(e_subject);
            set_message_err.set(e_message);
            if failed {
                return;
            }

            set_submitting.set(true);
            let payload = ContactDraft::from_fields(
                name.get_untracked().trim(),
                email.get_untracked().trim(),
                subject.get_untracked().trim(),
                message.get_untracked().trim(),
            );
            let save_timer = save_timer.clone();
            spawn_local(async move {
                match submit::send_message(&payload).await {
                    Ok(()) => {
                        ctx.contact_message(
                            ToastKind::Success,
                            "Message sent successfully! I'll get back to you soon.",
                        );
                        // A pending autosave must not resurrect the draft
                        save_timer.borrow_mut().take();
                        storage::clear_draft();
                        set_name.set(String::new());
                        set_email.set(String::new());
                        set_subject.set(String::new());
                        set_message.set(String::new());
                        analytics::track_submission();
                    }
                    Err(err) => {
                        web_sys::console::warn_1(
                            &format!("[CONTACT] submission failed: {}", err).into(),
                        );
                        ctx.contact_message(
                            ToastKind::Error,
                            "Failed to send message. Please try again.",
                        );
                        // Entered values and the saved draft stay for a retry
                    }
                }
                set_submitting.set(false);
            });
        }
    };

    macro_rules! field_handlers {
        ($field:literal, $value:ident, $set_value:ident, $set_err:ident) => {{
            let schedule_save = schedule_save.clone();
            let on_input = move |ev| {
                let value = event_target_value(&ev);
                $set_err.set(validate::field_error($field, &value));
                $set_value.set(value);
                schedule_save();
            };
            let on_blur = move |_| {
                $set_err.set(validate::field_error($field, &$value.get_untracked()));
            };
            (on_input, on_blur)
        }};
    }

    let (name_input, name_blur) = field_handlers!("name", name, set_name, set_name_err);
    let (email_input, email_blur) = field_handlers!("email", email, set_email, set_email_err);
    let (subject_input, subject_blur) =
        field_handlers!("subject", subject, set_subject, set_subject_err);
    let (message_input, message_blur) =
        field_handlers!("message", message, set_message, set_message_err);

    let group_class = |err: ReadSignal<Option<String>>| {
        move || {
            if err.get().is_some() {
                "form-group error"
            } else {
                "form-group"
            }
        }
    };
    let field_error_view = |err: ReadSignal<Option<String>>| {
        move || err.get().map(|m| view! { <div class="field-error">{m}</div> })
    };

    view! {
        <form id="contactForm" class="contact-form" on:submit=on_submit>
            <div class=group_class(name_err)>
                <input
                    type="text"
                    name="name"
                    placeholder="Your Name"
                    prop:value=move || name.get()
                    on:input=name_input
                    on:blur=name_blur
                />
                {field_error_view(name_err)}
            </div>

            <div class=group_class(email_err)>
                <input
                    type="email"
                    name="email"
                    placeholder="Your Email"
                    prop:value=move || email.get()
                    on:input=email_input
                    on:blur=email_blur
                />
                {field_error_view(email_err)}
            </div>

            <div class=group_class(subject_err)>
                <input
                    type="text"
                    name="subject"
                    placeholder="Subject"
                    prop:value=move || subject.get()
                    on:input=subject_input
                    on:blur=subject_blur
                />
                {field_error_view(subject_err)}
            </div>

            <div class=group_class(message_err)>
                <textarea
                    name="message"
                    placeholder="Your Message"
                    prop:value=move || message.get()
                    on:input=message_input
                    on:blur=message_blur
                ></textarea>
                {field_error_view(message_err)}
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}
