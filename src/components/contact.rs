use std::convert::Infallible;

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::forms::{self, ContactFields, FormPhase};

/// Which contact field currently has focus, for the emphasis ring.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    FirstName,
    LastName,
    Email,
    Subject,
    Message,
}

/// Contact form with client-side validation and a simulated send.
///
/// Validation runs before anything else: a failure alerts and leaves the form
/// untouched, so no timer is ever scheduled for an invalid submission. A valid
/// submit walks the same phase cycle as the newsletter, just slower, and
/// clears every field once the fake send "lands".
#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let phase = use_state(|| FormPhase::Idle);
    let focused = use_state(|| None::<Field>);
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);

    let onsubmit = {
        let phase = phase.clone();
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let subject = subject.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = *phase;
            if current.is_busy() {
                return;
            }

            let fields = ContactFields {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                email: (*email).clone(),
                subject: (*subject).clone(),
                message: (*message).clone(),
            };
            if let Err(error) = forms::validate_contact(&fields) {
                log!("contact: rejected:", error.message());
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(error.message());
                }
                return;
            }

            log!("contact: message send simulated");
            let submitting = current.begin();
            phase.set(submitting);

            let phase = phase.clone();
            let first_name = first_name.clone();
            let last_name = last_name.clone();
            let email = email.clone();
            let subject = subject.clone();
            let message = message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(forms::CONTACT_SUBMIT_MS).await;
                let succeeded = submitting.complete(&Ok::<(), Infallible>(()));
                phase.set(succeeded);
                first_name.set(String::new());
                last_name.set(String::new());
                email.set(String::new());
                subject.set(String::new());
                message.set(String::new());

                TimeoutFuture::new(forms::CONTACT_RESET_MS).await;
                phase.set(succeeded.reset());
            });
        })
    };

    let focus_on = {
        let focused = focused.clone();
        move |field: Field| {
            let focused = focused.clone();
            Callback::from(move |_: FocusEvent| focused.set(Some(field)))
        }
    };
    let blur = {
        let focused = focused.clone();
        Callback::from(move |_: FocusEvent| focused.set(None))
    };
    let group_class =
        |field: Field| classes!("field-group", (*focused == Some(field)).then(|| "focused"));

    let button_class = classes!(
        "submit-button",
        (*phase == FormPhase::Submitting).then(|| "submitting"),
        (*phase == FormPhase::Succeeded).then(|| "succeeded"),
    );
    let sent = *phase == FormPhase::Succeeded;
    let message_class = classes!(
        "success-message",
        (!sent).then(|| "hidden"),
        sent.then(|| "animate-pulse"),
    );

    html! {
        <>
            <style>
                {r#"
                    .contact-form {
                        display: grid;
                        gap: 1rem;
                        text-align: left;
                    }
                    .contact-form .name-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    @media (max-width: 767px) {
                        .contact-form .name-row {
                            grid-template-columns: 1fr;
                        }
                    }
                    .field-group {
                        display: flex;
                        flex-direction: column;
                        gap: 0.35rem;
                        transition: transform 0.2s ease;
                    }
                    .field-group label {
                        font-size: 0.9rem;
                        font-weight: 600;
                    }
                    .field-group input,
                    .field-group select,
                    .field-group textarea {
                        padding: 0.7rem 0.9rem;
                        border: 1px solid var(--border);
                        border-radius: 8px;
                        background: var(--surface);
                        color: var(--text);
                        font-size: 1rem;
                        transition: box-shadow 0.2s ease;
                    }
                    .field-group.focused {
                        transform: scale(1.05);
                    }
                    .field-group.focused input,
                    .field-group.focused select,
                    .field-group.focused textarea {
                        box-shadow: 0 0 0 4px rgba(37, 99, 235, 0.2);
                        outline: none;
                    }
                    .submit-button {
                        padding: 0.8rem 1.5rem;
                        border: none;
                        border-radius: 8px;
                        background: var(--accent);
                        color: #fff;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: background 0.3s ease, opacity 0.3s ease;
                    }
                    .submit-button.submitting {
                        opacity: 0.75;
                        cursor: wait;
                    }
                    .submit-button.succeeded {
                        background: #16a34a;
                    }
                "#}
            </style>
            <form id="contactForm" class="contact-form" {onsubmit}>
                <div class="name-row">
                    <div class={group_class(Field::FirstName)}>
                        <label for="firstName">{"First Name *"}</label>
                        <input
                            id="firstName"
                            name="firstName"
                            type="text"
                            value={(*first_name).clone()}
                            onfocus={focus_on(Field::FirstName)}
                            onblur={blur.clone()}
                            onchange={let first_name = first_name.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                first_name.set(input.value());
                            }}
                        />
                    </div>
                    <div class={group_class(Field::LastName)}>
                        <label for="lastName">{"Last Name *"}</label>
                        <input
                            id="lastName"
                            name="lastName"
                            type="text"
                            value={(*last_name).clone()}
                            onfocus={focus_on(Field::LastName)}
                            onblur={blur.clone()}
                            onchange={let last_name = last_name.clone(); move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                last_name.set(input.value());
                            }}
                        />
                    </div>
                </div>
                <div class={group_class(Field::Email)}>
                    <label for="contactEmail">{"Email *"}</label>
                    <input
                        id="contactEmail"
                        name="email"
                        type="email"
                        value={(*email).clone()}
                        onfocus={focus_on(Field::Email)}
                        onblur={blur.clone()}
                        onchange={let email = email.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                </div>
                <div class={group_class(Field::Subject)}>
                    <label for="subject">{"Subject *"}</label>
                    <select
                        id="subject"
                        name="subject"
                        onfocus={focus_on(Field::Subject)}
                        onblur={blur.clone()}
                        onchange={let subject = subject.clone(); move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            subject.set(select.value());
                        }}
                    >
                        <option value="" selected={subject.is_empty()} disabled={true}>
                            {"Select a subject"}
                        </option>
                        <option value="general" selected={*subject == "general"}>{"General Inquiry"}</option>
                        <option value="editorial" selected={*subject == "editorial"}>{"Editorial"}</option>
                        <option value="partnership" selected={*subject == "partnership"}>{"Partnerships"}</option>
                        <option value="careers" selected={*subject == "careers"}>{"Careers"}</option>
                    </select>
                </div>
                <div class={group_class(Field::Message)}>
                    <label for="contactMessage">{"Message *"}</label>
                    <textarea
                        id="contactMessage"
                        name="message"
                        rows="5"
                        value={(*message).clone()}
                        onfocus={focus_on(Field::Message)}
                        onblur={blur.clone()}
                        onchange={let message = message.clone(); move |e: Event| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            message.set(area.value());
                        }}
                    />
                </div>
                <button id="contactSubmitBtn" class={button_class} type="submit" disabled={(*phase).is_busy()}>
                    { forms::contact_label(*phase) }
                </button>
            </form>
            <div id="contactSuccessMessage" class={message_class}>
                {"✉️ Your message is on its way. We usually reply within two business days."}
            </div>
        </>
    }
}
