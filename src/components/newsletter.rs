use std::convert::Infallible;

use gloo_console::log;
use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::forms::{self, FormPhase};

/// Newsletter signup with a simulated subscribe call.
///
/// Submit disables the button and walks the form through its phases on two
/// chained timers. The timer callbacks carry the phase value forward instead
/// of re-reading state, so a stale handle can never replay a transition.
#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let phase = use_state(|| FormPhase::Idle);
    let email = use_state(String::new);

    let onsubmit = {
        let phase = phase.clone();
        let email = email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = *phase;
            if current.is_busy() {
                return;
            }
            log!("newsletter: subscription requested");
            let submitting = current.begin();
            phase.set(submitting);

            let phase = phase.clone();
            let email = email.clone();
            Timeout::new(forms::NEWSLETTER_SUBMIT_MS, move || {
                let succeeded = submitting.complete(&Ok::<(), Infallible>(()));
                phase.set(succeeded);
                email.set(String::new());

                let phase = phase.clone();
                Timeout::new(forms::NEWSLETTER_RESET_MS, move || {
                    phase.set(succeeded.reset());
                })
                .forget();
            })
            .forget();
        })
    };

    let succeeded = *phase == FormPhase::Succeeded;
    let message_class = classes!(
        "success-message",
        (!succeeded).then(|| "hidden"),
        succeeded.then(|| "animate-pulse"),
    );

    html! {
        <>
            <style>
                {r#"
                    .newsletter-form {
                        display: flex;
                        gap: 0.75rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .newsletter-form input {
                        flex: 1;
                        min-width: 220px;
                        max-width: 360px;
                        padding: 0.75rem 1rem;
                        border: 1px solid var(--border);
                        border-radius: 8px;
                        background: var(--surface);
                        color: var(--text);
                        font-size: 1rem;
                    }
                    .newsletter-form button {
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 8px;
                        background: var(--accent);
                        color: #fff;
                        font-size: 1rem;
                        cursor: pointer;
                        transition: background 0.2s ease, opacity 0.2s ease;
                    }
                    .newsletter-form button:disabled {
                        opacity: 0.75;
                        cursor: wait;
                    }
                    .success-message {
                        margin-top: 1rem;
                        color: #22c55e;
                        font-weight: 600;
                    }
                    .success-message.hidden {
                        display: none;
                    }
                "#}
            </style>
            <form id="newsletterForm" class="newsletter-form" {onsubmit}>
                <input
                    id="emailInput"
                    type="email"
                    placeholder="Enter your email"
                    required={true}
                    value={(*email).clone()}
                    onchange={let email = email.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        email.set(input.value());
                    }}
                />
                <button id="subscribeBtn" type="submit" disabled={(*phase).is_busy()}>
                    { forms::newsletter_label(*phase) }
                </button>
            </form>
            <div id="successMessage" class={message_class}>
                {"🎉 Thanks for subscribing! Check your inbox soon."}
            </div>
        </>
    }
}
