use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::toast::{Toast, ToastContext};
use crate::config::{SUBMITTED_RESET_MS, SUBMIT_DELAY_MS};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && is_plausible_email(&self.email) && !self.message.trim().is_empty()
    }
}

pub fn is_plausible_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((user, domain)) => !user.is_empty() && !domain.is_empty(),
        None => false,
    }
}

/// Forms here never reach a server. Submitting just runs through these
/// states on a timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmissionState {
    /// Only an idle form takes a new submission, so a pending reset never
    /// lands on a later run.
    pub fn accepts_submit(self) -> bool {
        self == SubmissionState::Idle
    }

    pub fn contact_label(self) -> &'static str {
        match self {
            SubmissionState::Idle => "Send Message",
            SubmissionState::Submitting => "Sending...",
            SubmissionState::Submitted => "Message Sent!",
        }
    }
}

/// Runs the fake submission: wait, report success, then settle back to idle.
pub fn simulate_submission(
    state: UseStateHandle<SubmissionState>,
    on_sent: impl FnOnce() + 'static,
) {
    state.set(SubmissionState::Submitting);
    spawn_local(async move {
        TimeoutFuture::new(SUBMIT_DELAY_MS).await;
        state.set(SubmissionState::Submitted);
        on_sent();
        TimeoutFuture::new(SUBMITTED_RESET_MS).await;
        state.set(SubmissionState::Idle);
    });
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let submission = use_state(SubmissionState::default);
    let toast = use_context::<ToastContext>();

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { name: input.value(), ..(*form).clone() });
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { email: input.value(), ..(*form).clone() });
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm { message: input.value(), ..(*form).clone() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !submission.accepts_submit() || !form.is_complete() {
                return;
            }
            match serde_json::to_string(&*form) {
                Ok(payload) => log::debug!("Simulated contact submission: {}", payload),
                Err(e) => log::warn!("Could not serialize contact form: {}", e),
            }
            let form = form.clone();
            let toast = toast.clone();
            simulate_submission(submission.clone(), move || {
                if let Some(toast) = toast {
                    toast.emit(
                        Toast::new("Message sent!", "We'll get back to you as soon as possible.")
                            .success(),
                    );
                }
                form.set(ContactForm::default());
            });
        })
    };

    let state = *submission;

    html! {
        <section id="contact" class="page-section">
            <div class="section-container">
                <Reveal class="section-heading">
                    <div class="badge">{"Get In Touch"}</div>
                    <h2 class="gradient-text">{"Contact Us"}</h2>
                    <p>{"Have questions about SoApp? We're here to help."}</p>
                </Reveal>
                <div class="contact-grid">
                    <Reveal class="card contact-form-card">
                        <h3 class="gradient-text">{"Get in Touch"}</h3>
                        <p class="card-description">{"Fill out the form and we'll get back to you as soon as possible."}</p>
                        <form class="contact-form" {onsubmit}>
                            <label for="name">{"Name"}</label>
                            <input
                                id="name"
                                value={form.name.clone()}
                                oninput={on_name}
                                placeholder="Enter your name"
                                required=true
                            />
                            <label for="email">{"Email"}</label>
                            <input
                                id="email"
                                type="email"
                                value={form.email.clone()}
                                oninput={on_email}
                                placeholder="Enter your email"
                                required=true
                            />
                            <label for="message">{"Message"}</label>
                            <textarea
                                id="message"
                                value={form.message.clone()}
                                oninput={on_message}
                                placeholder="Enter your message"
                                required=true
                            />
                            <button
                                type="submit"
                                class={classes!("primary-button", "submit-button", (state == SubmissionState::Submitted).then_some("sent"))}
                                disabled={!state.accepts_submit()}
                            >
                                {state.contact_label()}
                            </button>
                        </form>
                    </Reveal>
                    <div class="contact-side">
                        <Reveal delay_ms={200} class="card">
                            <h3 class="gradient-text">{"Contact Information"}</h3>
                            <div class="contact-line"><span class="contact-icon">{"✉️"}</span>{"soappnew@gmail.com"}</div>
                            <div class="contact-line"><span class="contact-icon">{"📞"}</span>{"+91 7990590921"}</div>
                            <div class="contact-line">
                                <span class="contact-icon">{"🌐"}</span>
                                <a href="https://soappnew.netlify.app/" target="_blank" rel="noopener noreferrer">
                                    {"soappnew.netlify.app"}
                                </a>
                            </div>
                        </Reveal>
                        <Reveal delay_ms={300} class="card">
                            <h3 class="gradient-text">{"Follow Us"}</h3>
                            <div class="social-row">
                                <a
                                    href="https://www.linkedin.com/company/soappnew/posts/?feedView=all"
                                    class="social-link"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="Follow us on LinkedIn"
                                >
                                    {"in"}
                                </a>
                            </div>
                        </Reveal>
                        <Reveal delay_ms={400} class="award-badge">
                            <div class="award-icon">{"🏆"}</div>
                            <div>
                                <p class="award-title">{"Award Winning App"}</p>
                                <p class="award-subtitle">{"E-Summit IIIT Delhi 2025"}</p>
                            </div>
                        </Reveal>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                        max-width: 1000px;
                        margin: 0 auto;
                    }
                    .contact-form {
                        display: grid;
                        gap: 0.5rem;
                    }
                    .contact-form label {
                        font-size: 0.875rem;
                        font-weight: 500;
                        margin-top: 0.5rem;
                    }
                    .contact-form input, .contact-form textarea {
                        width: 100%;
                        border: 1px solid var(--border);
                        border-radius: 8px;
                        background: var(--background);
                        color: var(--foreground);
                        padding: 0.6rem 0.75rem;
                        font-size: 0.9rem;
                        box-sizing: border-box;
                        transition: border-color 0.3s;
                    }
                    .contact-form input:focus, .contact-form textarea:focus {
                        outline: none;
                        border-color: var(--primary);
                    }
                    .contact-form textarea {
                        min-height: 100px;
                    }
                    .submit-button {
                        margin-top: 1rem;
                        width: 100%;
                        border: none;
                        cursor: pointer;
                    }
                    .submit-button:disabled {
                        opacity: 0.6;
                        cursor: not-allowed;
                    }
                    .submit-button.sent {
                        background: #16a34a;
                    }
                    .card-description {
                        color: var(--muted);
                        font-size: 0.9rem;
                    }
                    .contact-side {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .contact-line {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-top: 0.75rem;
                    }
                    .contact-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: var(--primary-soft);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .social-row {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .social-link {
                        border-radius: 50%;
                        width: 2.75rem;
                        height: 2.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: var(--primary-soft);
                        color: var(--primary);
                        font-weight: 700;
                        text-decoration: none;
                        transition: transform 0.2s;
                    }
                    .social-link:hover {
                        transform: scale(1.2) rotate(5deg);
                    }
                    .award-badge {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem;
                        border-radius: 12px;
                        border: 1px solid var(--border);
                        background: var(--primary-soft);
                    }
                    .award-icon {
                        font-size: 1.75rem;
                    }
                    .award-title {
                        font-weight: 600;
                        margin: 0;
                    }
                    .award-subtitle {
                        font-size: 0.875rem;
                        color: var(--muted);
                        margin: 0;
                    }
                    @media (max-width: 900px) {
                        .contact-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            message: "Which stores support SoApp?".to_string(),
        }
    }

    #[test]
    fn complete_form_is_accepted() {
        assert!(filled().is_complete());
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert!(!ContactForm { name: "  ".to_string(), ..filled() }.is_complete());
        assert!(!ContactForm { message: String::new(), ..filled() }.is_complete());
        assert!(!ContactForm::default().is_complete());
    }

    #[test]
    fn email_needs_both_sides_of_the_at() {
        assert!(is_plausible_email("a@b"));
        assert!(!is_plausible_email("asha.example.com"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("asha@"));
    }

    #[test]
    fn button_is_locked_until_back_to_idle() {
        assert!(SubmissionState::Idle.accepts_submit());
        assert!(!SubmissionState::Submitting.accepts_submit());
        assert!(!SubmissionState::Submitted.accepts_submit());
        assert_eq!(SubmissionState::Submitting.contact_label(), "Sending...");
        assert_eq!(SubmissionState::Submitted.contact_label(), "Message Sent!");
    }

    #[test]
    fn payload_serializes_all_fields() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["email"], "asha@example.com");
        assert_eq!(json["name"], "Asha");
    }
}
