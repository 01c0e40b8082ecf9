use chrono::Datelike;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::section_link::SectionLink;
use crate::components::toast::{Toast, ToastContext};
use crate::sections::contact::{is_plausible_email, simulate_submission, SubmissionState};

const QUICK_LINKS: &[&str] = &["Home", "Features", "How It Works", "Security"];

const LEGAL_LINKS: &[&str] = &["Terms", "Privacy", "Cookies", "FAQ", "Support"];

const DEVELOPER_LINKS: &[(&str, &str, &str)] = &[
    ("GitHub", "https://github.com/pratikkale26", "GH"),
    ("X (Twitter)", "https://x.com/pratikkale26", "X"),
    ("LinkedIn", "https://linkedin.com/in/pratikkale26", "in"),
    ("Instagram", "https://instagram.com/kalep_26", "IG"),
];

/// "How It Works" -> "#how-it-works".
pub fn quick_link_href(name: &str) -> String {
    let slug: Vec<String> = name.split_whitespace().map(|w| w.to_lowercase()).collect();
    format!("#{}", slug.join("-"))
}

fn newsletter_label(state: SubmissionState) -> &'static str {
    match state {
        SubmissionState::Idle => "Subscribe",
        SubmissionState::Submitting => "...",
        SubmissionState::Submitted => "Subscribed!",
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);
    let submission = use_state(SubmissionState::default);
    let toast = use_context::<ToastContext>();
    let current_year = chrono::Local::now().year();

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !submission.accepts_submit() || !is_plausible_email(&email) {
                return;
            }
            log::debug!("Simulated newsletter signup for {}", *email);
            let email = email.clone();
            let toast = toast.clone();
            simulate_submission(submission.clone(), move || {
                if let Some(toast) = toast {
                    toast.emit(Toast::new("Subscribed!", "Thanks for following SoApp.").success());
                }
                email.set(String::new());
            });
        })
    };

    html! {
        <footer class="site-footer">
            <div class="section-container footer-grid">
                <div class="footer-brand">
                    <SectionLink href="#" classes="header-logo">
                        <span class="logo-icon">{"🛍️"}</span>
                        <span class="logo-text">{"SoApp"}</span>
                    </SectionLink>
                    <p>{"Revolutionizing in-store shopping with seamless checkout. Shop fast, checkout faster with SoApp."}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul class="footer-links">
                        { for QUICK_LINKS.iter().map(|name| html! {
                            <li>
                                <SectionLink href={quick_link_href(name)} classes="footer-link">
                                    {*name}
                                </SectionLink>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Legal"}</h4>
                    <ul class="footer-links">
                        { for LEGAL_LINKS.iter().map(|name| html! {
                            <li>
                                <SectionLink href="#" classes="footer-link">{*name}</SectionLink>
                            </li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Newsletter"}</h4>
                    <p>{"Subscribe to our newsletter for updates."}</p>
                    <form class="newsletter-form" {onsubmit}>
                        <input
                            type="email"
                            placeholder="Enter your email"
                            value={(*email).clone()}
                            oninput={on_email}
                            required=true
                        />
                        <button type="submit" class="primary-button" disabled={!submission.accepts_submit()}>
                            {newsletter_label(*submission)}
                        </button>
                    </form>
                    <h4 class="developer-heading">{"Developer"}</h4>
                    <p>
                        {"Developed with ❤️ by "}
                        <a href="https://github.com/pratikkale26" target="_blank" rel="noopener noreferrer">{"Pratik"}</a>
                    </p>
                    <div class="developer-links">
                        { for DEVELOPER_LINKS.iter().map(|(name, href, short)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*name} class="social-link">
                                {*short}
                            </a>
                        }) }
                    </div>
                </div>
            </div>
            <p class="copyright">{format!("© {} SoApp. All rights reserved.", current_year)}</p>
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid var(--border);
                        background: var(--muted-bg);
                        padding: 3rem 0 1.5rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 2fr;
                        gap: 2rem;
                    }
                    .footer-brand p, .site-footer p {
                        color: var(--muted);
                        font-size: 0.875rem;
                    }
                    .footer-links {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .footer-links li {
                        margin-bottom: 0.5rem;
                    }
                    .footer-link {
                        color: var(--muted);
                        font-size: 0.875rem;
                        text-decoration: none;
                        transition: color 0.2s, padding-left 0.2s;
                    }
                    .footer-link:hover {
                        color: var(--primary);
                        padding-left: 5px;
                    }
                    .newsletter-form {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .newsletter-form input {
                        flex: 1;
                        min-width: 0;
                        border: 1px solid var(--border);
                        border-radius: 8px;
                        background: var(--background);
                        color: var(--foreground);
                        padding: 0.5rem 0.75rem;
                    }
                    .newsletter-form button {
                        border: none;
                        cursor: pointer;
                    }
                    .developer-heading {
                        margin-top: 1.5rem;
                    }
                    .developer-links {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .developer-links .social-link {
                        width: 2.25rem;
                        height: 2.25rem;
                        font-size: 0.75rem;
                    }
                    .copyright {
                        text-align: center;
                        margin-top: 2rem;
                        padding-top: 1.5rem;
                        border-top: 1px solid var(--border);
                    }
                    @media (max-width: 900px) {
                        .footer-grid { grid-template-columns: 1fr 1fr; }
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_links_point_at_sections() {
        assert_eq!(quick_link_href("How It Works"), "#how-it-works");
        assert_eq!(quick_link_href("Security"), "#security");
        // There is no home section, so this resolves to nothing and only
        // updates the address.
        assert_eq!(quick_link_href("Home"), "#home");
    }

    #[test]
    fn newsletter_button_follows_submission() {
        assert_eq!(newsletter_label(SubmissionState::Idle), "Subscribe");
        assert_eq!(newsletter_label(SubmissionState::Submitted), "Subscribed!");
    }
}
