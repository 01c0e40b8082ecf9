use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::header::Header;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::section_link::NavContext;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::toast::{Toast, ToastContext, Toaster};
use crate::config::{ACTIVE_THRESHOLD, SECTION_IDS, WELCOME_TOAST_DELAY_MS};
use crate::navigation::{NavigationSession, RegionId, Resolution};
use crate::sections::{
    contact::Contact, features::Features, footer::Footer, hero::Hero, how_it_works::HowItWorks,
    revolution::Revolution, security::Security,
};

/// The whole page. Owns the navigation session for as long as it is mounted
/// and shares the active section with everything below it.
#[function_component(Landing)]
pub fn landing() -> Html {
    let active = use_state(|| None::<RegionId>);
    let session = use_mut_ref(|| None::<NavigationSession>);

    {
        let active = active.clone();
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                let on_active = move |id: Option<RegionId>| active.set(id);
                match NavigationSession::start(SECTION_IDS, ACTIVE_THRESHOLD, on_active) {
                    Ok(started) => *session.borrow_mut() = Some(started),
                    Err(e) => log::warn!("Section navigation unavailable: {}", e),
                }
                move || {
                    session.borrow_mut().take();
                }
            },
            (),
        );
    }

    let activate = {
        let session = session.clone();
        Callback::from(move |href: String| {
            if let Some(session) = session.borrow().as_ref() {
                if session.activate(&href) == Resolution::Unresolved {
                    log::debug!("Link {} has no matching section", href);
                }
            }
        })
    };

    let context = NavContext {
        active: (*active).clone(),
        activate,
    };

    html! {
        <ContextProvider<NavContext> {context}>
            <Toaster>
                <LandingContent />
            </Toaster>
        </ContextProvider<NavContext>>
    }
}

#[function_component(LandingContent)]
fn landing_content() -> Html {
    let toast = use_context::<ToastContext>();

    // Greet once, shortly after the page is up.
    {
        use_effect_with_deps(
            move |_| {
                let pending = toast.map(|toast| {
                    Timeout::new(WELCOME_TOAST_DELAY_MS, move || {
                        toast.emit(
                            Toast::new("Welcome to SoApp!", "Explore our revolutionary shopping experience")
                                .with_action("Discover Features", "#features"),
                        );
                    })
                });
                move || drop(pending)
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <Header />
            <ScrollProgress />
            <main>
                <Hero />
                <Features />
                <HowItWorks />
                <Revolution />
                <Security />
                <Contact />
            </main>
            <Footer />
            <ThemeToggle />
            <style>
                {r#"
                    :root, html.light {
                        --background: #ffffff;
                        --foreground: #0f172a;
                        --muted: #64748b;
                        --muted-bg: #f1f5f9;
                        --border: #e2e8f0;
                        --card: #ffffff;
                        --primary: #3b82f6;
                        --primary-soft: rgba(59, 130, 246, 0.1);
                        --header-bg: rgba(255, 255, 255, 0.8);
                        --header-bg-scrolled: rgba(255, 255, 255, 0.95);
                    }
                    html.dark {
                        --background: #0b1120;
                        --foreground: #e2e8f0;
                        --muted: #94a3b8;
                        --muted-bg: #111827;
                        --border: #1f2937;
                        --card: #111827;
                        --primary: #60a5fa;
                        --primary-soft: rgba(96, 165, 250, 0.12);
                        --header-bg: rgba(11, 17, 32, 0.8);
                        --header-bg-scrolled: rgba(11, 17, 32, 0.95);
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        background: var(--background);
                        color: var(--foreground);
                        transition: background 0.3s, color 0.3s;
                    }
                    .landing-page {
                        display: flex;
                        flex-direction: column;
                        min-height: 100vh;
                    }
                    main {
                        flex: 1;
                    }
                    .section-container {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .page-section {
                        position: relative;
                        padding: 6rem 0;
                        overflow: hidden;
                    }
                    .muted-section {
                        background: var(--muted-bg);
                    }
                    .section-heading {
                        text-align: center;
                        max-width: 900px;
                        margin: 0 auto 3rem;
                    }
                    .section-heading h2 {
                        font-size: 2.75rem;
                        margin: 0.5rem 0 1rem;
                    }
                    .section-heading p {
                        color: var(--muted);
                        font-size: 1.15rem;
                    }
                    .badge {
                        display: inline-block;
                        background: var(--primary);
                        color: white;
                        border-radius: 999px;
                        padding: 0.15rem 0.65rem;
                        font-size: 0.75rem;
                        font-weight: 600;
                        margin-bottom: 1rem;
                    }
                    .gradient-text {
                        background: linear-gradient(90deg, var(--primary), #a855f7, var(--primary));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .card {
                        background: var(--card);
                        border: 1px solid var(--border);
                        border-radius: 16px;
                        padding: 1.5rem;
                        box-shadow: 0 6px 18px rgba(0, 0, 0, 0.05);
                    }
                    .primary-button, .secondary-button {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        padding: 0.7rem 1.5rem;
                        border-radius: 8px;
                        font-weight: 500;
                        font-size: 0.9rem;
                        text-decoration: none;
                        transition: transform 0.2s, box-shadow 0.2s;
                    }
                    .primary-button {
                        background: linear-gradient(90deg, var(--primary), #a855f7);
                        color: white;
                        box-shadow: 0 6px 16px rgba(59, 130, 246, 0.3);
                    }
                    .secondary-button {
                        border: 1px solid var(--border);
                        color: var(--foreground);
                        background: var(--card);
                    }
                    .primary-button:hover, .secondary-button:hover {
                        transform: scale(1.05);
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(20px);
                        transition-property: opacity, transform;
                        transition-duration: 0.6s;
                        transition-timing-function: ease-out;
                    }
                    .reveal.revealed {
                        opacity: 1;
                        transform: translateY(0);
                    }
                "#}
            </style>
        </div>
    }
}
