use yew::prelude::*;
use yew_hooks::use_interval;

use crate::components::reveal::{use_in_view, Reveal};
use crate::components::section_link::SectionLink;
use crate::config::HERO_STEP_INTERVAL_MS;

const STATS: &[(&str, &str)] = &[
    ("80%", "Faster Checkout"),
    ("25 min", "Time Saved"),
    ("100%", "Happier Shoppers"),
];

const STEPS: &[(&str, &str)] = &[("🛍️", "Scan"), ("🛒", "Add"), ("💳", "Pay"), ("✔️", "Go")];

/// Step after `step` in the Scan, Add, Pay, Go loop.
pub fn next_step(step: usize) -> usize {
    (step + 1) % STEPS.len()
}

/// Width of the step progress bar in percent.
pub fn step_progress(step: usize) -> usize {
    (step + 1) * 100 / STEPS.len()
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), false);
    let step = use_state(|| 0usize);

    {
        let step = step.clone();
        // An interval of 0 pauses the cycle while the hero is off screen.
        use_interval(
            move || step.set(next_step(*step)),
            if in_view { HERO_STEP_INTERVAL_MS } else { 0 },
        );
    }

    html! {
        <section class="hero-section" ref={node}>
            <div class="hero-blob hero-blob-left"></div>
            <div class="hero-blob hero-blob-right"></div>
            <div class="section-container hero-grid">
                <div class="hero-copy">
                    <Reveal>
                        <div class="badge">{"Revolutionary Shopping Experience"}</div>
                        <h1 class="gradient-text hero-title">
                            {"Revolutionizing In-Store Shopping with Seamless Checkout"}
                        </h1>
                        <p class="hero-subtitle">
                            {"Shop Fast, Checkout Faster with SoApp. No more queues, no more hassle, just scan, pay, and go."}
                        </p>
                    </Reveal>
                    <Reveal delay_ms={200} class="hero-cta-group">
                        <SectionLink href="#features" classes="primary-button">
                            {"Explore Features"}
                        </SectionLink>
                        <SectionLink href="#how-it-works" classes="secondary-button">
                            {"How It Works"}
                        </SectionLink>
                    </Reveal>
                    <Reveal delay_ms={400} class="hero-stats">
                        { for STATS.iter().map(|(value, label)| html! {
                            <div class="hero-stat">
                                <span class="hero-stat-value">{*value}</span>
                                <span class="hero-stat-label">{*label}</span>
                            </div>
                        }) }
                    </Reveal>
                </div>
                <Reveal delay_ms={300} class="hero-visual">
                    <img src="/assets/hero.webp" width="550" height="550" alt="SoApp Shopping Experience" />
                    <div class="hero-steps card">
                        <div class="hero-step-row">
                            { for STEPS.iter().enumerate().map(|(i, (icon, label))| html! {
                                <div class={classes!("hero-step", (i == *step).then_some("current"))}>
                                    <div class="hero-step-icon">{*icon}</div>
                                    <span>{*label}</span>
                                </div>
                            }) }
                        </div>
                        <div class="hero-step-track">
                            <div class="hero-step-fill" style={format!("width: {}%;", step_progress(*step))}></div>
                        </div>
                    </div>
                    <div class="hero-callout card">{"No more waiting in lines!"}</div>
                </Reveal>
            </div>
            <style>
                {r#"
                    .hero-section {
                        position: relative;
                        overflow: hidden;
                        padding: 6rem 0 8rem;
                        background: linear-gradient(180deg, var(--background), var(--muted-bg));
                    }
                    .hero-blob {
                        position: absolute;
                        width: 18rem;
                        height: 18rem;
                        border-radius: 50%;
                        filter: blur(60px);
                        opacity: 0.25;
                        animation: float 8s ease-in-out infinite alternate;
                    }
                    .hero-blob-left { top: 5rem; left: -4rem; background: var(--primary); }
                    .hero-blob-right { bottom: 2rem; right: -4rem; background: #a855f7; animation-delay: 2s; }
                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .hero-title {
                        font-size: 3.25rem;
                        line-height: 1.1;
                        margin: 0 0 1rem;
                    }
                    .hero-subtitle {
                        font-size: 1.2rem;
                        color: var(--muted);
                        max-width: 600px;
                    }
                    .hero-cta-group {
                        display: flex;
                        gap: 0.75rem;
                        margin-top: 2rem;
                        flex-wrap: wrap;
                    }
                    .hero-stats {
                        display: flex;
                        gap: 2rem;
                        margin-top: 2.5rem;
                    }
                    .hero-stat {
                        display: flex;
                        flex-direction: column;
                    }
                    .hero-stat-value {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: var(--primary);
                    }
                    .hero-stat-label {
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    .hero-visual {
                        position: relative;
                    }
                    .hero-visual img {
                        width: 100%;
                        height: auto;
                        border-radius: 24px;
                    }
                    .hero-steps {
                        position: absolute;
                        left: 1.5rem;
                        right: 1.5rem;
                        bottom: 1.5rem;
                    }
                    .hero-step-row {
                        display: flex;
                        justify-content: space-between;
                    }
                    .hero-step {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        font-size: 0.75rem;
                        color: var(--muted);
                    }
                    .hero-step-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: var(--muted-bg);
                        margin-bottom: 0.25rem;
                        transition: background 0.3s;
                    }
                    .hero-step.current {
                        color: var(--primary);
                    }
                    .hero-step.current .hero-step-icon {
                        background: var(--primary);
                        transform: scale(1.1);
                    }
                    .hero-step-track {
                        height: 6px;
                        border-radius: 3px;
                        background: var(--muted-bg);
                        margin-top: 0.75rem;
                        overflow: hidden;
                    }
                    .hero-step-fill {
                        height: 100%;
                        background: linear-gradient(90deg, var(--primary), #a855f7);
                        transition: width 0.5s;
                    }
                    .hero-callout {
                        position: absolute;
                        top: -1rem;
                        right: -1rem;
                        font-weight: 600;
                    }
                    @keyframes float {
                        from { transform: translate(0, 0) scale(1); }
                        to { transform: translate(20px, -20px) scale(1.2); }
                    }
                    @media (max-width: 900px) {
                        .hero-grid { grid-template-columns: 1fr; }
                        .hero-title { font-size: 2.25rem; }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_loop_back_to_scan() {
        assert_eq!(next_step(0), 1);
        assert_eq!(next_step(3), 0);
    }

    #[test]
    fn progress_fills_in_quarters() {
        assert_eq!(step_progress(0), 25);
        assert_eq!(step_progress(3), 100);
    }
}
