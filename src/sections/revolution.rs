use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::section_link::SectionLink;

const BENEFITS: &[&str] = &[
    "Eliminating long queues and reducing checkout times.",
    "Minimizing the need for manpower in checkout counters.",
    "Allowing stores to focus on customer service and product availability.",
    "Encouraging cashless payment between customers.",
];

const STATS: &[(&str, &str)] = &[("200+", "Retail Partners"), ("50K+", "Happy Shoppers")];

#[function_component(Revolution)]
pub fn revolution() -> Html {
    html! {
        <section id="revolution" class="page-section">
            <div class="section-container revolution-grid">
                <Reveal class="revolution-visual">
                    <img src="/assets/revolution.webp" width="500" height="500" alt="SoApp Revolution" loading="lazy" />
                    <div class="revolution-tag card">{"Game Changer"}</div>
                </Reveal>
                <div>
                    <Reveal>
                        <div class="badge">{"Revolutionary Shopping"}</div>
                        <h2 class="gradient-text">{"The SoApp Revolution"}</h2>
                        <p class="revolution-lead">
                            {"SoApp changes how retail works for shoppers and stores alike by:"}
                        </p>
                    </Reveal>
                    <ul class="revolution-list">
                        { for BENEFITS.iter().enumerate().map(|(i, benefit)| html! {
                            <li>
                                <Reveal delay_ms={(i as u32) * 100} class="revolution-item">
                                    <span class="check">{"✓"}</span>
                                    <span>{*benefit}</span>
                                </Reveal>
                            </li>
                        }) }
                    </ul>
                    <Reveal delay_ms={400} class="revolution-footer">
                        <SectionLink href="#features" classes="primary-button">
                            {"See the Features"}
                        </SectionLink>
                        { for STATS.iter().map(|(value, label)| html! {
                            <div class="hero-stat">
                                <span class="hero-stat-value">{*value}</span>
                                <span class="hero-stat-label">{*label}</span>
                            </div>
                        }) }
                    </Reveal>
                </div>
            </div>
            <style>
                {r#"
                    .revolution-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .revolution-visual {
                        position: relative;
                    }
                    .revolution-visual img {
                        width: 100%;
                        height: auto;
                        border-radius: 24px;
                    }
                    .revolution-tag {
                        position: absolute;
                        bottom: -1rem;
                        left: -1rem;
                        font-weight: 600;
                    }
                    .revolution-lead {
                        color: var(--muted);
                    }
                    .revolution-list {
                        list-style: none;
                        padding: 0;
                        margin: 1.5rem 0;
                    }
                    .revolution-item {
                        display: flex;
                        gap: 0.75rem;
                        align-items: flex-start;
                        margin-bottom: 0.75rem;
                    }
                    .check {
                        flex-shrink: 0;
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 50%;
                        background: var(--primary-soft);
                        color: var(--primary);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.8rem;
                    }
                    .revolution-footer {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                        flex-wrap: wrap;
                    }
                    @media (max-width: 900px) {
                        .revolution-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
