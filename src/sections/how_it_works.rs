use yew::prelude::*;

use crate::components::reveal::Reveal;

const STEPS: &[(&str, &str, &str)] = &[
    ("📷", "Scan Products", "Scan products directly using your smartphone while shopping."),
    (
        "🛍️",
        "Track Items",
        "View product details and track items as you add them to your own shopping/carry bag.",
    ),
    (
        "💳",
        "Complete Payment",
        "Complete your payment via the app after shopping and scan the receipt while checking out from the store.",
    ),
    ("🚶", "Skip the Queue", "No more waiting in checkout queues or using store-provided carts."),
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section id="how-it-works" class="page-section muted-section">
            <div class="section-container">
                <Reveal class="section-heading">
                    <div class="badge">{"Simple Process"}</div>
                    <h2 class="gradient-text">{"How It Works"}</h2>
                    <p>{"Four steps from the shelf to the door."}</p>
                </Reveal>
                <ol class="steps-timeline">
                    { for STEPS.iter().enumerate().map(|(i, (icon, title, description))| html! {
                        <li class="timeline-step">
                            <Reveal delay_ms={(i as u32) * 150} class="card timeline-card">
                                <div class="timeline-number">{i + 1}</div>
                                <div class="timeline-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </Reveal>
                        </li>
                    }) }
                </ol>
            </div>
            <style>
                {r#"
                    .steps-timeline {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                        position: relative;
                    }
                    .steps-timeline::before {
                        content: '';
                        position: absolute;
                        top: 2rem;
                        left: 5%;
                        right: 5%;
                        height: 2px;
                        background: linear-gradient(90deg, var(--primary), #a855f7);
                        opacity: 0.3;
                    }
                    .timeline-card {
                        position: relative;
                        text-align: center;
                    }
                    .timeline-number {
                        position: absolute;
                        top: -0.75rem;
                        left: -0.75rem;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 50%;
                        background: linear-gradient(90deg, var(--primary), #a855f7);
                        color: white;
                        font-weight: 700;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .timeline-icon {
                        font-size: 2rem;
                        margin-bottom: 0.75rem;
                    }
                    .timeline-card p {
                        color: var(--muted);
                        margin: 0;
                    }
                    @media (max-width: 900px) {
                        .steps-timeline { grid-template-columns: 1fr 1fr; }
                        .steps-timeline::before { display: none; }
                    }
                    @media (max-width: 600px) {
                        .steps-timeline { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
