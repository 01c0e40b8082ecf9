use yew::prelude::*;

use crate::components::reveal::Reveal;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "📱",
        title: "Seamless Checkout",
        description: "Customers scan products directly while shopping using their own devices.",
    },
    Feature {
        icon: "📦",
        title: "Real-Time Inventory",
        description: "Store managers and customers receive alerts when a product is out of stock.",
    },
    Feature {
        icon: "🧭",
        title: "In-Store Navigation",
        description: "Customers can search for items and get directions to the exact aisle in the store.",
    },
    Feature {
        icon: "🌐",
        title: "Multiple Language Support",
        description: "Ensures accessibility for all customers, including voice commands for the elderly or visually impaired.",
    },
    Feature {
        icon: "↩️",
        title: "Contactless Returns",
        description: "Process returns directly through the app, saving time and effort.",
    },
    Feature {
        icon: "🔐",
        title: "Enhanced Security",
        description: "Offers secure payments using facial recognition and fingerprint authorization.",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="page-section">
            <div class="section-container">
                <Reveal class="section-heading">
                    <div class="badge">{"Key Features"}</div>
                    <h2 class="gradient-text">{"Everything You Need for a Better Shopping Experience"}</h2>
                    <p>{"SoApp brings the checkout to your pocket, with tools for shoppers and store managers alike."}</p>
                </Reveal>
                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <Reveal delay_ms={(i as u32) * 100} class="card feature-card">
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .feature-card {
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .feature-card:hover {
                        transform: translateY(-6px);
                        box-shadow: 0 16px 32px rgba(59, 130, 246, 0.15);
                    }
                    .feature-icon {
                        font-size: 1.75rem;
                        width: 3rem;
                        height: 3rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 12px;
                        background: var(--primary-soft);
                        margin-bottom: 1rem;
                    }
                    .feature-card h3 {
                        margin: 0 0 0.5rem;
                    }
                    .feature-card p {
                        color: var(--muted);
                        margin: 0;
                    }
                    @media (max-width: 900px) {
                        .features-grid { grid-template-columns: 1fr 1fr; }
                    }
                    @media (max-width: 600px) {
                        .features-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
        </section>
    }
}
