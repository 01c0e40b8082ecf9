use yew::prelude::*;

use crate::components::reveal::Reveal;

const MEASURES: &[(&str, &str, &str)] = &[
    (
        "👮",
        "Increased Surveillance",
        "With SoApp's savings, retailers can enhance in-store security by hiring additional security guards and placing high-definition cameras throughout the store.",
    ),
    (
        "🎥",
        "Product Monitoring Cameras",
        "Every shelf is equipped with cameras to monitor product counts and prevent theft or accidental misplacements, providing real-time tracking.",
    ),
    (
        "⚖️",
        "Weighing Systems",
        "Weighing machines for products like vegetables and fruits enable accurate tracking of quantities bought by weight for transparent pricing.",
    ),
    (
        "📡",
        "AI & RFID/NFC Technology",
        "Each item is tagged with RFID/NFC technology, ensuring that only paid items can leave the store, preventing theft seamlessly.",
    ),
    (
        "🔑",
        "Two Factor Authentication",
        "Everybody has to go through all the factors of security before getting out of the store, including verifying the receipt from app at the exit.",
    ),
];

#[function_component(Security)]
pub fn security() -> Html {
    html! {
        <section id="security" class="page-section muted-section">
            <div class="section-container">
                <Reveal class="section-heading">
                    <div class="badge">{"Advanced Protection"}</div>
                    <h2 class="gradient-text">{"Security Measures"}</h2>
                    <p>{"Your security is our top priority"}</p>
                </Reveal>
                <div class="security-grid">
                    { for MEASURES.iter().enumerate().map(|(i, (icon, title, description))| html! {
                        <Reveal delay_ms={(i as u32) * 100} class="card security-card">
                            <div class="security-icon">{*icon}</div>
                            <div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .security-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 1.5rem;
                    }
                    .security-card {
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                        border-left: 4px solid var(--primary);
                    }
                    .security-icon {
                        font-size: 1.75rem;
                        flex-shrink: 0;
                    }
                    .security-card h3 {
                        margin: 0 0 0.5rem;
                    }
                    .security-card p {
                        color: var(--muted);
                        margin: 0;
                    }
                "#}
            </style>
        </section>
    }
}
