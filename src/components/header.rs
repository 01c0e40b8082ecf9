use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::section_link::SectionLink;
use crate::config::HEADER_SCROLLED_OFFSET;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "#"),
    ("Features", "#features"),
    ("How It Works", "#how-it-works"),
    ("Revolution", "#revolution"),
    ("Security", "#security"),
    ("Contact Us", "#contact"),
];

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_y = window
                            .as_ref()
                            .and_then(|w| w.scroll_y().ok())
                            .unwrap_or(0.0);
                        is_scrolled.set(scroll_y > HEADER_SCROLLED_OFFSET);
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <SectionLink href="#" classes="header-logo">
                    <span class="logo-icon">{"🛍️"}<span class="logo-pulse"></span></span>
                    <span class="logo-text">{"SoApp"}</span>
                </SectionLink>

                <nav class="desktop-nav">
                    { for NAV_LINKS.iter().map(|(name, href)| html! {
                        <SectionLink href={*href} classes="nav-link">
                            {*name}
                            <span class="nav-underline"></span>
                        </SectionLink>
                    }) }
                </nav>

                <div class="header-actions">
                    <SectionLink href="#contact" classes="get-started-button desktop-only">
                        {"Get Started"}
                    </SectionLink>
                    <button
                        class="burger-menu"
                        onclick={toggle_menu}
                        aria-expanded={(*menu_open).to_string()}
                        aria-label="Toggle menu"
                    >
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_LINKS.iter().enumerate().map(|(i, (name, href))| html! {
                                <div class="mobile-menu-item" style={format!("animation-delay: {}ms;", i * 100)}>
                                    <SectionLink href={*href} classes="nav-link" on_navigate={close_menu.clone()}>
                                        {*name}
                                    </SectionLink>
                                </div>
                            }) }
                            <SectionLink href="#contact" classes="get-started-button" on_navigate={close_menu.clone()}>
                                {"Get Started"}
                            </SectionLink>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        width: 100%;
                        border-bottom: 1px solid var(--border);
                        backdrop-filter: blur(12px);
                        background: var(--header-bg);
                        transition: all 0.3s ease;
                        animation: headerDrop 0.6s ease-out;
                    }
                    .site-header.scrolled {
                        background: var(--header-bg-scrolled);
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                    }
                    .header-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        height: 4rem;
                        padding: 0 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .header-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        text-decoration: none;
                    }
                    .logo-icon {
                        position: relative;
                        font-size: 1.5rem;
                    }
                    .logo-pulse {
                        position: absolute;
                        top: -2px;
                        right: -4px;
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        background: linear-gradient(90deg, var(--primary), #a855f7);
                        animation: pulse 2s infinite alternate;
                    }
                    .logo-text {
                        font-size: 1.25rem;
                        font-weight: 700;
                        background: linear-gradient(90deg, var(--primary), #a855f7);
                        -webkit-background-clip: text;
                        color: transparent;
                    }
                    .desktop-nav {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        position: relative;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: var(--foreground);
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .nav-link:hover, .nav-link.active {
                        color: var(--primary);
                    }
                    .nav-underline {
                        position: absolute;
                        left: 0;
                        bottom: -2px;
                        width: 100%;
                        height: 2px;
                        background: var(--primary);
                        transform: scaleX(0);
                        transition: transform 0.3s;
                    }
                    .nav-link:hover .nav-underline, .nav-link.active .nav-underline {
                        transform: scaleX(1);
                    }
                    .get-started-button {
                        background: linear-gradient(90deg, var(--primary), #a855f7);
                        color: white;
                        padding: 0.5rem 1rem;
                        border-radius: 8px;
                        font-size: 0.875rem;
                        text-decoration: none;
                        box-shadow: 0 4px 10px rgba(59, 130, 246, 0.25);
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: 1px solid var(--border);
                        border-radius: 8px;
                        width: 2.5rem;
                        height: 2.5rem;
                        color: var(--foreground);
                        cursor: pointer;
                    }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem;
                        border-top: 1px solid var(--border);
                    }
                    .mobile-menu-item {
                        animation: slideRight 0.3s ease-out both;
                    }
                    @media (max-width: 768px) {
                        .desktop-nav, .desktop-only {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                    }
                    @keyframes headerDrop {
                        from { transform: translateY(-100%); }
                        to { transform: translateY(0); }
                    }
                    @keyframes slideRight {
                        from { transform: translateX(-20px); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    @keyframes pulse {
                        from { transform: scale(1); }
                        to { transform: scale(1.2); }
                    }
                "#}
            </style>
        </header>
    }
}
