use yew::prelude::*;

use crate::theme::Theme;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(Theme::load);

    {
        use_effect_with_deps(
            move |theme: &Theme| {
                theme.apply();
                || ()
            },
            *theme,
        );
    }

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.set(theme.toggled()))
    };

    let (icon, label) = match *theme {
        Theme::Light => ("🌙", "Switch to dark theme"),
        Theme::Dark => ("☀️", "Switch to light theme"),
    };

    html! {
        <div class="theme-toggle-container">
            <button class="theme-toggle" {onclick} aria-label={label} title={label}>
                {icon}
            </button>
            <style>
                {r#"
                    .theme-toggle-container {
                        position: fixed;
                        bottom: 1rem;
                        right: 1rem;
                        z-index: 50;
                    }
                    .theme-toggle {
                        width: 2.75rem;
                        height: 2.75rem;
                        border-radius: 50%;
                        border: 1px solid var(--border);
                        background: var(--card);
                        font-size: 1.25rem;
                        cursor: pointer;
                        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15);
                        transition: transform 0.2s;
                    }
                    .theme-toggle:hover {
                        transform: scale(1.1);
                    }
                "#}
            </style>
        </div>
    }
}
