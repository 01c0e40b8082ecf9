use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::{SCROLL_TIP_DELAY_MS, SCROLL_TIP_MAX_PROGRESS, SCROLL_TIP_VISIBLE_MS};

/// How far down the page the reader is, from 0.0 to 1.0.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

fn current_progress() -> f64 {
    let Some(window) = web_sys::window() else { return 0.0 };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_progress(scroll_y, scroll_height, viewport_height)
}

/// Thin bar along the top edge, plus a "Scroll to explore" hint for readers
/// who have not scrolled after a few seconds.
#[function_component(ScrollProgress)]
pub fn scroll_progress_bar() -> Html {
    let progress = use_state(|| 0.0f64);
    let show_tip = use_state(|| false);

    {
        let progress = progress.clone();
        let show_tip = show_tip.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let value = current_progress();
                    if value > SCROLL_TIP_MAX_PROGRESS {
                        show_tip.set(false);
                    }
                    progress.set(value);
                }) as Box<dyn FnMut()>);

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

    // Tip appears after a delay, then hides itself.
    {
        let show_tip = show_tip.clone();
        use_effect_with_deps(
            move |_| {
                let hide_timer = std::rc::Rc::new(std::cell::RefCell::new(None::<Timeout>));
                let show_timer = {
                    let hide_timer = hide_timer.clone();
                    Timeout::new(SCROLL_TIP_DELAY_MS, move || {
                        if current_progress() < SCROLL_TIP_MAX_PROGRESS {
                            show_tip.set(true);
                            let show_tip = show_tip.clone();
                            *hide_timer.borrow_mut() = Some(Timeout::new(SCROLL_TIP_VISIBLE_MS, move || {
                                show_tip.set(false);
                            }));
                        }
                    })
                };
                move || {
                    drop(show_timer);
                    hide_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <>
            <div class="scroll-progress" style={format!("transform: scaleX({});", *progress)}></div>
            {
                if *show_tip {
                    html! {
                        <div class="scroll-tip">
                            <span class="scroll-tip-arrow">{"↓"}</span>
                            <span>{"Scroll to explore"}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .scroll-progress {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 4px;
                        background: var(--primary);
                        transform-origin: left;
                        transition: transform 0.15s ease-out;
                        z-index: 60;
                    }
                    .scroll-tip {
                        position: fixed;
                        bottom: 5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        background: var(--primary);
                        color: white;
                        padding: 0.5rem 1rem;
                        border-radius: 999px;
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.2);
                        animation: tipIn 0.4s ease-out;
                        z-index: 60;
                    }
                    .scroll-tip-arrow {
                        animation: bounce 1s infinite;
                    }
                    @keyframes tipIn {
                        from { transform: translate(-50%, 50px); opacity: 0; }
                        to { transform: translate(-50%, 0); opacity: 1; }
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-25%); }
                    }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_fraction_of_scrollable_height() {
        assert_eq!(scroll_progress(0.0, 5000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2000.0, 5000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(4000.0, 5000.0, 1000.0), 1.0);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(-50.0, 5000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(4200.0, 5000.0, 1000.0), 1.0);
    }

    #[test]
    fn short_pages_have_no_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
    }
}
