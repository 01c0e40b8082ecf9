use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::navigation::SectionObserver;

/// True while the node is on screen. With `once`, stays true after the first
/// sighting.
#[hook]
pub fn use_in_view(node: NodeRef, once: bool) -> bool {
    let in_view = use_state(|| false);

    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<web_sys::Element>().and_then(|element| {
                    let seen = in_view.clone();
                    SectionObserver::observe([&element], REVEAL_THRESHOLD, move |entries| {
                        let visible = entries.iter().any(|e| e.is_intersecting);
                        if visible || !once {
                            seen.set(visible);
                        }
                    })
                    .map_err(|e| {
                        log::warn!("Reveal animation disabled: {}", e);
                        // Without an observer, show the content straight away.
                        in_view.set(true);
                    })
                    .ok()
                });
                move || drop(observer)
            },
            node,
        );
    }

    *in_view
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Stagger in milliseconds before the transition starts.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and slides its children in when scrolled into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.once);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), visible.then_some("revealed"))}
            style={format!("transition-delay: {}ms;", props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}
