use yew::prelude::*;

use crate::navigation::reconciler::NavTarget;
use crate::navigation::RegionId;

/// Shared with every component under the landing page: the section that is
/// on screen, and the entry point for in-page link clicks.
#[derive(Clone, PartialEq)]
pub struct NavContext {
    pub active: Option<RegionId>,
    pub activate: Callback<String>,
}

/// "#" is the hero and is active while no section is. Other links are active
/// when they point at the active section.
pub fn is_link_active(href: &str, active: Option<&RegionId>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(""), None) => true,
        (Some(id), Some(active)) if !id.is_empty() => id == active.as_str(),
        _ => false,
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub active_class: Option<AttrValue>,
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// An `<a href="#...">` that scrolls smoothly instead of jumping.
#[function_component(SectionLink)]
pub fn section_link(props: &SectionLinkProps) -> Html {
    let nav = use_context::<NavContext>();
    let active = nav
        .as_ref()
        .map(|nav| is_link_active(&props.href, nav.active.as_ref()))
        .unwrap_or(false);

    let onclick = {
        let href = props.href.to_string();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            if let (Some(nav), Some(_)) = (&nav, NavTarget::parse(&href)) {
                e.prevent_default();
                nav.activate.emit(href.clone());
            }
            if let Some(on_navigate) = &on_navigate {
                on_navigate.emit(());
            }
        })
    };

    let class = classes!(
        props.classes.clone(),
        active.then(|| props.active_class.clone().unwrap_or_else(|| "active".into()).to_string())
    );

    html! {
        <a
            href={props.href.clone()}
            class={class}
            aria-current={active.then(|| AttrValue::from("page"))}
            {onclick}
        >
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_active_without_a_section() {
        assert!(is_link_active("#", None));
        assert!(!is_link_active("#", Some(&RegionId::new("features"))));
    }

    #[test]
    fn section_links_match_by_id() {
        let active = RegionId::new("how-it-works");
        assert!(is_link_active("#how-it-works", Some(&active)));
        assert!(!is_link_active("#features", Some(&active)));
        assert!(!is_link_active("#features", None));
        assert!(!is_link_active("https://soappnew.netlify.app/", Some(&active)));
    }
}
