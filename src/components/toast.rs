use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::section_link::SectionLink;
use crate::config::TOAST_LIFETIME_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Info,
    Success,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    /// Label and in-page href of an optional action link.
    pub action: Option<(String, String)>,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Toast {
            title: title.into(),
            description: description.into(),
            action: None,
            variant: ToastVariant::Info,
        }
    }

    pub fn success(mut self) -> Self {
        self.variant = ToastVariant::Success;
        self
    }

    pub fn with_action(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.action = Some((label.into(), href.into()));
        self
    }
}

pub enum ToastAction {
    Push(u32, Toast),
    Dismiss(u32),
}

#[derive(Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<(u32, Toast)>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: ToastAction) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(id, toast) => toasts.push((id, toast)),
            ToastAction::Dismiss(id) => toasts.retain(|(tid, _)| *tid != id),
        }
        Rc::new(ToastList { toasts })
    }
}

/// Handed to descendants to show a toast.
pub type ToastContext = Callback<Toast>;

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
    #[prop_or_default]
    pub children: Children,
}

/// Provides `ToastContext` and renders the stack in the bottom-right corner,
/// above the theme toggle.
#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u32);

    let push = {
        let dispatcher = list.dispatcher();
        use_callback(
            move |toast: Toast, _| {
                log::debug!("Toast: {}", toast.title);
                let id = {
                    let mut next_id = next_id.borrow_mut();
                    *next_id += 1;
                    *next_id
                };
                dispatcher.dispatch(ToastAction::Push(id, toast));
                let dismiss = dispatcher.clone();
                Timeout::new(TOAST_LIFETIME_MS, move || {
                    dismiss.dispatch(ToastAction::Dismiss(id));
                })
                .forget();
            },
            (),
        )
    };

    html! {
        <ContextProvider<ToastContext> context={push}>
            { for props.children.iter() }
            <div class="toast-viewport">
                { for list.toasts.iter().map(|(id, toast)| {
                    let dismiss = {
                        let dispatcher = list.dispatcher();
                        let id = *id;
                        Callback::from(move |_: MouseEvent| dispatcher.dispatch(ToastAction::Dismiss(id)))
                    };
                    let variant = match toast.variant {
                        ToastVariant::Info => "toast",
                        ToastVariant::Success => "toast toast-success",
                    };
                    html! {
                        <div key={*id} class={variant} onclick={dismiss}>
                            <div class="toast-title">{&toast.title}</div>
                            <div class="toast-description">{&toast.description}</div>
                            {
                                if let Some((label, href)) = &toast.action {
                                    html! {
                                        <SectionLink href={href.clone()} classes="toast-action">
                                            {label}
                                        </SectionLink>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }
                }) }
            </div>
            <style>
                {r#"
                    .toast-viewport {
                        position: fixed;
                        bottom: 4.5rem;
                        right: 1rem;
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                        z-index: 100;
                        max-width: 360px;
                    }
                    .toast {
                        background: var(--card);
                        color: var(--foreground);
                        border: 1px solid var(--border);
                        border-radius: 12px;
                        padding: 1rem 1.25rem;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.15);
                        cursor: pointer;
                        animation: toastIn 0.3s ease-out;
                    }
                    .toast-success {
                        border-color: #16a34a;
                    }
                    .toast-title {
                        font-weight: 600;
                        margin-bottom: 0.25rem;
                    }
                    .toast-description {
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    .toast-action {
                        display: inline-block;
                        margin-top: 0.75rem;
                        background: var(--primary);
                        color: white;
                        padding: 0.5rem 0.75rem;
                        border-radius: 6px;
                        font-size: 0.75rem;
                        font-weight: 500;
                        text-decoration: none;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(20px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
        </ContextProvider<ToastContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_toasts_stack_in_order() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(1, Toast::new("a", "first")));
        let list = list.reduce(ToastAction::Push(2, Toast::new("b", "second")));
        let titles: Vec<&str> = list.toasts.iter().map(|(_, t)| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let list = Rc::new(ToastList::default())
            .reduce(ToastAction::Push(1, Toast::new("a", "first")))
            .reduce(ToastAction::Push(2, Toast::new("b", "second").success()))
            .reduce(ToastAction::Dismiss(1));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].1.title, "b");
        assert_eq!(list.toasts[0].1.variant, ToastVariant::Success);
    }
}
