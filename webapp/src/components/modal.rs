use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ModalProps {
    title: String,
    #[props(default)]
    size: ModalSize,
    on_close: EventHandler<()>,
    children: Element,
    #[props(default)]
    footer: Option<Element>,
}

#[derive(Clone, Default, PartialEq)]
pub enum ModalSize {
    Small,
    #[default]
    Medium,
    Large,
}

// overlay dialog
//
// closes on the close button, a click on the backdrop, or Escape.  what "close" means is
// up to the caller
#[component]
pub fn Modal(props: ModalProps) -> Element {
    let width = match props.size {
        ModalSize::Small => "max-width: 420px;",
        ModalSize::Medium => "max-width: 640px;",
        ModalSize::Large => "max-width: 860px;",
    };

    let on_close = props.on_close;

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |evt| {
                evt.stop_propagation();
                on_close.call(());
            },
            div {
                class: "modal-content",
                style: "{width}",
                tabindex: "-1",
                role: "dialog",
                "aria-modal": "true",
                // take focus so Escape reaches us without a click first
                onmounted: move |element| async move {
                    let _ = element.set_focus(true).await;
                },
                onkeydown: move |evt| {
                    if evt.key() == Key::Escape {
                        on_close.call(());
                    }
                },
                // clicks inside the dialog must not reach the backdrop
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{props.title}" }
                    button {
                        class: "btn-close",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div { class: "modal-body", {props.children} }

                if let Some(footer) = &props.footer {
                    div { class: "modal-footer", {footer.clone()} }
                }
            }
        }
    }
}
