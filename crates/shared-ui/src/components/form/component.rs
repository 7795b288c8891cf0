use dioxus::prelude::*;

/// Form wrapper whose native submission never navigates.
///
/// `prevent_default()` runs before `onsubmit`, so the page stays put even when
/// no handler is attached.
#[component]
pub fn Form(
    #[props(default)] onsubmit: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "form", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        form {
            onsubmit: move |evt: FormEvent| submit_in_place(evt, onsubmit),
            ..merged,
            {children}
        }
    }
}

/// Cancel the browser's default submit action, then hand the event on.
pub fn submit_in_place<T: 'static>(evt: Event<T>, handler: Option<EventHandler<Event<T>>>) {
    evt.prevent_default();
    if let Some(handler) = handler {
        handler.call(evt);
    }
}
