use dioxus::prelude::*;

/// Lays form controls out in a single wrapping row.
#[component]
pub fn FieldRow(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field-row",
            {children}
        }
    }
}
