use dioxus::prelude::*;

/// Submit control for a [`Form`](crate::components::Form).
///
/// Always `type="submit"`: clicking it fires the enclosing form's submit
/// event rather than a click handler.
#[component]
pub fn SubmitButton(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "submit-button", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        button {
            r#type: "submit",
            ..merged,
            {children}
        }
    }
}
