use dioxus::prelude::*;

/// Controlled single-line input.
///
/// The rendered value is always `value`; keystrokes only reach state through
/// `on_input`. `input_type` selects the native widget (`text`, `date`,
/// `number`, ...).
#[component]
pub fn TextField(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] name: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "text-field", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let placeholder = (!placeholder.is_empty()).then_some(placeholder);
    let name = (!name.is_empty()).then_some(name);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            name: name,
            value: value,
            placeholder: placeholder,
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness() -> Element {
        rsx! {
            TextField {
                value: "Paris",
                placeholder: "Departing from?",
                name: "departure",
            }
            TextField { value: "2", input_type: "number" }
        }
    }

    #[test]
    fn renders_value_type_and_placeholder() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"value="Paris""#));
        assert!(html.contains(r#"placeholder="Departing from?""#));
        assert!(html.contains(r#"name="departure""#));
        assert!(html.contains(r#"type="number""#));
        assert!(html.contains(r#"value="2""#));
    }

    #[test]
    fn empty_placeholder_is_omitted() {
        #[component]
        fn Bare() -> Element {
            rsx! { TextField { value: "" } }
        }

        let mut dom = VirtualDom::new(Bare);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"type="text""#));
        assert!(!html.contains("placeholder"));
    }
}
