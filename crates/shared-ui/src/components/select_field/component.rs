use dioxus::prelude::*;

/// One `<option>` of a [`SelectField`]: the submitted value and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Controlled native `<select>` built from a fixed option list.
///
/// Only the listed values can be chosen, so `onchange` always receives one of
/// them.
#[component]
pub fn SelectField(
    /// Currently selected option value.
    #[props(default)]
    value: String,
    options: Vec<SelectOption>,
    #[props(default)]
    onchange: Option<EventHandler<FormEvent>>,
    #[props(default)]
    name: String,
) -> Element {
    let name = (!name.is_empty()).then_some(name);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        select {
            class: "select-field",
            name: name,
            value: value.clone(),
            onchange: move |evt| {
                if let Some(handler) = &onchange {
                    handler.call(evt);
                }
            },
            for opt in options.iter() {
                option {
                    key: "{opt.value}",
                    value: "{opt.value}",
                    selected: opt.value == value,
                    "{opt.label}"
                }
            }
        }
    }
}
