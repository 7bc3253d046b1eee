use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default, into)] class: String,
    #[props(default = "text".to_string(), into)] r#type: String,
    #[props(default, into)] id: String,
    #[props(default, into)] placeholder: String,
    #[props(into)] value: String,
    #[props(default)] required: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            r#type: r#type.clone(),
            id: "{id}",
            placeholder: "{placeholder}",
            value: "{value}",
            required,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

/// A labelled form row.
#[component]
pub fn FormField(#[props(into)] label: String, #[props(into)] id: String, children: Element) -> Element {
    rsx! {
        div {
            class: "form-group",
            label { r#for: "{id}", "{label}" }
            {children}
        }
    }
}
