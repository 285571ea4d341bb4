//! # Input Components
//!
//! Form inputs shared by the list pages and the dialogs:
//! - **TextInput**: single-line text input with label and error
//! - **SearchInput**: search box used above the tables
//! - **Select**: dropdown selection
//!

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    #[props(default)]
    pub placeholder: Option<String>,

    /// Help text shown below input
    #[props(default)]
    pub help_text: Option<String>,

    /// Error message (shows error state)
    #[props(default)]
    pub error: Option<String>,

    #[props(default = false)]
    pub required: bool,

    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, email, password, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Prefix text, such as a currency sign
    #[props(default)]
    pub prefix: Option<String>,

    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<String>,
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.error.is_some(), props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label {
                    class: "input-label",
                    "{label}"
                    if props.required {
                        span { class: "text-rose-400 ml-1", "*" }
                    }
                }
            }

            div {
                class: "relative flex items-center",

                if let Some(prefix) = &props.prefix {
                    span { class: "input-prefix", "{prefix}" }
                }

                input {
                    class: "{input_class}",
                    class: if props.prefix.is_some() { "pl-8" } else { "" },
                    r#type: "{props.input_type}",
                    value: "{props.value}",
                    placeholder: props.placeholder.as_deref().unwrap_or(""),
                    disabled: props.disabled,
                    oninput: move |e| props.on_change.call(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            props.on_enter.call(props.value.clone());
                        }
                    },
                }
            }

            if let Some(error) = &props.error {
                p { class: "mt-1 text-xs text-rose-400", "{error}" }
            } else if let Some(help) = &props.help_text {
                p { class: "mt-1 text-xs text-slate-500", "{help}" }
            }
        }
    }
}

// ============================================================================
// Search Input Component
// ============================================================================

/// Search box with a clear button
#[component]
pub fn SearchInput(
    value: String,
    #[props(default = "Search...".to_string())] placeholder: String,
    on_change: EventHandler<String>,
) -> Element {
    let has_value = !value.is_empty();
    let input_class = build_input_class(false, false);

    rsx! {
        div {
            class: "relative flex items-center search-input",
            span { class: "input-prefix", "🔍" }
            input {
                class: "{input_class} pl-8",
                r#type: "search",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |e| on_change.call(e.value()),
            }
            if has_value {
                button {
                    class: "input-clear",
                    title: "Clear search",
                    onclick: move |_| on_change.call(String::new()),
                    "✕"
                }
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// A single option in a Select component
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

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value, empty for the placeholder
    pub value: String,

    pub options: Vec<SelectOption>,

    #[props(default)]
    pub label: Option<String>,

    /// Selectable empty option shown first, such as "All suppliers"
    #[props(default)]
    pub placeholder: Option<String>,

    #[props(default = false)]
    pub disabled: bool,

    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let select_class = build_input_class(false, props.disabled);

    rsx! {
        div {
            class: "input-group",

            if let Some(label) = &props.label {
                label { class: "input-label", "{label}" }
            }

            select {
                class: "{select_class} select",
                disabled: props.disabled,
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for option in &props.options {
                    option {
                        key: "{option.value}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build input class string
fn build_input_class(has_error: bool, disabled: bool) -> String {
    let mut classes = vec!["input"];

    if has_error {
        classes.push("input-error");
    }

    if disabled {
        classes.push("opacity-50");
        classes.push("cursor-not-allowed");
    }

    classes.join(" ")
}

// ============================================================================
// Tests
// ============================================================================
