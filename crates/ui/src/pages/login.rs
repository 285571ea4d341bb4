//! Login Page
//!
//! Gate in front of the dashboard. Accepts the configured username or email
//! with the matching password.

use dioxus::prelude::*;

use crate::components::inputs::TextInput;
use crate::hooks::use_app_state;

/// Login form
#[component]
pub fn LoginPage() -> Element {
    let mut state = use_app_state();
    let mut login = use_signal(String::new);
    let mut password = use_signal(String::new);

    let error = state.read().login_error.clone();

    let mut do_login = move |_: ()| {
        let accepted = state.write().login(&login.read(), &password.read());
        if !accepted {
            password.set(String::new());
        }
    };

    rsx! {
        div {
            class: "login-screen flex items-center justify-center h-screen w-screen",

            form {
                class: "login-card",
                onsubmit: move |e| {
                    e.prevent_default();
                    do_login(());
                },

                div {
                    class: "text-center mb-6",
                    p { class: "text-4xl mb-2", "🔌" }
                    h1 { class: "text-2xl font-bold", "Connector Manager" }
                    p { class: "text-sm text-slate-400", "Sign in to continue" }
                }

                if let Some(message) = error {
                    div { class: "alert alert-error mb-4", "{message}" }
                }

                div {
                    class: "space-y-4",

                    TextInput {
                        label: "Username or Email",
                        value: login.read().clone(),
                        placeholder: "admin",
                        required: true,
                        on_change: move |v: String| login.set(v),
                    }

                    TextInput {
                        label: "Password",
                        input_type: "password",
                        value: password.read().clone(),
                        required: true,
                        on_change: move |v: String| password.set(v),
                    }
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary w-full mt-6",
                    "Sign In"
                }
            }
        }
    }
}
