use dioxus::prelude::*;

/// Placeholder shown while the well depth CSV is being fetched.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "padding: 40px; text-align: center; color: #666;",
            "Loading well depth data..."
        }
    }
}
