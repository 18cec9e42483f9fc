//! Container the D3 chart renders into.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3.js renders into
    pub id: String,
    /// Minimum height in pixels, usually the canvas height
    #[props(default = 1050)]
    pub min_height: u32,
}

/// A fixed-size div reserved for the chart so the page does not jump while it draws.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("min-height: {}px; overflow-x: auto;", props.min_height);

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
