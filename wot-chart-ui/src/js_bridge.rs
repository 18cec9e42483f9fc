//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart lives in `assets/js/well-depth-chart.js`. It is evaluated
//! as a global once D3 has loaded and exposed via `window.*`. This module
//! fetches the dataset and serializes chart data and layout for those globals.

use anyhow::{anyhow, bail};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;
use wot_data::Dataset;

// Embed the D3 chart JS at compile time
static WELL_DEPTH_CHART_JS: &str = include_str!("../assets/js/well-depth-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WOT JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `text` as a JS string literal.
fn js_string(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The script is evaluated at global scope via indirect eval once `d3` is
/// defined, then its functions are promoted to `window.*`.
pub fn init_charts() {
    call_js(&format!(
        "window.__wotChartScripts = {};",
        js_string(WELL_DEPTH_CHART_JS)
    ));

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__wotChartScripts);
                    delete window.__wotChartScripts;
                    if (typeof renderWellDepthChart !== 'undefined') window.renderWellDepthChart = renderWellDepthChart;
                    if (typeof destroyWellDepthChart !== 'undefined') window.destroyWellDepthChart = destroyWellDepthChart;
                    window.__wotChartsReady = true;
                    console.log('WOT charts initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

/// JS that draws the chart once D3, the chart script and the container exist.
fn render_call(container_id: &str, data_json: &str, config_json: &str) -> String {
    let id = js_string(container_id);
    format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__wotChartsReady &&
                    typeof window.renderWellDepthChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderWellDepthChart({id}, {data}, {config});
                    }} catch(e) {{ console.error('[WOT] renderWellDepthChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        id = id,
        data = js_string(data_json),
        config = js_string(config_json),
    )
}

/// Render (or update) the well depth bar chart in `container_id`.
///
/// Uses a polling loop to wait for D3.js to load, the chart script to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_well_depth_chart(container_id: &str, data_json: &str, config_json: &str) {
    call_js(&render_call(container_id, data_json, config_json));
}

/// Remove the chart from the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyWellDepthChart) {{ window.destroyWellDepthChart({}); }}",
        js_string(container_id)
    ));
}

fn js_error(context: &str, err: JsValue) -> anyhow::Error {
    anyhow!("{}: {:?}", context, err)
}

/// Fetch `url` and return the response body as bytes.
pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no browser window available"))?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| js_error("fetch failed", e))?;
    let response: Response = value
        .dyn_into()
        .map_err(|e| js_error("fetch did not return a Response", e))?;
    if !response.ok() {
        bail!("GET {} returned HTTP {}", url, response.status());
    }
    let buffer = JsFuture::from(
        response
            .array_buffer()
            .map_err(|e| js_error("response body unavailable", e))?,
    )
    .await
    .map_err(|e| js_error("failed to read response body", e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// Fetch and parse the well depth CSV (plain or gzip).
pub async fn load_dataset(url: &str) -> anyhow::Result<Dataset> {
    let bytes = fetch_bytes(url).await?;
    let dataset = Dataset::from_source(&bytes)?;
    log::info!("loaded {} well depth records from {}", dataset.len(), url);
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_call_quotes_arguments() {
        let js = render_call("well-depth-chart", r#"{"station":"O'Neil Well"}"#, "{}");
        assert!(js.contains(r#"document.getElementById("well-depth-chart")"#));
        assert!(js.contains(
            r#"window.renderWellDepthChart("well-depth-chart", "{\"station\":\"O'Neil Well\"}", "{}")"#
        ));
    }

    #[test]
    fn chart_script_defines_globals() {
        assert!(WELL_DEPTH_CHART_JS.contains("function renderWellDepthChart(containerId, dataJson, configJson)"));
        assert!(WELL_DEPTH_CHART_JS.contains("function destroyWellDepthChart(containerId)"));
    }

    #[test]
    fn bar_layer_is_joined_in_place() {
        // layers are created once and reused across renders
        assert!(WELL_DEPTH_CHART_JS.contains("if (svg.empty())"));
        assert!(!WELL_DEPTH_CHART_JS.contains("innerHTML"));
        // bars go through enter/update/exit on the persistent line-group
        assert!(WELL_DEPTH_CHART_JS.contains(".selectAll('rect.bar')"));
        assert!(WELL_DEPTH_CHART_JS.contains(".data(bars)"));
        assert!(WELL_DEPTH_CHART_JS.contains("rects.exit().remove()"));
        assert!(WELL_DEPTH_CHART_JS.contains(".merge(rects)"));
    }

    #[test]
    fn overlay_is_emptied_before_redraw() {
        let clear = WELL_DEPTH_CHART_JS
            .find("overlay.selectAll('*').remove()")
            .unwrap();
        let title = WELL_DEPTH_CHART_JS.find("'chart-title'").unwrap();
        let image = WELL_DEPTH_CHART_JS.find("append('image')").unwrap();
        assert!(clear < title && clear < image);
    }
}
