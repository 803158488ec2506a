//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The timeline chart lives in `assets/js/timeline-chart.js` and is drawn
//! with Google Charts. The loader script is injected on demand, the chart
//! functions are evaluated as globals once `google.visualization` is ready
//! and then exposed via `window.*`.

static TIMELINE_CHART_JS: &str = include_str!("../assets/js/timeline-chart.js");

/// Google Charts loader.
const LOADER_URL: &str = "https://www.gstatic.com/charts/loader.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('PA JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Load Google Charts with the timeline package and install the chart
/// functions. Safe to call more than once.
///
/// `language` selects the locale of axis labels (e.g. `"pl"`).
pub fn init_charts(language: &str) {
    let store_js = format!(
        "if (!window.__paChartsReady) {{ window.__paChartScripts = {}; }}",
        js_string(TIMELINE_CHART_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = format!(
        r#"
        (function() {{
            if (window.__paChartsReady || window.__paChartsLoading) {{ return; }}
            window.__paChartsLoading = true;
            if (typeof google === 'undefined' || !google.charts) {{
                var script = document.createElement('script');
                script.src = {loader};
                document.head.appendChild(script);
            }}
            var waitForLoader = setInterval(function() {{
                if (typeof google !== 'undefined' && google.charts) {{
                    clearInterval(waitForLoader);
                    google.charts.load('current', {{packages: ['timeline'], language: {language}}});
                    google.charts.setOnLoadCallback(function() {{
                        // Eval at global scope via indirect eval
                        (0, eval)(window.__paChartScripts);
                        delete window.__paChartScripts;
                        if (typeof renderTimelineChart !== 'undefined') window.renderTimelineChart = renderTimelineChart;
                        if (typeof destroyTimelineChart !== 'undefined') window.destroyTimelineChart = destroyTimelineChart;
                        window.__paChartsReady = true;
                        console.log('PA charts initialized');
                    }});
                }}
            }}, 100);
        }})();
        "#,
        loader = js_string(LOADER_URL),
        language = js_string(language),
    );
    let _ = js_sys::eval(&init_js);
}

/// Draw a timeline into `container_id`, replacing any previous chart.
///
/// Uses a polling loop to wait for Google Charts, the chart functions and
/// the container DOM element before drawing.
pub fn render_timeline(container_id: &str, rows_json: &str, config_json: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var containerId = {container};
            var poll = setInterval(function() {{
                if (window.__paChartsReady &&
                    typeof window.renderTimelineChart !== 'undefined' &&
                    document.getElementById(containerId)) {{
                    clearInterval(poll);
                    try {{
                        window.renderTimelineChart(containerId, {rows}, {config});
                    }} catch(e) {{ console.error('[PA] renderTimelineChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        container = js_string(container_id),
        rows = js_string(rows_json),
        config = js_string(config_json),
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyTimelineChart) {{ window.destroyTimelineChart({0}); }} \
         else {{ var el = document.getElementById({0}); if (el) el.innerHTML = ''; }}",
        js_string(container_id)
    ));
}
