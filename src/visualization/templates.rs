/// Embedded HTML page for the scatter plot
pub const SCATTER_TEMPLATE: &str = include_str!("../../templates/scatter.html");

pub const C3_CSS_CDN: &str = "https://cdnjs.cloudflare.com/ajax/libs/c3/0.4.10/c3.min.css";
pub const D3_JS_CDN: &str = "https://cdnjs.cloudflare.com/ajax/libs/d3/3.5.15/d3.min.js";
pub const C3_JS_CDN: &str = "https://cdnjs.cloudflare.com/ajax/libs/c3/0.4.10/c3.min.js";

/// File names looked up in the assets directory when inlining
pub const C3_CSS_FILE: &str = "c3.min.css";
pub const D3_JS_FILE: &str = "d3.min.js";
pub const C3_JS_FILE: &str = "c3.min.js";
