//! Background parallax for the document pane.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

/// Scroll factors of the three background layers, nearest first.
pub const LAYER_FACTORS: [f64; 3] = [0.2, 0.1, 0.05];

/// CSS `transform` for a layer that moves `factor` times the scroll.
pub fn layer_transform(scroll_top: f64, factor: f64) -> String {
    format!("translateY({}px)", scroll_top * factor)
}
