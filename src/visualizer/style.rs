// Named chart palettes with first-available fallback.

use crate::config::{FALLBACK_PLOT_STYLE, PREFERRED_PLOT_STYLE};
use plotters::style::RGBColor;

/// Aesthetic palette applied to every chart of a run. Selection has no
/// effect on data, only on rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotStyle {
    pub name: &'static str,
    pub background: RGBColor,
    pub grid: RGBColor,
    pub series: RGBColor,
    pub accent: RGBColor,
}

const SEABORN: PlotStyle = PlotStyle {
    name: "seaborn",
    background: RGBColor(234, 234, 242),
    grid: RGBColor(255, 255, 255),
    series: RGBColor(76, 114, 176),
    accent: RGBColor(221, 132, 82),
};

const GGPLOT: PlotStyle = PlotStyle {
    name: "ggplot",
    background: RGBColor(229, 229, 229),
    grid: RGBColor(255, 255, 255),
    series: RGBColor(226, 74, 51),
    accent: RGBColor(52, 138, 189),
};

/// Looks up a built-in palette by name.
pub fn style_by_name(name: &str) -> Option<PlotStyle> {
    match name {
        "seaborn" => Some(SEABORN),
        "ggplot" => Some(GGPLOT),
        _ => None,
    }
}

/// The preferred palette when available, the fixed fallback otherwise.
pub fn resolve_style() -> PlotStyle {
    style_by_name(PREFERRED_PLOT_STYLE)
        .or_else(|| style_by_name(FALLBACK_PLOT_STYLE))
        .unwrap_or(GGPLOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_styles_resolve() {
        assert_eq!(style_by_name("seaborn").unwrap().name, "seaborn");
        assert_eq!(style_by_name("ggplot").unwrap().name, "ggplot");
    }

    #[test]
    fn unknown_style_is_none() {
        assert!(style_by_name("solarized").is_none());
    }

    #[test]
    fn resolution_prefers_seaborn() {
        assert_eq!(resolve_style().name, "seaborn");
    }
}
