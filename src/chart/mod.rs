//! Renderer-independent chart descriptions.
//!
//! Adapters in [`adapters`] turn aggregation results into a [`ChartSpec`];
//! `ui::chart_panel` is the only place that hands them to `egui_plot`.

pub mod adapters;

use egui::Color32;

use crate::constants::colors::CATEGORY20C;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// One vertical bar per category
    Bar,
    /// Horizontal bars stacked per category
    HorizontalStackedBar,
    /// Vertical bars grouped per category, one bar per series
    GroupedBar,
    /// Vertical bins on a numeric axis, series stacked
    StackedHistogram,
}

impl ChartKind {
    pub fn is_horizontal(self) -> bool {
        matches!(self, ChartKind::HorizontalStackedBar)
    }
}

/// One hover tooltip line
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipField {
    pub label: String,
    pub value: String,
}

impl TooltipField {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartBar {
    /// Position along the category (or numeric) axis
    pub position: f64,
    pub width: f64,
    /// Where the bar starts along the value axis
    pub base: f64,
    pub value: f64,
    pub color: Color32,
    pub tooltip: Vec<TooltipField>,
}

impl ChartBar {
    /// Tooltip rendered as `label: value` lines
    pub fn tooltip_text(&self) -> String {
        self.tooltip
            .iter()
            .map(|field| format!("{}: {}", field.label, field.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    /// Legend color
    pub color: Color32,
    pub bars: Vec<ChartBar>,
}

/// Everything the renderer needs to draw one panel
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    /// Tick labels of the category axis, keyed by position
    pub categories: Vec<(f64, String)>,
    pub series: Vec<ChartSeries>,
    /// Fixed window on the x axis
    pub x_range: Option<(f64, f64)>,
    pub show_legend: bool,
}

#[cfg(test)]
impl ChartSpec {
    /// Category label at an axis position, empty between categories
    pub fn category_at(&self, position: f64) -> &str {
        category_label(&self.categories, position)
    }
}

/// Label of the category at `position`, empty when none sits there
pub fn category_label(categories: &[(f64, String)], position: f64) -> &str {
    categories
        .iter()
        .find(|(pos, _)| (pos - position).abs() < 1e-6)
        .map(|(_, label)| label.as_str())
        .unwrap_or("")
}

/// Colors for `count` categories.
///
/// Explicit colors are used positionally (repeating if there are more
/// categories than colors); otherwise the Category20c palette is taken
/// prefix-first and cycled past 20 categories.
pub fn category_colors(count: usize, explicit: Option<&[Color32]>) -> Vec<Color32> {
    let palette: &[Color32] = match explicit {
        Some(colors) if !colors.is_empty() => colors,
        _ => &CATEGORY20C,
    };
    (0..count).map(|i| palette[i % palette.len()]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_colors_are_positional() {
        let explicit = [Color32::RED, Color32::BLUE];
        assert_eq!(
            category_colors(2, Some(&explicit[..])),
            vec![Color32::RED, Color32::BLUE]
        );
        assert_eq!(category_colors(1, Some(&explicit[..])), vec![Color32::RED]);
    }

    #[test]
    fn test_explicit_colors_cycle_when_short() {
        let explicit = [Color32::RED, Color32::BLUE];
        assert_eq!(
            category_colors(3, Some(&explicit[..])),
            vec![Color32::RED, Color32::BLUE, Color32::RED]
        );
    }

    #[test]
    fn test_palette_sized_and_cycled() {
        let three = category_colors(3, None);
        assert_eq!(three, CATEGORY20C[..3].to_vec());

        let many = category_colors(23, None);
        assert_eq!(many.len(), 23);
        assert_eq!(many[20], CATEGORY20C[0]);
        assert_eq!(many[22], CATEGORY20C[2]);

        assert_eq!(category_colors(2, Some(&[][..])), CATEGORY20C[..2].to_vec());
    }

    #[test]
    fn test_category_lookup_and_tooltip_text() {
        let spec = ChartSpec {
            title: "t".into(),
            kind: ChartKind::Bar,
            x_label: "x".into(),
            y_label: "y".into(),
            categories: vec![(0.0, "Yes".into()), (1.0, "No".into())],
            series: Vec::new(),
            x_range: None,
            show_legend: false,
        };
        assert_eq!(spec.category_at(1.0), "No");
        assert_eq!(spec.category_at(0.5), "");

        let bar = ChartBar {
            position: 0.0,
            width: 0.5,
            base: 0.0,
            value: 3.0,
            color: Color32::RED,
            tooltip: vec![TooltipField::new("Sex", "Male"), TooltipField::new("Count", 3)],
        };
        assert_eq!(bar.tooltip_text(), "Sex: Male\nCount: 3");
    }
}
