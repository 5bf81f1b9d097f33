//! Min/max slider pair for an inclusive numeric range

use egui::{Response, Ui};

use crate::data::NumericRange;

/// Two sliders bounded by the column's observed range.
///
/// Dragging one handle past the other pushes it along, so the edited range
/// always has `min <= max`.
pub struct RangeInput<'a> {
    label: &'a str,
    range: &'a mut NumericRange,
    bounds: NumericRange,
    step: Option<f64>,
}

impl<'a> RangeInput<'a> {
    pub fn new(label: &'a str, range: &'a mut NumericRange, bounds: NumericRange) -> Self {
        Self {
            label,
            range,
            bounds,
            step: None,
        }
    }

    /// Snap both handles to multiples of `step`
    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn show(self, ui: &mut Ui) -> Response {
        let bounds = self.bounds.min..=self.bounds.max;
        let step = self.step;

        ui.vertical(|ui| {
            ui.label(self.label);

            let mut min = self.range.min;
            let mut max = self.range.max;

            let min_changed = ui.add(slider(&mut min, bounds.clone(), step, "Min")).changed();
            let max_changed = ui.add(slider(&mut max, bounds.clone(), step, "Maks")).changed();

            if min_changed && min > max {
                max = min;
            }
            if max_changed && max < min {
                min = max;
            }
            *self.range = NumericRange::new(min, max);
        })
        .response
    }
}

fn slider<'v>(
    value: &'v mut f64,
    bounds: std::ops::RangeInclusive<f64>,
    step: Option<f64>,
    text: &str,
) -> egui::Slider<'v> {
    let slider = egui::Slider::new(value, bounds).text(text);
    match step {
        Some(step) => slider.step_by(step),
        None => slider,
    }
}
