//! Sidebar filter controls

use egui::{InnerResponse, Ui};

use crate::data::{Category, Dataset};
use crate::state::{FilterParameters, SexFilter};

/// Every sidebar control bound to the current [`FilterParameters`]
pub struct FilterControls<'a> {
    params: &'a mut FilterParameters,
    dataset: &'a Dataset,
}

impl<'a> FilterControls<'a> {
    pub fn new(params: &'a mut FilterParameters, dataset: &'a Dataset) -> Self {
        Self { params, dataset }
    }

    /// Show the filter controls. The inner value is true when Reset was
    /// clicked; the caller owns the reset.
    pub fn show(self, ui: &mut Ui) -> InnerResponse<bool> {
        let FilterControls { params, dataset } = self;
        let ranges = *dataset.ranges();

        ui.vertical(|ui| {
            ui.heading("Filter Interaktif");
            ui.add_space(4.0);

            egui::ComboBox::from_label("Pilih Jenis Kelamin:")
                .selected_text(params.sex.label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut params.sex, SexFilter::All, SexFilter::All.label());
                    for &sex in dataset.sexes() {
                        ui.selectable_value(&mut params.sex, SexFilter::Only(sex), sex.label());
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                ui.label("Pilih Kategori Usia:");
                if ui.small_button("Semua").clicked() {
                    params.select_all_ages(dataset);
                }
                if ui.small_button("Kosongkan").clicked() {
                    params.clear_ages();
                }
            });
            egui::CollapsingHeader::new(format!(
                "{} dari {} dipilih",
                params.age_categories.len(),
                dataset.age_categories().len()
            ))
            .id_salt("age_categories")
            .default_open(true)
            .show(ui, |ui| {
                for &age in dataset.age_categories() {
                    let mut selected = params.age_categories.contains(&age);
                    if ui.checkbox(&mut selected, age.label()).changed() {
                        params.set_age(age, selected);
                    }
                }
            });

            ui.separator();
            super::RangeInput::new("Rentang BMI:", &mut params.bmi, ranges.bmi).show(ui);
            super::RangeInput::new("Rentang Hari Sakit Fisik:", &mut params.physical_health, ranges.physical_health)
                .step(1.0)
                .show(ui);
            super::RangeInput::new("Rentang Hari Sakit Mental:", &mut params.mental_health, ranges.mental_health)
                .step(1.0)
                .show(ui);
            super::RangeInput::new("Rentang Jam Tidur:", &mut params.sleep_time, ranges.sleep_time)
                .step(0.5)
                .show(ui);

            ui.separator();
            ui.add_enabled(params.has_active_filters(dataset), egui::Button::new("Reset Filter"))
                .clicked()
        })
    }
}
