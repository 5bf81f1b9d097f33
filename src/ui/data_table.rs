use egui_extras::{Column, TableBuilder};

use crate::constants::layout::{TABLE_HEADER_HEIGHT, TABLE_HEIGHT, TABLE_MAX_ROWS, TABLE_ROW_HEIGHT};
use crate::data::schema::REQUIRED_COLUMNS;
use crate::data::{Category, Dataset, Respondent};

/// Preview of the filtered rows, capped at [`TABLE_MAX_ROWS`]
pub fn render_data_table(ui: &mut egui::Ui, dataset: &Dataset, rows: &[usize]) {
    profiling::scope!("render_data_table");

    let shown = rows.len().min(TABLE_MAX_ROWS);
    if shown < rows.len() {
        ui.small(format!("Showing first {} of {} rows", shown, rows.len()));
    }

    ui.push_id("filtered_rows_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(TABLE_HEIGHT)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::initial(50.0).resizable(false))
            .columns(Column::initial(95.0).resizable(true).clip(true), REQUIRED_COLUMNS.len())
            .header(TABLE_HEADER_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                for name in REQUIRED_COLUMNS {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(TABLE_ROW_HEIGHT, shown, |mut row| {
                    let row_idx = rows[row.index()];
                    let Some(respondent) = dataset.record(row_idx) else {
                        return;
                    };

                    row.col(|ui| {
                        ui.label(format!("{}", row_idx + 1));
                    });
                    for cell in cells(respondent) {
                        row.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            });
    });
}

/// Cell text in [`REQUIRED_COLUMNS`] order
fn cells(r: &Respondent) -> [String; 9] {
    [
        r.heart_disease.label().to_string(),
        format!("{:.2}", r.bmi),
        r.smoking.label().to_string(),
        r.alcohol_drinking.label().to_string(),
        format!("{}", r.physical_health),
        format!("{}", r.mental_health),
        r.sex.label().to_string(),
        r.age_category.label().to_string(),
        format!("{}", r.sleep_time),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::source::tests::sample_dataset;

    #[test]
    fn test_cells_follow_column_order() {
        let ds = sample_dataset();
        let cells = cells(&ds.records()[0]);

        let by_column: Vec<(&str, &str)> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .zip(cells.iter().map(String::as_str))
            .collect();
        assert!(by_column.contains(&("HeartDisease", "Yes")));
        assert!(by_column.contains(&("Sex", "Male")));
        assert!(by_column.contains(&("AgeCategory", "65-69")));
        assert!(by_column.contains(&("BMI", "28.50")));
        assert!(by_column.contains(&("SleepTime", "6")));
    }
}
