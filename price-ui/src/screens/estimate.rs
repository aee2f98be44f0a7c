use egui::Ui;
use price_core::{Field, FieldKind};

use crate::app::EstimatorApp;
use crate::utils::format_price;

/// The single form screen: attribute entry, submission, and the result box.
pub struct EstimateScreen;

impl EstimateScreen {
    /// Consistent group width across sections
    const GROUP_WIDTH: f32 = 520.0;
    /// Label column width for alignment
    const LABEL_WIDTH: f32 = 190.0;
    /// Entry/dropdown width
    const INPUT_WIDTH: f32 = 130.0;

    pub fn show(
        app: &mut EstimatorApp,
        ui: &mut Ui,
    ) {
        ui.heading("Smart House Price Estimator");
        ui.label("Estimate a sale price from the house's attributes.");
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            let group_width = ui.available_width().min(Self::GROUP_WIDTH);

            // Layout & Size Section
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    ui.heading("Layout & Size");
                    ui.add_space(5.0);

                    Self::field_grid(ui, "layout_grid", |ui| {
                        Self::entry_row(ui, Field::Bedrooms, &mut app.form.bedrooms);
                        Self::entry_row(ui, Field::Bathrooms, &mut app.form.bathrooms);
                        Self::choice_row(ui, Field::Floors, &mut app.form.floors);
                        Self::entry_row(ui, Field::SqftLiving, &mut app.form.sqft_living);
                        Self::entry_row(ui, Field::SqftAbove, &mut app.form.sqft_above);
                        Self::entry_row(ui, Field::SqftBasement, &mut app.form.sqft_basement);
                    });
                });
            });

            ui.add_space(10.0);

            // Quality & Condition Section
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    ui.heading("Quality & Condition");
                    ui.add_space(5.0);

                    Self::field_grid(ui, "quality_grid", |ui| {
                        Self::choice_row(ui, Field::Waterfront, &mut app.form.waterfront);
                        Self::choice_row(ui, Field::View, &mut app.form.view);
                        Self::choice_row(ui, Field::Condition, &mut app.form.condition);
                        Self::choice_row(ui, Field::Grade, &mut app.form.grade);
                    });
                });
            });

            ui.add_space(10.0);

            // Construction History Section
            ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                ui.group(|ui| {
                    ui.set_min_width(group_width - 20.0);
                    ui.heading("Construction History");
                    ui.add_space(5.0);

                    Self::field_grid(ui, "history_grid", |ui| {
                        Self::entry_row(ui, Field::YrBuilt, &mut app.form.yr_built);
                        Self::entry_row(ui, Field::YrRenovated, &mut app.form.yr_renovated);
                    });
                });
            });

            // Validation Errors
            if !app.form.errors.is_empty() {
                ui.add_space(10.0);
                ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                    ui.group(|ui| {
                        ui.set_min_width(group_width - 20.0);
                        ui.colored_label(egui::Color32::RED, "Validation Errors:");
                        for error in &app.form.errors {
                            ui.colored_label(egui::Color32::RED, format!("  • {error}"));
                        }
                    });
                });
            }

            ui.add_space(20.0);

            // Action Buttons
            ui.horizontal(|ui| {
                let label = if app.is_submitting() {
                    "Predicting…"
                } else {
                    "Predict Price"
                };
                let submit = ui.add_enabled(!app.is_submitting(), egui::Button::new(label));
                if submit.clicked() {
                    let ctx = ui.ctx().clone();
                    app.submit(&ctx);
                }

                if ui.button("Reset Form").clicked() {
                    app.reset();
                }

                if app.is_submitting() {
                    ui.spinner();
                    ui.label("The estimator can take up to 30 seconds to respond.");
                }
            });

            // Result Section
            if let Some(prediction) = app.prediction {
                ui.add_space(20.0);
                ui.allocate_ui(egui::vec2(group_width, 0.0), |ui| {
                    ui.group(|ui| {
                        ui.set_min_width(group_width - 20.0);
                        ui.heading("Estimated Price");
                        ui.add_space(5.0);
                        ui.heading(format_price(prediction.predicted_price));
                    });
                });
            }

            ui.add_space(20.0);
        });
    }

    /// Create a grid for label/control alignment
    fn field_grid(
        ui: &mut Ui,
        id: &str,
        add_contents: impl FnOnce(&mut Ui),
    ) {
        egui::Grid::new(id)
            .num_columns(2)
            .spacing([10.0, 8.0])
            .min_col_width(0.0)
            .show(ui, add_contents);
    }

    fn row_label(
        ui: &mut Ui,
        field: Field,
    ) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.set_min_width(Self::LABEL_WIDTH);
            ui.label(egui::RichText::new(format!("{}:", field.label())).strong());
        });
    }

    /// Free-entry row backed by a raw string buffer
    fn entry_row(
        ui: &mut Ui,
        field: Field,
        value: &mut String,
    ) {
        Self::row_label(ui, field);
        ui.add(
            egui::TextEdit::singleline(value)
                .desired_width(Self::INPUT_WIDTH)
                .hint_text("0"),
        );
        ui.end_row();
    }

    /// Dropdown row; the options are exactly the field's closed set
    fn choice_row(
        ui: &mut Ui,
        field: Field,
        selection: &mut i64,
    ) {
        Self::row_label(ui, field);
        egui::ComboBox::from_id_salt(field.key())
            .width(Self::INPUT_WIDTH)
            .selected_text(Self::choice_text(field, *selection))
            .show_ui(ui, |ui| match field.kind() {
                FieldKind::Labeled(options) => {
                    for (value, label) in options {
                        ui.selectable_value(selection, *value, *label);
                    }
                }
                FieldKind::Range { min, max } => {
                    for value in min..=max {
                        ui.selectable_value(selection, value, value.to_string());
                    }
                }
                FieldKind::Numeric => {}
            });
        ui.end_row();
    }

    fn choice_text(
        field: Field,
        value: i64,
    ) -> String {
        field
            .kind()
            .label_for(value)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string())
    }
}
