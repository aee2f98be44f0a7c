//! Application state and the top-level update loop.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::time::Duration;

use egui::Context;
use price_core::{EstimateForm, EstimatorError, HouseFeatures, Prediction, PriceEstimator};
use tracing::{error, info};

use crate::screens::EstimateScreen;

/// Result of one prediction attempt, as delivered back to the UI thread.
pub type PredictOutcome = Result<Prediction, EstimatorError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Info,
    Success,
    Error,
}

/// Main application state
pub struct EstimatorApp {
    pub form: EstimateForm,
    pub prediction: Option<Prediction>,
    pub status_message: Option<(String, MessageType)>,
    /// Text of the blocking failure dialog, when one is open.
    pub request_error: Option<String>,

    estimator: Arc<dyn PriceEstimator>,
    runtime: tokio::runtime::Runtime,
    in_flight: Option<Receiver<PredictOutcome>>,
}

impl EstimatorApp {
    pub fn new(estimator: Arc<dyn PriceEstimator>) -> anyhow::Result<Self> {
        Ok(Self {
            form: EstimateForm::new(),
            prediction: None,
            status_message: None,
            request_error: None,
            estimator,
            runtime: tokio::runtime::Runtime::new()?,
            in_flight: None,
        })
    }

    /// Whether a prediction request is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn show_message(
        &mut self,
        msg: impl Into<String>,
        msg_type: MessageType,
    ) {
        self.status_message = Some((msg.into(), msg_type));
    }

    pub fn clear_message(&mut self) {
        self.status_message = None;
    }

    /// Restores the form and results to their initial state.
    pub fn reset(&mut self) {
        self.form = EstimateForm::new();
        self.prediction = None;
        self.status_message = None;
    }

    /// Validates the form and, on success, transitions into Submitting.
    ///
    /// Any prior estimate is cleared here, before the request is even
    /// issued, so a new submission never briefly shows a stale result.
    fn begin_submit(&mut self) -> Option<(HouseFeatures, Sender<PredictOutcome>)> {
        let features = match self.form.validate() {
            Ok(features) => features,
            Err(()) => {
                self.show_message("Please fix the highlighted fields", MessageType::Error);
                return None;
            }
        };

        self.prediction = None;
        self.clear_message();

        let (tx, rx) = channel();
        self.in_flight = Some(rx);
        Some((features, tx))
    }

    /// Submits the current form on the background runtime. One attempt,
    /// no retry; the outcome is applied by [`poll_in_flight`](Self::poll_in_flight).
    pub fn submit(
        &mut self,
        ctx: &Context,
    ) {
        let Some((features, tx)) = self.begin_submit() else {
            return;
        };

        info!("submitting prediction request");
        let estimator = Arc::clone(&self.estimator);
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let outcome = estimator.predict(&features).await;
            let _ = tx.send(outcome);
            ctx.request_repaint();
        });
    }

    /// Non-blocking check on the outstanding request, if any.
    pub fn poll_in_flight(&mut self) {
        let Some(rx) = &self.in_flight else { return };
        match rx.try_recv() {
            Ok(outcome) => self.finish_submit(outcome),
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => self.finish_submit(Err(EstimatorError::Request(
                "request task vanished".to_string(),
            ))),
        }
    }

    /// Applies a completed request. Both outcomes leave Submitting.
    fn finish_submit(
        &mut self,
        outcome: PredictOutcome,
    ) {
        self.in_flight = None;
        match outcome {
            Ok(prediction) => {
                info!(price = prediction.predicted_price, "prediction received");
                self.prediction = Some(prediction);
                self.show_message("Estimate ready", MessageType::Success);
            }
            Err(e) => {
                error!(error = %e, "prediction request failed");
                self.request_error = Some(e.to_string());
            }
        }
    }
}

impl eframe::App for EstimatorApp {
    fn update(
        &mut self,
        ctx: &Context,
        _frame: &mut eframe::Frame,
    ) {
        self.poll_in_flight();
        if self.is_submitting() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New Estimate").clicked() {
                        self.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((msg, msg_type)) = self.status_message.clone() {
                    let color = match msg_type {
                        MessageType::Info => egui::Color32::GRAY,
                        MessageType::Success => egui::Color32::GREEN,
                        MessageType::Error => egui::Color32::RED,
                    };
                    ui.colored_label(color, msg);

                    if ui.small_button("✖").clicked() {
                        self.clear_message();
                    }
                }
            });
        });

        // Main content area
        egui::CentralPanel::default().show(ctx, |ui| {
            EstimateScreen::show(self, ui);
        });

        // Blocking failure dialog
        if let Some(message) = self.request_error.clone() {
            let modal = egui::Modal::new(egui::Id::new("request_failure")).show(ctx, |ui| {
                ui.heading("Request Failed");
                ui.add_space(5.0);
                ui.label(message);
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        self.request_error = None;
                    }
                });
            });
            if modal.should_close() {
                self.request_error = None;
            }
        }
    }
}
