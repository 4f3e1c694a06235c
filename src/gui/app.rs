//! Raincoat Dashboard Main Application
//! Main window with the order panel and the totals chart. Request results
//! arrive from background threads and are polled every frame.

use crate::api::{
    submit_outcome, transfer_outcome, ApiClient, ApiError, OrderRequest, ServerReply,
    SubmitOutcome, TransferOutcome,
};
use crate::charts::BusinessTotals;
use crate::gui::{DashboardView, OrderForm, OrderFormAction};
use egui::SidePanel;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

/// Fixed user-facing messages, one per terminal outcome.
const ORDER_FAILED_MSG: &str = "Failed to add order";
const ORDER_ERROR_MSG: &str = "Error adding order";
const TRANSFER_SUCCESS_MSG: &str = "Transfer successful";
const TRANSFER_FAILED_MSG: &str = "Transfer failed";
const TRANSFER_ERROR_MSG: &str = "Transfer error";

type RequestReceiver = Receiver<Result<ServerReply, ApiError>>;

/// Main application window.
pub struct DashboardApp {
    client: Arc<ApiClient>,
    startup_totals: Option<BusinessTotals>,
    order_form: OrderForm,
    dashboard: DashboardView,

    // One receiver per in-flight request. Overlapping submissions are not
    // suppressed; each completion lands on its own.
    order_rx: Vec<RequestReceiver>,
    transfer_rx: Vec<RequestReceiver>,
}

impl DashboardApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        client: ApiClient,
        totals: Option<BusinessTotals>,
    ) -> Self {
        Self {
            client: Arc::new(client),
            startup_totals: totals,
            order_form: OrderForm::new(),
            dashboard: DashboardView::with_totals(totals),
            order_rx: Vec::new(),
            transfer_rx: Vec::new(),
        }
    }

    /// Discard all in-memory view state, including anything still in
    /// flight, and rebuild from the startup configuration. The desktop
    /// counterpart of a page reload.
    fn reload(&mut self) {
        log::debug!("order accepted, reloading view state");
        self.order_form = OrderForm::new();
        self.dashboard = DashboardView::with_totals(self.startup_totals);
        self.order_rx.clear();
        self.transfer_rx.clear();
    }

    /// Start an order submission in a background thread.
    fn handle_submit_order(&mut self) {
        let order = OrderRequest::from_fields(
            &self.order_form.fields.customer,
            &self.order_form.fields.quantity,
            &self.order_form.fields.price,
        );

        let client = Arc::clone(&self.client);
        let (tx, rx) = channel();
        self.order_rx.push(rx);

        thread::spawn(move || {
            let _ = tx.send(client.submit_order(&order));
        });
    }

    /// Start a transfer in a background thread.
    fn handle_transfer(&mut self) {
        let client = Arc::clone(&self.client);
        let (tx, rx) = channel();
        self.transfer_rx.push(rx);

        thread::spawn(move || {
            let _ = tx.send(client.trigger_transfer());
        });
    }

    /// Poll in-flight order submissions.
    fn check_order_results(&mut self) {
        let pending = std::mem::take(&mut self.order_rx);
        let mut reloaded = false;

        for rx in pending {
            if reloaded {
                // the reload dropped whatever was still in flight
                continue;
            }
            match rx.try_recv() {
                Ok(result) => {
                    reloaded = self.finish_order(result);
                }
                Err(TryRecvError::Empty) => self.order_rx.push(rx),
                Err(TryRecvError::Disconnected) => {
                    log::error!("order worker exited without a result");
                    Self::alert_error(ORDER_ERROR_MSG);
                }
            }
        }
    }

    /// Apply the terminal outcome of one submission. Returns true when the
    /// view state was reloaded.
    fn finish_order(&mut self, result: Result<ServerReply, ApiError>) -> bool {
        match submit_outcome(result) {
            SubmitOutcome::Reload => {
                self.reload();
                true
            }
            SubmitOutcome::Rejected => {
                Self::alert_info(ORDER_FAILED_MSG);
                false
            }
            SubmitOutcome::Failed(err) => {
                log::error!("order request failed: {err}");
                Self::alert_error(ORDER_ERROR_MSG);
                false
            }
        }
    }

    /// Poll in-flight transfer requests.
    fn check_transfer_results(&mut self) {
        let pending = std::mem::take(&mut self.transfer_rx);

        for rx in pending {
            match rx.try_recv() {
                Ok(result) => Self::finish_transfer(result),
                Err(TryRecvError::Empty) => self.transfer_rx.push(rx),
                Err(TryRecvError::Disconnected) => {
                    log::error!("transfer worker exited without a result");
                    Self::alert_error(TRANSFER_ERROR_MSG);
                }
            }
        }
    }

    fn finish_transfer(result: Result<ServerReply, ApiError>) {
        match transfer_outcome(result) {
            TransferOutcome::Succeeded => Self::alert_info(TRANSFER_SUCCESS_MSG),
            TransferOutcome::Failed => Self::alert_info(TRANSFER_FAILED_MSG),
            TransferOutcome::Errored(err) => {
                log::error!("transfer request failed: {err}");
                Self::alert_error(TRANSFER_ERROR_MSG);
            }
        }
    }

    /// Blocking modal dialog; interaction resumes once dismissed.
    fn alert_info(message: &str) {
        let _ = rfd::MessageDialog::new()
            .set_title("Raincoat Dashboard")
            .set_level(rfd::MessageLevel::Info)
            .set_description(message)
            .show();
    }

    fn alert_error(message: &str) {
        let _ = rfd::MessageDialog::new()
            .set_title("Raincoat Dashboard")
            .set_level(rfd::MessageLevel::Error)
            .set_description(message)
            .show();
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_order_results();
        self.check_transfer_results();

        // Keep repainting while anything is in flight
        if !self.order_rx.is_empty() || !self.transfer_rx.is_empty() {
            ctx.request_repaint();
        }

        // Left panel - order entry and transfer
        SidePanel::left("order_panel")
            .min_width(280.0)
            .max_width(330.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.order_form.show(ui) {
                        OrderFormAction::Submit => self.handle_submit_order(),
                        OrderFormAction::Transfer => self.handle_transfer(),
                        OrderFormAction::None => {}
                    }
                });
            });

        // Central panel - totals chart
        egui::CentralPanel::default().show(ctx, |ui| {
            self.dashboard.show(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> DashboardApp {
        DashboardApp {
            client: Arc::new(ApiClient::new("http://127.0.0.1:5000").unwrap()),
            startup_totals: None,
            order_form: OrderForm::new(),
            dashboard: DashboardView::new(),
            order_rx: Vec::new(),
            transfer_rx: Vec::new(),
        }
    }

    #[test]
    fn rapid_double_submit_issues_two_independent_requests() {
        let mut app = test_app();
        app.order_form.fields.customer = "ACME Outdoor".to_string();
        app.order_form.fields.quantity = "3".to_string();
        app.order_form.fields.price = "12.5".to_string();

        app.handle_submit_order();
        app.handle_submit_order();

        // no in-flight suppression: both submissions are pending
        assert_eq!(app.order_rx.len(), 2);
    }

    #[test]
    fn overlapping_order_and_transfer_requests_are_tracked_separately() {
        let mut app = test_app();

        app.handle_submit_order();
        app.handle_transfer();
        app.handle_transfer();

        assert_eq!(app.order_rx.len(), 1);
        assert_eq!(app.transfer_rx.len(), 2);
    }

    #[test]
    fn reload_discards_form_text_and_in_flight_requests() {
        let mut app = test_app();
        app.order_form.fields.customer = "ACME Outdoor".to_string();
        app.handle_submit_order();
        app.handle_transfer();

        app.reload();

        assert!(app.order_form.fields.customer.is_empty());
        assert!(app.order_rx.is_empty());
        assert!(app.transfer_rx.is_empty());
    }
}
