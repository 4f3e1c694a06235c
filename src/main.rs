//! Raincoat Business Dashboard - Native Client
//!
//! A Rust application for the raincoat business dashboard: shows the
//! sales/orders/inventory chart and talks to the dashboard server for
//! order entry and data transfers.

mod api;
mod args;
mod charts;
mod gui;

use anyhow::Context;
use clap::Parser;
use eframe::egui;

use crate::api::ApiClient;
use crate::args::Args;
use crate::gui::DashboardApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let client = ApiClient::new(&args.server)
        .with_context(|| format!("invalid server URL `{}`", args.server))?;
    let totals = args.totals();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Raincoat Dashboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Raincoat Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, client, totals)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start UI: {e}"))
}
