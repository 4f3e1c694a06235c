//! Dashboard View Widget
//! Central panel showing the sales/orders/inventory bar chart.

use crate::charts::{BusinessTotals, ChartPlotter};
use egui::{Color32, RichText};
use egui_plot::Bar;

/// Central chart area. Owns the totals behind the chart; when no totals
/// were supplied the area stays empty instead of erroring.
pub struct DashboardView {
    totals: Option<BusinessTotals>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self { totals: None }
    }
}

impl DashboardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_totals(totals: Option<BusinessTotals>) -> Self {
        Self { totals }
    }

    /// Bars to draw for the current totals; empty when there is no chart.
    fn chart_bars(&self) -> Vec<Bar> {
        self.totals
            .as_ref()
            .map(ChartPlotter::totals_bars)
            .unwrap_or_default()
    }

    /// Draw the chart area.
    pub fn show(&self, ui: &mut egui::Ui) {
        let bars = self.chart_bars();
        if bars.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0).color(Color32::GRAY));
            });
            return;
        }

        ui.vertical(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("Raincoat Business Dashboard")
                    .size(18.0)
                    .strong(),
            );
            ui.add_space(8.0);
            ChartPlotter::draw_totals_chart(ui, bars);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_totals_produce_no_bars() {
        let view = DashboardView::new();
        assert!(view.chart_bars().is_empty());
    }

    #[test]
    fn totals_produce_three_bars() {
        let view = DashboardView::with_totals(Some(BusinessTotals {
            sales: 10.0,
            orders: 4.0,
            inventory: 120.0,
        }));
        let bars = view.chart_bars();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[2].value, 120.0);
    }
}
