//! Dashboard Chart Plotter
//! Builds the sales/orders/inventory bar chart using egui_plot.

use egui::Color32;
use egui_plot::{Bar, BarChart, Plot};

/// Fixed category labels, in bar order.
pub const CATEGORY_LABELS: [&str; 3] = ["Sales", "Orders", "Inventory"];

/// Fixed bar palette, one color per category.
pub const PALETTE: [Color32; 3] = [
    Color32::from_rgb(0x36, 0xA2, 0xEB), // Blue
    Color32::from_rgb(0xFF, 0x63, 0x84), // Pink
    Color32::from_rgb(0x4B, 0xC0, 0xC0), // Teal
];

const BAR_WIDTH: f64 = 0.6;
const CHART_HEIGHT: f32 = 320.0;

/// The three business totals behind the dashboard chart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BusinessTotals {
    pub sales: f64,
    pub orders: f64,
    pub inventory: f64,
}

impl BusinessTotals {
    /// Values in bar order, matching `CATEGORY_LABELS`.
    pub fn values(&self) -> [f64; 3] {
        [self.sales, self.orders, self.inventory]
    }
}

/// Creates the dashboard bar chart using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// One bar per category, colored from the fixed palette.
    pub fn totals_bars(totals: &BusinessTotals) -> Vec<Bar> {
        totals
            .values()
            .iter()
            .enumerate()
            .map(|(i, &value)| {
                Bar::new(i as f64, value)
                    .name(CATEGORY_LABELS[i])
                    .width(BAR_WIDTH)
                    .fill(PALETTE[i])
            })
            .collect()
    }

    /// Draw the totals chart. The plot fills the available width, the
    /// legend stays hidden and categories are labeled on the x-axis.
    pub fn draw_totals_chart(ui: &mut egui::Ui, bars: Vec<Bar>) {
        Plot::new("business_totals")
            .height(CHART_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .x_axis_formatter(|mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < CATEGORY_LABELS.len() && (mark.value - idx as f64).abs() < 1e-9 {
                    CATEGORY_LABELS[idx].to_string()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new(bars));
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_one_bar_per_category() {
        let totals = BusinessTotals {
            sales: 12.0,
            orders: 5.0,
            inventory: 140.0,
        };
        let bars = ChartPlotter::totals_bars(&totals);
        assert_eq!(bars.len(), 3);

        let values: Vec<f64> = bars.iter().map(|b| b.value).collect();
        assert_eq!(values, vec![12.0, 5.0, 140.0]);

        let positions: Vec<f64> = bars.iter().map(|b| b.argument).collect();
        assert_eq!(positions, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn bars_carry_fixed_labels_and_palette() {
        let bars = ChartPlotter::totals_bars(&BusinessTotals::default());
        for (i, bar) in bars.iter().enumerate() {
            assert_eq!(bar.name, CATEGORY_LABELS[i]);
            assert_eq!(bar.fill, PALETTE[i]);
        }
    }
}
