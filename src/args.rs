//! Command-line arguments for the dashboard client.

use clap::Parser;

use crate::charts::BusinessTotals;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the dashboard server handling orders and transfers.
    #[clap(long, default_value = "http://127.0.0.1:5000")]
    pub server: String,

    /// Total raincoat sales to show on the dashboard chart.
    #[clap(long)]
    pub sales: Option<f64>,

    /// Total raincoat orders to show on the dashboard chart.
    #[clap(long)]
    pub orders: Option<f64>,

    /// Current raincoat inventory to show on the dashboard chart.
    #[clap(long)]
    pub inventory: Option<f64>,
}

impl Args {
    /// Chart totals, if all three were supplied on the command line.
    /// With any of them missing the dashboard starts without a chart.
    pub fn totals(&self) -> Option<BusinessTotals> {
        match (self.sales, self.orders, self.inventory) {
            (Some(sales), Some(orders), Some(inventory)) => Some(BusinessTotals {
                sales,
                orders,
                inventory,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_require_all_three_values() {
        let args = Args::try_parse_from(["dashboard", "--sales", "10", "--orders", "4"]).unwrap();
        assert!(args.totals().is_none());

        let args = Args::try_parse_from([
            "dashboard",
            "--sales",
            "10",
            "--orders",
            "4",
            "--inventory",
            "120",
        ])
        .unwrap();
        let totals = args.totals().unwrap();
        assert_eq!(totals.sales, 10.0);
        assert_eq!(totals.orders, 4.0);
        assert_eq!(totals.inventory, 120.0);
    }

    #[test]
    fn server_defaults_to_local_dashboard() {
        let args = Args::try_parse_from(["dashboard"]).unwrap();
        assert_eq!(args.server, "http://127.0.0.1:5000");
    }
}
