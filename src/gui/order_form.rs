//! Order Form Widget
//! Left side panel with the order entry form and the transfer control.

use egui::{Color32, RichText};

/// Raw text of the three order fields, exactly as typed.
#[derive(Default, Clone)]
pub struct OrderFields {
    pub customer: String,
    pub quantity: String,
    pub price: String,
}

/// Left side panel with order entry and data transfer controls.
#[derive(Default)]
pub struct OrderForm {
    pub fields: OrderFields,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the panel.
    ///
    /// The form stays enabled while a request is in flight; a second click
    /// submits a second, independent request.
    pub fn show(&mut self, ui: &mut egui::Ui) -> OrderFormAction {
        let mut action = OrderFormAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🧥 Raincoat Dashboard")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== New Order Section =====
        ui.label(RichText::new("📦 New Order").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 75.0;
        let field_width = 160.0;

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Customer:"));
            ui.add_sized(
                [field_width, 20.0],
                egui::TextEdit::singleline(&mut self.fields.customer),
            );
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Quantity:"));
            ui.add_sized(
                [field_width, 20.0],
                egui::TextEdit::singleline(&mut self.fields.quantity),
            );
        });

        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Price:"));
            ui.add_sized(
                [field_width, 20.0],
                egui::TextEdit::singleline(&mut self.fields.price),
            );
        });

        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("➕ Add Order").size(16.0))
                .min_size(egui::vec2(200.0, 35.0));
            if ui.add(button).clicked() {
                action = OrderFormAction::Submit;
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Data Transfer Section =====
        ui.label(RichText::new("📤 Data Transfer").size(14.0).strong());
        ui.add_space(8.0);

        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("Transfer Data").size(14.0))
                .min_size(egui::vec2(150.0, 30.0));
            if ui.add(button).clicked() {
                action = OrderFormAction::Transfer;
            }
        });

        action
    }
}

/// Actions triggered by the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderFormAction {
    None,
    Submit,
    Transfer,
}
