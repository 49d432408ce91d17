use eframe::egui;

use crate::common::User;

/// Chat screen header: who is logged in, how many messages, logout.
/// Returns true when the Logout button was clicked.
pub fn render(ui: &mut egui::Ui, user: &User, message_count: usize) -> bool {
    let mut logout = false;

    ui.horizontal(|ui| {
        ui.heading(format!("Chatting as {}", user.name));
        ui.label(
            egui::RichText::new(format!("{message_count} Messages"))
                .weak()
                .color(egui::Color32::LIGHT_BLUE),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(egui::RichText::new("Logout").strong()).clicked() {
                logout = true;
            }
        });
    });

    logout
}
