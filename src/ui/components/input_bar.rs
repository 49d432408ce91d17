use eframe::egui;

/// Message composer. Returns the content to send when the user clicked
/// Send or pressed Enter; empty input is never sent.
pub fn render(ui: &mut egui::Ui, input_text: &mut String) -> Option<String> {
    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Type a message")
                .desired_width(ui.available_width() - 60.0),
        );
        if ui.button("Send").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }
    });

    if send && !input_text.is_empty() {
        let message = input_text.clone();
        input_text.clear();
        return Some(message);
    }

    None
}
