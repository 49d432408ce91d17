use eframe::egui;

use crate::ui::state::AppState;

/// Render the login form. Returns true when the user submitted the
/// credentials, via the button or Enter in the password field.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.heading("Chat App");
        ui.add_space(20.0);

        ui.add(
            egui::TextEdit::singleline(&mut state.username_input)
                .hint_text("Username")
                .desired_width(220.0),
        );

        let password = ui.add(
            egui::TextEdit::singleline(&mut state.password_input)
                .hint_text("Password")
                .password(true)
                .desired_width(220.0),
        );
        if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        ui.add_space(10.0);
        if ui.button("Login").clicked() {
            submit = true;
        }

        if let Some(error) = &state.login_error {
            ui.add_space(10.0);
            ui.colored_label(egui::Color32::RED, error);
        }
    });

    submit
}
