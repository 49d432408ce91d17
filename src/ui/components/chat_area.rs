use eframe::egui;

use crate::common::ChatMessage;

/// Render the transcript. `messages` is newest first; we draw oldest at the
/// top and keep the view pinned to the latest message.
pub fn render(ui: &mut egui::Ui, messages: &[ChatMessage], current_user_id: u32) {
    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for message in messages.iter().rev() {
                let own = message.sender.id == current_user_id;
                let align = if own { egui::Align::Max } else { egui::Align::Min };

                ui.with_layout(egui::Layout::top_down(align), |ui| {
                    ui.label(format!("{}: {}", message.sender.name, message.content));
                    ui.label(
                        egui::RichText::new(display_time(&message.timestamp))
                            .weak()
                            .small(),
                    );
                });
                ui.add_space(4.0);
            }
        });
}

/// Local wall-clock time for display; falls back to the raw string if the
/// stored timestamp does not parse.
fn display_time(timestamp: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(timestamp) {
        Ok(instant) => instant
            .with_timezone(&chrono::Local)
            .format("%H:%M:%S")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_time_falls_back_to_raw_string() {
        assert_eq!(display_time("not a timestamp"), "not a timestamp");
    }

    #[test]
    fn display_time_parses_stored_format() {
        let rendered = display_time("2026-08-29T10:11:12.345Z");
        // Local offset varies by machine; it must at least be a short clock time.
        assert_eq!(rendered.len(), 8);
        assert_eq!(rendered.matches(':').count(), 2);
    }
}
