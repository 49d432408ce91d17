use eframe::egui;
use tokio::sync::mpsc;

use crate::auth;
use crate::common::{ChatMessage, StorageCommand, StorageEvent, User};

use super::components::{chat_area, header, input_bar, login_form};
use super::state::AppState;

/// Backdrop behind the transcript.
const CHAT_BACKDROP: egui::Color32 = egui::Color32::from_rgb(24, 32, 38);

pub struct ChatApp {
    state: AppState,
    command_sender: mpsc::Sender<StorageCommand>,
    event_receiver: mpsc::Receiver<StorageEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<StorageCommand>,
        event_receiver: mpsc::Receiver<StorageEvent>,
    ) -> Self {
        Self {
            state: AppState::new(),
            command_sender,
            event_receiver,
        }
    }

    fn handle_storage_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                StorageEvent::MessagesLoaded(messages) => self.state.replace_messages(messages),
            }
        }
    }

    fn send_command(&mut self, command: StorageCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to storage: {err}");
        }
    }

    fn submit_login(&mut self) {
        match auth::authenticate(&self.state.username_input, &self.state.password_input) {
            Some(user) => {
                self.state.begin_session(user);
                // History loads in the background; the transcript stays
                // empty until the worker replies.
                self.send_command(StorageCommand::LoadMessages);
            }
            None => {
                self.state.login_error = Some(auth::INVALID_CREDENTIALS.to_string());
            }
        }
    }

    fn send_message(&mut self, content: String) {
        let Some(user) = &self.state.current_user else {
            return;
        };

        let message = ChatMessage::new(user, content);
        self.state.push_message(message);
        self.send_command(StorageCommand::SaveMessages(self.state.messages.clone()));
    }

    fn render_login(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if login_form::render(ui, &mut self.state) {
                self.submit_login();
            }
        });
    }

    fn render_chat(&mut self, ctx: &egui::Context, user: User) {
        egui::TopBottomPanel::top("chat_header").show(ctx, |ui| {
            if header::render(ui, &user, self.state.messages.len()) {
                self.state.end_session();
            }
        });

        // Logout may have just cleared the session; skip the rest of the
        // chat screen for this frame.
        if self.state.current_user.is_none() {
            return;
        }

        egui::TopBottomPanel::bottom("composer").show(ctx, |ui| {
            if let Some(content) = input_bar::render(ui, &mut self.state.input_text) {
                self.send_message(content);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.painter()
                .rect_filled(ui.max_rect(), egui::CornerRadius::ZERO, CHAT_BACKDROP);
            chat_area::render(ui, &self.state.messages, user.id);
        });
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_storage_events();

        match self.state.current_user.clone() {
            Some(user) => self.render_chat(ctx, user),
            None => self.render_login(ctx),
        }

        ctx.request_repaint();
    }
}
