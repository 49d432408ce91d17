use crate::common::{ChatMessage, User};

/// Local UI state. `current_user` is the only session state in the app;
/// everything else is form text and the in-memory transcript.
pub struct AppState {
    pub current_user: Option<User>,
    pub username_input: String,
    pub password_input: String,
    pub login_error: Option<String>,
    /// Newest first, matching the persisted order.
    pub messages: Vec<ChatMessage>,
    pub input_text: String,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_user: None,
            username_input: String::new(),
            password_input: String::new(),
            login_error: None,
            messages: Vec::new(),
            input_text: String::new(),
        }
    }

    /// Accepts whatever identity the login flow hands over, as-is.
    pub fn begin_session(&mut self, user: User) {
        self.current_user = Some(user);
        self.username_input.clear();
        self.password_input.clear();
        self.login_error = None;
    }

    /// Drops the session and the in-memory transcript. Persisted history
    /// is untouched and reloads on the next login.
    pub fn end_session(&mut self) {
        self.current_user = None;
        self.messages.clear();
        self.input_text.clear();
    }

    pub fn replace_messages(&mut self, messages: Vec<ChatMessage>) {
        self.messages = messages;
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.insert(0, message);
    }
}
