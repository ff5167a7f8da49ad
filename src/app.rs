//! Application state and event handling.
//!
//! Elm-style centralized state: one `App` struct owns the scroll tracker,
//! the contact form, overlays and the in-app log, and turns key/mouse
//! events into state changes or mail worker commands.

use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::content::{self, Page};
use crate::journey::{JourneyState, SECTIONS};
use crate::mailer::{
    ContactRequest, MailCommand, MailMessage, MAX_EMAIL_LEN, MAX_MESSAGE_LEN, MAX_NAME_LEN,
};
use crate::particles::AmbientSystem;

/// Rows scrolled per arrow key / wheel notch
const SCROLL_STEP: f32 = 2.0;
const WHEEL_STEP: f32 = 3.0;

/// Left padding of the document text
pub const CONTENT_LEFT_PAD: u16 = 2;
/// Columns reserved at the right edge for the journey rail and its labels
pub const RAIL_WIDTH: u16 = 14;

/// Input mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Editing the contact form
    Editing,
}

/// Contact form fields, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
    SendButton,
    CancelButton,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Email,
            FormField::Message,
            FormField::SendButton,
            FormField::CancelButton,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Your Email",
            FormField::Message => "Message",
            FormField::SendButton => "Send Message",
            FormField::CancelButton => "Cancel",
        }
    }

    pub fn is_text_input(&self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Message)
    }

    pub fn is_button(&self) -> bool {
        matches!(self, FormField::SendButton | FormField::CancelButton)
    }

    /// Maximum character count for text fields
    pub fn max_len(&self) -> usize {
        match self {
            FormField::Name => MAX_NAME_LEN,
            FormField::Email => MAX_EMAIL_LEN,
            FormField::Message => MAX_MESSAGE_LEN,
            _ => 0,
        }
    }
}

/// State for the contact form modal
#[derive(Debug, Clone)]
pub struct FormState {
    pub focused_field: usize,
    pub fields: Vec<FormField>,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Validation error shown inside the modal
    pub error: Option<String>,
    /// A submission is in flight; input is frozen
    pub sending: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            focused_field: 0,
            fields: FormField::all().to_vec(),
            name: String::new(),
            email: String::new(),
            message: String::new(),
            error: None,
            sending: false,
        }
    }

    pub fn current_field(&self) -> FormField {
        self.fields[self.focused_field]
    }

    pub fn next_field(&mut self) {
        self.focused_field = (self.focused_field + 1) % self.fields.len();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self
            .focused_field
            .checked_sub(1)
            .unwrap_or(self.fields.len() - 1);
    }

    fn current_text_mut(&mut self) -> Option<&mut String> {
        match self.current_field() {
            FormField::Name => Some(&mut self.name),
            FormField::Email => Some(&mut self.email),
            FormField::Message => Some(&mut self.message),
            _ => None,
        }
    }

    /// Handle character input, enforcing the field's length cap
    pub fn handle_char(&mut self, c: char) {
        let cap = self.current_field().max_len();
        if let Some(text) = self.current_text_mut() {
            if text.chars().count() < cap {
                text.push(c);
            }
        }
    }

    pub fn handle_backspace(&mut self) {
        if let Some(text) = self.current_text_mut() {
            text.pop();
        }
    }

    pub fn build_request(&self) -> ContactRequest {
        ContactRequest::new(&self.name, &self.email, &self.message)
    }
}

/// Error popup state
#[derive(Debug, Clone)]
pub struct ErrorPopup {
    pub title: String,
    pub message: String,
    pub shown_at: Instant,
    pub auto_dismiss: Option<Duration>,
}

impl ErrorPopup {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            shown_at: Instant::now(),
            auto_dismiss: Some(Duration::from_secs(6)),
        }
    }

    pub fn should_dismiss(&self) -> bool {
        match self.auto_dismiss {
            Some(duration) => self.shown_at.elapsed() > duration,
            None => false,
        }
    }
}

/// Log entry for the message strip
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: Instant,
    pub message: String,
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogEntry {
    pub fn info(message: impl Into<String>) -> Self {
        Self::with_level(message, LogLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::with_level(message, LogLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::with_level(message, LogLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_level(message, LogLevel::Error)
    }

    fn with_level(message: impl Into<String>, level: LogLevel) -> Self {
        Self {
            timestamp: Instant::now(),
            message: message.into(),
            level,
        }
    }
}

/// Screen regions shared between rendering and mouse hit-testing
#[derive(Debug, Clone, Copy, Default)]
pub struct Areas {
    pub content: Rect,
    pub rail: Rect,
    pub logs: Rect,
    pub status: Rect,
}

/// Split the terminal area into content, log strip and status line, and
/// carve the journey rail out of the content's right edge.
pub fn compute_areas(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let content = chunks[0];
    let rail_w = RAIL_WIDTH.min(content.width);
    let rail = Rect {
        x: content.x + content.width - rail_w,
        y: content.y + 1,
        width: rail_w,
        height: content.height.saturating_sub(2),
    };

    Areas {
        content,
        rail,
        logs: chunks[1],
        status: chunks[2],
    }
}

/// Main application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Current input mode
    pub input_mode: InputMode,

    /// Scroll tracker for the journey rail
    pub journey: JourneyState,

    /// The built document for the current frame
    pub page: Page,

    /// Screen regions computed for the current terminal size
    pub areas: Areas,

    /// Ambient background animation
    pub ambient: AmbientSystem,

    /// Current contact form (if open)
    pub form_state: Option<FormState>,

    /// Current error popup (if any)
    pub error_popup: Option<ErrorPopup>,

    /// Log messages
    pub logs: Vec<LogEntry>,
    max_logs: usize,

    /// Whether the mail relay has an API key
    pub mail_configured: bool,

    /// Show help overlay
    pub show_help: bool,

    /// Frame counter for animations
    pub frame_count: u64,
}

impl App {
    pub fn new(mail_configured: bool) -> Self {
        let mut app = Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            journey: JourneyState::default(),
            page: content::build_page(80, 0),
            areas: Areas::default(),
            ambient: AmbientSystem::default(),
            form_state: None,
            error_popup: None,
            logs: Vec::new(),
            max_logs: 100,
            mail_configured,
            show_help: false,
            frame_count: 0,
        };

        app.log(LogEntry::info("Welcome! Scroll with j/k, drag the rail, ? for help"));
        if !mail_configured {
            app.log(LogEntry::warning(
                "RESEND_API_KEY not set; the contact form will not send mail",
            ));
        }
        app
    }

    /// Add a log entry
    pub fn log(&mut self, entry: LogEntry) {
        self.logs.push(entry);
        if self.logs.len() > self.max_logs {
            self.logs.remove(0);
        }
    }

    /// Show an error popup (also logged)
    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        let title = title.into();
        let message = message.into();
        self.log(LogEntry::error(format!("{}: {}", title, message)));
        self.error_popup = Some(ErrorPopup::new(title, message));
    }

    pub fn open_contact_form(&mut self) {
        self.form_state = Some(FormState::new());
        self.input_mode = InputMode::Editing;
    }

    pub fn close_form(&mut self) {
        self.form_state = None;
        self.input_mode = InputMode::Normal;
    }

    /// Width available for document text
    fn text_width(&self) -> u16 {
        self.areas
            .content
            .width
            .saturating_sub(CONTENT_LEFT_PAD + RAIL_WIDTH)
    }

    /// Rows visible in the document viewport
    fn viewport_rows(&self) -> u16 {
        self.areas.content.height
    }

    /// Update animations and derived state (called every frame)
    pub fn tick(&mut self, width: u16, height: u16) {
        self.frame_count = self.frame_count.wrapping_add(1);

        self.areas = compute_areas(Rect::new(0, 0, width, height));
        self.ambient.update(width, height);

        self.page = content::build_page(self.text_width(), self.frame_count);
        let viewport = self.viewport_rows();
        self.journey.tick(&self.page.layout, viewport);

        if let Some(ref popup) = self.error_popup {
            if popup.should_dismiss() {
                self.error_popup = None;
            }
        }
    }

    /// Handle mail worker messages
    pub fn handle_mail_message(&mut self, message: MailMessage) {
        match message {
            MailMessage::Sent { warning } => {
                self.log(LogEntry::success("Message sent! I'll get back to you soon"));
                if let Some(w) = warning {
                    self.log(LogEntry::warning(w));
                }
                self.close_form();
            }
            MailMessage::Failed(error) => {
                if let Some(form) = &mut self.form_state {
                    form.sending = false;
                }
                self.show_error(
                    "Could not send message",
                    format!("{} — you can email me directly at {}", error, content::EMAIL),
                );
            }
        }
    }

    /// Handle key events and return an optional mail command
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<MailCommand> {
        if self.error_popup.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ')) {
                self.error_popup = None;
            }
            return None;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter) {
                self.show_help = false;
            }
            return None;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Editing => self.handle_editing_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Option<MailCommand> {
        let viewport = self.viewport_rows();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
                return Some(MailCommand::Shutdown);
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return Some(MailCommand::Shutdown);
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('a') => {
                self.ambient.toggle_mode();
                let mode = self.ambient.mode().name();
                self.log(LogEntry::info(format!("Ambient mode: {}", mode)));
            }
            KeyCode::Char('c') => {
                self.open_contact_form();
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.journey.scroll_by(SCROLL_STEP, &self.page.layout, viewport);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.journey.scroll_by(-SCROLL_STEP, &self.page.layout, viewport);
            }
            KeyCode::PageDown | KeyCode::Char('d') => {
                let step = viewport.saturating_sub(2) as f32;
                self.journey.scroll_by(step, &self.page.layout, viewport);
            }
            KeyCode::PageUp | KeyCode::Char('u') => {
                let step = viewport.saturating_sub(2) as f32;
                self.journey.scroll_by(-step, &self.page.layout, viewport);
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.journey.scroll_by(f32::MIN, &self.page.layout, viewport);
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.journey.scroll_by(f32::MAX, &self.page.layout, viewport);
            }
            KeyCode::Tab => {
                self.navigate_relative(1);
            }
            KeyCode::BackTab => {
                self.navigate_relative(-1);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(section) = SECTIONS.get(index) {
                    self.journey
                        .navigate_to(section.id, &self.page.layout, viewport);
                }
            }
            _ => {}
        }
        None
    }

    /// Glide to the section `delta` steps away from the active one
    fn navigate_relative(&mut self, delta: i64) {
        let viewport = self.viewport_rows();
        let count = SECTIONS.len() as i64;
        let target = (self.journey.active_index as i64 + delta).clamp(0, count - 1);
        let section = SECTIONS[target as usize];
        self.journey.navigate_to(section.id, &self.page.layout, viewport);
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Option<MailCommand> {
        let Some(form) = &mut self.form_state else {
            self.input_mode = InputMode::Normal;
            return None;
        };

        if form.sending {
            // Submission in flight; only allow bailing out entirely
            if key.code == KeyCode::Esc {
                self.close_form();
            }
            return None;
        }

        match key.code {
            KeyCode::Esc => {
                self.close_form();
            }
            KeyCode::Tab | KeyCode::Down => {
                form.next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.prev_field();
            }
            KeyCode::Backspace => {
                form.handle_backspace();
            }
            KeyCode::Enter => {
                return self.handle_form_submit();
            }
            KeyCode::Char(c) => {
                form.handle_char(c);
            }
            _ => {}
        }
        None
    }

    fn handle_form_submit(&mut self) -> Option<MailCommand> {
        let form = self.form_state.as_mut()?;

        match form.current_field() {
            FormField::CancelButton => {
                self.close_form();
                None
            }
            field if field.is_text_input() => {
                // Enter on a text field moves on instead of submitting
                form.next_field();
                None
            }
            FormField::SendButton => {
                let request = form.build_request();
                if let Err(e) = request.validate() {
                    form.error = Some(e.to_string());
                    return None;
                }
                form.error = None;

                if !self.mail_configured {
                    self.show_error(
                        "Mail relay not configured",
                        format!(
                            "Set RESEND_API_KEY to enable the form, or email me at {}",
                            content::EMAIL
                        ),
                    );
                    return None;
                }

                form.sending = true;
                self.log(LogEntry::info("Sending message..."));
                Some(MailCommand::SendContact(request))
            }
            _ => None,
        }
    }

    /// Handle mouse events: wheel scrolling everywhere, drag on the rail
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        // Modals take over the screen; a stray drag must still end cleanly
        if self.input_mode != InputMode::Normal {
            self.journey.drag_end();
            return;
        }

        let viewport = self.viewport_rows();
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.journey.scroll_by(WHEEL_STEP, &self.page.layout, viewport);
            }
            MouseEventKind::ScrollUp => {
                self.journey.scroll_by(-WHEEL_STEP, &self.page.layout, viewport);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.rail_hit(mouse.column, mouse.row) {
                    self.journey.drag_start();
                    let fraction = self.rail_fraction(mouse.row);
                    self.journey.drag_move(fraction, &self.page.layout, viewport);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.journey.dragging {
                    let fraction = self.rail_fraction(mouse.row);
                    self.journey.drag_move(fraction, &self.page.layout, viewport);
                }
            }
            // Button release, a bare move, or anything unexpected ends the
            // gesture; a stuck drag would pin the rail forever
            _ => {
                self.journey.drag_end();
            }
        }
    }

    /// The terminal lost focus: the button release will never arrive, so
    /// any drag gesture ends here.
    pub fn handle_focus_lost(&mut self) {
        self.journey.drag_end();
    }

    fn rail_hit(&self, column: u16, row: u16) -> bool {
        let rail = self.areas.rail;
        rail.height > 0
            && column >= rail.x
            && column < rail.x + rail.width
            && row >= rail.y
            && row < rail.y + rail.height
    }

    /// Pointer row to track fraction, clamped to the rail extent
    fn rail_fraction(&self, row: u16) -> f32 {
        let rail = self.areas.rail;
        if rail.height == 0 {
            return 0.0;
        }
        let clamped = row.clamp(rail.y, rail.y + rail.height - 1);
        JourneyState::row_to_fraction(clamped - rail.y, rail.height)
    }

    /// Status bar text
    pub fn status_text(&self) -> String {
        let section = SECTIONS
            .get(self.journey.active_index)
            .map(|s| s.label)
            .unwrap_or("-");
        format!(
            "{} · {:>3.0}% | ?: Help | c: Contact | Tab: Next section | q: Quit",
            section,
            self.journey.progress * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app() -> App {
        let mut app = App::new(false);
        app.tick(100, 40);
        app
    }

    #[test]
    fn form_fields_cycle_in_order() {
        let mut form = FormState::new();
        assert_eq!(form.current_field(), FormField::Name);
        for _ in 0..FormField::all().len() {
            form.next_field();
        }
        assert_eq!(form.current_field(), FormField::Name);
        form.prev_field();
        assert_eq!(form.current_field(), FormField::CancelButton);
    }

    #[test]
    fn text_input_respects_length_caps() {
        let mut form = FormState::new();
        for _ in 0..(MAX_NAME_LEN + 50) {
            form.handle_char('x');
        }
        assert_eq!(form.name.chars().count(), MAX_NAME_LEN);

        form.handle_backspace();
        assert_eq!(form.name.chars().count(), MAX_NAME_LEN - 1);
    }

    #[test]
    fn buttons_ignore_character_input() {
        let mut form = FormState::new();
        while !form.current_field().is_button() {
            form.next_field();
        }
        form.handle_char('x');
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn submit_without_relay_shows_error_not_command() {
        let mut app = app();
        app.open_contact_form();
        {
            let form = app.form_state.as_mut().unwrap();
            form.name = "Jane".into();
            form.email = "jane@example.com".into();
            form.message = "hello".into();
            while form.current_field() != FormField::SendButton {
                form.next_field();
            }
        }
        let cmd = app.handle_key(key(KeyCode::Enter));
        assert!(cmd.is_none());
        assert!(app.error_popup.is_some());
    }

    #[test]
    fn submit_with_relay_emits_send_command() {
        let mut app = App::new(true);
        app.tick(100, 40);
        app.open_contact_form();
        {
            let form = app.form_state.as_mut().unwrap();
            form.name = "Jane".into();
            form.email = "jane@example.com".into();
            form.message = "hello".into();
            while form.current_field() != FormField::SendButton {
                form.next_field();
            }
        }
        match app.handle_key(key(KeyCode::Enter)) {
            Some(MailCommand::SendContact(req)) => {
                assert_eq!(req.name, "Jane");
            }
            other => panic!("expected SendContact, got {:?}", other),
        }
        assert!(app.form_state.as_ref().unwrap().sending);
    }

    #[test]
    fn invalid_submission_stays_in_the_form() {
        let mut app = App::new(true);
        app.tick(100, 40);
        app.open_contact_form();
        {
            let form = app.form_state.as_mut().unwrap();
            while form.current_field() != FormField::SendButton {
                form.next_field();
            }
        }
        let cmd = app.handle_key(key(KeyCode::Enter));
        assert!(cmd.is_none());
        let form = app.form_state.as_ref().unwrap();
        assert!(form.error.is_some());
        assert!(!form.sending);
    }

    #[test]
    fn rail_click_starts_and_release_ends_the_drag() {
        let mut app = app();
        let rail = app.areas.rail;
        assert!(rail.height > 0);

        app.handle_mouse(mouse(
            MouseEventKind::Down(MouseButton::Left),
            rail.x + 1,
            rail.y,
        ));
        assert!(app.journey.dragging);

        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0));
        assert!(!app.journey.dragging);
    }

    #[test]
    fn unexpected_mouse_event_ends_a_stuck_drag() {
        let mut app = app();
        let rail = app.areas.rail;
        app.handle_mouse(mouse(
            MouseEventKind::Down(MouseButton::Left),
            rail.x,
            rail.y + rail.height / 2,
        ));
        assert!(app.journey.dragging);

        // A bare move without a held button means the release was lost
        app.handle_mouse(mouse(MouseEventKind::Moved, 5, 5));
        assert!(!app.journey.dragging);
    }

    #[test]
    fn focus_loss_ends_an_active_drag() {
        let mut app = app();
        let rail = app.areas.rail;
        app.handle_mouse(mouse(
            MouseEventKind::Down(MouseButton::Left),
            rail.x,
            rail.y,
        ));
        assert!(app.journey.dragging);

        app.handle_focus_lost();
        assert!(!app.journey.dragging);
    }

    #[test]
    fn click_outside_the_rail_does_not_drag() {
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert!(!app.journey.dragging);
    }

    #[test]
    fn quit_key_requests_worker_shutdown() {
        let mut app = app();
        match app.handle_key(key(KeyCode::Char('q'))) {
            Some(MailCommand::Shutdown) => {}
            other => panic!("expected Shutdown, got {:?}", other),
        }
        assert!(app.should_quit);
    }

    #[test]
    fn error_popup_swallows_keys_until_dismissed() {
        let mut app = app();
        app.show_error("Oops", "something broke");
        app.handle_key(key(KeyCode::Char('j')));
        assert_eq!(app.journey.offset, 0.0);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.error_popup.is_none());
    }

    #[test]
    fn mail_failure_unfreezes_the_form() {
        let mut app = App::new(true);
        app.tick(100, 40);
        app.open_contact_form();
        app.form_state.as_mut().unwrap().sending = true;

        app.handle_mail_message(MailMessage::Failed("boom".into()));
        assert!(!app.form_state.as_ref().unwrap().sending);
        assert!(app.error_popup.is_some());
    }

    #[test]
    fn mail_success_closes_the_form() {
        let mut app = App::new(true);
        app.tick(100, 40);
        app.open_contact_form();
        app.handle_mail_message(MailMessage::Sent { warning: None });
        assert!(app.form_state.is_none());
        assert_eq!(app.input_mode, InputMode::Normal);
    }
}
