//! UI rendering module.
//!
//! Renders the scrolling portfolio page with its journey rail, the
//! ambient background, and the contact form and overlay popups, in the
//! midnight neon palette.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, FormField, FormState, LogLevel, CONTENT_LEFT_PAD};
use crate::journey::JourneyPathWidget;
use crate::mailer::MAX_MESSAGE_LEN;
use crate::particles::AmbientWidget;
use crate::theme::{colors, styles};

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Fill background with theme color
    let bg_block = Block::default().style(Style::default().bg(colors::BG_DARK));
    frame.render_widget(bg_block, area);

    // Ambient starfield behind everything
    frame.render_widget(AmbientWidget::new(&app.ambient), area);

    render_page(frame, app, app.areas.content);
    frame.render_widget(
        JourneyPathWidget::new(&app.journey, app.frame_count),
        app.areas.rail,
    );
    render_logs(frame, app, app.areas.logs);
    render_status_bar(frame, app, app.areas.status);

    // Overlays
    if app.form_state.is_some() {
        render_form_modal(frame, app, area);
    }

    if app.error_popup.is_some() {
        render_error_popup(frame, app, area);
    }

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

/// Render the visible slice of the portfolio document
fn render_page(frame: &mut Frame, app: &App, area: Rect) {
    if area.width <= CONTENT_LEFT_PAD || area.height == 0 {
        return;
    }

    let text_area = Rect {
        x: area.x + CONTENT_LEFT_PAD,
        y: area.y,
        width: area.width - CONTENT_LEFT_PAD,
        height: area.height,
    };

    let first_row = app.journey.offset.round().max(0.0) as usize;
    let visible: Vec<Line> = app
        .page
        .lines
        .iter()
        .skip(first_row)
        .take(area.height as usize)
        .cloned()
        .collect();

    frame.render_widget(Paragraph::new(visible), text_area);
}

/// Render the log strip
fn render_logs(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .logs
        .iter()
        .rev()
        .take(area.height.saturating_sub(2) as usize)
        .map(|entry| {
            let (prefix, color) = match entry.level {
                LogLevel::Info => ("i", colors::CYAN),
                LogLevel::Success => ("+", colors::GREEN),
                LogLevel::Warning => ("!", colors::AMBER),
                LogLevel::Error => ("x", colors::RED),
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("[{}] ", prefix), Style::default().fg(color)),
                Span::styled(&entry.message, styles::text_dim()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(styles::border_dim()),
    );

    frame.render_widget(list, area);
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status = Paragraph::new(app.status_text())
        .style(styles::text_dim())
        .alignment(Alignment::Left);
    frame.render_widget(status, area);
}

/// Render the contact form modal
fn render_form_modal(frame: &mut Frame, app: &App, area: Rect) {
    let form = match &app.form_state {
        Some(f) => f,
        None => return,
    };

    // name(3) + email(3) + message(5) + spacer + buttons + error + margin/borders
    let popup_width = 56.min(area.width.saturating_sub(2));
    let popup_height = 18.min(area.height.saturating_sub(2));
    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let title = if form.sending {
        " Get In Touch · sending... "
    } else {
        " Get In Touch "
    };
    let block = Block::default()
        .title(title)
        .title_style(styles::title())
        .borders(Borders::ALL)
        .border_style(styles::border_focused())
        .style(styles::modal_content_bg());

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(5), // Message
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
        ])
        .margin(1)
        .split(inner);

    render_text_field(
        frame,
        "Name:",
        &form.name,
        form.current_field() == FormField::Name,
        chunks[0],
    );
    render_text_field(
        frame,
        "Email:",
        &form.email,
        form.current_field() == FormField::Email,
        chunks[1],
    );
    render_message_field(frame, form, chunks[2]);

    render_form_buttons(
        frame,
        form.current_field() == FormField::SendButton,
        form.current_field() == FormField::CancelButton,
        form.sending,
        chunks[4],
    );

    if let Some(ref error) = form.error {
        let error_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        let error_text = Paragraph::new(error.as_str())
            .style(styles::error())
            .alignment(Alignment::Center);
        frame.render_widget(error_text, error_area);
    }
}

/// Render a single-line text input field
fn render_text_field(frame: &mut Frame, label: &str, value: &str, is_focused: bool, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(10), Constraint::Min(10)])
        .split(area);

    let label_text = Paragraph::new(label)
        .style(styles::form_label())
        .alignment(Alignment::Right);
    frame.render_widget(label_text, chunks[0]);

    let input_style = if is_focused {
        styles::form_input_focused()
    } else {
        styles::form_input()
    };

    // Keep the tail (and the cursor) visible once the value outgrows the box
    let visible_cols = chunks[1].width.saturating_sub(4) as usize;
    let display: String = value
        .chars()
        .rev()
        .take(visible_cols)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let cursor = if is_focused { "█" } else { "" };
    let input = Paragraph::new(format!(" {}{}", display, cursor))
        .style(input_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if is_focused {
                    styles::border_focused()
                } else {
                    styles::border_dim()
                }),
        );
    frame.render_widget(input, chunks[1]);
}

/// Render the multi-line message field with its character counter
fn render_message_field(frame: &mut Frame, form: &FormState, area: Rect) {
    let is_focused = form.current_field() == FormField::Message;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(10), Constraint::Min(10)])
        .split(area);

    let label = format!("Message:\n{}/{}", form.message.chars().count(), MAX_MESSAGE_LEN);
    let label_text = Paragraph::new(label)
        .style(styles::form_label())
        .alignment(Alignment::Right);
    frame.render_widget(label_text, chunks[0]);

    let input_style = if is_focused {
        styles::form_input_focused()
    } else {
        styles::form_input()
    };

    let cursor = if is_focused { "█" } else { "" };
    let input = Paragraph::new(format!(" {}{}", form.message, cursor))
        .style(input_style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if is_focused {
                    styles::border_focused()
                } else {
                    styles::border_dim()
                }),
        );
    frame.render_widget(input, chunks[1]);
}

/// Render form buttons
fn render_form_buttons(
    frame: &mut Frame,
    send_focused: bool,
    cancel_focused: bool,
    sending: bool,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(18),
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Percentage(25),
        ])
        .split(area);

    let send_label = if sending { " [ Sending... ] " } else { " [ Send Message ] " };
    let send_style = if send_focused {
        styles::button_focused()
    } else {
        styles::button()
    };
    let send_btn = Paragraph::new(send_label)
        .style(send_style)
        .alignment(Alignment::Center);
    frame.render_widget(send_btn, chunks[1]);

    let cancel_style = if cancel_focused {
        styles::button_focused()
    } else {
        styles::button()
    };
    let cancel_btn = Paragraph::new(" [ Cancel ] ")
        .style(cancel_style)
        .alignment(Alignment::Center);
    frame.render_widget(cancel_btn, chunks[3]);
}

/// Render error popup
fn render_error_popup(frame: &mut Frame, app: &App, area: Rect) {
    let popup = match &app.error_popup {
        Some(p) => p,
        None => return,
    };

    let popup_width = (area.width * 60 / 100).clamp(30, 60);
    let popup_height = 7;
    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {} ", popup.title))
        .title_style(
            Style::default()
                .fg(Color::White)
                .bg(colors::RED)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::RED))
        .style(Style::default().bg(Color::Rgb(0x2A, 0x18, 0x18)));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let text = Paragraph::new(popup.message.as_str())
        .style(styles::text())
        .wrap(Wrap { trim: true });
    frame.render_widget(text, inner);

    let hint = Paragraph::new("Press ESC or ENTER to dismiss")
        .style(styles::text_hint())
        .alignment(Alignment::Center);
    let hint_area = Rect::new(
        popup_area.x,
        popup_area.y + popup_area.height - 1,
        popup_area.width,
        1,
    );
    frame.render_widget(hint, hint_area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_width = 56.min(area.width.saturating_sub(2));
    let popup_height = 21.min(area.height.saturating_sub(2));
    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let key = |k: &'static str| Span::styled(k, Style::default().fg(colors::CYAN));
    let group = |name: &'static str| {
        Line::from(Span::styled(
            name,
            Style::default().fg(colors::VIOLET).add_modifier(Modifier::BOLD),
        ))
    };

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().fg(colors::CYAN).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        group("Scrolling"),
        Line::from(vec![key("  j/k or Up/Down  "), Span::raw("Scroll the page")]),
        Line::from(vec![key("  d/u or PgDn/PgUp"), Span::raw("Scroll a screenful")]),
        Line::from(vec![key("  g / G           "), Span::raw("Jump to top / bottom")]),
        Line::from(vec![key("  Mouse wheel     "), Span::raw("Scroll the page")]),
        Line::from(""),
        group("Sections"),
        Line::from(vec![key("  Tab / Shift+Tab "), Span::raw("Next / previous section")]),
        Line::from(vec![key("  1-5             "), Span::raw("Jump to a section")]),
        Line::from(vec![key("  Drag the rail   "), Span::raw("Scrub between sections")]),
        Line::from(""),
        group("General"),
        Line::from(vec![key("  c               "), Span::raw("Open the contact form")]),
        Line::from(vec![key("  a               "), Span::raw("Cycle ambient background")]),
        Line::from(vec![key("  ?               "), Span::raw("Toggle this help")]),
        Line::from(vec![key("  q / Ctrl+C      "), Span::raw("Quit")]),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .title_style(styles::title())
                .borders(Borders::ALL)
                .border_style(styles::border())
                .style(styles::modal_content_bg()),
        )
        .style(styles::text());

    frame.render_widget(paragraph, popup_area);
}

/// Helper to create a centered rectangle
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
