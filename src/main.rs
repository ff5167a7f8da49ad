//! folio-tui - a scrolling portfolio for the terminal
//!
//! A single-page portfolio rendered as a scrollable TUI document, with a
//! journey rail tracking the active section and a contact form relayed
//! over the Resend email API.

mod app;
mod content;
mod journey;
mod mailer;
mod particles;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use app::App;
use mailer::{MailClient, MailCommand, MailMessage};

/// Frame rate for animations (approximately 30 FPS)
const FRAME_DURATION: Duration = Duration::from_millis(33);

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install().ok();

    run_tui().await
}

/// Run the TUI application
async fn run_tui() -> Result<()> {
    // The relay is optional; without a key the app still runs read-only
    let mail_client = MailClient::from_env().ok();
    let mail_configured = mail_client.is_some();

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Create communication channels
    let (mail_tx, mut mail_rx) = mpsc::channel::<MailMessage>(8);
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<MailCommand>(8);

    // Spawn the mail worker task
    let mail_task = tokio::spawn(async move {
        run_mail_worker(mail_client, mail_tx, &mut cmd_rx).await
    });

    // Create application state
    let mut app = App::new(mail_configured);

    // Main event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut mail_rx, &cmd_tx).await;

    // Cleanup
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    mail_task.abort();

    result
}

/// Run the mail worker task
async fn run_mail_worker(
    client: Option<MailClient>,
    tx: mpsc::Sender<MailMessage>,
    rx: &mut mpsc::Receiver<MailCommand>,
) {
    loop {
        tokio::select! {
            Some(cmd) = rx.recv() => {
                match cmd {
                    MailCommand::SendContact(request) => {
                        let Some(client) = &client else {
                            tx.send(MailMessage::Failed(
                                "Mail relay is not configured".to_string(),
                            ))
                            .await
                            .ok();
                            continue;
                        };
                        match client.send_contact(&request).await {
                            Ok(report) => {
                                tx.send(MailMessage::Sent {
                                    warning: report.confirmation_warning,
                                })
                                .await
                                .ok();
                            }
                            Err(e) => {
                                tx.send(MailMessage::Failed(format!("{:#}", e))).await.ok();
                            }
                        }
                    }
                    MailCommand::Shutdown => {
                        break;
                    }
                }
            }
        }
    }
}

/// Run the main event loop
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    mail_rx: &mut mpsc::Receiver<MailMessage>,
    cmd_tx: &mpsc::Sender<MailCommand>,
) -> Result<()> {
    loop {
        let size = terminal.size()?;

        // Update animations and the glide, rebuild the page for this frame
        app.tick(size.width, size.height);

        terminal.draw(|frame| ui::render(frame, app))?;

        // Check for mail worker messages (non-blocking)
        while let Ok(msg) = mail_rx.try_recv() {
            app.handle_mail_message(msg);
        }

        // Handle input events with timeout for animation
        if event::poll(FRAME_DURATION)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events (not release)
                    if key.kind == KeyEventKind::Press {
                        if let Some(cmd) = app.handle_key(key) {
                            cmd_tx.send(cmd).await.ok();
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                Event::FocusLost => {
                    app.handle_focus_lost();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
