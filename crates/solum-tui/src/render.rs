//! Pure view/render functions for the sign-in TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui Frame and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::state::{AppState, Focus, View};

/// Width of the centered card.
const CARD_WIDTH: u16 = 56;

/// Renders the entire screen to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    match &app.view {
        View::Form => render_form_card(app, frame, area),
        View::Welcome { email } => render_welcome_card(frame, area, email),
    }
}

fn render_form_card(app: &AppState, frame: &mut Frame, area: Rect) {
    let lines = form_lines(app);
    let card = card_area(area, CARD_WIDTH, lines.len() as u16 + 2);
    render_card_container(frame, card);
    let inner = inner_area(card);
    frame.render_widget(Paragraph::new(lines), inner);
    render_hints(
        frame,
        area,
        &[
            ("Tab", "switch field"),
            ("Enter", "sign in"),
            ("Ctrl+R", "show password"),
            ("Esc", "quit"),
        ],
    );
}

fn render_welcome_card(frame: &mut Frame, area: Rect, email: &str) {
    let lines = vec![
        Line::from(Span::styled(
            "Welcome!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            email.to_string(),
            Style::default().fg(Color::White),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "You have successfully logged in to Solum Medical",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    ];
    let card = card_area(area, CARD_WIDTH, lines.len() as u16 + 2);
    render_card_container(frame, card);
    frame.render_widget(Paragraph::new(lines), inner_area(card));
    render_hints(frame, area, &[("Enter", "log out"), ("Esc", "quit")]);
}

fn form_lines(app: &AppState) -> Vec<Line<'static>> {
    let form = &app.form;
    let mut lines = vec![
        Line::from(Span::styled(
            "Solum Medical",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            "Sign in to your account",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    lines.push(field_label("Email Address"));
    lines.push(field_value(
        form.email.text().to_string(),
        form.focus == Focus::Email && !form.is_busy(),
    ));
    if let Some(error) = &form.errors.email {
        lines.push(error_line(error));
    }

    lines.push(field_label("Password"));
    let shown = if form.reveal_password {
        form.password.text().to_string()
    } else {
        "*".repeat(form.password.text().chars().count())
    };
    lines.push(field_value(
        shown,
        form.focus == Focus::Password && !form.is_busy(),
    ));
    if let Some(error) = &form.errors.password {
        lines.push(error_line(error));
    }

    lines.push(Line::from(""));
    let submit = if form.is_busy() {
        Span::styled("Signing in...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            "[ Sign In ]",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };
    lines.push(Line::from(submit).alignment(Alignment::Center));
    lines.push(
        Line::from(Span::styled(
            "Forgot password?",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    );

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Test Accounts:",
        Style::default().fg(Color::DarkGray),
    )));
    for record in app.directory.records() {
        lines.push(Line::from(Span::styled(
            format!("  {} / {}", record.email, record.password),
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines
}

fn field_label(label: &'static str) -> Line<'static> {
    Line::from(Span::styled(label, Style::default().fg(Color::White)))
}

/// Renders a field value line as "> <text>█", with the cursor block only
/// on the focused field.
fn field_value(text: String, focused: bool) -> Line<'static> {
    let prompt_color = if focused { Color::Cyan } else { Color::DarkGray };
    let mut spans = vec![
        Span::styled("> ", Style::default().fg(prompt_color)),
        Span::styled(text, Style::default().fg(Color::White)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {message}"),
        Style::default().fg(Color::Red),
    ))
}

/// Centers a card of the given size within the terminal area.
fn card_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn render_card_container(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);
}

fn inner_area(card: Rect) -> Rect {
    Rect::new(
        card.x + 2,
        card.y + 1,
        card.width.saturating_sub(4),
        card.height.saturating_sub(2),
    )
}

/// Renders a line of keyboard hints at the bottom of the screen.
fn render_hints(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    if area.height == 0 {
        return;
    }
    let hints_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

    let mut spans = Vec::new();
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use solum_core::config::Config;
    use solum_core::submit::FieldErrors;

    use super::*;
    use crate::state::PendingLogin;

    fn draw(app: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal.draw(|frame| render(app, frame)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn form_shows_headers_fields_and_demo_accounts() {
        let app = AppState::new(&Config::default());
        let screen = draw(&app);
        assert!(screen.contains("Solum Medical"));
        assert!(screen.contains("Sign in to your account"));
        assert!(screen.contains("Email Address"));
        assert!(screen.contains("Password"));
        assert!(screen.contains("[ Sign In ]"));
        assert!(screen.contains("Forgot password?"));
        assert!(screen.contains("doctor@solum.com / Test123!"));
    }

    #[test]
    fn password_is_masked_unless_revealed() {
        let mut app = AppState::new(&Config::default());
        app.form.password.insert_str("Test123!");
        let screen = draw(&app);
        assert!(screen.contains("********"));
        assert!(!screen.contains("Test123!*"));

        app.form.reveal_password = true;
        let screen = draw(&app);
        assert!(screen.contains("> Test123!"));
    }

    #[test]
    fn errors_render_in_the_card() {
        let mut app = AppState::new(&Config::default());
        app.form.errors = FieldErrors {
            email: Some("Email address is required".to_string()),
            password: Some("Password is required".to_string()),
        };
        let screen = draw(&app);
        assert!(screen.contains("Email address is required"));
        assert!(screen.contains("Password is required"));
    }

    #[test]
    fn busy_form_shows_the_signing_in_label() {
        let mut app = AppState::new(&Config::default());
        let attempt = app.next_attempt();
        app.form.submitting = Some(PendingLogin {
            attempt,
            email: "doctor@solum.com".to_string(),
        });
        let screen = draw(&app);
        assert!(screen.contains("Signing in..."));
        assert!(!screen.contains("[ Sign In ]"));
    }

    #[test]
    fn welcome_screen_shows_the_session_email() {
        let mut app = AppState::new(&Config::default());
        app.view = View::Welcome {
            email: "admin@solum.com".to_string(),
        };
        let screen = draw(&app);
        assert!(screen.contains("Welcome!"));
        assert!(screen.contains("admin@solum.com"));
        assert!(screen.contains("You have successfully logged in to Solum Medical"));
    }
}
