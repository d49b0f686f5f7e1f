//! Application chrome: overall layout, header and status bar

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Split the screen into header, main content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2])
}

/// Header: view name plus, when a form is open, its title, status badge
/// and version
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        app.state.current_view.title(),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    if app.state.current_view.needs_current_form() {
        let form = app.current_form();
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            form.title.clone(),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{}]", form.status.label()),
            Style::default().fg(form.status.color()),
        ));
        spans.push(Span::styled(
            format!(" v{}", form.version),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let block = Block::default().borders(Borders::ALL);
    let header = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(header, area);
}

/// View-specific key hints for the status bar
fn view_hints(view: &View) -> &'static str {
    match view {
        View::Home => "↑↓ select | Enter open | q quit",
        View::Builder => {
            "Tab title/fields | Enter next attr | ^N add | ^D delete | ^T type | ^O/^X option | ^↑↓ move | ^S save | ^P publish | ^E preview | Esc home"
        }
        View::Preview => "↑↓ field | type to answer | ←→ pick option | Enter submit | Esc back",
        View::Drafts | View::Published | View::Submitted => "↑↓ select | Enter open | Esc back",
    }
}

/// Status bar: hints plus any transient feedback
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        view_hints(&app.state.current_view),
        Style::default().fg(Color::DarkGray),
    )];

    if let Some(msg) = app.success_message() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    } else if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let bar = Paragraph::new(Line::from(spans));
    frame.render_widget(bar, area);
}
