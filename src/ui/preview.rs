//! Preview view: fill the current form and submit it

use super::render_scrollable_list;
use crate::app::App;
use crate::state::{Field, FieldType};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_completion_gauge(frame, chunks[0], app);

    if let Some(msg) = app.success_message() {
        let banner = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(banner, chunks[1]);
        return;
    }

    draw_fields(frame, chunks[1], app);
}

/// Whole-percent completion bar, the gate for submission
fn draw_completion_gauge(frame: &mut Frame, area: Rect, app: &App) {
    let pct = app.current_form().completion_percentage();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(pct / 100.0)
        .label(format!("Form completeness: {pct:.0}%"));
    frame.render_widget(gauge, area);
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.current_form();
    let block = Block::default()
        .title(format!(" {} ", form.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(form.status.color()));

    if form.fields.is_empty() {
        let empty = Paragraph::new("This form has no questions.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = form
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| fill_item(field, i == app.state.preview_field))
        .collect();

    let list = List::new(items).block(block);
    render_scrollable_list(frame, area, list, app.state.preview_field);
}

/// One question as presented while filling: label, optional help text and
/// the answer input
fn fill_item(field: &Field, selected: bool) -> ListItem<'static> {
    let dim = Style::default().fg(Color::DarkGray);
    let label_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let label = if field.label.is_empty() {
        "(untitled question)".to_string()
    } else {
        field.label.clone()
    };
    let mut lines = vec![Line::from(Span::styled(label, label_style))];

    if !field.help_text.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {}", field.help_text),
            dim,
        )));
    }

    match field.field_type {
        FieldType::SingleSelect => {
            for option in &field.options {
                let marker = if *option == field.value { "(•)" } else { "( )" };
                let style = if *option == field.value {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                };
                lines.push(Line::from(Span::styled(
                    format!("  {marker} {option}"),
                    style,
                )));
            }
        }
        _ => {
            let answer = if field.value.is_empty() {
                Span::styled(answer_placeholder(field.field_type), dim)
            } else {
                Span::styled(field.value.clone(), Style::default())
            };
            lines.push(Line::from(vec![Span::raw("  > "), answer]));
        }
    }

    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn answer_placeholder(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::ShortText => "Short answer text",
        FieldType::LongText => "Long answer text",
        FieldType::Number => "Number",
        FieldType::Url => "https://",
        FieldType::SingleSelect => "",
    }
}
