//! Builder view: edit the current form's title, fields and options

use super::render_scrollable_list;
use crate::app::App;
use crate::state::{BuilderFocus, Field, FieldAttr, FieldType};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Style for the attribute under the cursor
fn active_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

/// Placeholder text shown for an empty attribute
fn or_placeholder(text: &str, placeholder: &str) -> (String, bool) {
    if text.is_empty() {
        (placeholder.to_string(), true)
    } else {
        (text.to_string(), false)
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    draw_title(frame, chunks[0], app);
    draw_fields(frame, chunks[1], app);
}

fn draw_title(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.current_form();
    let focused = app.state.builder_focus == BuilderFocus::Title;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let (text, is_placeholder) = or_placeholder(&form.title, "Untitled form");
    let style = if is_placeholder {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        active_style()
    } else {
        Style::default()
    };

    let title = Paragraph::new(Span::styled(text, style)).block(
        Block::default()
            .title(" Title ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(title, area);
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.current_form();
    let focused = app.state.builder_focus == BuilderFocus::Fields;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" Questions ({}) ", form.fields.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if form.fields.is_empty() {
        let empty = Paragraph::new("No questions yet. Press Ctrl+N to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = form
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let selected = focused && i == app.state.selected_field;
            field_item(field, selected, app.state.field_attr)
        })
        .collect();

    let list = List::new(items).block(block);
    render_scrollable_list(frame, area, list, app.state.selected_field);
}

/// One field card: question line, help text, answer and any options
fn field_item(field: &Field, selected: bool, attr: FieldAttr) -> ListItem<'static> {
    let attr_style = |target: FieldAttr| {
        if selected && attr == target {
            active_style()
        } else {
            Style::default()
        }
    };
    let dim = Style::default().fg(Color::DarkGray);

    let (label, label_empty) = or_placeholder(&field.label, "Write a question");
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("{} ", field.field_type.symbol()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(label, if label_empty { dim } else { attr_style(FieldAttr::Label) }),
        Span::styled(format!("  · {}", field.field_type.label()), dim),
    ])];

    let (help, help_empty) = or_placeholder(&field.help_text, "Write a help text or caption");
    lines.push(Line::from(Span::styled(
        format!("  {help}"),
        if help_empty { dim } else { attr_style(FieldAttr::HelpText) },
    )));

    let (value, value_empty) = or_placeholder(&field.value, "Answer");
    lines.push(Line::from(Span::styled(
        format!("  {value}"),
        if value_empty { dim } else { attr_style(FieldAttr::Value) },
    )));

    if field.field_type == FieldType::SingleSelect {
        for (j, option) in field.options.iter().enumerate() {
            let marker = if *option == field.value { "(•)" } else { "( )" };
            let (text, empty) = or_placeholder(option, "Option text");
            lines.push(Line::from(Span::styled(
                format!("  {marker} {text}"),
                if empty { dim } else { attr_style(FieldAttr::Option(j)) },
            )));
        }
    }

    if let Some(error) = &field.error {
        lines.push(Line::from(Span::styled(
            format!("  ! {error}"),
            Style::default().fg(Color::Red),
        )));
    }

    lines.push(Line::from(""));
    ListItem::new(lines)
}
