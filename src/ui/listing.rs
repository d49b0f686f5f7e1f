//! Home menu and the per-status form listings

use super::render_scrollable_list;
use crate::app::{App, HOME_MENU};
use crate::state::FormStatus;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the landing menu
pub fn draw_home(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = HOME_MENU
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == app.state.selected_index {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(*entry, style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Form Builder · {} saved ", app.store.forms().len()))
            .borders(Borders::ALL),
    );
    render_scrollable_list(frame, area, list, app.state.selected_index);
}

/// Draw the saved forms with the given status, in insertion order
pub fn draw_status_list(frame: &mut Frame, area: Rect, app: &App, status: FormStatus) {
    let forms = app.store.forms_by_status(status);
    let block = Block::default()
        .title(format!(" {} ", status.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(status.color()));

    if forms.is_empty() {
        let empty = Paragraph::new(format!(
            "No {} forms found.",
            status.label().to_lowercase()
        ))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = forms
        .iter()
        .enumerate()
        .map(|(i, form)| {
            let selected = i == app.state.selected_index;
            let title_style = if selected {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let lines = vec![
                Line::from(Span::styled(form.title.clone(), title_style)),
                Line::from(Span::styled(
                    format!(
                        "Created: {}  ({} questions, v{})",
                        form.created_at.format("%Y-%m-%d"),
                        form.fields.len(),
                        form.version
                    ),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(block);
    render_scrollable_list(frame, area, list, app.state.selected_index);
}
