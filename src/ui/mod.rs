//! UI module for rendering the TUI

mod builder;
mod layout;
mod listing;
mod preview;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

pub use widgets::render_scrollable_list;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Home => listing::draw_home(frame, main_area, app),
        View::Builder => builder::draw(frame, main_area, app),
        View::Preview => preview::draw(frame, main_area, app),
        View::Drafts => listing::draw_status_list(frame, main_area, app, crate::state::FormStatus::Draft),
        View::Published => {
            listing::draw_status_list(frame, main_area, app, crate::state::FormStatus::Published)
        }
        View::Submitted => {
            listing::draw_status_list(frame, main_area, app, crate::state::FormStatus::Submitted)
        }
    }

    layout::draw_status_bar(frame, status_area, app);
}
