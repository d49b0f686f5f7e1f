//! Application core: view routing and per-view key handling

use crate::config::BuilderConfig;
use crate::state::{
    AppState, BuilderFocus, FieldAttr, FieldPatch, Form, FormStatus, FormStore, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// How long the submit-success banner stays on screen
const SUCCESS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Entries of the home menu, in display order
pub const HOME_MENU: [&str; 4] = [
    "Create a Form",
    "Draft Forms",
    "Published Forms",
    "Submitted Forms",
];

/// Main application struct
pub struct App {
    /// UI-side state: current view, navigation, selection, editor focus
    pub state: AppState,
    /// All form state; every mutation goes through here
    pub store: FormStore,
    pub config: BuilderConfig,
    /// Whether the app should quit
    quit: bool,
    /// Short-lived feedback shown in the status bar
    pub status_message: Option<String>,
    /// Transient success banner and its expiry
    success: Option<(String, Instant)>,
}

impl App {
    /// Create a new App instance, loading the user config
    pub fn new() -> Result<Self> {
        Ok(Self::with_config(BuilderConfig::load()?))
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            state: AppState::default(),
            store: FormStore::new(),
            config,
            quit: false,
            status_message: None,
            success: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// The form being edited or previewed.
    ///
    /// Builder and Preview are only reachable after the store has a
    /// current form, so absence here is a programmer error.
    pub fn current_form(&self) -> &Form {
        self.store
            .current_form()
            .expect("view requires a current form; set one via the FormStore before navigating")
    }

    /// Expire the transient success banner. Called once per event-loop turn.
    pub fn tick(&mut self) {
        if let Some((_, expires)) = self.success {
            if Instant::now() >= expires {
                self.success = None;
            }
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.as_ref().map(|(msg, _)| msg.as_str())
    }

    fn show_success(&mut self, message: impl Into<String>) {
        self.success = Some((message.into(), Instant::now() + SUCCESS_MESSAGE_TTL));
    }

    fn show_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Switch views, remembering where we came from
    pub fn navigate(&mut self, view: View) {
        self.state.view_history.push(self.state.current_view);
        self.state.current_view = view;
        self.state.reset_selection();
        self.status_message = None;
    }

    pub fn go_back(&mut self) {
        if let Some(view) = self.state.view_history.pop() {
            self.state.current_view = view;
            self.state.reset_selection();
            self.status_message = None;
        }
    }

    /// Route a key event to the current view's handler
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::Builder => self.handle_builder_key(key),
            View::Preview => self.handle_preview_key(key),
            View::Drafts => self.handle_listing_key(key, FormStatus::Draft),
            View::Published => self.handle_listing_key(key, FormStatus::Published),
            View::Submitted => self.handle_listing_key(key, FormStatus::Submitted),
        }
        Ok(())
    }

    // --- Home -----------------------------------------------------------

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(HOME_MENU.len()),
            KeyCode::Enter => match self.state.selected_index {
                0 => {
                    self.store.create_form(self.config.form_title());
                    self.state.reset_builder();
                    self.navigate(View::Builder);
                }
                1 => self.navigate(View::Drafts),
                2 => self.navigate(View::Published),
                3 => self.navigate(View::Submitted),
                _ => {}
            },
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    // --- Status listings -------------------------------------------------

    fn handle_listing_key(&mut self, key: KeyEvent, status: FormStatus) {
        let count = self.store.forms_by_status(status).len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(count),
            KeyCode::Enter => self.open_listed_form(status),
            KeyCode::Esc | KeyCode::Char('q') => self.go_back(),
            _ => {}
        }
    }

    /// Open the selected form: drafts go back into the builder, published
    /// and submitted forms open in the preview (submitted read-only).
    fn open_listed_form(&mut self, status: FormStatus) {
        let Some(form) = self
            .store
            .forms_by_status(status)
            .get(self.state.selected_index)
            .cloned()
            .cloned()
        else {
            return;
        };
        self.store.set_current_form(form);
        self.state.reset_builder();
        match status {
            FormStatus::Draft => self.navigate(View::Builder),
            FormStatus::Published | FormStatus::Submitted => self.navigate(View::Preview),
        }
    }

    // --- Builder ---------------------------------------------------------

    fn handle_builder_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let field_count = self.current_form().fields.len();

        match key.code {
            KeyCode::Tab => {
                self.state.builder_focus.toggle();
                self.state.clamp_field_selection(field_count);
            }
            KeyCode::Up if ctrl => self.reorder_selected(-1),
            KeyCode::Down if ctrl => self.reorder_selected(1),
            KeyCode::Up if self.on_fields() => {
                if self.state.selected_field > 0 {
                    self.state.selected_field -= 1;
                    self.state.field_attr = FieldAttr::Label;
                }
            }
            KeyCode::Down if self.on_fields() => {
                if self.state.selected_field + 1 < field_count {
                    self.state.selected_field += 1;
                    self.state.field_attr = FieldAttr::Label;
                }
            }
            KeyCode::Enter => match self.state.builder_focus {
                BuilderFocus::Title if field_count > 0 => {
                    self.state.builder_focus = BuilderFocus::Fields;
                }
                BuilderFocus::Fields => {
                    let options = self.selected_field_info().map_or(0, |f| f.options.len());
                    self.state.field_attr = self.state.field_attr.next(options);
                }
                _ => {}
            },
            KeyCode::Char('n') if ctrl => self.add_field(),
            KeyCode::Char('d') if ctrl => self.remove_selected_field(),
            KeyCode::Char('t') if ctrl => self.cycle_selected_type(),
            KeyCode::Char('o') if ctrl => self.add_selected_option(),
            KeyCode::Char('x') if ctrl => self.remove_selected_option(),
            KeyCode::Char('s') if ctrl => self.save_draft(),
            KeyCode::Char('p') if ctrl => self.publish(),
            KeyCode::Char('e') if ctrl => self.open_preview(),
            KeyCode::Char(c) if !ctrl => self.builder_push_char(c),
            KeyCode::Backspace => self.builder_pop_char(),
            KeyCode::Esc => {
                self.navigate_home();
            }
            _ => {}
        }
    }

    fn on_fields(&self) -> bool {
        self.state.builder_focus == BuilderFocus::Fields
    }

    fn selected_field_info(&self) -> Option<&crate::state::Field> {
        self.current_form().fields.get(self.state.selected_field)
    }

    fn add_field(&mut self) {
        if self.store.add_form_field().is_some() {
            let count = self.current_form().fields.len();
            self.state.builder_focus = BuilderFocus::Fields;
            self.state.selected_field = count - 1;
            self.state.field_attr = FieldAttr::Label;
        }
    }

    fn remove_selected_field(&mut self) {
        if let Some(field) = self.selected_field_info() {
            let id = field.id;
            self.store.remove_form_field(id);
            let count = self.current_form().fields.len();
            self.state.clamp_field_selection(count);
            self.state.field_attr = FieldAttr::Label;
        }
    }

    /// Move the selected field one position up or down, following it with
    /// the selection
    fn reorder_selected(&mut self, delta: i64) {
        if !self.on_fields() {
            return;
        }
        let count = self.current_form().fields.len();
        let from = self.state.selected_field;
        let to = from as i64 + delta;
        if to < 0 || to >= count as i64 {
            return;
        }
        self.store.reorder_fields(from, to as usize);
        self.state.selected_field = to as usize;
    }

    fn cycle_selected_type(&mut self) {
        if let Some(field) = self.selected_field_info() {
            let id = field.id;
            let next = field.field_type.next();
            self.store.update_form_field(id, FieldPatch::Type(next));
            // the options list may have changed shape under the cursor
            self.state.field_attr = FieldAttr::Label;
        }
    }

    fn add_selected_option(&mut self) {
        if let Some(field) = self.selected_field_info() {
            if field.field_type == crate::state::FieldType::SingleSelect {
                let id = field.id;
                self.store.add_field_option(id);
            }
        }
    }

    fn remove_selected_option(&mut self) {
        let Some(field) = self.selected_field_info() else {
            return;
        };
        let id = field.id;
        let index = match self.state.field_attr {
            FieldAttr::Option(i) => i,
            _ => return,
        };
        self.store.remove_field_option(id, index);
        let remaining = self.selected_field_info().map_or(0, |f| f.options.len());
        if index >= remaining {
            self.state.field_attr = FieldAttr::Option(remaining.saturating_sub(1));
        }
    }

    fn save_draft(&mut self) {
        if let Some(saved) = self.store.save_current() {
            self.show_status(format!("Draft saved (v{})", saved.version));
        }
    }

    fn publish(&mut self) {
        if self.store.publish_form() {
            self.show_success("Form published!");
        } else {
            self.show_status("Add at least one question before publishing");
        }
    }

    fn open_preview(&mut self) {
        if self.config.autosave_on_preview() {
            self.store.save_current();
        }
        self.state.preview_field = 0;
        self.navigate(View::Preview);
    }

    /// Leave the editor for the home menu, dropping the working copy.
    /// Anything worth keeping has been saved into the collection.
    fn navigate_home(&mut self) {
        self.store.reset_current_form();
        self.state.view_history.clear();
        self.state.current_view = View::Home;
        self.state.reset_selection();
        self.status_message = None;
    }

    fn builder_push_char(&mut self, c: char) {
        self.edit_focused_text(|s| s.push(c));
    }

    fn builder_pop_char(&mut self) {
        self.edit_focused_text(|s| {
            s.pop();
        });
    }

    /// Apply an edit to whichever text the builder cursor is on, routed
    /// through the store as a title update or a field patch
    fn edit_focused_text(&mut self, edit: impl FnOnce(&mut String)) {
        match self.state.builder_focus {
            BuilderFocus::Title => {
                let mut title = self.current_form().title.clone();
                edit(&mut title);
                self.store.update_form_title(title);
            }
            BuilderFocus::Fields => {
                let Some(field) = self.selected_field_info() else {
                    return;
                };
                let id = field.id;
                let patch = match self.state.field_attr {
                    FieldAttr::Label => {
                        let mut s = field.label.clone();
                        edit(&mut s);
                        FieldPatch::Label(s)
                    }
                    FieldAttr::HelpText => {
                        let mut s = field.help_text.clone();
                        edit(&mut s);
                        FieldPatch::HelpText(s)
                    }
                    FieldAttr::Value => {
                        let mut s = field.value.clone();
                        edit(&mut s);
                        FieldPatch::Value(s)
                    }
                    FieldAttr::Option(i) => {
                        let mut options = field.options.clone();
                        let Some(option) = options.get_mut(i) else {
                            return;
                        };
                        edit(option);
                        FieldPatch::Options(options)
                    }
                };
                self.store.update_form_field(id, patch);
            }
        }
    }

    // --- Preview ---------------------------------------------------------

    fn handle_preview_key(&mut self, key: KeyEvent) {
        let form = self.current_form();
        let field_count = form.fields.len();
        // submitted forms open read-only
        let editable = !form.status.is_terminal();

        match key.code {
            KeyCode::Up => {
                if self.state.preview_field > 0 {
                    self.state.preview_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.state.preview_field + 1 < field_count {
                    self.state.preview_field += 1;
                }
            }
            KeyCode::Left if editable => self.cycle_selected_answer(-1),
            KeyCode::Right if editable => self.cycle_selected_answer(1),
            KeyCode::Enter if editable => self.submit(),
            KeyCode::Char(c) if editable && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.preview_edit_value(|s| s.push(c))
            }
            KeyCode::Backspace if editable => self.preview_edit_value(|s| {
                s.pop();
            }),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    /// Type into the answer of the selected preview field. Single-select
    /// answers are picked with Left/Right instead of typed.
    fn preview_edit_value(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.current_form().fields.get(self.state.preview_field) else {
            return;
        };
        if field.field_type == crate::state::FieldType::SingleSelect {
            return;
        }
        let id = field.id;
        let mut value = field.value.clone();
        edit(&mut value);
        self.store.update_form_field(id, FieldPatch::Value(value));
    }

    /// Move a single-select answer to the previous/next option
    fn cycle_selected_answer(&mut self, delta: i64) {
        let Some(field) = self.current_form().fields.get(self.state.preview_field) else {
            return;
        };
        if field.field_type != crate::state::FieldType::SingleSelect || field.options.is_empty() {
            return;
        }
        let len = field.options.len() as i64;
        let current = field
            .options
            .iter()
            .position(|o| *o == field.value)
            .map_or(-1, |i| i as i64);
        let next = (current + delta).rem_euclid(len) as usize;
        let id = field.id;
        let value = field.options[next].clone();
        self.store.update_form_field(id, FieldPatch::Value(value));
    }

    fn submit(&mut self) {
        let form = self.current_form();
        let status = form.status;
        let pct = form.completion_percentage();

        if self.store.submit_form() {
            self.show_success("Form submitted successfully!");
        } else if status != FormStatus::Published {
            self.show_status("Only published forms can be submitted");
        } else {
            self.show_status(format!(
                "Form is {pct:.0}% complete: every question needs an answer"
            ));
        }
    }
}
