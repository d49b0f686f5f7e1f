//! Application state definitions: views, navigation and editor focus

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing menu: create a form or browse by status
    #[default]
    Home,
    /// Field editor for the current form
    Builder,
    /// Fill mode with the completion gauge
    Preview,
    Drafts,
    Published,
    Submitted,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Form Builder",
            Self::Builder => "Create",
            Self::Preview => "Preview",
            Self::Drafts => "Draft",
            Self::Published => "Published",
            Self::Submitted => "Submitted",
        }
    }

    /// Views that render the current form and therefore require one
    pub fn needs_current_form(&self) -> bool {
        matches!(self, Self::Builder | Self::Preview)
    }
}

/// Which part of the builder receives typed input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuilderFocus {
    #[default]
    Title,
    Fields,
}

impl BuilderFocus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Title => Self::Fields,
            Self::Fields => Self::Title,
        };
    }
}

/// The attribute of the selected field currently being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldAttr {
    #[default]
    Label,
    HelpText,
    Value,
    Option(usize),
}

impl FieldAttr {
    /// Cycle label → help text → answer → each option → label.
    /// `option_count` is the selected field's option count (0 for
    /// non-select fields).
    pub fn next(&self, option_count: usize) -> Self {
        match self {
            Self::Label => Self::HelpText,
            Self::HelpText => Self::Value,
            Self::Value => {
                if option_count > 0 {
                    Self::Option(0)
                } else {
                    Self::Label
                }
            }
            Self::Option(i) => {
                if i + 1 < option_count {
                    Self::Option(i + 1)
                } else {
                    Self::Label
                }
            }
        }
    }
}

/// Main application state (everything outside the form store)
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // List selection (home menu and status listings)
    pub selected_index: usize,

    // Builder editor focus
    pub builder_focus: BuilderFocus,
    pub selected_field: usize,
    pub field_attr: FieldAttr,

    // Preview selection
    pub preview_field: usize,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset list selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Reset the builder editor for a freshly opened form
    pub fn reset_builder(&mut self) {
        self.builder_focus = BuilderFocus::Title;
        self.selected_field = 0;
        self.field_attr = FieldAttr::Label;
        self.preview_field = 0;
    }

    /// Keep field selection in range after add/remove/reorder
    pub fn clamp_field_selection(&mut self, field_count: usize) {
        if field_count == 0 {
            self.selected_field = 0;
            self.builder_focus = BuilderFocus::Title;
        } else if self.selected_field >= field_count {
            self.selected_field = field_count - 1;
        }
        if self.preview_field >= field_count {
            self.preview_field = field_count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod selection {
        use super::*;

        #[test]
        fn test_move_down_stops_at_end() {
            let mut state = AppState::default();
            state.move_selection_down(2);
            state.move_selection_down(2);
            state.move_selection_down(2);
            assert_eq!(state.selected_index, 1);
        }

        #[test]
        fn test_move_down_with_empty_list_is_noop() {
            let mut state = AppState::default();
            state.move_selection_down(0);
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_move_up_stops_at_zero() {
            let mut state = AppState::default();
            state.move_selection_up();
            assert_eq!(state.selected_index, 0);
        }

        #[test]
        fn test_reset_selection() {
            let mut state = AppState {
                selected_index: 4,
                ..Default::default()
            };
            state.reset_selection();
            assert_eq!(state.selected_index, 0);
        }
    }

    mod builder_focus {
        use super::*;

        #[test]
        fn test_toggle_round_trips() {
            let mut focus = BuilderFocus::Title;
            focus.toggle();
            assert_eq!(focus, BuilderFocus::Fields);
            focus.toggle();
            assert_eq!(focus, BuilderFocus::Title);
        }

        #[test]
        fn test_clamp_with_no_fields_returns_to_title() {
            let mut state = AppState {
                builder_focus: BuilderFocus::Fields,
                selected_field: 2,
                ..Default::default()
            };
            state.clamp_field_selection(0);
            assert_eq!(state.builder_focus, BuilderFocus::Title);
            assert_eq!(state.selected_field, 0);
        }

        #[test]
        fn test_clamp_after_removal() {
            let mut state = AppState {
                builder_focus: BuilderFocus::Fields,
                selected_field: 2,
                preview_field: 2,
                ..Default::default()
            };
            state.clamp_field_selection(2);
            assert_eq!(state.selected_field, 1);
            assert_eq!(state.preview_field, 1);
        }
    }

    mod field_attr {
        use super::*;

        #[test]
        fn test_cycle_without_options() {
            let attr = FieldAttr::Label;
            let attr = attr.next(0);
            assert_eq!(attr, FieldAttr::HelpText);
            let attr = attr.next(0);
            assert_eq!(attr, FieldAttr::Value);
            let attr = attr.next(0);
            assert_eq!(attr, FieldAttr::Label); // wraps, skipping options
        }

        #[test]
        fn test_cycle_visits_each_option() {
            let attr = FieldAttr::Value.next(2);
            assert_eq!(attr, FieldAttr::Option(0));
            let attr = attr.next(2);
            assert_eq!(attr, FieldAttr::Option(1));
            let attr = attr.next(2);
            assert_eq!(attr, FieldAttr::Label);
        }
    }
}
