//! Form field model: field types, the field entity and typed field updates

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum number of options a single-select field carries once populated.
pub const MIN_SELECT_OPTIONS: usize = 2;

/// Stable identifier for a field, unique for the field's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldId(Uuid);

impl FieldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// The input shape of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    #[default]
    ShortText,
    LongText,
    SingleSelect,
    Number,
    Url,
}

impl FieldType {
    /// Cycle to the next type (declaration order, wraps around)
    pub fn next(&self) -> Self {
        match self {
            Self::ShortText => Self::LongText,
            Self::LongText => Self::SingleSelect,
            Self::SingleSelect => Self::Number,
            Self::Number => Self::Url,
            Self::Url => Self::ShortText,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ShortText => "Short Answer",
            Self::LongText => "Long Answer",
            Self::SingleSelect => "Single Select",
            Self::Number => "Number",
            Self::Url => "URL",
        }
    }

    /// Short marker shown next to the question in the builder
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::ShortText => "Aa",
            Self::LongText => "¶",
            Self::SingleSelect => "◉",
            Self::Number => "#",
            Self::Url => "↗",
        }
    }
}

/// One question in a form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub label: String,
    pub help_text: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Answer entered while previewing/filling
    pub value: String,
    /// Only meaningful for `SingleSelect`; empty for every other type
    pub options: Vec<String>,
    /// Display-only validation message, set externally
    pub error: Option<String>,
}

impl Field {
    /// Create an empty short-text field with a fresh id
    pub fn new() -> Self {
        Self {
            id: FieldId::new(),
            label: String::new(),
            help_text: String::new(),
            field_type: FieldType::default(),
            value: String::new(),
            options: Vec::new(),
            error: None,
        }
    }

    /// Change the field type, keeping the options invariant.
    ///
    /// Leaving `SingleSelect` clears the options; entering it seeds two
    /// empty options unless the field already carries at least two.
    pub fn set_type(&mut self, new_type: FieldType) {
        self.field_type = new_type;
        if new_type == FieldType::SingleSelect {
            if self.options.len() < MIN_SELECT_OPTIONS {
                self.options = vec![String::new(); MIN_SELECT_OPTIONS];
            }
        } else {
            self.options.clear();
        }
    }

    /// Replace the options wholesale. Arity is the caller's concern; the
    /// add/remove affordances below are what keep the minimum.
    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
    }

    /// Append one empty option
    pub fn add_option(&mut self) {
        self.options.push(String::new());
    }

    /// Remove the option at `index`. Declined while only the minimum
    /// remains or when the index is out of range.
    pub fn remove_option(&mut self, index: usize) {
        if self.options.len() > MIN_SELECT_OPTIONS && index < self.options.len() {
            self.options.remove(index);
        }
    }

    /// True when the answer is non-empty after trimming whitespace
    pub fn is_filled(&self) -> bool {
        !self.value.trim().is_empty()
    }

    /// Apply one typed update
    pub fn apply(&mut self, patch: FieldPatch) {
        match patch {
            FieldPatch::Label(label) => self.label = label,
            FieldPatch::HelpText(text) => self.help_text = text,
            FieldPatch::Value(value) => self.value = value,
            FieldPatch::Type(new_type) => self.set_type(new_type),
            FieldPatch::Options(options) => self.set_options(options),
            FieldPatch::Error(error) => self.error = error,
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

/// Closed set of per-field updates, one attribute at a time
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPatch {
    Label(String),
    HelpText(String),
    Value(String),
    Type(FieldType),
    Options(Vec<String>),
    Error(Option<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    mod field_type {
        use super::*;

        #[test]
        fn test_default_is_short_text() {
            assert_eq!(FieldType::default(), FieldType::ShortText);
        }

        #[test]
        fn test_next_cycles_through_all_variants() {
            let mut ty = FieldType::ShortText;
            let mut seen = vec![ty];
            for _ in 0..4 {
                ty = ty.next();
                seen.push(ty);
            }
            assert_eq!(
                seen,
                vec![
                    FieldType::ShortText,
                    FieldType::LongText,
                    FieldType::SingleSelect,
                    FieldType::Number,
                    FieldType::Url,
                ]
            );
            assert_eq!(ty.next(), FieldType::ShortText); // wraps
        }

        #[test]
        fn test_serializes_kebab_case() {
            let json = serde_json::to_string(&FieldType::SingleSelect).unwrap();
            assert_eq!(json, "\"single-select\"");
            let json = serde_json::to_string(&FieldType::ShortText).unwrap();
            assert_eq!(json, "\"short-text\"");
        }

        #[test]
        fn test_labels_are_distinct() {
            let labels = [
                FieldType::ShortText.label(),
                FieldType::LongText.label(),
                FieldType::SingleSelect.label(),
                FieldType::Number.label(),
                FieldType::Url.label(),
            ];
            let mut deduped = labels.to_vec();
            deduped.dedup();
            assert_eq!(deduped.len(), labels.len());
        }
    }

    mod field {
        use super::*;

        #[test]
        fn test_new_field_defaults() {
            let field = Field::new();
            assert_eq!(field.field_type, FieldType::ShortText);
            assert!(field.label.is_empty());
            assert!(field.help_text.is_empty());
            assert!(field.value.is_empty());
            assert!(field.options.is_empty());
            assert!(field.error.is_none());
        }

        #[test]
        fn test_new_fields_get_unique_ids() {
            let a = Field::new();
            let b = Field::new();
            assert_ne!(a.id, b.id);
        }

        #[test]
        fn test_set_type_to_single_select_seeds_two_options() {
            let mut field = Field::new();
            field.set_type(FieldType::SingleSelect);
            assert_eq!(field.options, vec![String::new(), String::new()]);
        }

        #[test]
        fn test_set_type_to_single_select_preserves_existing_options() {
            let mut field = Field::new();
            field.set_options(vec!["a".into(), "b".into(), "c".into()]);
            field.set_type(FieldType::SingleSelect);
            assert_eq!(field.options, vec!["a", "b", "c"]);
        }

        #[test]
        fn test_set_type_away_from_single_select_clears_options() {
            let mut field = Field::new();
            field.set_type(FieldType::SingleSelect);
            field.apply(FieldPatch::Options(vec!["yes".into(), "no".into()]));
            field.set_type(FieldType::Number);
            assert!(field.options.is_empty());
        }

        #[test]
        fn test_add_option_appends_empty_entry() {
            let mut field = Field::new();
            field.set_type(FieldType::SingleSelect);
            field.add_option();
            assert_eq!(field.options.len(), 3);
            assert_eq!(field.options[2], "");
        }

        #[test]
        fn test_remove_option_declined_at_minimum() {
            let mut field = Field::new();
            field.set_type(FieldType::SingleSelect);
            field.remove_option(0);
            assert_eq!(field.options.len(), MIN_SELECT_OPTIONS);
        }

        #[test]
        fn test_remove_option_above_minimum() {
            let mut field = Field::new();
            field.set_options(vec!["a".into(), "b".into(), "c".into()]);
            field.remove_option(1);
            assert_eq!(field.options, vec!["a", "c"]);
        }

        #[test]
        fn test_remove_option_out_of_range_is_noop() {
            let mut field = Field::new();
            field.set_options(vec!["a".into(), "b".into(), "c".into()]);
            field.remove_option(5);
            assert_eq!(field.options.len(), 3);
        }

        #[test]
        fn test_is_filled_trims_whitespace() {
            let mut field = Field::new();
            assert!(!field.is_filled());
            field.value = "   \t".to_string();
            assert!(!field.is_filled());
            field.value = " answer ".to_string();
            assert!(field.is_filled());
        }

        #[test]
        fn test_apply_patches() {
            let mut field = Field::new();
            field.apply(FieldPatch::Label("Name".into()));
            field.apply(FieldPatch::HelpText("Full legal name".into()));
            field.apply(FieldPatch::Value("Ada".into()));
            field.apply(FieldPatch::Error(Some("too short".into())));
            assert_eq!(field.label, "Name");
            assert_eq!(field.help_text, "Full legal name");
            assert_eq!(field.value, "Ada");
            assert_eq!(field.error.as_deref(), Some("too short"));
        }

        #[test]
        fn test_apply_type_patch_keeps_options_invariant() {
            let mut field = Field::new();
            field.apply(FieldPatch::Type(FieldType::SingleSelect));
            assert_eq!(field.options.len(), MIN_SELECT_OPTIONS);
            field.apply(FieldPatch::Type(FieldType::Url));
            assert!(field.options.is_empty());
        }

        #[test]
        fn test_serde_round_trip_keeps_wire_names() {
            let mut field = Field::new();
            field.set_type(FieldType::SingleSelect);
            let json = serde_json::to_string(&field).unwrap();
            assert!(json.contains("\"type\":\"single-select\""));
            let parsed: Field = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed.id, field.id);
            assert_eq!(parsed.field_type, FieldType::SingleSelect);
        }
    }
}
