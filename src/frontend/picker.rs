use crate::translate::{LanguageDescriptor, AUTO_SOURCE};

/// Languages shown when the relay cannot provide a list
pub fn fallback_languages() -> Vec<LanguageDescriptor> {
    vec![
        LanguageDescriptor::new("en", "English"),
        LanguageDescriptor::new("hi", "Hindi"),
        LanguageDescriptor::new("es", "Spanish"),
        LanguageDescriptor::new("fr", "French"),
        LanguageDescriptor::new("de", "German"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOption {
    pub value: String,
    pub label: String,
}

/// A single-choice language selector
#[derive(Debug, Clone, Default)]
pub struct LanguagePicker {
    options: Vec<PickerOption>,
    selected: Option<String>,
}

impl LanguagePicker {
    /// Source picker: the `auto` option followed by every language.
    pub fn source(languages: &[LanguageDescriptor]) -> Self {
        let mut options = vec![PickerOption {
            value: AUTO_SOURCE.to_string(),
            label: "Auto Detect".to_string(),
        }];
        options.extend(languages.iter().map(language_option));
        Self {
            options,
            selected: None,
        }
    }

    /// Target picker: languages only.
    pub fn target(languages: &[LanguageDescriptor]) -> Self {
        Self {
            options: languages.iter().map(language_option).collect(),
            selected: None,
        }
    }

    pub fn options(&self) -> &[PickerOption] {
        &self.options
    }

    pub fn value(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Select `code`, or clear the selection if no option has that value.
    pub fn select(&mut self, code: &str) -> bool {
        self.selected = self
            .options
            .iter()
            .find(|o| o.value == code)
            .map(|o| o.value.clone());
        self.selected.is_some()
    }
}

fn language_option(language: &LanguageDescriptor) -> PickerOption {
    PickerOption {
        value: language.code.clone(),
        label: format!("{} ({})", language.name, language.code),
    }
}
