use tracing::{debug, error};

use super::picker::{fallback_languages, LanguagePicker};
use super::relay_client::RelayApi;
use crate::translate::{LanguageDescriptor, TranslationRequest, AUTO_SOURCE, DEFAULT_FORMAT};

pub const DEFAULT_TARGET: &str = "en";
pub const IDLE_LABEL: &str = "Translate";
pub const BUSY_LABEL: &str = "Translating…";

/// State of the translate trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslateControl {
    Idle,
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// A key press in the input area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn ctrl_enter() -> Self {
        Self {
            key: Key::Enter,
            ctrl: true,
            meta: false,
        }
    }

    /// Ctrl+Enter or Cmd+Enter
    pub fn is_translate_shortcut(&self) -> bool {
        self.key == Key::Enter && (self.ctrl || self.meta)
    }
}

/// UI-agnostic translator page: input and result areas, two language
/// pickers and the translate control, driven against a relay.
pub struct TranslatorController<R: RelayApi> {
    relay: R,
    languages: Vec<LanguageDescriptor>,
    source_picker: LanguagePicker,
    target_picker: LanguagePicker,
    input: String,
    result: String,
    control: TranslateControl,
}

impl<R: RelayApi> TranslatorController<R> {
    pub fn new(relay: R) -> Self {
        Self {
            relay,
            languages: Vec::new(),
            source_picker: LanguagePicker::default(),
            target_picker: LanguagePicker::default(),
            input: String::new(),
            result: String::new(),
            control: TranslateControl::Idle,
        }
    }

    /// Fetch languages from the relay, falling back to the built-in list.
    pub async fn load_languages(&mut self) {
        self.languages = match self.relay.fetch_languages().await {
            Ok(languages) => languages,
            Err(e) => {
                error!("Language fetch failed, using fallback list: {}", e);
                fallback_languages()
            }
        };
        self.populate_pickers();
    }

    fn populate_pickers(&mut self) {
        self.source_picker = LanguagePicker::source(&self.languages);
        self.target_picker = LanguagePicker::target(&self.languages);
        self.source_picker.select(AUTO_SOURCE);
        self.target_picker.select(DEFAULT_TARGET);
    }

    pub fn languages(&self) -> &[LanguageDescriptor] {
        &self.languages
    }

    pub fn source_picker(&self) -> &LanguagePicker {
        &self.source_picker
    }

    pub fn target_picker(&self) -> &LanguagePicker {
        &self.target_picker
    }

    pub fn select_source(&mut self, code: &str) -> bool {
        self.source_picker.select(code)
    }

    pub fn select_target(&mut self, code: &str) -> bool {
        self.target_picker.select(code)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn control(&self) -> TranslateControl {
        self.control
    }

    pub fn is_trigger_enabled(&self) -> bool {
        self.control == TranslateControl::Idle
    }

    pub fn button_label(&self) -> &'static str {
        match self.control {
            TranslateControl::Idle => IDLE_LABEL,
            TranslateControl::Busy => BUSY_LABEL,
        }
    }

    /// Click on the translate button; ignored while the button is disabled.
    pub async fn click_translate(&mut self) {
        if !self.is_trigger_enabled() {
            debug!("Translate clicked while busy, ignoring");
            return;
        }
        self.translate().await;
    }

    /// Handle a key press in the input area. Returns whether it triggered a translation.
    ///
    /// The shortcut does not check the control state.
    pub async fn handle_key(&mut self, key: KeyPress) -> bool {
        if !key.is_translate_shortcut() {
            return false;
        }
        self.translate().await;
        true
    }

    pub async fn translate(&mut self) {
        let text = self.input.trim();
        if text.is_empty() {
            self.result.clear();
            return;
        }

        let request = TranslationRequest {
            q: text.to_string(),
            source: self.source_picker.value().unwrap_or_default().to_string(),
            target: self.target_picker.value().unwrap_or_default().to_string(),
            format: DEFAULT_FORMAT.to_string(),
        };

        self.control = TranslateControl::Busy;
        let outcome = self.relay.translate(&request).await;
        self.control = TranslateControl::Idle;

        self.result = match outcome {
            Ok(result) => result.translated_text.unwrap_or_default(),
            Err(e) => {
                error!("Translation failed: {}", e);
                let message = e.to_string();
                if message.is_empty() {
                    "Error: Unable to translate".to_string()
                } else {
                    format!("Error: {}", message)
                }
            }
        };
    }

    /// Exchange language selections and the input/result texts.
    pub fn swap(&mut self) {
        let previous_source = self.source_picker.value().map(str::to_string);

        let new_source = self
            .target_picker
            .value()
            .unwrap_or(AUTO_SOURCE)
            .to_string();
        self.source_picker.select(&new_source);

        let new_target = match previous_source.as_deref() {
            Some(AUTO_SOURCE) => DEFAULT_TARGET,
            Some(code) => code,
            None => "",
        };
        self.target_picker.select(new_target);

        std::mem::swap(&mut self.input, &mut self.result);
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.result.clear();
    }
}
