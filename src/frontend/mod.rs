pub mod picker;
pub mod relay_client;
pub mod controller;

pub use controller::{Key, KeyPress, TranslateControl, TranslatorController};
pub use picker::{fallback_languages, LanguagePicker, PickerOption};
pub use relay_client::{HttpRelayClient, RelayApi, RelayClientError};
