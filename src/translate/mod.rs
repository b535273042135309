pub mod interface;

pub use interface::{
    LanguageDescriptor, TranslatePayload, TranslationResult, TranslationRequest,
    AUTO_SOURCE, DEFAULT_FORMAT,
};
