mod provider;
mod request;
mod response;

pub use provider::{API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiProvider};
