mod gemini;

pub use gemini::{API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiProvider};
