use tutor_domain::Error as DomainError;

/// Shown when the model collaborator credential is missing. A configuration
/// fault is fatal for the turn but never crashes the process.
pub const CONFIG_ERROR_MESSAGE: &str = "⚠️ **Lỗi Cấu Hình**: Chưa tìm thấy API Key.\n\nVui lòng đảm bảo bạn đã thiết lập biến môi trường `GEMINI_API_KEY`.";

/// Shown when the fragment stream fails mid-turn. The partial reply already
/// rendered is kept as-is.
pub const TRANSPORT_ERROR_MESSAGE: &str =
    "Xin lỗi, đã có lỗi xảy ra. Vui lòng kiểm tra kết nối hoặc thử lại sau.";

/// Maps a turn-level failure to the message appended to the transcript.
pub fn user_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<DomainError>() {
        Some(DomainError::MissingApiKey(_)) => CONFIG_ERROR_MESSAGE.to_string(),
        _ => TRANSPORT_ERROR_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_missing_key_maps_to_config_message() {
        let error = anyhow::Error::new(DomainError::MissingApiKey("GEMINI_API_KEY"));
        assert_eq!(user_message(&error), CONFIG_ERROR_MESSAGE);
    }

    #[test]
    fn test_other_errors_map_to_transport_message() {
        let error = anyhow::anyhow!("connection reset");
        assert_eq!(user_message(&error), TRANSPORT_ERROR_MESSAGE);
    }
}
