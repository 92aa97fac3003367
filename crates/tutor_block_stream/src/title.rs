//! Display cleanup for block titles.

/// Policy for preparing a block title for display. Header phrases carry
/// numbering glyphs and emoji (`1️⃣`, `⚠️`); stripping removes everything
/// that is not a word character, whitespace, or a Vietnamese letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleCleanup {
    /// Leave the title exactly as matched.
    Keep,
    /// Drop decoration characters, keep letters, digits and whitespace.
    #[default]
    StripDecorations,
}

pub fn clean_title(title: &str, policy: TitleCleanup) -> String {
    match policy {
        TitleCleanup::Keep => title.to_string(),
        TitleCleanup::StripDecorations => title
            .chars()
            .filter(|c| {
                c.is_ascii_alphanumeric()
                    || *c == '_'
                    || c.is_whitespace()
                    || ('\u{00C0}'..='\u{1EF9}').contains(c)
            })
            .collect::<String>()
            .trim()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_keep_policy_is_identity() {
        let actual = clean_title("⚠️ CẢNH BÁO VƯỢT CẤP", TitleCleanup::Keep);
        assert_eq!(actual, "⚠️ CẢNH BÁO VƯỢT CẤP");
    }

    #[test]
    fn test_strip_removes_warning_glyph() {
        let actual = clean_title("⚠️ CẢNH BÁO VƯỢT CẤP", TitleCleanup::StripDecorations);
        assert_eq!(actual, "CẢNH BÁO VƯỢT CẤP");
    }

    #[test]
    fn test_strip_keeps_numbering_digit() {
        // The keycap sequence loses its combining marks but the digit stays
        let actual = clean_title("1️⃣ KIẾN THỨC SỬ DỤNG", TitleCleanup::StripDecorations);
        assert_eq!(actual, "1 KIẾN THỨC SỬ DỤNG");
    }

    #[test]
    fn test_strip_keeps_vietnamese_letters() {
        let actual = clean_title("VẼ HÌNH TRÊN GEOGEBRA", TitleCleanup::StripDecorations);
        assert_eq!(actual, "VẼ HÌNH TRÊN GEOGEBRA");
    }
}
