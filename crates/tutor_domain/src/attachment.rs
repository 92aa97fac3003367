use base64::Engine;
use nom::Parser;
use nom::bytes::complete::{tag, take_while1};
use nom::character::complete::char;
use nom::sequence::delimited;

/// An inline image sent alongside a user message, already encoded for the
/// model collaborator: base64 payload plus declared media type.
#[derive(Debug, serde::Deserialize, serde::Serialize, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub data: String,
    pub media_type: String,
}

impl Attachment {
    pub fn from_bytes(bytes: &[u8], media_type: impl ToString) -> Self {
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            media_type: media_type.to_string(),
        }
    }
}

/// An `@[path/to/image.png]` tag inside a user input line. Paths may contain
/// spaces and extend until the closing bracket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageTag {
    pub path: String,
}

impl ImageTag {
    /// Parses a string and extracts all image tags in the format
    /// @[path/to/image]. Duplicate paths are collapsed, keeping first
    /// occurrence order.
    pub fn parse_all<T: ToString>(text: T) -> Vec<ImageTag> {
        let input = text.to_string();
        let mut remaining = input.as_str();
        let mut tags = Vec::new();

        while !remaining.is_empty() {
            if let Some(start_pos) = remaining.find("@[") {
                remaining = &remaining[start_pos..];
                match ImageTag::parse(remaining) {
                    Ok((next_remaining, image_tag)) => {
                        tags.push(image_tag);
                        remaining = next_remaining;
                    }
                    Err(_e) => {
                        // Unparseable "@[", skip past it
                        remaining = &remaining[2..];
                    }
                }
            } else {
                break;
            }
        }

        let mut seen = std::collections::HashSet::new();
        tags.retain(|tag| seen.insert(tag.path.clone()));

        tags
    }

    pub fn parse(input: &str) -> nom::IResult<&str, ImageTag> {
        let parse_path = take_while1(|c: char| c != ']');
        let mut parser = delimited(tag("@["), parse_path, char(']'));

        let (remaining, path) = parser.parse(input)?;
        Ok((remaining, ImageTag { path: path.to_string() }))
    }

    /// Removes every tag from the input, leaving the plain message text.
    pub fn strip_all(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut remaining = text;

        while let Some(start_pos) = remaining.find("@[") {
            out.push_str(&remaining[..start_pos]);
            let rest = &remaining[start_pos..];
            match ImageTag::parse(rest) {
                Ok((next_remaining, _)) => remaining = next_remaining,
                Err(_) => {
                    out.push_str("@[");
                    remaining = &rest[2..];
                }
            }
        }
        out.push_str(remaining);
        out.trim().to_string()
    }
}

impl AsRef<std::path::Path> for ImageTag {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_all_empty() {
        let text = String::from("Giải phương trình x + 1 = 0");
        let tags = ImageTag::parse_all(text);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_parse_all_simple() {
        let text = String::from("Xem bài này giúp em @[/home/em/bai-tap.png]");
        let tags = ImageTag::parse_all(text);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].path, "/home/em/bai-tap.png");
    }

    #[test]
    fn test_parse_all_with_spaces() {
        let text = String::from("@[/path/with spaces/hinh 1.jpg]");
        let tags = ImageTag::parse_all(text);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].path, "/path/with spaces/hinh 1.jpg");
    }

    #[test]
    fn test_parse_all_deduplicates() {
        let text = String::from("@[a.png] va @[b.png] va @[a.png]");
        let tags = ImageTag::parse_all(text);
        let paths = tags.iter().map(|t| t.path.as_str()).collect::<Vec<_>>();
        assert_eq!(paths, vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_parse_unclosed_tag_skipped() {
        let text = String::from("truoc @[khong dong");
        let tags = ImageTag::parse_all(text);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_strip_all() {
        let actual = ImageTag::strip_all("Xem @[a.png] giúp em");
        assert_eq!(actual, "Xem  giúp em");
    }

    #[test]
    fn test_strip_all_keeps_unclosed_text() {
        let actual = ImageTag::strip_all("abc @[xyz");
        assert_eq!(actual, "abc @[xyz");
    }

    #[test]
    fn test_attachment_from_bytes_encodes_base64() {
        let fixture = Attachment::from_bytes(b"png-bytes", "image/png");
        assert_eq!(fixture.media_type, "image/png");
        assert_eq!(fixture.data, "cG5nLWJ5dGVz");
    }
}
