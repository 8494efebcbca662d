/// Storage key the layout document is written under.
pub const STORAGE_KEY: &str = "moodBoardData";

pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "gif", "png"];

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub storage_key: String,
    /// Allow-listed image extensions, matched case-sensitively at the end of the URL.
    pub image_extensions: Vec<String>,
    pub invalid_image_notice: String,
    pub invalid_text_notice: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            image_extensions: IMAGE_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            invalid_image_notice: "Please enter a valid image URL".to_string(),
            invalid_text_notice: "Please enter a valid text".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn is_allowed_image_url(&self, url: &str) -> bool {
        self.image_extensions.iter().any(|ext| {
            url.strip_suffix(ext.as_str())
                .is_some_and(|rest| rest.ends_with('.'))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        let config = BoardConfig::default();
        assert!(config.is_allowed_image_url("a.png"));
        assert!(config.is_allowed_image_url("http://example.com/pic.jpeg"));
        assert!(config.is_allowed_image_url("http://example.com/pic.jpg"));
        assert!(config.is_allowed_image_url("https://x.y/anim.gif"));
    }

    #[test]
    fn test_rejected_extensions() {
        let config = BoardConfig::default();
        assert!(!config.is_allowed_image_url("http://example.com/pic.bmp"));
        assert!(!config.is_allowed_image_url("http://example.com/pic.PNG"));
        assert!(!config.is_allowed_image_url("http://example.com/png"));
        assert!(!config.is_allowed_image_url("http://example.com/pic.png?size=2"));
        assert!(!config.is_allowed_image_url(""));
    }
}
