//! Rendering options and configuration.

/// Options for rendering notebook content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Include YAML frontmatter with notebook metadata
    pub include_frontmatter: bool,

    /// Prefix for image output references (e.g., "images/")
    pub image_path_prefix: String,

    /// Override the code-fence language tag
    pub language: Option<String>,

    /// Strip ANSI escape sequences from stream and error output
    pub strip_ansi: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the image path prefix.
    pub fn with_image_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.image_path_prefix = prefix.into();
        self
    }

    /// Override the language tag used for code fences.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Enable or disable ANSI escape stripping.
    pub fn with_ansi_stripping(mut self, strip: bool) -> Self {
        self.strip_ansi = strip;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            image_path_prefix: String::new(),
            language: None,
            strip_ansi: true,
        }
    }
}
