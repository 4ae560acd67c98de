//! Configuration for prompt text generation

/// Configuration options for the generated analysis prompt
#[derive(Debug, Clone)]
pub struct PromptConfig {
    /// Name of the downstream analysis skill referenced in the closing line
    pub skill_name: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            skill_name: "yijing-fengshui".to_string(),
        }
    }
}

impl PromptConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the referenced skill name
    pub fn with_skill_name(mut self, name: impl Into<String>) -> Self {
        self.skill_name = name.into();
        self
    }
}
