use async_trait::async_trait;

/// Validation callback: returns a message when the value is rejected
pub type ValidateInput<'a> = &'a (dyn Fn(&str) -> Option<String> + Send + Sync);

/// Options for a single input request
#[derive(Clone, Copy)]
pub struct InputBoxOptions<'a> {
    /// Heading shown above the prompt, if any
    pub title: Option<&'a str>,
    /// Whether the value must not be echoed
    pub is_secret: bool,
    pub prompt: &'a str,
    pub placeholder: &'a str,
    pub validate_input: Option<ValidateInput<'a>>,
}

impl std::fmt::Debug for InputBoxOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputBoxOptions")
            .field("title", &self.title)
            .field("is_secret", &self.is_secret)
            .field("prompt", &self.prompt)
            .field("placeholder", &self.placeholder)
            .field("validate_input", &self.validate_input.is_some())
            .finish()
    }
}

impl InputBoxOptions<'_> {
    /// Run the validation callback, if one is set
    pub fn validate(&self, value: &str) -> Option<String> {
        self.validate_input.and_then(|validate| validate(value))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Host widget that asks the user for a single line of text.
///
/// Implementations keep asking while `validate_input` returns a message, and
/// resolve to `Ok(None)` when the user cancels.
#[async_trait]
pub trait InputBox: Send + Sync {
    async fn show(&self, options: InputBoxOptions<'_>) -> Result<Option<String>, InputError>;
}
