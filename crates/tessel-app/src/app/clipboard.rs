use tessel_common::ShellError;

/// System clipboard handle backed by `arboard`.
pub(super) struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    pub(super) fn new() -> Result<Self, ShellError> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| ShellError::Other(format!("clipboard unavailable: {e}")))?;
        Ok(Self { inner })
    }

    pub(super) fn set_text(&mut self, text: &str) -> Result<(), ShellError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| ShellError::Other(format!("clipboard write failed: {e}")))
    }
}
