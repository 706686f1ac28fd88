use super::LoadError;

/// Reads the system clipboard as text.
pub fn load() -> Result<String, LoadError> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    if text.is_empty() {
        return Err(LoadError::EmptyClipboard);
    }

    Ok(text)
}
