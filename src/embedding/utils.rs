use std::io;
use std::path::{Path, PathBuf};
use tokenizers::{PaddingParams, Tokenizer, TruncationParams};

/// Resolves `tokenizer.json` from either the file itself or its model directory.
pub fn resolve_tokenizer_path(path: &Path) -> PathBuf {
    if path
        .file_name()
        .is_some_and(|name| name == std::ffi::OsStr::new("tokenizer.json"))
    {
        path.to_path_buf()
    } else {
        path.join("tokenizer.json")
    }
}

/// Loads a tokenizer truncating to `max_len` tokens, without padding.
///
/// Each text is encoded on its own, so padding would only add masked tokens.
pub fn load_tokenizer(path: &Path, max_len: usize) -> io::Result<Tokenizer> {
    let tokenizer_path = resolve_tokenizer_path(path);
    let mut tokenizer = Tokenizer::from_file(&tokenizer_path).map_err(io::Error::other)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {}", e)))?;
    tokenizer.with_padding(None::<PaddingParams>);

    Ok(tokenizer)
}
