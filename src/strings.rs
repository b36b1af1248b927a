use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StringError {
    #[error("input string is empty")]
    Empty,
    #[error("replacing {len} chars at index {index} overruns the input ({available} chars)")]
    OutOfRange { index: usize, len: usize, available: usize },
}

/// Returns `input` with its first character uppercased.
///
/// Uppercasing is Unicode-aware, so the first character may expand to more
/// than one char (e.g. `ß` becomes `SS`). An empty input is an error.
pub fn capitalize(input: &str) -> Result<String, StringError> {
    let mut chars = input.chars();
    let first = chars.next().ok_or(StringError::Empty)?;
    let mut result = String::with_capacity(input.len());
    result.extend(first.to_uppercase());
    result.push_str(chars.as_str());
    Ok(result)
}

/// Overwrites the chars starting at char index `index` with `replacement`.
///
/// The replaced window spans `replacement.chars().count()` chars and must lie
/// entirely within `input`.
pub fn replace_at(input: &str, index: usize, replacement: &str) -> Result<String, StringError> {
    let available = input.chars().count();
    let len = replacement.chars().count();
    if index + len > available {
        return Err(StringError::OutOfRange { index, len, available });
    }

    let mut result = String::with_capacity(input.len());
    result.extend(input.chars().take(index));
    result.push_str(replacement);
    result.extend(input.chars().skip(index + len));
    Ok(result)
}
