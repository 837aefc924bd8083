use crate::errors::CodeKillerError;

/// Returns true if `ext` can be appended to a fixed stem without the result
/// leaving the target directory.
///
/// Rules:
/// - Must be non-empty and contain only ASCII letters, digits, `-`, `_` or `.`.
/// - Must not start or end with `.` and must not contain `..`.
pub fn extension_is_safe(ext: &str) -> bool {
    if ext.is_empty() || ext.starts_with('.') || ext.ends_with('.') || ext.contains("..") {
        return false;
    }
    ext.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
}

/// `<stem>.<ext>` after checking the extension.
pub fn file_name(stem: &str, ext: &str) -> Result<String, CodeKillerError> {
    if !extension_is_safe(ext) {
        return Err(CodeKillerError::UnsafeExtension(ext.to_string()));
    }
    Ok(format!("{stem}.{ext}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_extensions_pass() {
        for ext in ["js", "javascript", "py", "tar.gz", "c_sharp", "x-y"] {
            assert!(extension_is_safe(ext), "{ext}");
        }
        assert_eq!(file_name("code", "js").unwrap(), "code.js");
    }

    #[test]
    fn traversal_and_separators_fail() {
        for ext in ["", ".", "..", "../x", "a/b", "a\\b", ".hidden", "js.", "a..b", "sp ace"] {
            assert!(!extension_is_safe(ext), "{ext:?}");
        }
        assert_eq!(
            file_name("code", "../etc").unwrap_err(),
            CodeKillerError::UnsafeExtension("../etc".into())
        );
    }
}
