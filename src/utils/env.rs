/// Get environment variable with BREAKWATER_ prefix, falling back to unprefixed version
///
/// Checks `BREAKWATER_{key}` first, then falls back to `{key}` for
/// compatibility with standard environment variable naming.
///
/// # Examples
///
/// ```rust
/// use breakwater::utils::get_env_with_prefix;
///
/// // Checks BREAKWATER_HSTS_MAX_AGE first, then HSTS_MAX_AGE
/// let max_age = get_env_with_prefix("HSTS_MAX_AGE");
/// ```
pub fn get_env_with_prefix(key: &str) -> Option<String> {
    std::env::var(format!("BREAKWATER_{}", key))
        .or_else(|_| std::env::var(key))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_with_prefix() {
        unsafe {
            std::env::set_var("BREAKWATER_TEST_VAR", "prefixed_value");
        }
        assert_eq!(get_env_with_prefix("TEST_VAR"), Some("prefixed_value".to_string()));
        unsafe {
            std::env::remove_var("BREAKWATER_TEST_VAR");
        }

        unsafe {
            std::env::set_var("FALLBACK_VAR", "unprefixed_value");
        }
        assert_eq!(get_env_with_prefix("FALLBACK_VAR"), Some("unprefixed_value".to_string()));
        unsafe {
            std::env::remove_var("FALLBACK_VAR");
        }

        assert_eq!(get_env_with_prefix("NON_EXISTENT_VAR"), None);
    }
}
