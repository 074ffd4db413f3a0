/// Base URL of the backend API gateway.
///
/// Overridable at build time with `API_BASE_URL`, which the deployment
/// injects into the bundle. Trailing slashes are stripped so endpoint paths
/// can always start with `/`.
pub fn api_base_url() -> String {
    option_env!("API_BASE_URL")
        .unwrap_or("http://localhost:8080")
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
        assert!(api_base_url().starts_with("http"));
    }
}
