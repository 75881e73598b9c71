//! Shared naming helpers for emitters.

/// Convert a name to snake_case (e.g., "apiUrl" -> "api_url", "HTTPServer" -> "http_server")
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == '-' {
            result.push('_');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// Convert a name to SCREAMING_SNAKE_CASE (e.g., "apiUrl" -> "API_URL")
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("AppConfig"), "app_config");
        assert_eq!(to_snake_case("apiUrl"), "api_url");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("retry2Times"), "retry2_times");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("apiUrl"), "API_URL");
        assert_eq!(to_screaming_snake_case("timeout"), "TIMEOUT");
        assert_eq!(to_screaming_snake_case("max_retries"), "MAX_RETRIES");
    }
}
