//! Credential scrubbing for values that end up in logs or command output.

use std::sync::LazyLock;

use regex::Regex;

/// Userinfo section of a URI: `scheme://user:password@`.
static URI_USERINFO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<scheme>[A-Za-z][A-Za-z0-9+.\-]*://)[^/@\s]+@")
        .expect("userinfo pattern is valid")
});

/// Property names that hold secrets (`s3.secret-access-key`, `token`, ...).
static SECRET_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)secret|password|passwd|token|credential|key")
        .expect("secret key pattern is valid")
});

/// Placeholder shown instead of a secret value.
pub const REDACTED: &str = "***";

/// Replace the credentials of every URI in `text` with `***`.
///
/// `mongodb://svc:s3cret@db:27017` becomes `mongodb://***@db:27017`. Text
/// without userinfo is returned unchanged.
pub fn redact_uri_credentials(text: &str) -> String {
    URI_USERINFO.replace_all(text, "${scheme}***@").into_owned()
}

/// Whether a property named `key` holds a secret and must not be shown.
pub fn is_secret_key(key: &str) -> bool {
    SECRET_KEY.is_match(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacts_user_and_password() {
        assert_eq!(
            redact_uri_credentials("mongodb://svc:s3cret@db:27017/?authSource=admin"),
            "mongodb://***@db:27017/?authSource=admin"
        );
    }

    #[test]
    fn test_redacts_srv_uri_with_user_only() {
        assert_eq!(
            redact_uri_credentials("mongodb+srv://reader@cluster0.example.net"),
            "mongodb+srv://***@cluster0.example.net"
        );
    }

    #[test]
    fn test_leaves_plain_uri_alone() {
        let uri = "mongodb://localhost:27017";
        assert_eq!(redact_uri_credentials(uri), uri);
    }

    #[test]
    fn test_at_sign_in_path_is_not_userinfo() {
        let uri = "http://catalog:8181/v1/ns@prod";
        assert_eq!(redact_uri_credentials(uri), uri);
    }

    #[test]
    fn test_redacts_inside_message() {
        assert_eq!(
            redact_uri_credentials("connecting to mongodb://a:b@h1,h2/db now"),
            "connecting to mongodb://***@h1,h2/db now"
        );
    }

    #[test]
    fn test_secret_property_names() {
        for key in ["s3.secret-access-key", "s3.access-key-id", "token", "credential", "DB_PASSWORD"] {
            assert!(is_secret_key(key), "{key} should be secret");
        }
        for key in ["io-impl", "client.region", "warehouse", "s3.endpoint"] {
            assert!(!is_secret_key(key), "{key} should be shown");
        }
    }
}
