use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::quiz::SharePayload;

/// Everything except unreserved URL characters gets escaped
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Build a `mailto:` link carrying the payload as subject and body
pub fn mailto_url(recipient: Option<&str>, payload: &SharePayload) -> String {
    let to = recipient
        .map(|r| utf8_percent_encode(r.trim(), QUERY_VALUE).to_string().replace("%40", "@"))
        .unwrap_or_default();
    // Mail clients expect CRLF line breaks in the body
    let body = payload.text.replace('\n', "\r\n");

    format!(
        "mailto:{}?subject={}&body={}",
        to,
        utf8_percent_encode(&payload.title, QUERY_VALUE),
        utf8_percent_encode(&body, QUERY_VALUE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SharePayload {
        SharePayload {
            title: "Hồ sơ của Heo".to_string(),
            text: "a b\nc&d".to_string(),
        }
    }

    #[test]
    fn test_without_recipient() {
        assert_eq!(
            mailto_url(None, &payload()),
            "mailto:?subject=H%E1%BB%93%20s%C6%A1%20c%E1%BB%A7a%20Heo&body=a%20b%0D%0Ac%26d"
        );
    }

    #[test]
    fn test_with_recipient() {
        let url = mailto_url(Some(" anh@example.com "), &payload());
        assert!(url.starts_with("mailto:anh@example.com?subject="));
    }
}
