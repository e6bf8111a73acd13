//! Share links for owned tokens.

use shared::dto::OwnedToken;

/// Endpoint path of the image-transform service.
pub const SHARE_IMAGE_PATH: &str = "/api/twitterUrl";

const TWEET_INTENT_BASE: &str = "https://twitter.com/intent/tweet";

/// A token picked from the gallery together with the URL to share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSelection {
    pub token: OwnedToken,
    pub share_url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShareSize {
    #[default]
    Large,
    Small,
}

impl ShareSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShareSize::Large => "large",
            ShareSize::Small => "small",
        }
    }
}

/// Display options of the share button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareOptions {
    pub size: ShareSize,
    pub text: String,
}

/// Request URL for the image-transform endpoint.
///
/// ```rust
/// use lib_core::model::share::share_image_request_url;
///
/// assert_eq!(
///     share_image_request_url("https://img.example.com", "ipfs://bafy/1.png"),
///     "https://img.example.com/api/twitterUrl?url=ipfs%3A%2F%2Fbafy%2F1.png"
/// );
/// ```
pub fn share_image_request_url(api_base: &str, image: &str) -> String {
    format!(
        "{}{}?url={}",
        api_base.trim_end_matches('/'),
        SHARE_IMAGE_PATH,
        urlencoding::encode(image)
    )
}

/// The endpoint answers with host and path only; add a scheme unless one is there.
pub fn normalize_share_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("https://") || url.starts_with("http://") {
        url.to_string()
    } else {
        format!("https://{}", url.trim_start_matches('/'))
    }
}

/// Tweet intent link carrying the caption and the shared URL.
pub fn tweet_intent_url(url: &str, options: &ShareOptions) -> String {
    let mut link = format!("{}?url={}", TWEET_INTENT_BASE, urlencoding::encode(url));
    if !options.text.is_empty() {
        link.push_str("&text=");
        link.push_str(&urlencoding::encode(&options.text));
    }
    link
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_image_request_url_trims_trailing_slash() {
        assert_eq!(
            share_image_request_url("https://img.example.com/", "https://cdn.example.com/a b.png"),
            "https://img.example.com/api/twitterUrl?url=https%3A%2F%2Fcdn.example.com%2Fa%20b.png"
        );
    }

    #[test]
    fn test_normalize_share_url() {
        assert_eq!(normalize_share_url("cdn.example.com/x.png"), "https://cdn.example.com/x.png");
        assert_eq!(normalize_share_url("http://cdn.example.com/x.png"), "http://cdn.example.com/x.png");
        assert_eq!(normalize_share_url("//cdn.example.com/x.png"), "https://cdn.example.com/x.png");
    }

    #[test]
    fn test_tweet_intent_url() {
        let options = ShareOptions {
            size: ShareSize::Large,
            text: "I just minted!\n#Mint".to_string(),
        };
        assert_eq!(
            tweet_intent_url("https://cdn.example.com/x.png", &options),
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fcdn.example.com%2Fx.png&text=I%20just%20minted%21%0A%23Mint"
        );
        assert_eq!(
            tweet_intent_url("https://a.example", &ShareOptions::default()),
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fa.example"
        );
    }
}
