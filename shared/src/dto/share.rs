use serde::{Deserialize, Serialize};

/// Response of `GET {image_api}/api/twitterUrl?url=<image>`.
///
/// `url` is usually host + path without a scheme.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShareImageResponse {
    pub url: String,
}
