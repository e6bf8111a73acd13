//! Application constants

use lib_core::model::{ShareOptions, ShareSize};

// UI constants
pub const ALERT_AUTO_HIDE_MS: u32 = 6000;
pub const PREVIEW_IMAGE: &str = "/preview.gif";

// Share dialog
pub const SHARE_CAPTION: &str =
    "I just minted an NFT from this drop!\n\nMint yours now.\n\n#NFT #Mint";

pub fn share_options() -> ShareOptions {
    ShareOptions {
        size: ShareSize::Large,
        text: SHARE_CAPTION.to_string(),
    }
}
