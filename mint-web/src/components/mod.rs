//! UI Components

pub mod alert;
pub mod claim_panel;
pub mod connect_button;
pub mod gallery;
pub mod share_dialog;
pub mod supply_bar;
pub mod terms_prompt;

pub use alert::AlertSnackbar;
pub use claim_panel::ClaimPanel;
pub use connect_button::ConnectWallet;
pub use gallery::Gallery;
pub use share_dialog::ShareDialog;
pub use supply_bar::SupplyBar;
pub use terms_prompt::TermsPrompt;
