//! Page modules

pub mod mint;
pub mod terms;

pub use mint::MintPage;
pub use terms::TermsPage;
