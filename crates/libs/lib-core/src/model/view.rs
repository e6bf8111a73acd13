//! Local view state of the mint page.
//!
//! Everything here is ephemeral and lost on reload. [`MintView`] owns the
//! transitions; the page only forwards clicks and renders the result.

use shared::dto::OwnedToken;

use super::drop::DropSnapshot;
use super::share::ShareSelection;

/// Shown when a claim is attempted without a connected account.
pub const WALLET_REQUIRED: &str = "Connect a wallet first";

/// Alert severity, named after the CSS classes the page uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// Transient feedback after a claim attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertState {
    pub severity: Severity,
    pub message: String,
    pub open: bool,
}

impl AlertState {
    pub fn claimed(count: usize) -> Self {
        Self {
            severity: Severity::Success,
            message: format!(
                "Successfully minted {} NFT{}!",
                count,
                if count > 1 { "s" } else { "" }
            ),
            open: true,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            open: true,
        }
    }
}

/// Which part of the mint flow is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MintFlow {
    /// Contract handle or metadata not read yet
    Loading,
    /// Waiting for the visitor to accept the disclaimer
    TermsPending,
    SoldOut,
    NotReady,
    ClaimReady,
}

/// Identifies one drop load; only the latest one may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct MintView {
    terms_accepted: bool,
    quantity: u32,
    claiming: bool,
    selected: Option<OwnedToken>,
    share_image_url: String,
    alert: AlertState,
    /// Bumped every time an alert is shown
    alert_seq: u64,
    load_generation: u64,
}

impl Default for MintView {
    fn default() -> Self {
        Self {
            terms_accepted: false,
            quantity: 1,
            claiming: false,
            selected: None,
            share_image_url: String::new(),
            alert: AlertState::default(),
            alert_seq: 0,
            load_generation: 0,
        }
    }
}

impl MintView {
    pub fn new() -> Self {
        Self::default()
    }

    // region:    --- Flow

    /// Current branch of the mint flow. Sold out wins over not ready.
    pub fn flow(&self, snapshot: Option<&DropSnapshot>) -> MintFlow {
        let Some(snapshot) = snapshot else {
            return MintFlow::Loading;
        };
        if !self.terms_accepted {
            return MintFlow::TermsPending;
        }

        let readiness = snapshot.readiness();
        if readiness.is_sold_out {
            MintFlow::SoldOut
        } else if readiness.is_not_ready {
            MintFlow::NotReady
        } else {
            MintFlow::ClaimReady
        }
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    /// One way: there is no path back to the disclaimer prompt.
    pub fn accept_terms(&mut self) {
        self.terms_accepted = true;
    }

    /// Start a drop load. Every earlier ticket becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        LoadTicket(self.load_generation)
    }

    /// Whether `ticket` belongs to the most recently started load.
    pub fn is_current_load(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.load_generation
    }

    /// Hand `snapshot` back if `ticket` is still current, drop it otherwise.
    pub fn accept_load(&self, ticket: LoadTicket, snapshot: DropSnapshot) -> Option<DropSnapshot> {
        if self.is_current_load(ticket) {
            Some(snapshot)
        } else {
            log::debug!("Dropping stale drop load {:?}", ticket);
            None
        }
    }

    // endregion: --- Flow

    // region:    --- Quantity

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }

    pub fn can_increment(&self, limit: u32) -> bool {
        self.quantity < limit
    }

    pub fn decrement(&mut self) {
        if self.can_decrement() {
            self.quantity -= 1;
        }
    }

    pub fn increment(&mut self, limit: u32) {
        if self.can_increment(limit) {
            self.quantity += 1;
        }
    }

    /// Pull the quantity back into `[1, limit]`. A zero limit (no phase
    /// loaded) still allows one.
    pub fn clamp_quantity(&mut self, limit: u32) -> u32 {
        self.quantity = self.quantity.clamp(1, limit.max(1));
        self.quantity
    }

    // endregion: --- Quantity

    // region:    --- Claim

    pub fn is_claiming(&self) -> bool {
        self.claiming
    }

    /// Re-clamp the quantity and mark a claim in flight.
    ///
    /// Returns `None` while a previous claim is still pending, or when no
    /// account is connected; the latter raises a [`WALLET_REQUIRED`] alert.
    pub fn begin_claim(&mut self, limit: u32, owner: Option<&str>) -> Option<u32> {
        if self.claiming {
            return None;
        }
        if owner.is_none() {
            self.show_alert(AlertState::failed(WALLET_REQUIRED));
            return None;
        }
        self.claiming = true;
        Some(self.clamp_quantity(limit))
    }

    pub fn finish_claim(&mut self, alert: AlertState) {
        self.claiming = false;
        self.show_alert(alert);
    }

    fn show_alert(&mut self, alert: AlertState) {
        self.alert_seq += 1;
        self.alert = alert;
    }

    pub fn alert(&self) -> &AlertState {
        &self.alert
    }

    /// Sequence number of the alert currently shown.
    pub fn alert_seq(&self) -> u64 {
        self.alert_seq
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = AlertState::default();
    }

    /// Dismiss only if the alert numbered `seq` is still the one shown.
    pub fn expire_alert(&mut self, seq: u64) {
        if self.alert_seq == seq {
            self.dismiss_alert();
        }
    }

    // endregion: --- Claim

    // region:    --- Share

    pub fn select_token(&mut self, selection: ShareSelection) {
        self.share_image_url = selection.share_url;
        self.selected = Some(selection.token);
    }

    pub fn close_share(&mut self) {
        self.selected = None;
    }

    pub fn selected_token(&self) -> Option<&OwnedToken> {
        self.selected.as_ref()
    }

    pub fn share_dialog_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn share_image_url(&self) -> &str {
        &self.share_image_url
    }

    // endregion: --- Share
}
