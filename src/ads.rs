//! Ad-provider integration hooks
//!
//! Two no-op placement points for a monetization SDK. The core only calls
//! these; the provider snippet supplies the real behavior at integration
//! time.

/// Blocking interstitial placement, fire-and-forget. Called on the
/// game-over transition.
pub fn show_interstitial() {
    log::info!("Interstitial ad requested (hook)");
}

/// Rewarded placement. Resolves to true when the reward was granted;
/// the stub always grants so the revive flow is testable end to end.
pub async fn show_rewarded() -> bool {
    log::info!("Rewarded ad requested (hook)");
    true
}
