//! Ad gate
//!
//! Saving a conversion is gated behind an interstitial ad. The ad network is
//! an external collaborator, so the converter only sees this capability.

/// Continuation run once the ad flow is over
pub type OnComplete = Box<dyn FnOnce() + Send + 'static>;

/// Something that can show an ad and then resume the gated action
///
/// Implementations must call `on_complete` exactly once: immediately when no
/// ad is available or loaded, otherwise after the ad is dismissed or fails.
pub trait AdPresenter: Send + Sync {
    fn present_then_continue(&self, on_complete: OnComplete);
}

/// Presenter for environments without an ad network
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipAds;

impl AdPresenter for SkipAds {
    fn present_then_continue(&self, on_complete: OnComplete) {
        tracing::debug!("no ad network, continuing immediately");
        on_complete();
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::{AdPresenter, OnComplete};

    /// Holds the continuation until the test dismisses the "ad"
    #[derive(Default)]
    pub struct DeferredAd {
        pending: Mutex<Option<OnComplete>>,
    }

    impl DeferredAd {
        pub fn is_showing(&self) -> bool {
            self.pending.lock().unwrap().is_some()
        }

        pub fn dismiss(&self) {
            let callback = self.pending.lock().unwrap().take();
            if let Some(callback) = callback {
                callback();
            }
        }
    }

    impl AdPresenter for DeferredAd {
        fn present_then_continue(&self, on_complete: OnComplete) {
            *self.pending.lock().unwrap() = Some(on_complete);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::testing::DeferredAd;
    use super::*;

    #[test]
    fn test_skip_ads_continues_immediately() {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();
        SkipAds.present_then_continue(Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_deferred_ad_waits_for_dismissal() {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();
        let ad = DeferredAd::default();
        ad.present_then_continue(Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        assert!(ad.is_showing());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        ad.dismiss();
        ad.dismiss();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
