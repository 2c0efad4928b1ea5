//! Catalog view state: one fetch per mount, filtering on demand.
//!
//! A [`CatalogView`] starts in [`ViewState::Loading`], spawns exactly one
//! catalog fetch, and moves to `Ready` or `Error` when it completes. Filter
//! changes never refetch. Unmounting (or dropping) the view aborts the fetch
//! and discards any result that still arrives afterwards.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use boutique_core::{
    derive_facets, filter_products, Facets, FilterCriteria, NormalizerOptions, Product,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::client::StorefrontClient;
use crate::error::ClientError;

/// The three mutually exclusive states of a catalog page.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    /// User-visible error message.
    Error(String),
    Ready(Vec<Product>),
}

impl ViewState {
    fn from_result(result: Result<Vec<Product>, ClientError>) -> Self {
        match result {
            Ok(products) => Self::Ready(products),
            Err(error) => {
                tracing::warn!(%error, "catalog fetch failed");
                Self::Error(error.user_message())
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The full catalog when ready; empty otherwise.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Ready(products) => products,
            Self::Loading | Self::Error(_) => &[],
        }
    }
}

/// A mounted catalog page.
///
/// Owns the fetch task and the receiving end of the state channel. Filtering
/// and facets read the latest published state and never trigger a refetch.
pub struct CatalogView {
    state: watch::Receiver<ViewState>,
    /// Held across every publish so an unmount cannot interleave with one.
    mounted: Arc<Mutex<bool>>,
    task: Option<JoinHandle<()>>,
}

impl CatalogView {
    /// Mounts the view and starts the single catalog fetch.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn mount(client: Arc<StorefrontClient>, options: NormalizerOptions) -> Self {
        let (tx, rx) = watch::channel(ViewState::Loading);
        let mounted = Arc::new(Mutex::new(true));
        let flag = Arc::clone(&mounted);

        let task = tokio::spawn(async move {
            let next = ViewState::from_result(client.fetch_products(&options).await);
            publish(&tx, &flag, next);
        });

        Self {
            state: rx,
            mounted,
            task: Some(task),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// A receiver that observes every state transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.clone()
    }

    /// Waits until the fetch has completed and returns the resulting state.
    ///
    /// Returns the current state immediately if the view was unmounted first.
    pub async fn settled(&mut self) -> ViewState {
        if let Ok(state) = self.state.wait_for(|s| !s.is_loading()).await {
            return state.clone();
        }
        self.state()
    }

    /// Products passing `criteria`, in catalog order. Empty unless ready.
    #[must_use]
    pub fn visible(&self, criteria: &FilterCriteria) -> Vec<Product> {
        filter_products(self.state.borrow().products(), criteria)
    }

    /// Facets of the full catalog, independent of any filter.
    #[must_use]
    pub fn facets(&self) -> Facets {
        derive_facets(self.state.borrow().products())
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        *lock(&self.mounted)
    }

    /// Stops the in-flight fetch, if any. Idempotent.
    pub fn unmount(&mut self) {
        *lock(&self.mounted) = false;
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for CatalogView {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn lock(mounted: &Mutex<bool>) -> MutexGuard<'_, bool> {
    mounted.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Publishes `next` only while the view is still mounted. The mounted flag
/// stays locked until the send completes.
fn publish(tx: &watch::Sender<ViewState>, mounted: &Mutex<bool>, next: ViewState) -> bool {
    let guard = lock(mounted);
    if !*guard {
        tracing::debug!("discarding catalog result for unmounted view");
        return false;
    }
    tx.send_replace(next);
    drop(guard);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_updates_mounted_view() {
        let (tx, rx) = watch::channel(ViewState::Loading);
        let mounted = Mutex::new(true);
        assert!(publish(&tx, &mounted, ViewState::Ready(vec![])));
        assert_eq!(*rx.borrow(), ViewState::Ready(vec![]));
    }

    #[test]
    fn publish_discards_result_for_unmounted_view() {
        let (tx, rx) = watch::channel(ViewState::Loading);
        let mounted = Mutex::new(false);
        assert!(!publish(&tx, &mounted, ViewState::Error("late".to_owned())));
        assert_eq!(*rx.borrow(), ViewState::Loading);
    }

    #[test]
    fn publish_waits_for_pending_unmount() {
        let (tx, rx) = watch::channel(ViewState::Loading);
        let mounted = Arc::new(Mutex::new(true));

        let mut guard = lock(&mounted);
        let publisher = {
            let mounted = Arc::clone(&mounted);
            std::thread::spawn(move || {
                publish(&tx, &mounted, ViewState::Error("late".to_owned()))
            })
        };
        std::thread::sleep(std::time::Duration::from_millis(20));
        *guard = false;
        drop(guard);

        assert!(!publisher.join().expect("publisher thread panicked"));
        assert_eq!(*rx.borrow(), ViewState::Loading);
    }

    #[test]
    fn from_result_maps_errors_to_user_message() {
        let state = ViewState::from_result(Err(ClientError::UnexpectedFormat {
            url: "http://shop.test/api/products".to_owned(),
        }));
        assert_eq!(
            state,
            ViewState::Error("Unexpected response format from the product service.".to_owned())
        );
    }

    #[test]
    fn only_ready_state_exposes_products() {
        assert!(ViewState::Loading.products().is_empty());
        assert!(ViewState::Error("x".to_owned()).products().is_empty());
        assert!(ViewState::Loading.is_loading());
    }
}
