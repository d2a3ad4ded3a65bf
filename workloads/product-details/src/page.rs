//! Product details page controller.
//!
//! Owns the load state and the quantity for one mounted page. An external
//! driver calls [`ProductDetailsPage::navigate`] whenever the route's
//! product id changes; the page fetches, and the view is re-derived from
//! [`ProductDetailsPage::snapshot`].
//!
//! State sits behind a mutex that is never held across an await, so the
//! page can be rendered (showing the loader) while a request is in flight.

use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use trendz_core::{
    ApiStatus, BearerToken, CredentialStore, FetchTicket, LoadMachine, LoadState, ProductId,
    Quantity, Resolution, ResolutionPolicy, JWT_COOKIE,
};
use trendz_data::FetchError;
use trendz_observability::StructuredLogger;

use crate::data::{ProductDetailsApi, ProductPage};
use crate::view::View;

#[derive(Debug)]
struct PageState {
    machine: LoadMachine<ProductPage>,
    quantity: Quantity,
}

/// Point-in-time copy of the page state, for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    pub state: LoadState<ProductPage>,
    pub quantity: Quantity,
}

impl PageSnapshot {
    /// View for this snapshot.
    pub fn view(&self) -> View<'_> {
        View::select(&self.state, self.quantity)
    }

    /// Current status.
    pub fn status(&self) -> ApiStatus {
        self.state.status()
    }
}

/// The product details page.
#[derive(Debug)]
pub struct ProductDetailsPage {
    api: ProductDetailsApi,
    logger: StructuredLogger,
    credential_key: String,
    state: Mutex<PageState>,
}

impl ProductDetailsPage {
    /// Create a page in the initial state.
    pub fn new(api: ProductDetailsApi, logger: StructuredLogger, policy: ResolutionPolicy) -> Self {
        Self {
            api,
            logger,
            credential_key: JWT_COOKIE.to_string(),
            state: Mutex::new(PageState {
                machine: LoadMachine::new(policy),
                quantity: Quantity::new(),
            }),
        }
    }

    /// Read the token from a different credential key.
    pub fn with_credential_key(mut self, key: impl Into<String>) -> Self {
        self.credential_key = key.into();
        self
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// React to the route's product id.
    ///
    /// Fetches on the first call and whenever `product_id` differs from the
    /// last one requested. Returns `None` when the id is unchanged and no
    /// fetch was issued.
    pub async fn navigate(
        &self,
        product_id: ProductId,
        credentials: &dyn CredentialStore,
    ) -> Option<Resolution> {
        let unchanged = self.lock().machine.current_product() == Some(&product_id);
        if unchanged {
            self.logger
                .debug_builder("Product id unchanged, skipping fetch")
                .field("product_id", product_id.as_str())
                .emit();
            return None;
        }

        let token = credentials.bearer_token(&self.credential_key);
        Some(self.load(product_id, token).await)
    }

    /// Fetch `product_id` unconditionally and apply the outcome.
    pub async fn load(&self, product_id: ProductId, token: BearerToken) -> Resolution {
        let ticket = self.begin(product_id);

        self.logger
            .debug_builder("Fetching product details")
            .field("product_id", ticket.product_id().as_str())
            .field_i64("generation", ticket.generation() as i64)
            .field_bool("token_present", token.is_present())
            .field("token", token.fingerprint())
            .emit();

        let started = Instant::now();
        let outcome = self.api.fetch_product(ticket.product_id(), &token).await;

        if let Err(e) = &outcome {
            self.logger
                .error_builder("Product fetch failed")
                .field("product_id", ticket.product_id().as_str())
                .field("error", e.to_string())
                .duration_ms("elapsed_ms", started.elapsed())
                .emit();
        }

        self.resolve(&ticket, outcome)
    }

    /// Start a fetch: status becomes pending.
    ///
    /// A different product id from the last request discards the previous
    /// product and resets the quantity.
    pub fn begin(&self, product_id: ProductId) -> FetchTicket {
        let mut state = self.lock();
        if state.machine.current_product() != Some(&product_id) {
            state.quantity.reset();
        }
        state.machine.begin(product_id)
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    pub fn resolve(
        &self,
        ticket: &FetchTicket,
        outcome: Result<ProductPage, FetchError>,
    ) -> Resolution {
        let resolution = self.lock().machine.resolve(ticket, outcome);

        match resolution {
            Resolution::Applied(status) => self
                .logger
                .info_builder("Product details resolved")
                .field("product_id", ticket.product_id().as_str())
                .field("status", status.as_str())
                .emit(),
            Resolution::Stale { latest_generation } => self
                .logger
                .debug_builder("Ignoring stale product response")
                .field("product_id", ticket.product_id().as_str())
                .field_i64("generation", ticket.generation() as i64)
                .field_i64("latest_generation", latest_generation as i64)
                .emit(),
        }

        resolution
    }

    /// Add one to the quantity.
    pub fn increment(&self) -> Quantity {
        let mut state = self.lock();
        state.quantity.increment();
        state.quantity
    }

    /// Subtract one from the quantity.
    pub fn decrement(&self) -> Quantity {
        let mut state = self.lock();
        state.quantity.decrement();
        state.quantity
    }

    /// Current quantity.
    pub fn quantity(&self) -> Quantity {
        self.lock().quantity
    }

    /// Current status.
    pub fn status(&self) -> ApiStatus {
        self.lock().machine.status()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> PageSnapshot {
        let state = self.lock();
        PageSnapshot {
            state: state.machine.state().clone(),
            quantity: state.quantity,
        }
    }

    /// Render the current view inside the page chrome.
    pub fn render(&self) -> String {
        self.snapshot().view().render_page()
    }

    /// "Continue shopping" on the not-found view. Not wired to navigation.
    pub fn continue_shopping(&self) {
        self.logger.debug("Continue shopping clicked");
    }

    /// "ADD TO CART". Does not touch any cart.
    pub fn add_to_cart(&self) {
        self.logger
            .debug_builder("Add to cart clicked")
            .field_i64("quantity", self.quantity().value())
            .emit();
    }
}
