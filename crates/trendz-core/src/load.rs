//! Fetch lifecycle state machine.
//!
//! A page moves through `Initial -> Pending -> {Success, Failure}`. Each
//! fetch is started with [`LoadMachine::begin`], which hands out a
//! [`FetchTicket`]; the outcome is applied with [`LoadMachine::resolve`].
//! Tickets carry a generation number so the machine can tell a stale
//! response from the one it is waiting for.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// Discriminant of a [`LoadState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiStatus {
    Initial,
    Pending,
    Success,
    Failure,
}

impl ApiStatus {
    /// Status name as used in logs and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "INITIAL",
            Self::Pending => "PENDING",
            Self::Success => "SUCCESS",
            Self::Failure => "FAILURE",
        }
    }

    /// Whether the fetch has finished, either way.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load state carrying data only where it is valid.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    /// Nothing has been requested yet.
    #[default]
    Initial,
    /// A request is outstanding.
    Pending,
    /// The latest applied request succeeded.
    Success(T),
    /// The latest applied request failed. No partial data is kept.
    Failure,
}

impl<T> LoadState<T> {
    /// The status tag for this state.
    pub fn status(&self) -> ApiStatus {
        match self {
            Self::Initial => ApiStatus::Initial,
            Self::Pending => ApiStatus::Pending,
            Self::Success(_) => ApiStatus::Success,
            Self::Failure => ApiStatus::Failure,
        }
    }

    /// Loaded data, if in the success state.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }
}

/// How resolutions of superseded fetches are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPolicy {
    /// Only the most recently issued ticket may change state.
    #[default]
    LatestIssued,
    /// Every resolution is applied; whichever resolves last wins.
    LastResolved,
}

/// Handle for one in-flight fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    product_id: ProductId,
}

impl FetchTicket {
    /// Generation number, unique per machine.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Product this fetch was issued for.
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }
}

/// What [`LoadMachine::resolve`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The outcome was stored.
    Applied(ApiStatus),
    /// A newer fetch was issued; the outcome was dropped.
    Stale { latest_generation: u64 },
}

impl Resolution {
    /// Whether the outcome changed state.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Fetch lifecycle for a single view.
#[derive(Debug, Clone)]
pub struct LoadMachine<T> {
    state: LoadState<T>,
    policy: ResolutionPolicy,
    issued: u64,
    current: Option<ProductId>,
}

impl<T> Default for LoadMachine<T> {
    fn default() -> Self {
        Self::new(ResolutionPolicy::default())
    }
}

impl<T> LoadMachine<T> {
    /// Create a machine in the initial state.
    pub fn new(policy: ResolutionPolicy) -> Self {
        Self {
            state: LoadState::Initial,
            policy,
            issued: 0,
            current: None,
        }
    }

    /// Start a fetch for `product_id`. The state becomes pending and any
    /// previously loaded data is dropped.
    pub fn begin(&mut self, product_id: ProductId) -> FetchTicket {
        self.issued += 1;
        self.state = LoadState::Pending;
        self.current = Some(product_id.clone());
        FetchTicket {
            generation: self.issued,
            product_id,
        }
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    pub fn resolve<E>(&mut self, ticket: &FetchTicket, outcome: Result<T, E>) -> Resolution {
        if self.policy == ResolutionPolicy::LatestIssued && ticket.generation != self.issued {
            return Resolution::Stale {
                latest_generation: self.issued,
            };
        }

        self.state = match outcome {
            Ok(data) => LoadState::Success(data),
            Err(_) => LoadState::Failure,
        };
        Resolution::Applied(self.state.status())
    }

    /// Current status tag.
    pub fn status(&self) -> ApiStatus {
        self.state.status()
    }

    /// Current state.
    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Loaded data, if in the success state.
    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    /// Product id of the most recently issued fetch.
    pub fn current_product(&self) -> Option<&ProductId> {
        self.current.as_ref()
    }

    /// Number of fetches issued so far.
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Active resolution policy.
    pub fn policy(&self) -> ResolutionPolicy {
        self.policy
    }
}
