//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{PhoneNumbers, PinCodes, UnconfiguredSubResources, UserAccounts};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserAccounts>,
    pub phones: Arc<dyn PhoneNumbers>,
    pub pins: Arc<dyn PinCodes>,
}

impl HttpState {
    /// Construct state with the account service and no sub-resource
    /// collaborators configured.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use accounts::domain::UserAccountsService;
    /// use accounts::inbound::http::state::HttpState;
    /// use accounts::outbound::memory::InMemoryUserRepository;
    ///
    /// let repo = Arc::new(InMemoryUserRepository::new());
    /// let state = HttpState::new(Arc::new(UserAccountsService::new(repo)));
    /// let _phones = state.phones.clone();
    /// ```
    pub fn new(users: Arc<dyn UserAccounts>) -> Self {
        Self {
            users,
            phones: Arc::new(UnconfiguredSubResources),
            pins: Arc::new(UnconfiguredSubResources),
        }
    }

    /// Replace the phone number collaborator.
    #[must_use]
    pub fn with_phones(mut self, phones: Arc<dyn PhoneNumbers>) -> Self {
        self.phones = phones;
        self
    }

    /// Replace the PIN code collaborator.
    #[must_use]
    pub fn with_pins(mut self, pins: Arc<dyn PinCodes>) -> Self {
        self.pins = pins;
        self
    }
}
