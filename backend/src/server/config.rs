//! HTTP server configuration object and helpers.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use accounts::domain::ports::UserRepository;
use accounts::outbound::memory::InMemoryUserRepository;
use accounts::outbound::persistence::MongoUserRepository;
use accounts::settings::AppSettings;
use tracing::warn;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) repository: Arc<dyn UserRepository>,
}

impl ServerConfig {
    /// Construct a configuration backed by an empty in-memory repository.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            repository: Arc::new(InMemoryUserRepository::new()),
        }
    }

    /// Attach the user repository used by the account service.
    #[must_use]
    pub fn with_repository(mut self, repository: Arc<dyn UserRepository>) -> Self {
        self.repository = repository;
        self
    }

    /// Build the configuration described by `settings`.
    ///
    /// Connects to MongoDB when a URI is configured and falls back to the
    /// in-memory repository otherwise.
    ///
    /// # Errors
    /// Returns [`io::ErrorKind::InvalidInput`] for an unparseable bind
    /// address and [`io::ErrorKind::ConnectionRefused`] when MongoDB cannot
    /// be reached.
    pub async fn from_settings(settings: &AppSettings) -> io::Result<Self> {
        let bind_addr: SocketAddr = settings.bind_addr().parse().map_err(|err| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid bind address {}: {err}", settings.bind_addr()),
            )
        })?;
        let config = Self::new(bind_addr);

        let Some(mongo) = settings.mongo() else {
            warn!("no MongoDB URI configured; users are kept in memory");
            return Ok(config);
        };
        let repository = MongoUserRepository::connect(&mongo).await.map_err(|err| {
            io::Error::new(
                io::ErrorKind::ConnectionRefused,
                format!("failed to connect to MongoDB: {err}"),
            )
        })?;
        Ok(config.with_repository(Arc::new(repository)))
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Exercised by server tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
