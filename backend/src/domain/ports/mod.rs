//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod email_directory;
mod sub_resources;
mod user_accounts;
mod user_repository;

pub use email_directory::EmailDirectory;
#[cfg(test)]
pub use sub_resources::{MockPhoneNumbers, MockPinCodes};
pub use sub_resources::{PhoneNumbers, PinCodes, SubResourceReply, UnconfiguredSubResources};
#[cfg(test)]
pub use user_accounts::MockUserAccounts;
pub use user_accounts::UserAccounts;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
