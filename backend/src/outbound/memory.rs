//! In-memory `UserRepository` used when no MongoDB URI is configured.
//!
//! Records are kept in insertion order behind an async `RwLock`. Email
//! uniqueness is enforced on write the same way the MongoDB unique index is,
//! so a duplicate surfaces as `UserPersistenceError::DuplicateKey`.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, NewUser, User, UserId, UserPatch};

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    #[expect(dead_code, reason = "credential is stored but never read back")]
    password: Option<String>,
}

/// Process-local user store.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    records: RwLock<Vec<StoredUser>>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user together with a stored credential.
    ///
    /// Used to seed fixtures; the credential is never returned by reads.
    pub async fn insert_with_credential(
        &self,
        record: &NewUser,
        password: impl Into<String>,
    ) -> Result<User, UserPersistenceError> {
        self.insert(record, Some(password.into())).await
    }

    async fn insert(
        &self,
        record: &NewUser,
        password: Option<String>,
    ) -> Result<User, UserPersistenceError> {
        let mut records = self.records.write().await;
        if records
            .iter()
            .any(|stored| stored.user.email() == &record.email)
        {
            return Err(duplicate_email(&record.email));
        }

        let id = UserId::new(ObjectId::new().to_hex())
            .map_err(|err| UserPersistenceError::query(err.to_string()))?;
        let user = User::new(id, record.name.clone(), record.email.clone(), record.status);
        records.push(StoredUser {
            user: user.clone(),
            password,
        });
        Ok(user)
    }
}

fn duplicate_email(email: &EmailAddress) -> UserPersistenceError {
    UserPersistenceError::duplicate_key(format!("email {email} already exists"))
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, record: &NewUser) -> Result<User, UserPersistenceError> {
        self.insert(record, None).await
    }

    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let records = self.records.read().await;
        Ok(records.iter().map(|stored| stored.user.clone()).collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|stored| stored.user.id() == id)
            .map(|stored| stored.user.clone()))
    }

    async fn find_by_id_and_update(
        &self,
        id: &UserId,
        patch: &UserPatch,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut records = self.records.write().await;
        if let Some(email) = &patch.email
            && records
                .iter()
                .any(|stored| stored.user.email() == email && stored.user.id() != id)
        {
            return Err(duplicate_email(email));
        }

        let Some(stored) = records.iter_mut().find(|stored| stored.user.id() == id) else {
            return Ok(None);
        };
        stored.user = stored.user.clone().patched(patch);
        Ok(Some(stored.user.clone()))
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|stored| stored.user.email() == email)
            .map(|stored| stored.user.clone()))
    }
}
