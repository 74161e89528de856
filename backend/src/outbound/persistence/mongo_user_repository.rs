//! MongoDB-backed `UserRepository` implementation.
//!
//! Every read applies the credential projection before documents are mapped
//! into domain users. A unique index on `email` backs the uniqueness check
//! performed during validation.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, IndexModel};
use tracing::{debug, info};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailAddress, NewUser, User, UserId, UserPatch};

use super::documents::{UserDocument, object_id, set_fields, without_credential};
use super::mongo_error_mapping::map_mongo_error;

/// Connection settings for the users collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoConfig {
    uri: String,
    database: String,
    collection: String,
}

impl MongoConfig {
    /// Create a configuration for `collection` in `database` at `uri`.
    pub fn new(
        uri: impl Into<String>,
        database: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            collection: collection.into(),
        }
    }

    /// Connection string.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Database name.
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Collection name.
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

/// MongoDB implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct MongoUserRepository {
    users: Collection<UserDocument>,
}

impl MongoUserRepository {
    /// Connect to the configured collection and ensure its indexes exist.
    ///
    /// # Errors
    ///
    /// Returns `UserPersistenceError::Connection` when the URI is invalid and
    /// the mapped driver error when index creation fails.
    pub async fn connect(config: &MongoConfig) -> Result<Self, UserPersistenceError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|err| UserPersistenceError::connection(err.to_string()))?;
        let users = client
            .database(&config.database)
            .collection::<UserDocument>(&config.collection);
        let repository = Self { users };
        repository.ensure_indexes().await?;
        info!(
            database = %config.database,
            collection = %config.collection,
            "connected to user collection"
        );
        Ok(repository)
    }

    async fn ensure_indexes(&self) -> Result<(), UserPersistenceError> {
        let unique_email = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.users
            .create_index(unique_email)
            .await
            .map_err(map_mongo_error)?;
        debug!("unique email index ensured");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, record: &NewUser) -> Result<User, UserPersistenceError> {
        let document = UserDocument::from_new_user(ObjectId::new(), record);
        self.users
            .insert_one(&document)
            .await
            .map_err(map_mongo_error)?;
        User::try_from(document)
    }

    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let documents: Vec<UserDocument> = self
            .users
            .find(doc! {})
            .projection(without_credential())
            .await
            .map_err(map_mongo_error)?
            .try_collect()
            .await
            .map_err(map_mongo_error)?;
        documents.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        self.users
            .find_one(doc! { "_id": object_id(id)? })
            .projection(without_credential())
            .await
            .map_err(map_mongo_error)?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_id_and_update(
        &self,
        id: &UserId,
        patch: &UserPatch,
    ) -> Result<Option<User>, UserPersistenceError> {
        self.users
            .find_one_and_update(doc! { "_id": object_id(id)? }, set_fields(patch))
            .projection(without_credential())
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_mongo_error)?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<User>, UserPersistenceError> {
        self.users
            .find_one(doc! { "email": email.to_string() })
            .projection(without_credential())
            .await
            .map_err(map_mongo_error)?
            .map(User::try_from)
            .transpose()
    }
}
