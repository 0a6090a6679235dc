use std::future::Future;

use bson::Document;

use crate::models::Message;

pub mod memory;
pub mod mongo;

pub use memory::MemoryMessageStore;
pub use mongo::MongoMessageStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("mongodb: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("malformed document: {0}")]
    Document(#[from] bson::de::Error),
    #[error("malformed message id: {0}")]
    MalformedId(#[from] bson::oid::Error),
    #[error("message not found")]
    NotFound,
}

pub trait MessageStore {
    /// All messages whose `chatId` equals `chat_id`, in insertion order.
    /// An unknown chat id and an empty chat both come back as an empty vec.
    fn find_by_chat(&self, chat_id: i64) -> impl Future<Output = Result<Vec<Message>, StoreError>> + Send;

    /// Persist a draft as-is apart from the stamped timestamps and return
    /// the stored record, id included. A draft whose known fields do not
    /// deserialize as `Message` is rejected before anything is written.
    fn create(&self, draft: Document) -> impl Future<Output = Result<Message, StoreError>> + Send;

    /// Apply `patch` to the record matching both keys and return it
    /// post-update, or `StoreError::NotFound` when no record matches.
    /// A mistyped patch is rejected before the record is touched.
    fn update_by_chat_and_id(
        &self,
        chat_id: i64,
        message_id: &str,
        patch: Document,
    ) -> impl Future<Output = Result<Message, StoreError>> + Send;
}

pub enum AnyMessageStore {
    Mongo(MongoMessageStore),
    Memory(MemoryMessageStore),
}

impl MessageStore for AnyMessageStore {
    async fn find_by_chat(&self, chat_id: i64) -> Result<Vec<Message>, StoreError> {
        match self {
            AnyMessageStore::Mongo(store) => store.find_by_chat(chat_id).await,
            AnyMessageStore::Memory(store) => store.find_by_chat(chat_id).await,
        }
    }

    async fn create(&self, draft: Document) -> Result<Message, StoreError> {
        match self {
            AnyMessageStore::Mongo(store) => store.create(draft).await,
            AnyMessageStore::Memory(store) => store.create(draft).await,
        }
    }

    async fn update_by_chat_and_id(
        &self,
        chat_id: i64,
        message_id: &str,
        patch: Document,
    ) -> Result<Message, StoreError> {
        match self {
            AnyMessageStore::Mongo(store) => store.update_by_chat_and_id(chat_id, message_id, patch).await,
            AnyMessageStore::Memory(store) => store.update_by_chat_and_id(chat_id, message_id, patch).await,
        }
    }
}

/// Identity comes from the backend, never the caller. Both stamps come
/// from one clock reading: `createdAt` equals `updatedAt` on a record
/// that has never been updated.
fn stamp_create(draft: &mut Document) {
    draft.remove("_id");
    draft.remove("id");
    let now = chrono::Utc::now().to_rfc3339();
    draft.insert("createdAt", now.clone());
    draft.insert("updatedAt", now);
}

/// Identity and `createdAt` are immutable after creation; whatever the
/// caller put there is dropped before the patch is applied.
fn stamp_update(patch: &mut Document) {
    patch.remove("_id");
    patch.remove("id");
    patch.remove("createdAt");
    patch.insert("updatedAt", chrono::Utc::now().to_rfc3339());
}
