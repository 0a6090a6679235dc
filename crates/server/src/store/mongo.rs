use bson::oid::ObjectId;
use bson::{doc, Document};
use futures::TryStreamExt;
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Collection, Database};

use super::{stamp_create, stamp_update, MessageStore, StoreError};
use crate::models::Message;

/// Store backed by a MongoDB collection. Every operation is a single
/// driver call; consistency under concurrent writers is whatever the
/// server's default write semantics provide.
pub struct MongoMessageStore {
    messages: Collection<Document>,
}

impl MongoMessageStore {
    pub fn new(database: &Database) -> Self {
        Self {
            messages: database.collection("messages"),
        }
    }
}

impl MessageStore for MongoMessageStore {
    async fn find_by_chat(&self, chat_id: i64) -> Result<Vec<Message>, StoreError> {
        // No explicit sort; documents come back in natural order.
        let documents: Vec<Document> = self
            .messages
            .find(doc! { "chatId": chat_id }, None)
            .await?
            .try_collect()
            .await?;

        documents
            .into_iter()
            .map(|doc| bson::from_document(doc).map_err(StoreError::from))
            .collect()
    }

    async fn create(&self, mut draft: Document) -> Result<Message, StoreError> {
        stamp_create(&mut draft);

        // Convert before the insert; a record that cannot be read back
        // would fail every later read of its chat.
        let mut message: Message = bson::from_document(draft.clone())?;

        let inserted = self.messages.insert_one(&draft, None).await?;
        message.id = inserted.inserted_id.as_object_id();

        Ok(message)
    }

    async fn update_by_chat_and_id(
        &self,
        chat_id: i64,
        message_id: &str,
        mut patch: Document,
    ) -> Result<Message, StoreError> {
        let id = ObjectId::parse_str(message_id)?;
        stamp_update(&mut patch);

        // Every field is optional, so the patch must deserialize by
        // itself; reject a mistyped one before the record is touched.
        bson::from_document::<Message>(patch.clone())?;

        let updated = self
            .messages
            .find_one_and_update(
                doc! { "chatId": chat_id, "_id": id },
                doc! { "$set": patch },
                Some(
                    FindOneAndUpdateOptions::builder()
                        .return_document(ReturnDocument::After)
                        .build(),
                ),
            )
            .await?
            .ok_or(StoreError::NotFound)?;

        Ok(bson::from_document(updated)?)
    }
}
