use bson::oid::ObjectId;
use bson::{Bson, Document};
use tokio::sync::RwLock;

use super::{stamp_create, stamp_update, MessageStore, StoreError};
use crate::models::Message;

/// Ordered in-process document store mirroring the MongoDB backend's
/// observable behavior, down to insertion order and `$set`-style patch
/// merges. Backs the integration tests and local runs without a
/// database process.
#[derive(Debug, Default)]
pub struct MemoryMessageStore {
    documents: RwLock<Vec<Document>>,
}

impl MemoryMessageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// MongoDB compares numbers by value across the integer/double types.
fn chat_id_matches(doc: &Document, chat_id: i64) -> bool {
    match doc.get("chatId") {
        Some(Bson::Int32(v)) => i64::from(*v) == chat_id,
        Some(Bson::Int64(v)) => *v == chat_id,
        Some(Bson::Double(v)) => *v == chat_id as f64,
        _ => false,
    }
}

impl MessageStore for MemoryMessageStore {
    async fn find_by_chat(&self, chat_id: i64) -> Result<Vec<Message>, StoreError> {
        let documents = self.documents.read().await;
        documents
            .iter()
            .filter(|doc| chat_id_matches(doc, chat_id))
            .cloned()
            .map(|doc| bson::from_document(doc).map_err(StoreError::from))
            .collect()
    }

    async fn create(&self, mut draft: Document) -> Result<Message, StoreError> {
        stamp_create(&mut draft);
        draft.insert("_id", ObjectId::new());

        // Convert before the push; a mistyped draft must not land.
        let message = bson::from_document(draft.clone())?;

        let mut documents = self.documents.write().await;
        documents.push(draft);

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

        // Reject a mistyped patch before the stored document is touched.
        bson::from_document::<Message>(patch.clone())?;

        let mut documents = self.documents.write().await;
        let doc = documents
            .iter_mut()
            .find(|doc| {
                doc.get_object_id("_id").map_or(false, |oid| oid == id)
                    && chat_id_matches(doc, chat_id)
            })
            .ok_or(StoreError::NotFound)?;

        for (key, value) in patch {
            doc.insert(key, value);
        }

        Ok(bson::from_document(doc.clone())?)
    }
}
