use bson::oid::ObjectId;
use bson::Document;
use serde::{Deserialize, Serialize, Serializer};

/// A stored chat message. Drafts are persisted with no field allow-list,
/// so a record carries whatever its creator sent plus the server-stamped
/// timestamps; every field is serialized only when set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Assigned by the storage layer. Keyed `_id` in storage, exposed on
    /// the wire as `id`, a plain hex string.
    #[serde(
        rename(serialize = "id", deserialize = "_id"),
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_object_id"
    )]
    pub id: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_one_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_two_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// RFC 3339, set once at creation and never changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// RFC 3339, overwritten on every update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Unrecognized fields, preserved as-is.
    #[serde(flatten)]
    pub extra: Document,
}

fn serialize_object_id<S: Serializer>(id: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error> {
    match id {
        Some(id) => serializer.serialize_str(&id.to_hex()),
        None => serializer.serialize_none(),
    }
}
