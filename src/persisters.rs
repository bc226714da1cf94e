use crate::core::Persister;
use crate::error::StoreError;
use crate::models::*;
use mongodb::bson::{doc, oid::ObjectId};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::Pin;

/// On-disk shape of a location: the command fields next to Mongo's `_id`.
#[derive(Debug, Serialize, Deserialize)]
struct LocationDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    #[serde(flatten)]
    fields: LocationCommand,
}

#[derive(Clone)]
pub(crate) struct MongoPersister {
    coll: mongodb::Collection<LocationDocument>,
}

impl MongoPersister {
    pub fn new(db: mongodb::Database, collection: &str) -> Self {
        Self {
            coll: db.collection(collection),
        }
    }
}

fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
    ObjectId::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_owned()))
}

impl Persister for MongoPersister {
    fn insert<'a>(&'a self, loc: LocationCommand) -> Pin<Box<dyn Future<Output = Result<String, StoreError>> + 'a>> {
        Box::pin(async move {
            let res = self.coll.insert_one(LocationDocument { id: None, fields: loc }, None).await?;
            let id = res
                .inserted_id
                .as_object_id()
                .ok_or_else(|| StoreError::Write(anyhow::Error::msg(format!("unexpected inserted id: {}", res.inserted_id))))?;
            Ok(id.to_hex())
        })
    }

    fn find<'a>(&'a self, id: &'a str) -> Pin<Box<dyn Future<Output = Result<Location, StoreError>> + 'a>> {
        Box::pin(async move {
            let oid = parse_id(id)?;
            let doc = self.coll.find_one(doc! {"_id": oid}, None).await?.ok_or(StoreError::NotFound)?;
            Ok(Location::new(oid.to_hex(), doc.fields))
        })
    }

    fn update<'a>(&'a self, id: &'a str, loc: LocationCommand) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + 'a>> {
        Box::pin(async move {
            let oid = parse_id(id)?;
            let res = self
                .coll
                .replace_one(doc! {"_id": oid}, LocationDocument { id: None, fields: loc }, None)
                .await?;
            if res.matched_count == 0 {
                return Err(StoreError::NotFound);
            }
            Ok(())
        })
    }

    fn delete<'a>(&'a self, id: &'a str) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + 'a>> {
        Box::pin(async move {
            let oid = parse_id(id)?;
            let res = self.coll.delete_one(doc! {"_id": oid}, None).await?;
            if res.deleted_count == 0 {
                return Err(StoreError::NotFound);
            }
            Ok(())
        })
    }
}
