//! Member repository for all MongoDB operations on the members collection.
//!
//! Encapsulates database access for member documents: lookups, inserts,
//! explicit updates, and the paged directory query.

use chrono::{NaiveDate, Utc};
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::options::IndexOptions;
use mongodb::results::UpdateResult;
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_MEMBERS;
use crate::errors::ApiError;
use crate::models::{Member, MemberFilter, OrderBy};
use crate::pagination::{PageRequest, PageSource, PagedList};

/// Repository for member-related database operations.
pub struct MemberRepository {
    collection: Collection<Member>,
}

impl MemberRepository {
    /// Create a new MemberRepository instance.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_MEMBERS),
        }
    }

    /// Create database indexes for commonly queried fields.
    ///
    /// Called once during application startup. Creates:
    /// - Unique index on `username`
    /// - Descending index on `last_active` (default sort)
    /// - Compound index on `gender` and `date_of_birth` (list filter)
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for members collection...");

        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "username": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
            IndexModel::builder()
                .keys(doc! { "last_active": -1 })
                .build(),
            IndexModel::builder()
                .keys(doc! { "gender": 1, "date_of_birth": 1 })
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        info!("Database indexes created successfully");
        Ok(())
    }

    /// Insert a new member into the database.
    pub async fn insert(&self, member: &Member) -> Result<ObjectId, ApiError> {
        let result = self.collection.insert_one(member).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            ApiError::InternalServerError("Inserted member has no ObjectId".to_string())
        })
    }

    /// Find a member by username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Member>, ApiError> {
        Ok(self
            .collection
            .find_one(doc! { "username": username })
            .await?)
    }

    /// Run the paged directory query for the given filter: exactly one
    /// count plus one windowed fetch against the collection.
    pub async fn find_paged(
        &self,
        filter: &MemberFilter,
        request: PageRequest,
    ) -> Result<PagedList<Member>, ApiError> {
        let window = MemberWindow {
            collection: &self.collection,
            filter: build_filter(filter, Utc::now().date_naive()),
            sort: build_sort(filter.order_by),
        };

        debug!("Paged member query with filter: {:?}", window.filter);
        PagedList::create(&window, request).await
    }

    /// Apply an explicit `$set` update to a member document.
    pub async fn update(&self, id: ObjectId, update: Document) -> Result<UpdateResult, ApiError> {
        Ok(self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": update })
            .await?)
    }

    /// Refresh the last-active timestamp for a member.
    pub async fn update_last_active(&self, id: ObjectId) -> Result<(), ApiError> {
        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "last_active": mongodb::bson::DateTime::now() } },
            )
            .await?;
        Ok(())
    }
}

/// One filtered, sorted view of the members collection, countable and
/// fetchable in bounded windows.
struct MemberWindow<'a> {
    collection: &'a Collection<Member>,
    filter: Document,
    sort: Document,
}

impl PageSource for MemberWindow<'_> {
    type Item = Member;

    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.collection.count_documents(self.filter.clone()).await?)
    }

    async fn fetch_window(&self, skip: u64, limit: i64) -> Result<Vec<Member>, ApiError> {
        let cursor = self
            .collection
            .find(self.filter.clone())
            .sort(self.sort.clone())
            .skip(skip)
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }
}

/// Build the BSON filter: exclude the requesting member, optional gender
/// equality, inclusive date-of-birth window derived from the age range.
fn build_filter(filter: &MemberFilter, today: NaiveDate) -> Document {
    let (min_dob, max_dob) = filter.dob_window(today);

    let mut document = doc! {
        "username": { "$ne": filter.current_username.as_str() },
        "date_of_birth": {
            "$gte": min_dob.to_string(),
            "$lte": max_dob.to_string(),
        },
    };

    if let Some(gender) = filter.gender {
        document.insert("gender", gender.to_string());
    }

    document
}

/// Sort document for the chosen order. Descending `_id` breaks timestamp
/// ties so pages stay deterministic.
fn build_sort(order_by: OrderBy) -> Document {
    match order_by {
        OrderBy::Created => doc! { "created": -1, "_id": -1 },
        OrderBy::LastActive => doc! { "last_active": -1, "_id": -1 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn filter(gender: Option<Gender>, min_age: u32, max_age: u32) -> MemberFilter {
        MemberFilter {
            current_username: "lisa".to_string(),
            gender,
            min_age,
            max_age,
            order_by: OrderBy::default(),
        }
    }

    #[test]
    fn filter_excludes_the_requesting_member() {
        let document = build_filter(&filter(None, 18, 100), date(2024, 6, 15));
        assert_eq!(
            document
                .get_document("username")
                .unwrap()
                .get_str("$ne")
                .unwrap(),
            "lisa"
        );
        assert!(document.get("gender").is_none());
    }

    #[test]
    fn age_range_maps_to_inclusive_dob_window() {
        let document = build_filter(&filter(None, 25, 35), date(2024, 6, 15));
        let dob = document.get_document("date_of_birth").unwrap();
        assert_eq!(dob.get_str("$gte").unwrap(), "1988-06-16");
        assert_eq!(dob.get_str("$lte").unwrap(), "1999-06-15");
    }

    #[test]
    fn gender_filter_is_an_equality_match() {
        let document = build_filter(&filter(Some(Gender::Female), 18, 100), date(2024, 6, 15));
        assert_eq!(document.get_str("gender").unwrap(), "female");
    }

    #[test]
    fn sort_orders_descending_with_id_tie_break() {
        let sort = build_sort(OrderBy::Created);
        assert_eq!(sort.get_i32("created").unwrap(), -1);
        assert_eq!(sort.get_i32("_id").unwrap(), -1);

        let sort = build_sort(OrderBy::LastActive);
        assert_eq!(sort.get_i32("last_active").unwrap(), -1);
        assert_eq!(sort.get_i32("_id").unwrap(), -1);
    }
}
