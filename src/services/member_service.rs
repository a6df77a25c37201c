//! Member service for directory browsing and profile updates.

use mongodb::bson::doc;
use std::sync::Arc;

use log::{debug, info};

use crate::constants::{
    DEFAULT_MAX_AGE, DEFAULT_MIN_AGE, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE,
    ERR_FAILED_FETCH_MEMBER, ERR_INVALID_AGE_RANGE, ERR_INVALID_GENDER, ERR_MEMBER_NOT_FOUND,
    MAX_AGE_FILTER,
};
use crate::errors::ApiError;
use crate::models::{
    Gender, Member, MemberFilter, MemberListQuery, MemberResponse, OrderBy, UpdateMemberRequest,
};
use crate::pagination::{PageRequest, PagedList};
use crate::repositories::MemberRepository;
use crate::utils::mask_username;

pub struct MemberService {
    repository: Arc<MemberRepository>,
}

impl MemberService {
    /// Create a new MemberService with a shared repository.
    pub fn with_repository(repository: Arc<MemberRepository>) -> Self {
        Self { repository }
    }

    /// Browse the member directory: filtered, sorted, paged.
    ///
    /// The age range is validated before any I/O. When no gender filter
    /// is given, it defaults to the opposite of the requesting member's
    /// gender.
    pub async fn get_members(
        &self,
        current_username: &str,
        query: MemberListQuery,
    ) -> Result<PagedList<MemberResponse>, ApiError> {
        let min_age = query.min_age.unwrap_or(DEFAULT_MIN_AGE);
        let max_age = query.max_age.unwrap_or(DEFAULT_MAX_AGE);
        if min_age > max_age || max_age > MAX_AGE_FILTER {
            return Err(ApiError::BadRequest(ERR_INVALID_AGE_RANGE.to_string()));
        }

        let gender = match query.gender.as_deref() {
            Some(value) => Some(
                Gender::from_str(value)
                    .ok_or_else(|| ApiError::BadRequest(ERR_INVALID_GENDER.to_string()))?,
            ),
            None => {
                let current = self
                    .repository
                    .find_by_username(current_username)
                    .await?
                    .ok_or_else(|| ApiError::NotFound(ERR_MEMBER_NOT_FOUND.to_string()))?;
                Some(current.gender.opposite())
            }
        };

        let order_by = query
            .order_by
            .as_deref()
            .map(OrderBy::from_str)
            .unwrap_or_default();

        let filter = MemberFilter {
            current_username: current_username.to_string(),
            gender,
            min_age,
            max_age,
            order_by,
        };
        let request = PageRequest::new(
            query.page.unwrap_or(DEFAULT_PAGE_NUMBER),
            query.per_page.unwrap_or(DEFAULT_PAGE_SIZE),
        );

        debug!(
            "Listing members for {} with ages {}..={}",
            mask_username(current_username),
            min_age,
            max_age
        );

        let members = self.repository.find_paged(&filter, request).await?;
        Ok(members.map(MemberResponse::from))
    }

    /// Find a member by username.
    pub async fn get_member(&self, username: &str) -> Result<Option<Member>, ApiError> {
        self.repository.find_by_username(username).await
    }

    /// Update the profile fields a member may edit.
    ///
    /// Builds an explicit update document from the supplied fields and
    /// returns the re-read record.
    pub async fn update_member(
        &self,
        username: &str,
        req: UpdateMemberRequest,
    ) -> Result<Member, ApiError> {
        let existing = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| ApiError::NotFound(ERR_MEMBER_NOT_FOUND.to_string()))?;

        let mut update_doc = doc! {};

        if let Some(ref introduction) = req.introduction {
            update_doc.insert("introduction", introduction.as_str());
        }
        if let Some(ref looking_for) = req.looking_for {
            update_doc.insert("looking_for", looking_for.as_str());
        }
        if let Some(ref interests) = req.interests {
            update_doc.insert("interests", interests.as_str());
        }
        if let Some(ref city) = req.city {
            update_doc.insert("city", city.as_str());
        }
        if let Some(ref country) = req.country {
            update_doc.insert("country", country.as_str());
        }

        if update_doc.is_empty() {
            debug!("No changes for member {}", mask_username(username));
            return Ok(existing);
        }

        let id = existing
            .id
            .ok_or_else(|| ApiError::InternalServerError(ERR_FAILED_FETCH_MEMBER.to_string()))?;

        let result = self.repository.update(id, update_doc).await?;
        if result.matched_count == 0 {
            return Err(ApiError::NotFound(ERR_MEMBER_NOT_FOUND.to_string()));
        }

        info!("Updated profile for member {}", mask_username(username));

        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| ApiError::InternalServerError(ERR_FAILED_FETCH_MEMBER.to_string()))
    }
}
