use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ServiceError;
use crate::utils::attachments;
use crate::utils::catalog::CatalogEntry;

// Club bureau member; the year field is the mandate period used as the
// directory grouping key, e.g. "2023-2024"
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub role: String,
    pub year: String,
    pub photo_url: String,
}

// Payload for adding a member
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl NewMember {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.name.trim().is_empty() {
            return Err(ServiceError::ValidationError("name".to_string()));
        }
        if self.role.trim().is_empty() {
            return Err(ServiceError::ValidationError("role".to_string()));
        }
        if self.year.trim().is_empty() {
            return Err(ServiceError::ValidationError("year".to_string()));
        }
        Ok(())
    }
}

impl Member {
    pub fn new(draft: NewMember) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            role: draft.role,
            year: draft.year,
            photo_url: attachments::resolve(draft.photo_url, attachments::MEMBER_PHOTO_PLACEHOLDER),
        }
    }
}

impl CatalogEntry for Member {
    type Draft = NewMember;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(draft: NewMember) -> Result<Member, ServiceError> {
        draft.validate()?;
        Ok(Member::new(draft))
    }
}

// One mandate-year section of the member directory
#[derive(Serialize, Deserialize, Debug)]
pub struct MemberGroup {
    pub year: String,
    pub members: Vec<Member>,
}
