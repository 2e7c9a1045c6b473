use serde::{Deserialize, Serialize};
use chrono::Utc;
use uuid::Uuid;

use crate::models::ServiceError;
use crate::utils::attachments;
use crate::utils::catalog::CatalogEntry;

// The two kinds of documents the club shares
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    #[serde(rename = "Epreuve")]
    Epreuve,
    #[serde(rename = "Corrigé")]
    Corrige,
}

impl Default for ResourceKind {
    fn default() -> Self {
        ResourceKind::Epreuve
    }
}

// Academic resource model (past exam papers and corrections)
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub year: String,
    pub semester: String,
    pub subject: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub date_added: String,
    pub download_url: String,
}

// Payload for adding a resource; the file field is simulated so only a
// reference is accepted, never content
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub semester: String,
    #[serde(rename = "type", default)]
    pub kind: ResourceKind,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl NewResource {
    // All four text fields are required and must be non-empty
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.title.trim().is_empty() {
            return Err(ServiceError::ValidationError("title".to_string()));
        }
        if self.subject.trim().is_empty() {
            return Err(ServiceError::ValidationError("subject".to_string()));
        }
        if self.year.trim().is_empty() {
            return Err(ServiceError::ValidationError("year".to_string()));
        }
        if self.semester.trim().is_empty() {
            return Err(ServiceError::ValidationError("semester".to_string()));
        }
        Ok(())
    }
}

impl Resource {
    // Build a full record from a validated draft with a fresh id
    pub fn new(draft: NewResource) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            year: draft.year,
            semester: draft.semester,
            subject: draft.subject,
            kind: draft.kind,
            date_added: Utc::now().format("%Y-%m-%d").to_string(),
            download_url: attachments::resolve(draft.download_url, attachments::RESOURCE_PLACEHOLDER),
        }
    }
}

impl CatalogEntry for Resource {
    type Draft = NewResource;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(draft: NewResource) -> Result<Resource, ServiceError> {
        draft.validate()?;
        Ok(Resource::new(draft))
    }
}

// Filter criteria for the resource listing; empty values match everything
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ResourceFilter {
    pub search: Option<String>,
    pub year: Option<String>,
    pub semester: Option<String>,
}

impl ResourceFilter {
    // Case-insensitive search against title or subject, exact match on the
    // year and semester selects; all active criteria must hold
    pub fn matches(&self, resource: &Resource) -> bool {
        let matches_search = match self.search.as_deref() {
            Some(term) if !term.is_empty() => {
                let term = term.to_lowercase();
                resource.subject.to_lowercase().contains(&term)
                    || resource.title.to_lowercase().contains(&term)
            }
            _ => true,
        };

        let matches_year = match self.year.as_deref() {
            Some(year) if !year.is_empty() => resource.year == year,
            _ => true,
        };

        let matches_semester = match self.semester.as_deref() {
            Some(semester) if !semester.is_empty() => resource.semester == semester,
            _ => true,
        };

        matches_search && matches_year && matches_semester
    }
}
