use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ServiceError;
use crate::utils::attachments;
use crate::utils::catalog::CatalogEntry;

// Categories for the news gallery
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    #[serde(rename = "Événement")]
    Evenement,
    #[serde(rename = "Innovation")]
    Innovation,
    #[serde(rename = "Formation")]
    Formation,
}

impl Default for EventCategory {
    fn default() -> Self {
        EventCategory::Evenement
    }
}

// Event/news model; the date is a display string, not a parsed date
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub description: String,
    pub image_url: String,
    pub category: EventCategory,
}

// Payload for adding an event
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: EventCategory,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl NewEvent {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.title.trim().is_empty() {
            return Err(ServiceError::ValidationError("title".to_string()));
        }
        if self.date.trim().is_empty() {
            return Err(ServiceError::ValidationError("date".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(ServiceError::ValidationError("description".to_string()));
        }
        Ok(())
    }
}

impl Event {
    pub fn new(draft: NewEvent) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            date: draft.date,
            description: draft.description,
            image_url: attachments::resolve(draft.image_url, attachments::EVENT_IMAGE_PLACEHOLDER),
            category: draft.category,
        }
    }
}

impl CatalogEntry for Event {
    type Draft = NewEvent;

    fn id(&self) -> &str {
        &self.id
    }

    fn build(draft: NewEvent) -> Result<Event, ServiceError> {
        draft.validate()?;
        Ok(Event::new(draft))
    }
}
