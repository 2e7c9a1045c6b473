// Simulated upload boundary. No file bytes are ever read or transferred;
// a missing or blank reference resolves to the collection's placeholder.

pub const RESOURCE_PLACEHOLDER: &str = "#";
pub const EVENT_IMAGE_PLACEHOLDER: &str = "https://picsum.photos/800/600";
pub const MEMBER_PHOTO_PLACEHOLDER: &str = "https://picsum.photos/200/200";

pub fn resolve(reference: Option<String>, placeholder: &str) -> String {
    match reference {
        Some(reference) if !reference.trim().is_empty() => reference,
        _ => placeholder.to_string(),
    }
}
