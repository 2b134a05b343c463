use axum::extract::{Multipart, State};
use axum::Json;
use chrono::Local;

use crate::error::AppError;
use crate::models::{
    AddonsResponse, ListingForm, PropertyListing, SubmissionText, SubmitResponse,
};
use crate::storage::{self, MediaKind};
use crate::AppState;

/// Stamp format for `listed_date`. Day-first local time; existing rows use
/// this shape, so it stays a single constant here.
pub const LISTED_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

pub async fn get_addons(State(state): State<AppState>) -> Json<AddonsResponse> {
    Json(AddonsResponse {
        property_types: state.catalog.property_types.clone(),
        categories: state.catalog.categories.clone(),
    })
}

struct MediaPart {
    kind: MediaKind,
    filename: String,
    bytes: Vec<u8>,
}

pub async fn submit_property(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SubmitResponse>, AppError> {
    let mut text = SubmissionText::default();
    let mut media_parts: Vec<MediaPart> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let kind = match name.as_str() {
            "photos" => Some(MediaKind::Photo),
            "videos" => Some(MediaKind::Video),
            _ => None,
        };
        match kind {
            Some(kind) => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                media_parts.push(MediaPart {
                    kind,
                    filename,
                    bytes: bytes.to_vec(),
                });
            }
            None => text.push(&name, field.text().await?),
        }
    }

    // Required fields are checked before any filesystem write happens.
    let form = ListingForm::from_text(&text)?;
    let listing_id = storage::new_listing_id();

    let mut photos = Vec::new();
    let mut videos = Vec::new();
    for part in &media_parts {
        let saved = state
            .media
            .save(part.kind, &listing_id, &part.filename, &part.bytes)?;
        if let Some(filename) = saved {
            match part.kind {
                MediaKind::Photo => photos.push(filename),
                MediaKind::Video => videos.push(filename),
            }
        }
    }

    let listing = PropertyListing {
        id: listing_id,
        form,
        listed_date: Local::now().format(LISTED_DATE_FORMAT).to_string(),
        photos,
        videos,
    };
    state.store.append(&listing)?;
    log::info!(
        "Listed property {} ({} photos, {} videos)",
        listing.id,
        listing.photos.len(),
        listing.videos.len()
    );

    Ok(Json(SubmitResponse { success: true }))
}
