//! Append-only properties.csv store.
//!
//! Rows are only ever appended; nothing reads, updates, or deletes them.
//! The header row is written lazily, the first time a row lands in a new or
//! empty file. A mutex serializes the header-check-and-append sequence so
//! concurrent submissions cannot interleave rows or duplicate the header.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::AppError;
use crate::models::PropertyListing;

/// Separator for multi-valued fields (photos, videos, amenities, documents).
/// Values are joined verbatim; the format carries no escaping.
pub const VALUE_SEPARATOR: char = '|';

pub const COLUMNS: [&str; 20] = [
    "id",
    "title",
    "property_type",
    "category",
    "full_address",
    "city",
    "bedrooms",
    "bathrooms",
    "area_sqft",
    "sale_price",
    "per_sqft_price",
    "monthly_rent",
    "seller_name",
    "seller_phone",
    "description",
    "listed_date",
    "photos",
    "videos",
    "amenities",
    "documents",
];

pub fn join_values(values: &[String]) -> String {
    values.join(&VALUE_SEPARATOR.to_string())
}

pub fn split_values(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field.split(VALUE_SEPARATOR).map(str::to_string).collect()
}

pub struct PropertyStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl PropertyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one listing as one row, writing the header first when the file
    /// is newly created or empty.
    pub fn append(&self, listing: &PropertyListing) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let is_empty = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if is_empty {
            writer.write_record(COLUMNS)?;
        }
        writer.write_record(Self::record(listing))?;
        writer.flush()?;
        Ok(())
    }

    fn record(listing: &PropertyListing) -> [String; 20] {
        let form = &listing.form;
        [
            listing.id.clone(),
            form.title.clone(),
            form.property_type.clone(),
            form.category.clone(),
            form.full_address.clone(),
            form.city.clone(),
            form.bedrooms.clone(),
            form.bathrooms.clone(),
            form.area_sqft.clone(),
            form.sale_price.clone(),
            form.per_sqft_price.clone(),
            form.monthly_rent.clone(),
            form.seller_name.clone(),
            form.seller_phone.clone(),
            form.description.clone(),
            listing.listed_date.clone(),
            join_values(&listing.photos),
            join_values(&listing.videos),
            join_values(&form.amenities),
            join_values(&form.documents),
        ]
    }
}
