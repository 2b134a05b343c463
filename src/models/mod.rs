use serde::Serialize;
use std::collections::HashMap;

use crate::error::AppError;

/// Text fields collected from a multipart submission, keyed by part name.
/// Repeated parts (`amenities[]`, `documents[]`) accumulate in order.
#[derive(Debug, Default)]
pub struct SubmissionText {
    values: HashMap<String, Vec<String>>,
}

impl SubmissionText {
    pub fn push(&mut self, name: &str, value: String) {
        self.values.entry(name.to_string()).or_default().push(value);
    }

    fn required(&self, key: &'static str) -> Result<String, AppError> {
        self.values
            .get(key)
            .and_then(|v| v.first())
            .cloned()
            .ok_or(AppError::MissingField(key))
    }

    fn optional(&self, key: &str) -> String {
        self.values
            .get(key)
            .and_then(|v| v.first())
            .cloned()
            .unwrap_or_default()
    }

    /// All values for a repeated key, blank entries dropped.
    fn list(&self, key: &str) -> Vec<String> {
        self.values
            .get(key)
            .map(|values| {
                values
                    .iter()
                    .map(|v| v.trim().to_string())
                    .filter(|v| !v.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Typed view of one submission's text fields. Required fields are checked
/// here, at assembly time, so a missing key never gets as far as a write.
#[derive(Debug)]
pub struct ListingForm {
    pub title: String,
    pub property_type: String,
    pub category: String,
    pub full_address: String,
    pub city: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub area_sqft: String,
    pub sale_price: String,
    pub per_sqft_price: String,
    pub monthly_rent: String,
    pub seller_name: String,
    pub seller_phone: String,
    pub description: String,
    pub amenities: Vec<String>,
    pub documents: Vec<String>,
}

impl ListingForm {
    pub fn from_text(text: &SubmissionText) -> Result<Self, AppError> {
        Ok(Self {
            title: text.required("title")?,
            property_type: text.required("property_type")?,
            category: text.required("category")?,
            full_address: text.required("full_address")?,
            city: text.required("city")?,
            bedrooms: text.optional("bedrooms"),
            bathrooms: text.optional("bathrooms"),
            area_sqft: text.optional("area_sqft"),
            sale_price: text.optional("sale_price"),
            per_sqft_price: text.optional("per_sqft_price"),
            monthly_rent: text.optional("monthly_rent"),
            seller_name: text.optional("seller_name"),
            seller_phone: text.optional("seller_phone"),
            description: text.optional("description"),
            amenities: text.list("amenities[]"),
            documents: text.list("documents[]"),
        })
    }
}

/// One persisted listing, field-for-field the properties.csv row.
#[derive(Debug)]
pub struct PropertyListing {
    pub id: String,
    pub form: ListingForm,
    pub listed_date: String,
    /// Generated media filenames, in submission order.
    pub photos: Vec<String>,
    pub videos: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AddonsResponse {
    pub property_types: Vec<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
}
