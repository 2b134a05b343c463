//! Fixed catalogs of allowed property types and categories.
//!
//! Persisted in addons.csv with a fixed two-line format:
//!
//! ```text
//! property_type,Apartment,Villa,...
//! category,Sale,Rent
//! ```
//!
//! A missing file is seeded with the defaults at load time so operators can
//! edit the catalog without touching code.

use std::fs;
use std::path::Path;

use crate::error::AppError;

const DEFAULT_PROPERTY_TYPES: [&str; 7] = [
    "Apartment",
    "Villa",
    "Townhouse",
    "Penthouse",
    "Office",
    "Shop",
    "Warehouse",
];
const DEFAULT_CATEGORIES: [&str; 2] = ["Sale", "Rent"];

#[derive(Clone, Debug)]
pub struct Catalog {
    pub property_types: Vec<String>,
    pub categories: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            property_types: DEFAULT_PROPERTY_TYPES.map(String::from).to_vec(),
            categories: DEFAULT_CATEGORIES.map(String::from).to_vec(),
        }
    }
}

impl Catalog {
    /// Loads the catalog from `path`, seeding the file with the defaults
    /// when it does not exist yet.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            let defaults = Self::default();
            fs::write(path, defaults.to_file_contents())?;
            return Ok(defaults);
        }
        let contents = fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    fn parse(contents: &str) -> Self {
        let mut catalog = Self {
            property_types: Vec::new(),
            categories: Vec::new(),
        };
        for line in contents.lines() {
            let mut fields = line.trim().split(',');
            let key = fields.next().unwrap_or_default();
            let values: Vec<String> = fields.map(str::to_string).collect();
            match key {
                "property_type" => catalog.property_types = values,
                "category" => catalog.categories = values,
                _ => {}
            }
        }
        catalog
    }

    fn to_file_contents(&self) -> String {
        format!(
            "property_type,{}\ncategory,{}\n",
            self.property_types.join(","),
            self.categories.join(",")
        )
    }
}
