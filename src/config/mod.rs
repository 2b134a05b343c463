use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directory holding properties.csv, addons.csv, photos/ and videos/.
    pub data_dir: PathBuf,
    /// Directory holding landingpage.html and sibling static assets.
    pub static_dir: PathBuf,
    pub port: u16,
    /// Upper bound for a whole multipart submission body, in bytes.
    pub max_upload_bytes: usize,
}

impl AppConfig {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv().ok(); // Load .env file if present
        Ok(Self {
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| ".".into()).into(),
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".into())
                .into(),
            port: match env::var("PORT") {
                Ok(value) => value.parse()?,
                Err(_) => 5000,
            },
            max_upload_bytes: match env::var("MAX_UPLOAD_BYTES") {
                Ok(value) => value.parse()?,
                Err(_) => 50 * 1024 * 1024,
            },
        })
    }
}
