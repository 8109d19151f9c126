pub mod browser;
pub mod download;
pub mod geo;
pub mod geolocation;
pub mod time;

pub use download::trigger_csv_download;
