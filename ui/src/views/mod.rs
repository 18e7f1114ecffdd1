mod explorer;
pub use explorer::Explorer;

mod metadata;
pub use metadata::MetadataPage;

mod config_notice;
use config_notice::ConfigNotice;
