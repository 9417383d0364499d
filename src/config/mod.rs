//! Configuration module

mod site;

pub use site::MissingCategory;
pub use site::SiteConfig;
