pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod gallery;
pub mod icon;
pub mod observability;
pub mod site;
pub mod template;

pub use error::SiteError;
