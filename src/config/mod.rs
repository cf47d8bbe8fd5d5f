//! Configuration module

mod site;

pub use site::ExtraConfig;
pub use site::GeneratorConfig;
pub use site::SiteConfig;
pub use site::TaxonomyConfig;
pub use site::WritingConfig;
