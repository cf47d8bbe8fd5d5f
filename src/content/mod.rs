//! Content module - posts and their front matter

mod frontmatter;
pub mod loader;
mod post;

pub use frontmatter::{FrontMatter, FrontMatterError};
pub use post::Post;
