pub mod backlinks;
pub mod build;
pub mod check;
pub mod links;
pub mod resolver;
pub mod search;
pub mod types;
pub mod writer;

pub use build::build;
pub use links::extract_references;
pub use resolver::TitleResolver;
pub use types::*;
pub use writer::ArtifactWriter;
