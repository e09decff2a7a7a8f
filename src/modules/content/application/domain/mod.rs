mod content;

pub use content::{Content, ContentCard, ContentKind};
