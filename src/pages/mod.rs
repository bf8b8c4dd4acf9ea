pub mod docs;

pub use docs::DocsPage;
