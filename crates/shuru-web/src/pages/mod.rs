mod docs;
mod home;

pub use docs::DocsPage;
pub use home::HomePage;
