mod anchor_link;
mod code_block;
mod copy_button;
mod menu;
mod navbar;
mod section;
mod sidebar;

pub use anchor_link::AnchorLink;
pub use code_block::CodeBlock;
pub use copy_button::{CodeSnippet, CopyButton};
pub use navbar::Navbar;
pub use section::Section;
pub use sidebar::Sidebar;
