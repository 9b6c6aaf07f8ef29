pub mod error;
pub mod frontmatter;
pub mod generate;
pub mod io;
pub mod paths;
pub mod prompt;
pub mod transform;
pub mod verify;

pub use error::{PromptgenError, Result};
