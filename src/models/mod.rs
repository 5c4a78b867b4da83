pub mod script_token;
pub mod title_entry;
pub mod text_direction;
pub mod parsed_script;
pub mod conf;

pub use script_token::{ScriptToken, TokenType};
pub use title_entry::TitleEntry;
pub use text_direction::TextDirection;
pub use parsed_script::ParsedScript;
pub use conf::{ParseOptions, Language};
