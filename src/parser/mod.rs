pub mod hekaya_parser;
pub mod character_registry;
pub mod rules;
pub mod title_page;
pub mod text_processor;

pub use hekaya_parser::HekayaParser;
pub use character_registry::{CharacterRegistry, normalize_name};
pub use rules::{LineContext, Rule, RULES, classify_line, parse_character_line};
pub use title_page::{TitlePage, parse_title_page};
pub use text_processor::{render_emphasis, strip_emphasis};
