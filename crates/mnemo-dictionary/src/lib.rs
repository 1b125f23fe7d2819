mod cambridge;
mod parse;
mod types;

pub use cambridge::CambridgeDictionary;
pub use parse::parse_entry;
pub use types::{Dictionary, LookupError};
