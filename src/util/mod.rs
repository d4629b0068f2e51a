pub mod encode;
pub mod parse;
