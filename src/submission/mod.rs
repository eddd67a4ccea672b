pub mod identity;
pub mod parser;
pub mod pipeline;
