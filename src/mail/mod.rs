pub mod decoders;
pub mod eml;
pub mod search;
