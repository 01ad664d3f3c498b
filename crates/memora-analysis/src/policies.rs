pub mod simple;
pub mod weighted;
