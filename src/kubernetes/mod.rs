pub use self::namespace::*;

pub mod client;
pub mod resources;
pub mod utils;

mod namespace;
