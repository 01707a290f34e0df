pub mod pack;
pub mod unpack;

pub use pack::*;
pub use unpack::*;
