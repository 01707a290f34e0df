pub mod cipher;
pub mod compress;
pub mod encode;

pub use cipher::*;
pub use compress::*;
pub use encode::*;
