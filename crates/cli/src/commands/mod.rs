pub mod info;
pub mod kexts;
pub mod scan;
pub mod util;

pub use info::*;
pub use kexts::*;
pub use scan::*;
pub use util::*;
