mod level_iter;
mod owned_iter;
mod ref_iter;

pub(crate) use level_iter::*;
pub use owned_iter::*;
pub(crate) use ref_iter::*;
