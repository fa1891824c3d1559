mod field;
mod model;

pub use self::field::*;
pub use self::model::*;
