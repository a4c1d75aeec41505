pub mod polygon;
pub mod traits;
