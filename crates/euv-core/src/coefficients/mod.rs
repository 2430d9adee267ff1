mod matrix;
mod store;
mod table;

pub use matrix::CoefficientMatrices;
pub use store::{CoefficientStore, CoefficientTableProvider};
pub use table::{CoefficientColumns, CoefficientTable, TableError};
