pub mod categorical;
pub mod features;
pub mod one_hot;

pub use features::{EncodedFeatures, IncomeFeatures};
pub use one_hot::{OneHotRow, Profile};
