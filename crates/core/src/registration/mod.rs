mod types;
mod validation;

pub use types::{Distributor, DistributorAnswer, NewDistributor, QUESTION_COUNT};
pub use validation::ValidationError;
