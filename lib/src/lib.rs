mod data;
mod engine;
mod pool;
mod results;
pub mod scorers;

pub use data::WordBank;
pub use engine::*;
pub use pool::CandidatePool;
pub use results::*;
