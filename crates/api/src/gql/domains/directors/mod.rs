pub mod resolvers;
pub mod types;

pub use resolvers::{DirectorMutation, DirectorQuery};
pub use types::Director;
