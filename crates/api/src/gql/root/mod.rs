//! Query and Mutation roots. Every root field is nullable so a failing field
//! nulls only itself and leaves its siblings in the response.

pub mod mutation_root;
pub mod query_root;

pub use mutation_root::MutationRoot;
pub use query_root::QueryRoot;
