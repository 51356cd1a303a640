// Each domain contains: mod.rs, resolvers.rs, types.rs

pub mod directors;
pub mod movies;
