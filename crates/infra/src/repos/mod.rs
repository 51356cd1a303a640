pub mod directors;
pub mod movies;

pub use directors::DirectorData;
pub use movies::MovieData;
