mod movie;
mod rating;

pub use movie::Movie;
pub use rating::Rating;
