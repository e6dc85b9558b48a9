pub mod comment;
pub mod moderation;
pub mod rating;
pub mod recipe;
pub mod shared;
