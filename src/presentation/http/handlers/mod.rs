pub mod comments;
pub mod health;
pub mod moderation;
pub mod ratings;
pub mod recipes;
