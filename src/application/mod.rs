pub mod moderate_content;
pub mod rate_recipe;
pub mod submit_content;
