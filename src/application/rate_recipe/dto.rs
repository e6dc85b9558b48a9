use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct RateRecipeRequest {
    pub value: i16,
}

#[derive(Debug, Serialize)]
pub struct RateRecipeResponse {
    pub average: f64,
    pub count: i32,
}
