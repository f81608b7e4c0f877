pub mod error;
pub mod export;
pub mod logger;
pub mod normalize;
pub mod validation;
