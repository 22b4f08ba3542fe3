pub mod fs;
pub mod logger;
pub mod spinner;
