pub mod calc;
pub mod cameras;
pub mod coc;
pub mod types;
pub mod units;
