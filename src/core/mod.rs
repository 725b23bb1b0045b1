pub mod approval;
pub mod capacity;
pub mod del;
pub mod export;
pub mod log;
pub mod seed;
