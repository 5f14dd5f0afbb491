pub mod dates;
pub mod export;
pub mod rollup;
pub mod seed;
