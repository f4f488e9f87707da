pub mod gauge;

pub use gauge::{Reading, ReadingGauge};
