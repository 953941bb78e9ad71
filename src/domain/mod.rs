// Domain layer - band palette, frames, samples, schedule, classification
pub mod band;
pub mod classification;
pub mod frame;
pub mod sample;
pub mod schedule;
pub mod series;
