// Presentation layer - chart assembly and export
pub mod chart;
