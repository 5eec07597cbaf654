pub mod pixelate_job;

pub use pixelate_job::{JobReport, JobSettings, PixelateJob};
