//! Headless output rendering

mod report;

pub use report::render_report;
