pub mod formatter;

pub use formatter::ReportFormatter;
