mod alignment;
mod block;
mod color;
mod composer;
mod error;
mod section;
pub mod table;
mod writer;

pub use alignment::Alignment;
pub use block::{Block, Paragraph, ParagraphStyle, Run, RunProps};
pub use color::Color;
pub use composer::{Composer, PageMargins, TextOptions, Theme};
pub use error::{Error, Result};
pub use section::{script_from_json, Section, Span};
pub use table::{Table, TableCell, TableRow};
pub use writer::PackageWriter;
