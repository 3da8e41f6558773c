//! # Introduction
//!
//! Docweave is a small WordprocessingML (.docx) composer. It accepts a linear
//! script of content sections — headings, paragraphs, bullets, tables, dividers,
//! page breaks — and assembles them into a styled OPC package written to disk.
//! It was built to render one fixed project report and supports exactly the
//! formatting that report needs. It is not a general Word library: nothing is
//! ever read back, queried, or edited after it has been appended.
//!
//! Feature Road Map:
//! - [X] Heading levels 1-3 with accent color and display font
//! - [X] Styled runs (font family, size, color, bold, italic)
//! - [X] Paragraph alignment (left, right, center, justify)
//! - [X] Bulleted lists
//! - [X] Zebra-striped tables with accent borders
//! - [X] Section dividers and hard page breaks
//! - [X] Page background color and page margins
//! - [X] JSON section scripts
//! - [ ] Images
//! - [ ] Hyperlinks
//! - [ ] Headers and footers
//!
//! ## Who should use this crate?
//!
//! **Use cases**
//! - One-shot batch report generation
//! - Fixed content scripts, in code or JSON
//! - Simple styled text and tables
//!
//! **Skip cases**
//! - Reading or round-trip editing of existing documents
//! - Arbitrary templates
//! - Full WordprocessingML feature set (fields, comments, revisions, ...)
//!
//! # Basic Usage
//! The main entry point is the `Composer` struct. Append content with the
//! `add_*` methods (or feed it a `Section` script with `.compose()`), then call
//! `.save()` to write the package.
//!
//! ```no_run
//! use docweave::types::{Color, Composer, TextOptions};
//!
//! fn main() -> docweave::types::Result<()> {
//!     let mut composer = Composer::new();
//!
//!     composer.add_heading("Rapport de projet", 1)?;
//!     composer.add_section_divider();
//!     composer.add_paragraph("Une webapp interactive moderne.", TextOptions::new());
//!     composer.add_table(
//!         &["Technologie".to_string(), "Usage".to_string()],
//!         &[vec!["React 19".to_string(), "Framework UI".to_string()]],
//!         Color::new(0xD4, 0xAF, 0x37),
//!     )?;
//!
//!     composer.save("rapport.docx")
//! }
//! ```
pub mod traits;
pub mod types;
