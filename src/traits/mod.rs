mod xml_emit;

pub use xml_emit::{escape_into, XmlEmit};
