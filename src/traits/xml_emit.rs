/// Every node of the document model knows how to emit itself as a
/// WordprocessingML fragment. The `PackageWriter` walks the block list and calls
/// `emit_xml` on each node, appending into one shared buffer so no intermediate
/// strings are allocated per node.
pub trait XmlEmit {
    fn emit_xml(&self, xml: &mut String);

    /// convenience wrapper returning the fragment as an owned string
    fn to_xml(&self) -> String {
        let mut xml = String::new();
        self.emit_xml(&mut xml);
        xml
    }
}

/// escapes text for use inside XML element or attribute content
pub fn escape_into(xml: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => xml.push_str("&amp;"),
            '<' => xml.push_str("&lt;"),
            '>' => xml.push_str("&gt;"),
            '"' => xml.push_str("&quot;"),
            '\'' => xml.push_str("&apos;"),
            _ => xml.push(ch),
        }
    }
}
