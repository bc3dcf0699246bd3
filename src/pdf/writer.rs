//! File serialization with an exact cross-reference table.

use super::object::ObjectGraph;
use crate::error::Result;
use std::io::Write;

/// File header; the binary comment line that often follows it is omitted
/// because every byte after it is ASCII.
pub const PDF_HEADER: &[u8] = b"%PDF-1.4\n";

/// Free-list head entry of the cross-reference table.
const XREF_FREE_ENTRY: &[u8] = b"0000000000 65535 f \n";

/// Writes bytes while tracking the running offset.
struct CountingWriter<W: Write> {
    inner: W,
    offset: usize,
}

impl<W: Write> CountingWriter<W> {
    fn write_bytes(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        self.inner.write_all(bytes)?;
        self.offset += bytes.len();
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> std::io::Result<()> {
        self.write_bytes(s.as_bytes())
    }
}

/// Serialize an object graph to `writer`. Returns the number of bytes written.
pub fn write_document<W: Write>(graph: &ObjectGraph, writer: W) -> Result<usize> {
    let mut out = CountingWriter {
        inner: writer,
        offset: 0,
    };
    let mut offsets = Vec::with_capacity(graph.len());
    let mut body = Vec::new();

    out.write_bytes(PDF_HEADER)?;

    for (id, object) in graph.iter() {
        offsets.push(out.offset);
        body.clear();
        object.write_body(&mut body);

        out.write_str(&format!("{} 0 obj\n", id.number()))?;
        out.write_bytes(&body)?;
        out.write_bytes(b"\nendobj\n")?;
    }

    let xref_start = out.offset;
    let size = graph.len() + 1;
    out.write_str(&format!("xref\n0 {}\n", size))?;
    out.write_bytes(XREF_FREE_ENTRY)?;
    for offset in &offsets {
        out.write_str(&format!("{:010} 00000 n \n", offset))?;
    }
    out.write_str(&format!(
        "trailer\n<< /Size {} /Root {} >>\nstartxref\n{}\n%%EOF",
        size,
        graph.root(),
        xref_start
    ))?;
    out.inner.flush()?;

    log::debug!(
        "Serialized {} objects into {} bytes (xref at {})",
        graph.len(),
        out.offset,
        xref_start
    );

    Ok(out.offset)
}

/// Serialize an object graph into a byte buffer.
pub fn to_bytes(graph: &ObjectGraph) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    write_document(graph, &mut buffer)?;
    Ok(buffer)
}
