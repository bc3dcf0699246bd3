//! Builds the document object graph from encoded page streams.

use super::object::{
    Compression, ContentStream, FontResources, ObjectGraph, ObjectGraphBuilder, PageObject,
    PdfObject,
};
use crate::compose::FontFace;
use crate::error::{Error, Result};
use crate::layout::Geometry;
use flate2::write::ZlibEncoder;
use flate2::Compression as FlateLevel;
use std::io::Write;

/// Assemble the object graph for a set of page streams.
///
/// Object numbers are allocated as: catalog, page tree, one content stream
/// per page, regular font, bold font, then one page object per stream.
pub fn assemble(
    page_streams: &[Vec<u8>],
    geometry: &Geometry,
    compression: Compression,
) -> Result<ObjectGraph> {
    if page_streams.is_empty() {
        return Err(Error::Invariant("a document needs at least one page".into()));
    }

    let mut builder = ObjectGraphBuilder::new();
    let catalog = builder.reserve();
    let page_tree = builder.reserve();

    let contents = page_streams
        .iter()
        .map(|data| {
            let stream = encode_stream(data, compression)?;
            Ok(builder.add(PdfObject::ContentStream(stream)))
        })
        .collect::<Result<Vec<_>>>()?;

    let fonts = FontResources {
        regular: builder.add(PdfObject::Font(FontFace::Regular)),
        bold: builder.add(PdfObject::Font(FontFace::Bold)),
    };

    let media_box = geometry.media_box();
    let kids = contents
        .iter()
        .map(|&contents| {
            builder.add(PdfObject::Page(PageObject {
                parent: page_tree,
                media_box,
                fonts,
                contents,
            }))
        })
        .collect::<Vec<_>>();

    builder.set(page_tree, PdfObject::PageTree { kids })?;
    builder.set(catalog, PdfObject::Catalog { pages: page_tree })?;

    let graph = builder.build(catalog)?;
    log::debug!(
        "Assembled {} objects for {} pages",
        graph.len(),
        graph.page_count()
    );
    Ok(graph)
}

fn encode_stream(data: &[u8], compression: Compression) -> Result<ContentStream> {
    let data = match compression {
        Compression::None => data.to_vec(),
        Compression::Flate => {
            let mut encoder = ZlibEncoder::new(Vec::new(), FlateLevel::default());
            encoder.write_all(data)?;
            encoder.finish()?
        }
    };

    Ok(ContentStream {
        data,
        filter: compression,
    })
}
