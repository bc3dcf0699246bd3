//! PDF object graph and file serialization.
//!
//! The graph is an arena of tagged objects addressed by [`ObjectId`]
//! handles. Handles can be reserved before their bodies exist, so the page
//! tree and catalog are filled in after every page is known.

mod assemble;
mod object;
mod writer;

pub use assemble::assemble;
pub use object::{
    Compression, ContentStream, FontResources, ObjectGraph, ObjectGraphBuilder, ObjectId,
    PageObject, PdfObject,
};
pub use writer::{to_bytes, write_document, PDF_HEADER};
