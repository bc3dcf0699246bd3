//! Indirect objects stored in an arena and addressed by handle.

use crate::compose::{FontFace, Num};
use crate::error::{Error, Result};
use std::fmt;

/// A 1-based indirect object number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(u32);

impl ObjectId {
    /// Object number as written in the file.
    pub fn number(self) -> u32 {
        self.0
    }

    fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl fmt::Display for ObjectId {
    /// Formats as an indirect reference, e.g. `3 0 R`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} 0 R", self.0)
    }
}

/// Stream filter applied to content stream data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Raw content stream bytes
    #[default]
    None,
    /// zlib/deflate (`/FlateDecode`)
    Flate,
}

/// Font resources shared by every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontResources {
    pub regular: ObjectId,
    pub bold: ObjectId,
}

/// A page object.
#[derive(Debug, Clone, PartialEq)]
pub struct PageObject {
    pub parent: ObjectId,
    pub media_box: [f32; 4],
    pub fonts: FontResources,
    pub contents: ObjectId,
}

/// A content stream with its (possibly encoded) data.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStream {
    pub data: Vec<u8>,
    pub filter: Compression,
}

/// Tagged indirect object variants.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfObject {
    Catalog { pages: ObjectId },
    PageTree { kids: Vec<ObjectId> },
    Page(PageObject),
    ContentStream(ContentStream),
    Font(FontFace),
}

impl PdfObject {
    /// Object references held by this object.
    pub fn references(&self) -> Vec<ObjectId> {
        match self {
            PdfObject::Catalog { pages } => vec![*pages],
            PdfObject::PageTree { kids } => kids.clone(),
            PdfObject::Page(page) => vec![
                page.parent,
                page.fonts.regular,
                page.fonts.bold,
                page.contents,
            ],
            PdfObject::ContentStream(_) | PdfObject::Font(_) => Vec::new(),
        }
    }

    /// Write the object body (everything between `obj` and `endobj`).
    pub fn write_body(&self, out: &mut Vec<u8>) {
        match self {
            PdfObject::Catalog { pages } => {
                out.extend_from_slice(format!("<< /Type /Catalog /Pages {} >>", pages).as_bytes());
            }
            PdfObject::PageTree { kids } => {
                let kids_list = kids
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                out.extend_from_slice(
                    format!(
                        "<< /Type /Pages /Kids [{}] /Count {} >>",
                        kids_list,
                        kids.len()
                    )
                    .as_bytes(),
                );
            }
            PdfObject::Page(page) => {
                let [x0, y0, x1, y1] = page.media_box;
                out.extend_from_slice(
                    format!(
                        "<< /Type /Page /Parent {} /MediaBox [{} {} {} {}] /Resources << /Font << /{} {} /{} {} >> >> /Contents {} >>",
                        page.parent,
                        Num(x0),
                        Num(y0),
                        Num(x1),
                        Num(y1),
                        FontFace::Regular.resource_name(),
                        page.fonts.regular,
                        FontFace::Bold.resource_name(),
                        page.fonts.bold,
                        page.contents
                    )
                    .as_bytes(),
                );
            }
            PdfObject::ContentStream(stream) => match stream.filter {
                Compression::None => {
                    out.extend_from_slice(
                        format!("<< /Length {} >>\nstream\n", stream.data.len()).as_bytes(),
                    );
                    out.extend_from_slice(&stream.data);
                    out.extend_from_slice(b"endstream");
                }
                Compression::Flate => {
                    out.extend_from_slice(
                        format!(
                            "<< /Length {} /Filter /FlateDecode >>\nstream\n",
                            stream.data.len()
                        )
                        .as_bytes(),
                    );
                    out.extend_from_slice(&stream.data);
                    out.extend_from_slice(b"\nendstream");
                }
            },
            PdfObject::Font(face) => {
                out.extend_from_slice(
                    format!(
                        "<< /Type /Font /Subtype /Type1 /BaseFont /{} >>",
                        face.base_font()
                    )
                    .as_bytes(),
                );
            }
        }
    }
}

/// Assigns sequential handles; references are checked once all objects exist.
#[derive(Debug, Default)]
pub struct ObjectGraphBuilder {
    slots: Vec<Option<PdfObject>>,
}

impl ObjectGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the next object number without a body.
    pub fn reserve(&mut self) -> ObjectId {
        self.slots.push(None);
        ObjectId(self.slots.len() as u32)
    }

    /// Append an object and return its handle.
    pub fn add(&mut self, object: PdfObject) -> ObjectId {
        self.slots.push(Some(object));
        ObjectId(self.slots.len() as u32)
    }

    /// Fill a previously reserved slot.
    pub fn set(&mut self, id: ObjectId, object: PdfObject) -> Result<()> {
        let slot = self
            .slots
            .get_mut(id.index())
            .ok_or_else(|| Error::Invariant(format!("object {} was never allocated", id.0)))?;
        if slot.is_some() {
            return Err(Error::Invariant(format!("object {} is already filled", id.0)));
        }
        *slot = Some(object);
        Ok(())
    }

    /// Finish the graph with `root` as the document catalog.
    pub fn build(self, root: ObjectId) -> Result<ObjectGraph> {
        let objects = self
            .slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| {
                    Error::Invariant(format!("object {} was reserved but never filled", index + 1))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let graph = ObjectGraph { objects, root };
        graph.validate()?;
        Ok(graph)
    }
}

/// A complete, validated set of indirect objects.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectGraph {
    objects: Vec<PdfObject>,
    root: ObjectId,
}

impl ObjectGraph {
    /// The document catalog.
    pub fn root(&self) -> ObjectId {
        self.root
    }

    /// Number of indirect objects (excluding the free-list entry).
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, id: ObjectId) -> Option<&PdfObject> {
        self.objects.get(id.index())
    }

    /// Objects in ascending number order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &PdfObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(index, object)| (ObjectId(index as u32 + 1), object))
    }

    /// Number of page objects.
    pub fn page_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|object| matches!(object, PdfObject::Page(_)))
            .count()
    }

    fn validate(&self) -> Result<()> {
        match self.get(self.root) {
            Some(PdfObject::Catalog { .. }) => {}
            _ => {
                return Err(Error::Invariant(format!(
                    "root object {} is not a catalog",
                    self.root.0
                )))
            }
        }

        for (id, object) in self.iter() {
            for target in object.references() {
                if self.get(target).is_none() {
                    return Err(Error::Invariant(format!(
                        "object {} references missing object {}",
                        id.0, target.0
                    )));
                }
            }
            if let PdfObject::PageTree { kids } = object {
                if kids.is_empty() {
                    return Err(Error::Invariant(format!("page tree {} has no pages", id.0)));
                }
            }
        }

        Ok(())
    }
}
