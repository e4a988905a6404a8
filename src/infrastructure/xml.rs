//! quick-xml implementation of the DocumentQuery port
//!
//! Streams the document once. The whole document is read even after the
//! container closes, so a truncated or unbalanced file is reported as an
//! error instead of yielding a partial key list.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::domain::ports::{Declaration, DeclarationQuery, DocumentQuery, QueryError};

/// Streaming XML backend
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickXmlQuery;

impl QuickXmlQuery {
    pub fn new() -> Self {
        Self
    }
}

/// Where the reader is relative to the first container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    /// Container not seen yet
    Searching,
    /// Inside the container; its children sit at this depth
    Inside { child_depth: usize },
    /// First container already closed
    Done,
}

impl DocumentQuery for QuickXmlQuery {
    fn declarations(
        &self,
        document: &str,
        query: &DeclarationQuery,
    ) -> Result<Vec<Declaration>, QueryError> {
        let mut reader = Reader::from_str(document);
        let container = query.container.as_bytes();
        let element = query.element.as_bytes();

        let mut found = Vec::new();
        let mut scan = Scan::Searching;
        let mut depth = 0usize;
        let mut saw_root = false;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| QueryError::at(e.to_string(), reader.error_position()))?;

            match event {
                Event::Start(ref e) => {
                    saw_root = true;
                    match scan {
                        Scan::Searching if e.name().as_ref() == container => {
                            scan = Scan::Inside {
                                child_depth: depth + 1,
                            };
                        }
                        Scan::Inside { child_depth }
                            if depth == child_depth && e.name().as_ref() == element =>
                        {
                            found.push(read_declaration(&reader, e, query)?);
                        }
                        _ => {}
                    }
                    depth += 1;
                }
                Event::Empty(ref e) => {
                    saw_root = true;
                    match scan {
                        Scan::Searching if e.name().as_ref() == container => {
                            scan = Scan::Done;
                        }
                        Scan::Inside { child_depth }
                            if depth == child_depth && e.name().as_ref() == element =>
                        {
                            found.push(read_declaration(&reader, e, query)?);
                        }
                        _ => {}
                    }
                }
                Event::End(_) => {
                    depth = depth.checked_sub(1).ok_or_else(|| {
                        QueryError::at("unexpected closing tag", reader.buffer_position())
                    })?;
                    if let Scan::Inside { child_depth } = scan {
                        if depth + 1 == child_depth {
                            scan = Scan::Done;
                        }
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if depth > 0 {
            return Err(QueryError::at(
                format!("document ends with {} unclosed element(s)", depth),
                reader.buffer_position(),
            ));
        }
        if !saw_root {
            return Err(QueryError::new("document has no root element"));
        }

        Ok(found)
    }
}

fn read_declaration(
    reader: &Reader<&[u8]>,
    start: &BytesStart<'_>,
    query: &DeclarationQuery,
) -> Result<Declaration, QueryError> {
    let mut decl = Declaration::default();
    let key_attr = query.key_attribute.as_bytes();
    let value_attr = query.value_attribute.as_bytes();

    for attr in start.attributes() {
        let attr = attr.map_err(|e| QueryError::at(e.to_string(), reader.buffer_position()))?;
        let name = attr.key.as_ref();
        if name != key_attr && name != value_attr {
            continue;
        }

        let text = attr
            .decode_and_unescape_value(reader.decoder())
            .map_err(|e| QueryError::at(e.to_string(), reader.buffer_position()))?
            .into_owned();

        if name == key_attr {
            decl.key = Some(text);
        } else {
            decl.value = Some(text);
        }
    }

    Ok(decl)
}
