//! In-memory .docx export

use std::io::{Cursor, Read, Seek, SeekFrom, Write};
use docx_rs::{BreakType, Docx, Paragraph, Run};
use log::debug;
use crate::request::DocumentType;

pub const DOCX_MIME_TYPE: &str
  = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A complete .docx held in memory, positioned at byte zero
#[derive(Debug, Clone)]
pub struct ExportedDocument
{   content: Cursor<Vec<u8>>
  , filename: &'static str
}

impl ExportedDocument
{   /// Suggested download filename
    pub fn filename(&self) -> &str
    {   self.filename
    }

    pub fn mime_type(&self) -> &'static str
    {   DOCX_MIME_TYPE
    }

    pub fn as_bytes(&self) -> &[u8]
    {   self.content.get_ref()
    }

    pub fn len(&self) -> usize
    {   self.content.get_ref().len()
    }

    pub fn is_empty(&self) -> bool
    {   self.content.get_ref().is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8>
    {   self.content.into_inner()
    }
}

impl Read for ExportedDocument
{   fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize>
    {   self.content.read(buf)
    }
}

/// Characters allowed by the XML 1.0 `Char` production
fn is_xml_char(c: char) -> bool
{   matches!(c,
      '\u{9}' | '\u{A}' | '\u{D}'
      | '\u{20}'..='\u{D7FF}'
      | '\u{E000}'..='\u{FFFD}'
      | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Normalize line endings and drop what XML cannot carry.
/// CRLF, lone CR, vertical tab and form feed all become '\n'.
pub fn sanitize_text(text: &str) -> String
{   let text = text.replace("\r\n", "\n");
    text.chars()
      .map(|c| match c
      {   '\r' | '\u{B}' | '\u{C}' => '\n'
        , other => other
      })
      .filter(|c| is_xml_char(*c))
      .collect()
}

/// A single run holding `text`; newlines become line breaks
/// and tabs become tab stops so the paragraph stays one paragraph.
fn text_run(text: &str) -> Run
{   let mut run = Run::new();
    for (i, line) in text.split('\n').enumerate()
    {   if i > 0
        {   run = run.add_break(BreakType::TextWrapping);
        }
        for (j, segment) in line.split('\t').enumerate()
        {   if j > 0
            {   run = run.add_tab();
            }
            if !segment.is_empty()
            {   run = run.add_text(segment);
            }
        }
    }
    run
}

/// Write `text` as a one-paragraph document into `writer`
fn write_document<W: Write + Seek>(
  text: &str
, writer: &mut W
) -> Result<(), crate::error::Error>
{   let text = sanitize_text(text);
    let paragraph = Paragraph::new().add_run(text_run(&text));

    Docx::new()
      .add_paragraph(paragraph)
      .build()
      .pack(writer)
      .map_err(|e| crate::error::Error::Export(e.to_string()))
}

/// Serialize `text` as a one-paragraph document.
///
/// Any string is accepted, including the empty string. An `Err` here
/// means the environment failed (allocation, zip writer), not the input.
pub fn render_document(text: &str)
  -> Result<Vec<u8>, crate::error::Error>
{   let mut buffer = Cursor::new(Vec::new());
    write_document(text, &mut buffer)?;
    Ok(buffer.into_inner())
}

/// Export generated text as the downloadable document for `document_type`
pub fn export(
  text: &str
, document_type: DocumentType
) -> Result<ExportedDocument, crate::error::Error>
{   let mut content = Cursor::new(Vec::new());
    write_document(text, &mut content)?;
    content.seek(SeekFrom::Start(0))
      .map_err(|e| crate::error::Error::Export(e.to_string()))?;

    debug!(
      "Exported {} ({} bytes)",
      document_type.filename(),
      content.get_ref().len()
    );
    Ok(ExportedDocument
    {   content
      , filename: document_type.filename()
    })
}
