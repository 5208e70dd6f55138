use crate::error::ExtractError;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::{Cursor, Read};
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Body paragraphs joined with newlines, empty paragraphs included
pub fn read_text(raw: &[u8]) -> Result<String, ExtractError> {
    let mut archive =
        ZipArchive::new(Cursor::new(raw)).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::Docx(format!("{DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Docx(format!("{DOCUMENT_PART}: {e}")))?;

    Ok(body_paragraphs(&xml)?.join("\n"))
}

/// Walk `word/document.xml` and collect the text of each body paragraph.
///
/// Only direct children of `w:body` count. Paragraphs inside tables or content
/// controls belong to those containers, and text boxes anchored in a paragraph
/// are not part of its text.
fn body_paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut depth: usize = 0;
    let mut body_depth: Option<usize> = None;
    let mut paragraph_depth: Option<usize> = None;
    let mut text_box_depth: usize = 0;
    let mut in_text = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractError::Docx(e.to_string()))?;
        let collecting = paragraph_depth.is_some() && text_box_depth == 0;

        match event {
            Event::Start(e) => {
                depth += 1;
                match e.name().as_ref() {
                    b"w:body" => body_depth = Some(depth),
                    b"w:p" if paragraph_depth.is_none() && body_depth == Some(depth - 1) => {
                        current.clear();
                        paragraph_depth = Some(depth);
                    }
                    b"w:txbxContent" => text_box_depth += 1,
                    b"w:t" if collecting => in_text = true,
                    _ => {}
                }
            }
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if paragraph_depth.is_none() && body_depth == Some(depth) => {
                    paragraphs.push(String::new());
                }
                b"w:tab" if collecting => current.push('\t'),
                b"w:br" | b"w:cr" if collecting => current.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t.unescape().map_err(|e| ExtractError::Docx(e.to_string()))?;
                current.push_str(&text);
            }
            Event::End(e) => {
                match e.name().as_ref() {
                    b"w:t" => in_text = false,
                    b"w:txbxContent" => text_box_depth = text_box_depth.saturating_sub(1),
                    b"w:p" if paragraph_depth == Some(depth) => {
                        paragraphs.push(std::mem::take(&mut current));
                        paragraph_depth = None;
                    }
                    b"w:body" => body_depth = None,
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
