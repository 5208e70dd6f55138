//! Raw email parsing into body text and attachments

use crate::error::ParseError;
use crate::types::{Attachment, Email};
use chrono::{DateTime, Utc};
use mailparse::body::Body;
use mailparse::{DispositionType, MailHeaderMap, ParsedMail};
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, ParseError>;

/// Parse raw email bytes into an [`Email`].
///
/// Only a structural failure is an error. Broken transfer encodings are kept
/// on the body or attachment they belong to.
pub fn parse_email(raw: &[u8]) -> Result<Email> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| ParseError::Structure(e.to_string()))?;

    let subject = parsed.headers.get_first_value("Subject");
    let from = parsed.headers.get_first_value("From");
    let date = extract_date(&parsed);

    let body = extract_body(&parsed);

    let mut attachments = Vec::new();
    collect_attachments(&parsed, &mut attachments);

    debug!(
        subject = subject.as_deref().unwrap_or("(no subject)"),
        body_chars = body.len(),
        attachments = attachments.len(),
        "Parsed email"
    );

    Ok(Email {
        body,
        attachments,
        subject,
        from,
        date,
    })
}

fn extract_date(parsed: &ParsedMail) -> Option<DateTime<Utc>> {
    parsed
        .headers
        .get_first_value("Date")
        .and_then(|value| DateTime::parse_from_rfc2822(value.trim()).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Declared file name of a part, from Content-Disposition or Content-Type
fn file_name(part: &ParsedMail) -> Option<String> {
    part.get_content_disposition()
        .params
        .get("filename")
        .or_else(|| part.ctype.params.get("name"))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

fn is_attachment(part: &ParsedMail) -> bool {
    part.get_content_disposition().disposition == DispositionType::Attachment
        || file_name(part).is_some()
}

fn extract_body(parsed: &ParsedMail) -> String {
    let mut text: Option<String> = None;
    let mut html: Option<String> = None;

    find_body_parts(parsed, &mut text, &mut html);

    let body = match (text, html) {
        (Some(text), _) => text,
        (None, Some(html)) => strip_html(&html),
        (None, None) => String::new(),
    };

    body.replace("\r\n", "\n")
}

fn find_body_parts(part: &ParsedMail, text: &mut Option<String>, html: &mut Option<String>) {
    if !part.subparts.is_empty() {
        for sub in &part.subparts {
            find_body_parts(sub, text, html);
        }
        return;
    }

    if is_attachment(part) {
        return;
    }

    let content_type = part.ctype.mimetype.to_lowercase();
    if content_type == "text/plain" && text.is_none() {
        *text = Some(decode_text(part));
    } else if content_type == "text/html" && html.is_none() {
        *html = Some(decode_text(part));
    }
}

/// Decoded text of a body part, or its undecoded text if the transfer
/// encoding is broken
fn decode_text(part: &ParsedMail) -> String {
    part.get_body().unwrap_or_else(|e| {
        warn!(content_type = %part.ctype.mimetype, error = %e, "Body part kept undecoded");
        String::from_utf8_lossy(&undecoded(part)).into_owned()
    })
}

/// Part content exactly as it appears in the message
fn undecoded(part: &ParsedMail) -> Vec<u8> {
    match part.get_body_encoded() {
        Body::Base64(body) | Body::QuotedPrintable(body) => body.get_raw().to_vec(),
        Body::SevenBit(body) | Body::EightBit(body) => body.get_raw().to_vec(),
        Body::Binary(body) => body.get_raw().to_vec(),
    }
}

fn collect_attachments(part: &ParsedMail, out: &mut Vec<Attachment>) {
    if !part.subparts.is_empty() {
        for sub in &part.subparts {
            collect_attachments(sub, out);
        }
        return;
    }

    if let Some(name) = file_name(part) {
        let (raw_content, decode_error) = match part.get_body_raw() {
            Ok(raw) => (raw, None),
            Err(e) => {
                warn!(file_name = %name, error = %e, "Attachment transfer encoding is broken");
                (Vec::new(), Some(e.to_string()))
            }
        };

        out.push(Attachment {
            file_name: name,
            content_type: part.ctype.mimetype.clone(),
            raw_content,
            decode_error,
        });
    }
}

fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;
    let mut in_script = false;
    let mut in_style = false;
    let mut tag_start_idx: usize = 0;

    let lower_chars: Vec<char> = html.to_lowercase().chars().collect();
    let chars: Vec<char> = html.chars().collect();

    // Lowercasing can change the char count; fall back to the unmodified chars
    let lower_chars = if lower_chars.len() == chars.len() {
        lower_chars
    } else {
        chars.clone()
    };

    for (i, &c) in chars.iter().enumerate() {
        if !in_tag && c == '<' {
            tag_start_idx = i;
            let remaining: String = lower_chars[i..].iter().take(9).collect();
            if remaining.starts_with("<script") {
                in_script = true;
            } else if remaining.starts_with("<style") {
                in_style = true;
            } else if remaining.starts_with("</script") {
                in_script = false;
            } else if remaining.starts_with("</style") {
                in_style = false;
            }
            in_tag = true;
        } else if in_tag && c == '>' {
            in_tag = false;
            // Block elements end a line
            let tag_content: String = lower_chars[tag_start_idx + 1..i].iter().collect();
            if tag_content.starts_with("br")
                || tag_content.starts_with("/p")
                || tag_content.starts_with("/div")
                || tag_content.starts_with("/li")
                || tag_content.starts_with("/h")
                || tag_content.starts_with("/tr")
            {
                result.push('\n');
            }
        } else if !in_tag && !in_script && !in_style {
            result.push(c);
        }
    }

    result = result
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    result
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
