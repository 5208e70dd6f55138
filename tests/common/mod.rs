#![allow(dead_code)]

use parking_lot::Mutex;
use request_triage::{ClassifyError, ScoredLabel, ZeroShotClassifier};

/// Classifier returning a fixed answer per candidate set, recording every call
pub struct ScriptedClassifier {
    primary: Vec<(String, f64)>,
    calls: Mutex<Vec<Call>>,
    fail: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub text: String,
    pub labels: Vec<String>,
}

impl ScriptedClassifier {
    /// Ranks `label` first with `score` for primary calls; sub-label calls
    /// always put the first candidate on top.
    pub fn top(label: &str, score: f64) -> Self {
        Self::with_primary(vec![(label, score), ("General Inquiry", (1.0 - score) / 2.0)])
    }

    pub fn with_primary(primary: Vec<(&str, f64)>) -> Self {
        Self {
            primary: primary
                .into_iter()
                .map(|(l, s)| (l.to_string(), s))
                .collect(),
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            primary: Vec::new(),
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }
}

impl ZeroShotClassifier for ScriptedClassifier {
    fn classify(
        &self,
        text: &str,
        candidate_labels: &[&str],
    ) -> Result<Vec<ScoredLabel>, ClassifyError> {
        self.calls.lock().push(Call {
            text: text.to_string(),
            labels: candidate_labels.iter().map(|l| (*l).to_string()).collect(),
        });

        if self.fail {
            return Err(ClassifyError::Request("connection refused".into()));
        }

        if candidate_labels.contains(&"Fraud Report") {
            return Ok(self
                .primary
                .iter()
                .map(|(l, s)| ScoredLabel::new(l.clone(), *s))
                .collect());
        }

        // Sub-label call: first candidate wins
        #[allow(clippy::cast_precision_loss)]
        let step = 1.0 / (candidate_labels.len() as f64 + 1.0);
        Ok(candidate_labels
            .iter()
            .enumerate()
            .map(|(i, l)| ScoredLabel::new(*l, step.mul_add(-(i as f64), 1.0 - step)))
            .collect())
    }
}

/// Minimal message with a plain text body and no attachments
pub fn plain_email(body: &str) -> Vec<u8> {
    format!(
        "From: Borrower <borrower@example.com>\r\n\
         To: servicing@example.com\r\n\
         Subject: Request\r\n\
         Date: Thu, 01 Jan 2025 12:00:00 +0000\r\n\
         \r\n\
         {body}"
    )
    .into_bytes()
}

/// Multipart message with a plain text body and base64 attachments
pub fn email_with_attachments(body: &str, attachments: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut out = String::from(
        "From: Borrower <borrower@example.com>\r\n\
         To: servicing@example.com\r\n\
         Subject: Documents attached\r\n\
         MIME-Version: 1.0\r\n\
         Content-Type: multipart/mixed; boundary=\"BOUNDARY\"\r\n\
         \r\n\
         --BOUNDARY\r\n\
         Content-Type: text/plain; charset=utf-8\r\n\
         \r\n",
    );
    out.push_str(body);
    out.push_str("\r\n");

    for (name, content_type, content) in attachments {
        out.push_str("--BOUNDARY\r\n");
        out.push_str(&format!("Content-Type: {content_type}; name=\"{name}\"\r\n"));
        out.push_str(&format!(
            "Content-Disposition: attachment; filename=\"{name}\"\r\n"
        ));
        out.push_str("Content-Transfer-Encoding: base64\r\n\r\n");
        out.push_str(&encode_base64(content));
        out.push_str("\r\n");
    }
    out.push_str("--BOUNDARY--\r\n");
    out.into_bytes()
}

/// In-memory DOCX containing one paragraph per entry
pub fn docx(paragraphs: &[&str]) -> Vec<u8> {
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    let body: String = paragraphs
        .iter()
        .map(|p| {
            if p.is_empty() {
                "<w:p/>".to_string()
            } else {
                format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>")
            }
        })
        .collect();
    let xml = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{body}</w:body></w:document>"
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

fn encode_base64(input: &[u8]) -> String {
    use ::base64::Engine;

    let encoded = ::base64::engine::general_purpose::STANDARD.encode(input);
    // Keep lines within the MIME limit
    encoded
        .as_bytes()
        .chunks(76)
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .collect::<Vec<_>>()
        .join("\r\n")
}
