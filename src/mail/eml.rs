use anyhow::{Context, Result};
use mailparse::{MailHeaderMap, ParsedMail};
use std::fs;
use std::path::Path;

use crate::domain::email::EmailMessage;
use crate::mail::decoders::{html_to_text, normalize_snippet};

const SNIPPET_CHARS: usize = 140;

/// Read an RFC 822 message from disk.
pub fn read_eml(path: &Path) -> Result<EmailMessage> {
    let raw = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    let fallback_id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    parse_eml(&fallback_id, &raw).with_context(|| format!("cannot parse {}", path.display()))
}

/// Build an [`EmailMessage`] from raw RFC 822 bytes. `fallback_id` is used
/// when the message has no Message-ID.
pub fn parse_eml(fallback_id: &str, raw: &[u8]) -> Result<EmailMessage> {
    let parsed = mailparse::parse_mail(raw)?;
    let header = |name: &str| {
        parsed
            .headers
            .get_first_value(name)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    };

    let id = Some(header("Message-ID"))
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback_id.to_string());
    // first message of the thread, when the client recorded it
    let thread_id = header("References")
        .split_whitespace()
        .next()
        .map(str::to_string)
        .or_else(|| Some(header("In-Reply-To")).filter(|v| !v.is_empty()))
        .unwrap_or_else(|| id.clone());

    let body = best_text(&parsed).unwrap_or_default();
    let snippet = normalize_snippet(&body, SNIPPET_CHARS);

    Ok(EmailMessage {
        id,
        thread_id,
        subject: header("Subject"),
        from: header("From"),
        date: header("Date"),
        snippet,
        body: (!body.trim().is_empty()).then_some(body),
    })
}

/// First text/plain part, else the first text/html part converted to text.
fn best_text(p: &ParsedMail) -> Option<String> {
    find_part(p, "text/plain")
        .or_else(|| find_part(p, "text/html").map(|html| html_to_text(&html)))
}

fn find_part(p: &ParsedMail, mimetype: &str) -> Option<String> {
    if p.ctype.mimetype.eq_ignore_ascii_case(mimetype) {
        return p.get_body().ok();
    }
    p.subparts.iter().find_map(|sp| find_part(sp, mimetype))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = "Message-ID: <abc@initech.com>\r\n\
From: Initech Recruiting <jobs@initech.com>\r\n\
Subject: Interview invitation\r\n\
Date: Mon, 12 Oct 2026 09:00:00 +0000\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
\r\n\
Hi Sam,\r\n\
\r\n\
We would like to schedule a technical interview.\r\n";

    const MULTIPART: &str = "From: =?UTF-8?Q?Hooli_Careers?= <no-reply@hooli.com>\r\n\
Subject: Your application\r\n\
References: <root@hooli.com> <second@hooli.com>\r\n\
Content-Type: multipart/alternative; boundary=\"b1\"\r\n\
\r\n\
--b1\r\n\
Content-Type: text/html; charset=utf-8\r\n\
\r\n\
<p>We <b>regret to inform</b> you.</p>\r\n\
--b1--\r\n";

    #[test]
    fn parses_plain_message() {
        let m = parse_eml("file", PLAIN.as_bytes()).unwrap();
        assert_eq!(m.id, "<abc@initech.com>");
        assert_eq!(m.thread_id, "<abc@initech.com>");
        assert_eq!(m.subject, "Interview invitation");
        assert_eq!(m.from, "Initech Recruiting <jobs@initech.com>");
        assert!(m.snippet.starts_with("Hi Sam, We would like to schedule"));
        assert!(m.body.unwrap().contains("technical interview"));
    }

    #[test]
    fn html_only_multipart_uses_converted_html() {
        let m = parse_eml("fallback", MULTIPART.as_bytes()).unwrap();
        assert_eq!(m.id, "fallback");
        assert_eq!(m.thread_id, "<root@hooli.com>");
        assert_eq!(m.from, "Hooli Careers <no-reply@hooli.com>");
        assert!(m.snippet.contains("regret to inform"));
    }

    #[test]
    fn reads_from_disk_and_feeds_the_classifier() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invite.eml");
        fs::write(&path, PLAIN).unwrap();

        let parsed = crate::matching::parse_email(read_eml(&path).unwrap());
        assert_eq!(
            parsed.detected_status,
            Some(crate::domain::email::StatusKind::Interview)
        );
        assert_eq!(parsed.company_name.as_deref(), Some("Initech"));
    }
}
