use crate::paper::Paper;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Which entry-level element's text is currently being collected.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Id,
    Title,
    Summary,
    Published,
    AuthorName,
}

/// Parse an arXiv Atom feed document into paper records.
///
/// Tolerant of missing fields: an entry without a title or summary still
/// yields a record with empty strings. Only a malformed XML document is an
/// error.
pub fn parse_feed(xml: &str) -> Result<Vec<Paper>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);

    let mut papers = Vec::new();
    let mut current: Option<Paper> = None;
    let mut in_author = false;
    let mut alternate_link_seen = false;
    let mut field: Option<Field> = None;
    let mut buf = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"entry" => {
                        current = Some(Paper::default());
                        alternate_link_seen = false;
                    }
                    b"author" if current.is_some() => in_author = true,
                    b"name" if in_author => {
                        field = Some(Field::AuthorName);
                        buf.clear();
                    }
                    b"id" | b"title" | b"summary" | b"published"
                        if current.is_some() && !in_author =>
                    {
                        field = Some(match name.as_ref() {
                            b"id" => Field::Id,
                            b"title" => Field::Title,
                            b"summary" => Field::Summary,
                            _ => Field::Published,
                        });
                        buf.clear();
                    }
                    b"link" => {
                        if let Some(paper) = current.as_mut() {
                            apply_link(&e, paper, &mut alternate_link_seen)?;
                        }
                    }
                    _ => {}
                }
            }
            Event::Empty(e) => {
                if e.local_name().as_ref() == b"link" {
                    if let Some(paper) = current.as_mut() {
                        apply_link(&e, paper, &mut alternate_link_seen)?;
                    }
                }
            }
            Event::Text(t) => {
                if field.is_some() {
                    buf.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"entry" => {
                    if let Some(paper) = current.take() {
                        papers.push(paper);
                    }
                    field = None;
                }
                b"author" => in_author = false,
                _ => {
                    if let (Some(f), Some(paper)) = (field.take(), current.as_mut()) {
                        commit_field(paper, f, &buf);
                    }
                }
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(papers)
}

fn commit_field(paper: &mut Paper, field: Field, raw: &str) {
    let value = normalize_whitespace(raw);
    match field {
        Field::Id => paper.id = value,
        Field::Title => paper.title = value,
        Field::Summary => paper.summary = value,
        Field::Published => paper.published = value,
        Field::AuthorName => {
            if !value.is_empty() {
                paper.authors.push(value);
            }
        }
    }
}

/// Pick the entry link. arXiv entries carry an `alternate` link (the abstract
/// page) plus a `related` PDF link; the alternate one wins.
fn apply_link(
    element: &BytesStart<'_>,
    paper: &mut Paper,
    alternate_seen: &mut bool,
) -> Result<(), quick_xml::Error> {
    let mut href = None;
    let mut rel = None;

    for attr in element.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"href" => href = Some(attr.unescape_value()?.into_owned()),
            b"rel" => rel = Some(attr.unescape_value()?.into_owned()),
            _ => {}
        }
    }

    if let Some(href) = href {
        let is_alternate = rel.as_deref().map_or(true, |r| r == "alternate");
        if is_alternate && !*alternate_seen {
            paper.link = href;
            *alternate_seen = true;
        } else if paper.link.is_empty() {
            paper.link = href;
        }
    }

    Ok(())
}

/// Collapse newlines and runs of whitespace into single spaces. arXiv titles
/// and abstracts arrive hard-wrapped.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
