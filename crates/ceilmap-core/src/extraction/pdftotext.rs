use crate::error::CeilmapError;
use crate::extraction::{BBox, FragmentExtractor, PageContent, WordSpan};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Write;
use std::path::Path;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Words and their boxes come from `pdftotext -bbox`; reading-order lines come
/// from a plain `pdftotext` run.
pub struct PdftotextExtractor;

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FragmentExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, CeilmapError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| CeilmapError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| CeilmapError::Extraction(e.to_string()))?;
        let tmp_path = tmpfile.path().to_path_buf();

        let text = run_pdftotext(&[], &tmp_path)?;
        let bbox_xml = run_pdftotext(&["-bbox"], &tmp_path)?;
        let word_pages = parse_bbox_words(&bbox_xml)?;

        // pdftotext separates pages with a form feed and ends the last page with one.
        let mut line_pages: Vec<Vec<String>> = text
            .split('\x0c')
            .map(|page_text| page_text.lines().map(|l| l.to_string()).collect())
            .collect();
        if text.ends_with('\x0c') {
            line_pages.pop();
        }

        let page_count = word_pages.len().max(line_pages.len());
        let mut word_pages = word_pages.into_iter();
        let mut line_pages = line_pages.into_iter();
        let pages = (0..page_count)
            .map(|i| PageContent {
                page_number: i + 1,
                words: word_pages.next().unwrap_or_default(),
                lines: line_pages.next().unwrap_or_default(),
            })
            .collect();

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

fn run_pdftotext(args: &[&str], pdf_path: &Path) -> Result<String, CeilmapError> {
    let output = Command::new("pdftotext")
        .args(args)
        .arg("-enc")
        .arg("UTF-8")
        .arg(pdf_path)
        .arg("-") // output to stdout
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CeilmapError::PdftotextNotFound
            } else {
                CeilmapError::Extraction(format!("pdftotext {} failed: {}", args.join(" "), e))
            }
        })?;

    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        return Err(CeilmapError::PdftotextFailed { code, stderr });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parse `pdftotext -bbox` XHTML into one word list per `<page>`.
fn parse_bbox_words(xml: &str) -> Result<Vec<Vec<WordSpan>>, CeilmapError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    reader.config_mut().check_end_names = false;

    let mut pages: Vec<Vec<WordSpan>> = Vec::new();
    let mut current_bbox: Option<BBox> = None;
    let mut current_text = String::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| CeilmapError::Extraction(format!("malformed bbox output: {e}")))?;

        match event {
            Event::Start(ref e) if e.name().as_ref() == b"page" => pages.push(Vec::new()),
            Event::Empty(ref e) if e.name().as_ref() == b"page" => pages.push(Vec::new()),
            Event::Start(ref e) if e.name().as_ref() == b"word" => {
                current_bbox = parse_bbox(e);
                current_text.clear();
            }
            Event::Text(ref t) if current_bbox.is_some() => {
                let text = t
                    .unescape()
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| String::from_utf8_lossy(t).into_owned());
                current_text.push_str(&text);
            }
            Event::End(ref e) if e.name().as_ref() == b"word" => {
                if let Some(bbox) = current_bbox.take() {
                    let text = current_text.trim();
                    if !text.is_empty() {
                        if pages.is_empty() {
                            pages.push(Vec::new());
                        }
                        if let Some(page) = pages.last_mut() {
                            page.push(WordSpan {
                                text: text.to_string(),
                                bbox,
                            });
                        }
                    }
                }
                current_text.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(pages)
}

fn parse_bbox(tag: &BytesStart<'_>) -> Option<BBox> {
    Some(BBox {
        x_min: parse_attr_f64(tag, b"xMin")?,
        y_min: parse_attr_f64(tag, b"yMin")?,
        x_max: parse_attr_f64(tag, b"xMax")?,
        y_max: parse_attr_f64(tag, b"yMax")?,
    })
}

fn parse_attr_f64(tag: &BytesStart<'_>, name: &[u8]) -> Option<f64> {
    tag.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == name)
        .and_then(|a| String::from_utf8_lossy(&a.value).trim().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MatchStatus;

    #[test]
    fn test_parse_bbox_words() {
        let xml = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml">
<head>
<title></title>
</head>
<body>
<doc>
  <page width="842.000000" height="595.000000">
    <word xMin="101.500000" yMin="220.250000" xMax="150.000000" yMax="230.000000">BEDROOM</word>
    <word xMin="154.000000" yMin="220.250000" xMax="160.000000" yMax="230.000000">1</word>
    <word xMin="110.000000" yMin="240.000000" xMax="170.000000" yMax="250.000000">AFFL+2700</word>
  </page>
  <page width="842.000000" height="595.000000">
    <word xMin="10.000000" yMin="20.000000" xMax="60.000000" yMax="30.000000">BED&amp;BATH</word>
  </page>
</doc>
</body>
</html>
"#;
        let pages = parse_bbox_words(xml).unwrap();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 3);
        assert_eq!(pages[0][0].text, "BEDROOM");
        assert_eq!(pages[0][0].bbox.x_min, 101.5);
        assert_eq!(pages[0][0].bbox.y_min, 220.25);
        assert_eq!(pages[0][2].text, "AFFL+2700");
        assert_eq!(pages[1][0].text, "BED&BATH");
    }

    #[test]
    fn test_parse_bbox_words_empty_page() {
        let xml = r#"<doc><page width="100" height="100"></page></doc>"#;
        let pages = parse_bbox_words(xml).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].is_empty());
    }

    #[test]
    fn test_bbox_coordinates_keep_full_precision() {
        let xml = r#"<doc><page>
            <word xMin="0.000000" yMin="0.000000" xMax="40.000000" yMax="10.000000">BEDROOM</word>
            <word xMin="200.000007" yMin="0.000000" xMax="230.000000" yMax="10.000000">2700</word>
        </page></doc>"#;
        let pages = parse_bbox_words(xml).unwrap();
        assert_eq!(pages[0][1].bbox.x_min, 200.000007);

        let page = PageContent {
            page_number: 1,
            words: pages.into_iter().next().unwrap(),
            lines: vec![],
        };
        let fragments = crate::extraction::fragments_from_pages(&[page]);
        let patterns = crate::patterns::PatternSet::builtin().unwrap();
        let classification = crate::classify::classify(&fragments, &patterns);
        assert_eq!(classification.heights.len(), 1);

        let matches = crate::matching::match_rooms_with_heights(
            &classification.rooms,
            &classification.heights,
            patterns.max_match_distance,
        );
        assert_eq!(matches[0].status, MatchStatus::NoHeightWithinRadius);
        assert_eq!(matches[0].ceiling_height(), "N/A (No nearby height)");
    }

    #[test]
    fn test_word_without_box_is_ignored() {
        let xml = r#"<doc><page><word>stray</word></page></doc>"#;
        let pages = parse_bbox_words(xml).unwrap();
        assert!(pages[0].is_empty());
    }
}
