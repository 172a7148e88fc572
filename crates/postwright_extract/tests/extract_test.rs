//! Tests for brief extraction.

use postwright_error::{ExtractionErrorKind, ValidationErrorKind};
use postwright_extract::{
    SourceFormat, briefs_from_rows, extract_bytes, extract_file, extract_text, topic_brief,
};
use std::io::{Cursor, Write};

fn docx_with_body(body: &str) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    writer
        .start_file("[Content_Types].xml", options)
        .expect("start content types");
    writer
        .write_all(br#"<?xml version="1.0" encoding="UTF-8"?><Types/>"#)
        .expect("write content types");
    writer
        .start_file("word/document.xml", options)
        .expect("start document part");
    write!(
        writer,
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
        body
    )
    .expect("write document part");
    writer.finish().expect("finish archive").into_inner()
}

/// One page per entry; an empty entry yields a page with an empty content stream.
fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{Document, Object, Stream, dictionary};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            Vec::new()
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).expect("save pdf");
    bytes
}

/// Minimal workbook with a single sheet; `sheet_data` is the `<sheetData>` body.
fn xlsx_with_rows(sheet_data: &str) -> Vec<u8> {
    const MAIN_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
    const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    let parts = [
        (
            "[Content_Types].xml".to_string(),
            r#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#.to_string(),
        ),
        (
            "_rels/.rels".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#,
                REL_NS
            ),
        ),
        (
            "xl/workbook.xml".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><workbook xmlns="{}" xmlns:r="{}"><sheets><sheet name="Topics" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
                MAIN_NS, REL_NS
            ),
        ),
        (
            "xl/_rels/workbook.xml.rels".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="{}/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#,
                REL_NS
            ),
        ),
        (
            "xl/worksheets/sheet1.xml".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><worksheet xmlns="{}"><sheetData>{}</sheetData></worksheet>"#,
                MAIN_NS, sheet_data
            ),
        ),
    ];

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    for (name, body) in parts {
        writer.start_file(name, options).expect("start part");
        writer.write_all(body.as_bytes()).expect("write part");
    }
    writer.finish().expect("finish archive").into_inner()
}

fn inline_cell(reference: &str, text: &str) -> String {
    format!(
        r#"<c r="{}" t="inlineStr"><is><t>{}</t></is></c>"#,
        reference, text
    )
}

#[test]
fn test_csv_skips_blank_rows_and_renumbers() {
    let csv = "Topic 1,\n,\nTopic 2\n";
    let briefs = extract_bytes(csv.as_bytes(), "topics.csv").expect("csv parses");

    assert_eq!(briefs.len(), 2);
    assert_eq!(briefs[0].id(), "brief-0");
    assert_eq!(briefs[0].content(), "Topic 1");
    assert_eq!(briefs[1].id(), "brief-1");
    assert_eq!(briefs[1].content(), "Topic 2");
}

#[test]
fn test_csv_uses_first_column_only() {
    let csv = "\u{feff}\"  Launch recap \",internal notes\n\"Hiring, part 2\",more\n   ,ignored\n";
    let briefs = extract_bytes(csv.as_bytes(), "plan.CSV").expect("csv parses");

    let contents: Vec<&str> = briefs.iter().map(|b| b.content().as_str()).collect();
    assert_eq!(contents, vec!["Launch recap", "Hiring, part 2"]);
}

#[test]
fn test_tab_separated_csv() {
    let csv = "Topic A\tnotes\nTopic B\tmore notes\n";
    let briefs = extract_bytes(csv.as_bytes(), "export.csv").expect("csv parses");

    assert_eq!(briefs.len(), 2);
    assert_eq!(briefs[1].content(), "Topic B");
}

#[test]
fn test_rows_without_string_first_cell_are_skipped() {
    let briefs = briefs_from_rows(vec![None, Some("Topic"), Some(""), None]);
    assert_eq!(briefs.len(), 1);
    assert_eq!(briefs[0].id(), "brief-0");
}

#[test]
fn test_unsupported_extension() {
    let err = extract_bytes(b"GIF89a", "picture.gif").expect_err("gif is unsupported");
    assert_eq!(
        err.kind(),
        &ExtractionErrorKind::UnsupportedFormat("gif".to_string())
    );
    assert!(err.to_string().contains(
        "Invalid file format. Please upload CSV, XLSX, TXT, MD, PDF, or DOCX."
    ));
}

#[test]
fn test_name_without_extension_is_unsupported() {
    assert!(SourceFormat::from_hint("README").is_err());
    assert_eq!(SourceFormat::from_hint("notes.MD").ok(), Some(SourceFormat::Md));
    assert_eq!(SourceFormat::from_hint("Deck.PDF").ok(), Some(SourceFormat::Pdf));
    assert_eq!(SourceFormat::Docx.to_string(), "docx");
}

#[test]
fn test_text_file_is_single_brief() {
    let briefs = extract_bytes(b"\n  Line one\nLine two  \n\n", "notes.txt").expect("text");
    assert_eq!(briefs.len(), 1);
    assert_eq!(briefs[0].id(), "brief-0");
    assert_eq!(briefs[0].content(), "Line one\nLine two");
}

#[test]
fn test_blank_markdown_yields_nothing() {
    let briefs = extract_bytes(b" \n\t\n", "empty.md").expect("markdown");
    assert!(briefs.is_empty());
    assert!(extract_text("").is_empty());
}

#[test]
fn test_extraction_is_deterministic() {
    let csv = b"One\nTwo\n\nThree\n";
    let first = extract_bytes(csv, "a.csv").expect("first");
    let second = extract_bytes(csv, "a.csv").expect("second");
    assert_eq!(first, second);
}

#[test]
fn test_docx_paragraphs() {
    let body = r#"<w:p><w:r><w:t>Product launch</w:t></w:r></w:p><w:p><w:r><w:t xml:space="preserve">Q3 </w:t></w:r><w:r><w:t>&amp; beyond</w:t></w:r></w:p>"#;
    let bytes = docx_with_body(body);

    let briefs = extract_bytes(&bytes, "brief.docx").expect("docx parses");
    assert_eq!(briefs.len(), 1);
    assert_eq!(briefs[0].content(), "Product launch\n\nQ3 & beyond");
}

#[test]
fn test_docx_without_text_yields_nothing() {
    let bytes = docx_with_body("<w:p></w:p><w:p></w:p>");
    let briefs = extract_bytes(&bytes, "blank.docx").expect("docx parses");
    assert!(briefs.is_empty());
}

#[test]
fn test_corrupt_docx() {
    let err = extract_bytes(b"definitely not a zip", "broken.docx").expect_err("corrupt");
    assert!(matches!(
        err.kind(),
        ExtractionErrorKind::Corrupt { format, .. } if format == "docx"
    ));
}

#[test]
fn test_docx_missing_document_part() {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("hello.txt", zip::write::SimpleFileOptions::default())
        .expect("start file");
    writer.write_all(b"hello").expect("write");
    let bytes = writer.finish().expect("finish").into_inner();

    let err = extract_bytes(&bytes, "odd.docx").expect_err("no document part");
    assert!(matches!(err.kind(), ExtractionErrorKind::Corrupt { .. }));
}

#[test]
fn test_corrupt_xlsx() {
    let err = extract_bytes(b"not a workbook", "sheet.xlsx").expect_err("corrupt");
    assert!(matches!(
        err.kind(),
        ExtractionErrorKind::Corrupt { format, .. } if format == "xlsx"
    ));
}

#[test]
fn test_corrupt_pdf() {
    let err = extract_bytes(b"%PDF-garbage", "doc.pdf").expect_err("corrupt");
    assert!(matches!(
        err.kind(),
        ExtractionErrorKind::Corrupt { format, .. } if format == "pdf"
    ));
}

#[test]
fn test_pdf_without_text_yields_nothing() {
    let briefs = extract_bytes(&pdf_with_pages(&[""]), "blank.pdf").expect("pdf loads");
    assert!(briefs.is_empty());
}

#[test]
fn test_xlsx_reads_text_in_first_column_of_first_sheet() {
    let rows = format!(
        r#"<row r="1">{}{}</row><row r="2"><c r="A2"><v>42</v></c></row><row r="3">{}</row><row r="4">{}</row>"#,
        inline_cell("A1", "Topic 1"),
        inline_cell("B1", "internal note"),
        inline_cell("B3", "orphan note"),
        inline_cell("A4", "  Topic 2 "),
    );

    let briefs = extract_bytes(&xlsx_with_rows(&rows), "plan.xlsx").expect("xlsx parses");

    assert_eq!(briefs.len(), 2);
    assert_eq!(briefs[0].id(), "brief-0");
    assert_eq!(briefs[0].content(), "Topic 1");
    assert_eq!(briefs[1].id(), "brief-1");
    assert_eq!(briefs[1].content(), "Topic 2");
}

#[test]
fn test_pdf_joins_pages_with_blank_line() {
    let pdf = pdf_with_pages(&["page one", "", "page two"]);

    let briefs = extract_bytes(&pdf, "deck.pdf").expect("pdf loads");

    assert_eq!(briefs.len(), 1);
    assert_eq!(briefs[0].id(), "brief-0");
    assert_eq!(briefs[0].content(), "page one\n\npage two");
}

#[test]
fn test_extract_file_reads_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("topics.csv");
    std::fs::write(&path, "Alpha\nBeta\n").expect("write csv");

    let briefs = extract_file(&path).expect("file parses");
    assert_eq!(briefs.len(), 2);
    assert_eq!(briefs[0].content(), "Alpha");
}

#[test]
fn test_extract_file_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = extract_file(&dir.path().join("absent.txt")).expect_err("missing file");
    assert!(matches!(err.kind(), ExtractionErrorKind::Io(_)));
}

#[test]
fn test_extract_file_checks_format_first() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = extract_file(&dir.path().join("absent.gif")).expect_err("unsupported");
    assert!(matches!(
        err.kind(),
        ExtractionErrorKind::UnsupportedFormat(_)
    ));
}

#[test]
fn test_single_topic() {
    let brief = topic_brief("  AI in healthcare ").expect("topic");
    assert_eq!(brief.id(), "brief-0");
    assert_eq!(brief.content(), "AI in healthcare");

    let err = topic_brief(" \t ").expect_err("blank topic");
    assert_eq!(err.kind(), &ValidationErrorKind::EmptyTopic);
}
