//! Integration tests running synthetic PDFs through extraction and chunking.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use pdfchunk::{
    chunk_bytes, render, Chunk, Error, ExtractOptions, PageSelection, PageSource, PageText,
    PdfSource, Pipeline,
};

/// One `BT`/`ET` block per line, stacked down the page.
fn text_operations(lines: &[&str]) -> Vec<Operation> {
    let mut operations = Vec::new();
    let mut y = 760;
    for line in lines {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
        operations.push(Operation::new("Td", vec![72.into(), y.into()]));
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("ET", vec![]));
        y -= 16;
    }
    operations
}

/// Build a PDF with one text line per `BT`/`ET` block.
fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let pages = pages.iter().map(|lines| text_operations(lines)).collect();
    build_pdf_from_operations(pages)
}

fn build_pdf_from_operations(pages: Vec<Vec<Operation>>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut kids: Vec<Object> = Vec::new();
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            },
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal("Device Coordination"),
        "Author" => Object::string_literal("Safety Office"),
        "CreationDate" => Object::string_literal("D:20240115103045"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

fn sample_pdf() -> Vec<u8> {
    build_pdf(&[
        &[
            "Overview",
            "This is the first paragraph line.",
            "This continues the paragraph.",
            "- First bullet",
            "- Second bullet",
        ],
        &[],
        &["Background", "devices are tracked centrally"],
    ])
}

#[test]
fn test_source_extracts_numbered_pages() {
    let source = PdfSource::from_bytes(&sample_pdf()).unwrap();
    assert_eq!(source.page_count(), 3);
    assert_eq!(source.version(), "1.5");

    let pages = source.pages().unwrap();
    let numbers: Vec<u32> = pages.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert!(pages[0].text.contains("Overview"));
    assert!(pages[1].is_blank());
    assert!(pages[2].text.contains("devices are tracked centrally"));
}

#[test]
fn test_chunk_bytes_end_to_end() {
    let doc = chunk_bytes(&sample_pdf()).unwrap();
    assert_eq!(doc.page_count(), 3);

    assert_eq!(
        doc.pages[0].chunks,
        vec![
            Chunk::heading("Overview"),
            Chunk::paragraph("This is the first paragraph line. This continues the paragraph."),
            Chunk::list("- First bullet - Second bullet"),
        ]
    );
    assert!(doc.pages[1].is_empty());
    assert_eq!(
        doc.pages[2].chunks,
        vec![
            Chunk::heading("Background"),
            Chunk::paragraph("devices are tracked centrally"),
        ]
    );
}

#[test]
fn test_json_contract_field_names() {
    let doc = chunk_bytes(&sample_pdf()).unwrap();
    let json = render::to_json(&doc, render::JsonFormat::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let pages = value.as_array().unwrap();
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0]["page"], 1);
    assert_eq!(pages[0]["chunks"][0]["type"], "heading");
    assert_eq!(pages[0]["chunks"][0]["text"], "Overview");
    assert_eq!(pages[0]["chunks"][2]["type"], "list");
    assert_eq!(pages[1]["chunks"].as_array().unwrap().len(), 0);
}

#[test]
fn test_page_selection_keeps_source_numbers() {
    let doc = Pipeline::new()
        .with_pages(PageSelection::Pages(vec![3]))
        .chunk_bytes(&sample_pdf())
        .unwrap();

    assert_eq!(doc.page_count(), 1);
    assert_eq!(doc.pages[0].page_number, 3);
    assert_eq!(doc.pages[0].headings(), vec!["Background"]);
}

#[test]
fn test_out_of_range_selection() {
    let strict = PdfSource::from_bytes_with_options(
        &sample_pdf(),
        ExtractOptions::new().with_pages(PageSelection::Range(2..=9)),
    )
    .unwrap();
    assert!(matches!(strict.pages(), Err(Error::PageOutOfRange(9, 3))));

    let lenient = PdfSource::from_bytes_with_options(
        &sample_pdf(),
        ExtractOptions::new()
            .lenient()
            .with_pages(PageSelection::Range(2..=9)),
    )
    .unwrap();
    let numbers: Vec<u32> = lenient.pages().unwrap().iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![2, 3]);
}

/// Three pages; the middle one selects its font with a number instead of a name.
fn unreadable_middle_page_pdf() -> Vec<u8> {
    let broken = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![12.into(), 12.into()]),
        Operation::new("Tj", vec![Object::string_literal("Lost Text")]),
        Operation::new("ET", vec![]),
    ];
    build_pdf_from_operations(vec![
        text_operations(&["Overview", "first page body"]),
        broken,
        text_operations(&["Background", "third page body"]),
    ])
}

#[test]
fn test_strict_mode_propagates_page_failure() {
    let source = PdfSource::from_bytes(&unreadable_middle_page_pdf()).unwrap();
    assert!(matches!(source.page_text(2), Err(Error::TextExtract(_))));
    assert!(matches!(source.pages(), Err(Error::TextExtract(_))));
}

#[test]
fn test_lenient_mode_blanks_failed_page() {
    let source = PdfSource::from_bytes_with_options(
        &unreadable_middle_page_pdf(),
        ExtractOptions::new().lenient(),
    )
    .unwrap();

    let pages = source.pages().unwrap();
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[1], PageText::new(2, ""));
    assert!(pages[2].text.contains("third page body"));

    let doc = Pipeline::new()
        .lenient()
        .chunk_bytes(&unreadable_middle_page_pdf())
        .unwrap();
    assert_eq!(doc.page_count(), 3);
    assert_eq!(doc.pages[1].page_number, 2);
    assert!(doc.pages[1].is_empty());
    assert_eq!(doc.pages[2].headings(), vec!["Background"]);
}

#[test]
fn test_page_text_out_of_range() {
    let source = PdfSource::from_bytes(&sample_pdf()).unwrap();
    assert!(matches!(source.page_text(0), Err(Error::PageOutOfRange(0, 3))));
    assert!(matches!(source.page_text(4), Err(Error::PageOutOfRange(4, 3))));
}

#[test]
fn test_document_info() {
    let source = PdfSource::from_bytes(&sample_pdf()).unwrap();
    let info = source.info();

    assert_eq!(info.pdf_version, "1.5");
    assert_eq!(info.page_count, 3);
    assert!(!info.encrypted);
    assert_eq!(info.title.as_deref(), Some("Device Coordination"));
    assert_eq!(info.author.as_deref(), Some("Safety Office"));
    assert!(info.created.is_some());
    assert!(info.producer.is_none());
}

#[test]
fn test_parallel_and_sequential_agree() {
    let pages: Vec<Vec<String>> = (1..=8)
        .map(|n| vec![format!("Chapter {n}"), format!("body text for chapter {n}")])
        .collect();
    let page_refs: Vec<Vec<&str>> = pages
        .iter()
        .map(|lines| lines.iter().map(String::as_str).collect())
        .collect();
    let slices: Vec<&[&str]> = page_refs.iter().map(Vec::as_slice).collect();
    let data = build_pdf(&slices);

    let parallel = Pipeline::new().chunk_bytes(&data).unwrap();
    let sequential = Pipeline::new().sequential().chunk_bytes(&data).unwrap();
    assert_eq!(parallel, sequential);
    assert_eq!(parallel.pages[7].headings(), vec!["Chapter 8"]);
}

#[test]
fn test_reader_input() {
    let data = sample_pdf();
    let doc = pdfchunk::chunk_reader(std::io::Cursor::new(data)).unwrap();
    assert_eq!(doc.page_count(), 3);
}
