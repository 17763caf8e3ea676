//! Tests for the basic text extractor

use qag_domain::ports::providers::TextExtractor;
use qag_domain::value_objects::DocumentType;
use qag_domain::Error;
use qag_providers::extraction::BasicTextExtractor;

#[test]
fn test_html_yields_visible_text_lines() {
    let markup = br#"<html><head><title>T</title><style>p{color:red}</style></head>
        <body><h1> Checkout </h1><script>var x = 1;</script>
        <p>Use code <b>SAVE15</b>.</p></body></html>"#;

    let doc = BasicTextExtractor
        .extract("checkout.html", markup, DocumentType::Html)
        .expect("extraction");

    assert_eq!(doc.text, "Checkout\nUse code\nSAVE15\n.");
    assert_eq!(doc.doc_type, DocumentType::Html);
    assert_eq!(doc.source, "checkout.html");
}

#[test]
fn test_json_is_pretty_printed() {
    let doc = BasicTextExtractor
        .extract("rules.json", br#"{"discount":{"code":"SAVE15"}}"#, DocumentType::Json)
        .expect("extraction");
    assert!(doc.text.contains("\"code\": \"SAVE15\""));
    assert!(doc.text.contains('\n'));
}

#[test]
fn test_invalid_json_is_ingestion_error() {
    let err = BasicTextExtractor
        .extract("broken.json", b"{not json", DocumentType::Json)
        .expect_err("invalid json");
    assert!(matches!(err, Error::Ingestion { ref source_document, .. } if source_document == "broken.json"));
}

#[test]
fn test_pdf_is_reported_not_decoded() {
    let err = BasicTextExtractor
        .extract("spec.pdf", b"%PDF-1.7", DocumentType::Pdf)
        .expect_err("pdf unsupported");
    assert!(matches!(err, Error::Ingestion { .. }));
}

#[test]
fn test_non_utf8_text_is_rejected() {
    assert!(BasicTextExtractor
        .extract("bin.txt", &[0xff, 0xfe, 0x00], DocumentType::Text)
        .is_err());
}
