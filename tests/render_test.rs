//! Integration tests for rendering hOCR layouts to files.

use std::fs;

use hocrplot::render::{render_to_file, Canvas};
use hocrplot::{
    annotate_file, annotate_file_with_options, parse_str, Error, Hocrplot, ParseOptions,
    RenderOptions,
};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/two_pages.hocr");

const MINIMAL: &str = r#"<html><body>
<div class="ocr_page" title="bbox 0 0 100 200">
 <div class="ocr_carea" title="bbox 10 10 90 100">
  <p class="ocr_par" title="bbox 10 10 90 100">
   <span class="ocr_line" title="bbox 10 10 90 30">
    <span class="ocrx_word" title="bbox 10 10 50 30">word</span>
   </span>
  </p>
 </div>
</div>
</body></html>"#;

#[test]
fn test_minimal_document_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("minimal.hocr");
    let output = dir.path().join("minimal.png");
    fs::write(&input, MINIMAL).unwrap();

    annotate_file(&input, &output).unwrap();

    let size = fs::metadata(&output).unwrap().len();
    assert!(size > 0);

    let img = image::open(&output).unwrap();
    assert_eq!((img.width(), img.height()), (739, 1478));
}

#[test]
fn test_minimal_document_canvas_extent() {
    let layout = parse_str(MINIMAL).unwrap();
    let canvas = Canvas::for_layout(&layout, &RenderOptions::default()).unwrap();

    assert_eq!(canvas.viewport().x_limits(), (0.0, 100.0));
    assert_eq!(canvas.viewport().y_limits(), (0.0, 200.0));
    assert!(canvas.viewport().is_y_inverted());
}

#[test]
fn test_zero_pages_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("words.hocr");
    let output = dir.path().join("words.png");
    fs::write(
        &input,
        r#"<span class="ocrx_word" title="bbox 1 2 3 4">w</span>"#,
    )
    .unwrap();

    let result = annotate_file(&input, &output);
    assert!(matches!(result, Err(Error::NoPages)));
    assert!(!output.exists());

    // Deferring the page check to canvas sizing still fails before writing.
    let result = annotate_file_with_options(
        &input,
        &output,
        ParseOptions::new().with_require_page(false),
        RenderOptions::default(),
    );
    assert!(matches!(result, Err(Error::NoPages)));
    assert!(!output.exists());
}

#[test]
fn test_two_pages_share_first_page_extent() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("pages.png");
    let options = RenderOptions::new().with_dpi(100).with_plot_size(6.0, 8.0);

    let layout = Hocrplot::new()
        .with_render_options(options.clone())
        .annotate(FIXTURE, &output)
        .unwrap();
    assert_eq!(layout.pages.len(), 2);

    let canvas = Canvas::for_layout(&layout, &options).unwrap();
    assert_eq!(canvas.viewport().x_limits(), (0.0, 600.0));
    assert_eq!(canvas.viewport().y_limits(), (0.0, 800.0));

    // 1 px per page unit: the output matches the first page exactly.
    let img = image::open(&output).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (600, 800));

    // Both page outlines run along y=0; only the second page has an edge
    // at its bottom, y=400, clipped to the first page's width.
    let magenta = image::Rgb([255, 0, 255]);
    let white = image::Rgb([255, 255, 255]);
    assert_eq!(*img.get_pixel(300, 0), magenta);
    assert_eq!(*img.get_pixel(300, 399), magenta);
    assert_eq!(*img.get_pixel(300, 398), white);
}

#[test]
fn test_svg_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("pages.svg");

    annotate_file(FIXTURE, &output).unwrap();

    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("<svg"));
    assert_eq!(svg.matches("<rect x=").count(), 13);
}

#[test]
fn test_jpeg_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("pages.jpg");

    annotate_file(FIXTURE, &output).unwrap();
    assert!(fs::metadata(&output).unwrap().len() > 0);
}

#[test]
fn test_output_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");
    fs::write(&output, b"stale").unwrap();

    let layout = parse_str(MINIMAL).unwrap();
    render_to_file(&layout, &output, &RenderOptions::default()).unwrap();

    assert!(image::open(&output).is_ok());
}

#[test]
fn test_pdf_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("pages.pdf");

    annotate_file(FIXTURE, &output).unwrap();

    let doc = lopdf::Document::load(&output).unwrap();
    let pages = doc.get_pages();
    assert_eq!(pages.len(), 1);

    let page_id = *pages.values().next().unwrap();
    let data = doc.get_page_content(page_id).unwrap();
    let content = lopdf::content::Content::decode(&data).unwrap();
    let rects = content
        .operations
        .iter()
        .filter(|op| op.operator == "re")
        .count();
    // Every box plus the background fill.
    assert_eq!(rects, 13 + 1);
    let strokes = content
        .operations
        .iter()
        .filter(|op| op.operator == "S")
        .count();
    assert_eq!(strokes, 5);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.docx");

    let layout = parse_str(MINIMAL).unwrap();
    let result = render_to_file(&layout, &output, &RenderOptions::default());
    assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    assert!(!output.exists());
}
