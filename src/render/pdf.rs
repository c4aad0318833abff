//! PDF rendering with lopdf.
//!
//! One page whose MediaBox is the canvas size, drawn in the same pixel
//! space as the SVG output: a flip matrix puts the origin at the top left,
//! and each layer is one stroked path of `re` subpaths.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream};

use crate::error::Result;
use crate::model::Layout;

use super::canvas::Canvas;
use super::style::{Color, LAYERS};
use super::RenderOptions;

/// Convert a layout to the bytes of a single-page PDF document.
pub fn to_pdf(layout: &Layout, options: &RenderOptions) -> Result<Vec<u8>> {
    let canvas = Canvas::for_layout(layout, options)?;
    let content = page_content(layout, &canvas, options);

    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            i64::from(canvas.width_px()).into(),
            i64::from(canvas.height_px()).into(),
        ],
        "Contents" => content_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::from(page_id)],
            "Count" => 1i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf)?;
    Ok(buf)
}

fn page_content(layout: &Layout, canvas: &Canvas, options: &RenderOptions) -> Content {
    let (width, height) = (canvas.width_px() as f32, canvas.height_px() as f32);
    let mut operations = vec![
        Operation::new("rg", color_operands(options.background)),
        Operation::new(
            "re",
            vec![0.into(), 0.into(), width.into(), height.into()],
        ),
        Operation::new("f", vec![]),
        // y grows downward from here on
        Operation::new(
            "cm",
            vec![
                1.into(),
                0.into(),
                0.into(),
                (-1).into(),
                0.into(),
                height.into(),
            ],
        ),
    ];

    for layer in LAYERS.iter() {
        let boxes = layout.boxes(layer.class);
        if boxes.is_empty() {
            continue;
        }

        let line_width = layer.line_width_px(options.dpi) as f32;
        operations.push(Operation::new("RG", color_operands(layer.color)));
        operations.push(Operation::new("w", vec![line_width.into()]));
        for bbox in boxes {
            let rect = canvas.pixel_rect(bbox);
            operations.push(Operation::new(
                "re",
                vec![
                    (rect.left as f32).into(),
                    (rect.top as f32).into(),
                    ((rect.right - rect.left) as f32).into(),
                    ((rect.bottom - rect.top) as f32).into(),
                ],
            ));
        }
        operations.push(Operation::new("S", vec![]));
    }

    Content { operations }
}

fn color_operands(color: Color) -> Vec<Object> {
    [color.r, color.g, color.b]
        .iter()
        .map(|&c| (f32::from(c) / 255.0).into())
        .collect()
}
