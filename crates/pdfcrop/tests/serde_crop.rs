//! Serde support for crops and pages.

#![cfg(feature = "serde")]

use pdfcrop::{Crop, DEFAULT_RESOLUTION};

#[test]
fn crop_serializes_all_fields() {
    let crop = Crop::new("a.pdf", 2, 1.0, 2.0, 3.0, 4.0)
        .unwrap()
        .with_padding(5)
        .with_resolution(150)
        .unwrap();
    let json = serde_json::to_value(&crop).expect("serialize failed");
    assert_eq!(
        json,
        serde_json::json!({
            "path": "a.pdf",
            "page_number": 2,
            "x0": 1.0,
            "x1": 2.0,
            "top": 3.0,
            "bottom": 4.0,
            "padding": 5,
            "resolution": 150
        })
    );
}

#[test]
fn crop_deserialize_applies_defaults() {
    let crop: Crop = serde_json::from_str(
        r#"{"path": "a.pdf", "page_number": 0, "x0": 1, "x1": 2, "top": 3, "bottom": 4}"#,
    )
    .expect("deserialize failed");
    assert_eq!(crop.padding(), 0);
    assert_eq!(crop.resolution(), DEFAULT_RESOLUTION);
}

#[test]
fn crop_deserialize_validates() {
    let inverted = serde_json::from_str::<Crop>(
        r#"{"path": "a.pdf", "page_number": 0, "x0": 9, "x1": 2, "top": 3, "bottom": 4}"#,
    )
    .unwrap_err();
    assert!(inverted.to_string().contains("invalid crop"));

    let zero_dpi = serde_json::from_str::<Crop>(
        r#"{"path": "a.pdf", "page_number": 0, "x0": 1, "x1": 2, "top": 3, "bottom": 4, "resolution": 0}"#,
    )
    .unwrap_err();
    assert!(zero_dpi.to_string().contains("resolution"));

    let negative_padding = serde_json::from_str::<Crop>(
        r#"{"path": "a.pdf", "page_number": 0, "x0": 1, "x1": 2, "top": 3, "bottom": 4, "padding": -1}"#,
    );
    assert!(negative_padding.is_err());
}

#[test]
fn page_serializes_geometry() {
    let doc = pdfcrop::Document::open(one_page_pdf(), &Default::default()).unwrap();
    let page = doc.page(0).unwrap();
    let json = serde_json::to_value(page).expect("serialize failed");
    assert_eq!(json["width"], 300.0);
    assert_eq!(json["height"], 400.0);
    assert_eq!(json["crop_box"], serde_json::Value::Null);
}

fn one_page_pdf() -> Vec<u8> {
    use lopdf::{Document, Object, ObjectId, dictionary};

    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 300.into(), 400.into()],
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
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}
