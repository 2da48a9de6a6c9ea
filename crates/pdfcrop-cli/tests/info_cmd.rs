//! Integration tests for the `info` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("pdfcrop").unwrap()
}

/// Build a PDF whose pages have the given MediaBox, CropBox and Rotate
/// entries.
fn pdf_with_pages(pages: &[([i64; 4], Option<[i64; 4]>, i64)]) -> Vec<u8> {
    use lopdf::{Dictionary, Object, dictionary};

    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let kids: Vec<Object> = pages
        .iter()
        .map(|(media_box, crop_box, rotate)| {
            let mut page = dictionary! {
                "Type" => "Page",
                "Parent" => Object::Reference(pages_id),
                "MediaBox" => media_box.iter().map(|&v| Object::Integer(v)).collect::<Vec<_>>(),
            };
            if let Some(crop_box) = crop_box {
                page.set(
                    "CropBox",
                    crop_box.iter().map(|&v| Object::Integer(v)).collect::<Vec<_>>(),
                );
            }
            if *rotate != 0 {
                page.set("Rotate", Object::Integer(*rotate));
            }
            Object::Reference(doc.add_object(page))
        })
        .collect();

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", "Pages");
    pages_dict.set("Count", Object::Integer(kids.len() as i64));
    pages_dict.set("Kids", kids);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

fn three_pages() -> tempfile::NamedTempFile {
    write_temp(&pdf_with_pages(&[
        ([0, 0, 612, 792], None, 0),
        ([0, 0, 300, 400], Some([10, 20, 210, 320]), 0),
        ([0, 0, 200, 100], None, 90),
    ]))
}

#[test]
fn text_output_lists_every_page() {
    let file = three_pages();
    cmd()
        .args(["info", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pages: 3"))
        .stdout(predicate::str::contains("Page 1:"))
        .stdout(predicate::str::contains("Dimensions: 612.00 x 792.00"))
        .stdout(predicate::str::contains("MediaBox: [0.00, 0.00, 612.00, 792.00]"))
        .stdout(predicate::str::contains("Page 3:"));
}

#[test]
fn crop_box_and_rotation_are_reported() {
    let file = three_pages();
    cmd()
        .args(["info", file.path().to_str().unwrap(), "--pages", "2-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1:").not())
        .stdout(predicate::str::contains("Dimensions: 200.00 x 300.00"))
        .stdout(predicate::str::contains("CropBox: "))
        .stdout(predicate::str::contains("Dimensions: 100.00 x 200.00"))
        .stdout(predicate::str::contains("Rotation: 90°"));
}

#[test]
fn json_output_is_valid() {
    let file = three_pages();
    let output = cmd()
        .args(["info", file.path().to_str().unwrap(), "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["page_count"], 3);
    let pages = json["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0]["page"], 1);
    assert_eq!(pages[0]["width"], 612.0);
    assert_eq!(pages[0]["crop_box"], serde_json::Value::Null);
    assert_eq!(pages[1]["width"], 200.0);
    assert!(pages[1]["crop_box"].is_object());
    assert_eq!(pages[2]["rotation"], 90);
}

#[test]
fn page_range_out_of_bounds() {
    let file = three_pages();
    cmd()
        .args(["info", file.path().to_str().unwrap(), "--pages", "5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: page 5 exceeds document page count (3)"));
}

#[test]
fn missing_file() {
    cmd()
        .args(["info", "/nonexistent/missing.pdf"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: file not found"));
}

#[test]
fn not_a_pdf() {
    let file = write_temp(b"plain text, not a PDF");
    cmd()
        .args(["info", file.path().to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: failed to open PDF"));
}

#[test]
fn quiet_run_writes_nothing_to_stderr() {
    let file = three_pages();
    cmd()
        .env_remove("RUST_LOG")
        .args(["info", file.path().to_str().unwrap(), "--quiet"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn debug_logging_reaches_stderr() {
    let file = three_pages();
    cmd()
        .env_remove("RUST_LOG")
        .args(["-vv", "info", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("opened document"));
}

#[test]
fn verbose_run_logs_summary() {
    let file = three_pages();
    cmd()
        .env_remove("RUST_LOG")
        .args(["-v", "info", file.path().to_str().unwrap(), "--pages", "1"])
        .assert()
        .success()
        .stderr(predicate::str::contains("read page geometry"))
        .stderr(predicate::str::contains("selected=1"));
}

#[test]
fn default_run_hides_info_logs() {
    let file = three_pages();
    cmd()
        .env_remove("RUST_LOG")
        .args(["info", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("read page geometry").not());
}
