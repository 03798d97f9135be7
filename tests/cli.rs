extern crate assert_cmd;
extern crate image;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use image::Rgb;
use predicates::prelude::*;
use std::process::Command;

fn dembrot() -> Command {
    Command::cargo_bin("dembrot").unwrap()
}

#[test]
fn renders_the_whole_set_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whole.png");
    dembrot()
        .args(&["-s", "32", "-i", "200", "-t", "2", "-o"])
        .arg(&path)
        .assert()
        .success();
    let image = image::open(&path).unwrap().to_rgb();
    assert_eq!(image.dimensions(), (16, 16));
}

#[test]
fn no_antialias_keeps_full_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("full.png");
    dembrot()
        .args(&["-s", "32", "-i", "200", "--no-antialias", "-o"])
        .arg(&path)
        .assert()
        .success();
    let image = image::open(&path).unwrap().to_rgb();
    assert_eq!(image.dimensions(), (32, 32));
    // Pixel (16, 16) on the plane is -0.75+0i, inside the set; the
    // image is stored top row first.
    assert_eq!(*image.get_pixel(16, 15), Rgb([255, 255, 255]));
    assert_ne!(*image.get_pixel(0, 31), Rgb([255, 255, 255]));
}

#[test]
fn accepts_a_negative_center() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zoom.png");
    dembrot()
        .args(&["-0.743", "-0.131", "0.01", "-s", "16", "-i", "500", "-o"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());
}

#[test]
fn rejects_a_zero_span() {
    dembrot()
        .args(&["-0.75", "0", "0", "-s", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Span must be greater than zero"));
}

#[test]
fn rejects_a_partial_view() {
    dembrot()
        .args(&["-0.75", "0", "-s", "8"])
        .assert()
        .failure();
}

#[test]
fn rejects_a_small_escape_radius() {
    dembrot()
        .args(&["-e", "1", "-s", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Escape radius must be greater than one"));
}

#[test]
fn rejects_zero_iterations() {
    dembrot()
        .args(&["-i", "0", "-s", "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Iteration count must be at least one"));
}

#[test]
fn reports_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("dir.png");
    dembrot()
        .args(&["-s", "8", "-i", "50", "-o"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Render failure"));
}
