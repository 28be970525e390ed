use inkform_signature::{SignaturePad, error::SignatureError};

fn pad() -> SignaturePad {
    SignaturePad::new(64, 32, 1.0).unwrap()
}

fn draw_stroke(pad: &mut SignaturePad) {
    pad.pointer_down(4.0, 4.0);
    pad.pointer_move(20.0, 4.0);
    pad.pointer_move(40.0, 4.0);
    pad.pointer_up();
}

#[test]
fn new_pad_has_no_ink() {
    assert!(!pad().has_ink());
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(matches!(
        SignaturePad::new(0, 32, 1.0),
        Err(SignatureError::EmptySurface { width: 0, height: 32 })
    ));
    assert!(matches!(
        SignaturePad::new(64, 0, 1.0),
        Err(SignatureError::EmptySurface { width: 64, height: 0 })
    ));
}

#[test]
fn invalid_device_pixel_ratio_falls_back_to_one() {
    let pad = SignaturePad::new(64, 32, f32::NAN).unwrap();
    assert_eq!(pad.device_pixel_ratio(), 1.0);
    assert_eq!(pad.pixel_dimensions(), (64, 32));

    let pad = SignaturePad::new(64, 32, -2.0).unwrap();
    assert_eq!(pad.device_pixel_ratio(), 1.0);
}

#[test]
fn device_pixel_ratio_scales_the_backing_buffer() {
    let pad = SignaturePad::new(100, 50, 2.0).unwrap();
    assert_eq!(pad.size(), (100, 50));
    assert_eq!(pad.pixel_dimensions(), (200, 100));
}

#[test]
fn stroke_leaves_ink() {
    let mut pad = pad();
    draw_stroke(&mut pad);
    assert!(pad.has_ink());
}

#[test]
fn moves_while_pointer_up_are_ignored() {
    let mut pad = pad();
    pad.pointer_move(10.0, 4.0);
    pad.pointer_move(30.0, 4.0);
    assert!(!pad.has_ink());
}

#[test]
fn tap_without_movement_draws_nothing() {
    let mut pad = pad();
    pad.pointer_down(10.0, 10.0);
    pad.pointer_up();
    assert!(!pad.has_ink());

    pad.pointer_down(10.0, 10.0);
    pad.pointer_move(10.0, 10.0);
    pad.pointer_up();
    assert!(!pad.has_ink());
}

#[test]
fn clear_wipes_all_strokes() {
    let mut pad = pad();
    draw_stroke(&mut pad);
    assert!(pad.has_ink());

    pad.clear();
    assert!(!pad.has_ink());

    draw_stroke(&mut pad);
    assert!(pad.has_ink());
}

#[test]
fn resize_discards_strokes_and_rescales() {
    let mut pad = SignaturePad::new(100, 50, 2.0).unwrap();
    draw_stroke(&mut pad);
    assert!(pad.has_ink());

    pad.resize(64, 32).unwrap();
    assert_eq!(pad.size(), (64, 32));
    assert_eq!(pad.pixel_dimensions(), (128, 64));
    assert!(!pad.has_ink());

    assert!(matches!(
        pad.resize(0, 0),
        Err(SignatureError::EmptySurface { width: 0, height: 0 })
    ));
}

#[test]
fn export_composites_ink_over_opaque_background() {
    let mut pad = pad();
    draw_stroke(&mut pad);

    let png = pad.export_png().unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (64, 32));

    for pixel in decoded.pixels() {
        assert_eq!(pixel[3], 255);
    }

    let inked = decoded.get_pixel(20, 4);
    assert!(inked[0] < 128, "stroke pixel should be dark, got {inked:?}");

    let blank = decoded.get_pixel(0, 0);
    assert_eq!(blank[0], 255);
    assert_eq!(blank[1], 255);
    assert_eq!(blank[2], 255);
}

#[test]
fn export_of_blank_pad_is_all_white() {
    let png = pad().export_png().unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();

    for pixel in decoded.pixels() {
        assert_eq!(pixel[0], 255);
        assert_eq!(pixel[3], 255);
    }
}
