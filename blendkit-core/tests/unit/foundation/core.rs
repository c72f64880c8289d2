use super::*;

#[test]
fn new_rejects_zero_dimensions() {
    let err = Image::new(0, 4, Vec::new()).unwrap_err();
    assert!(matches!(
        err,
        BlendkitError::InvalidDimensions {
            width: 0,
            height: 4
        }
    ));
}

#[test]
fn new_rejects_mismatched_buffer() {
    let err = Image::new(2, 2, vec![0; 15]).unwrap_err();
    assert!(matches!(
        err,
        BlendkitError::InvalidImageBuffer {
            expected: 16,
            actual: 15,
            ..
        }
    ));
}

#[test]
fn pixel_accessors_are_bounds_checked() {
    let mut img = Image::filled(3, 2, [1, 2, 3, 4]).unwrap();
    assert_eq!(img.pixel(2, 1), Some([1, 2, 3, 4]));
    assert_eq!(img.pixel(3, 0), None);
    assert_eq!(img.pixel(0, 2), None);

    assert!(img.set_pixel(1, 1, [9, 8, 7, 6]));
    assert!(!img.set_pixel(1, 5, [9, 8, 7, 6]));
    assert_eq!(img.pixel(1, 1), Some([9, 8, 7, 6]));
    assert_eq!(&img.data()[16..20], &[9, 8, 7, 6]);
}

#[test]
fn rgba_image_conversion_roundtrips() {
    let src = image::RgbaImage::from_raw(2, 1, vec![10, 20, 30, 40, 50, 60, 70, 80]).unwrap();
    let img = Image::try_from(src.clone()).unwrap();
    assert_eq!(img.size(), Size::new(2, 1));
    assert_eq!(img.into_rgba_image().unwrap(), src);
}

#[test]
fn empty_rgba_image_is_rejected() {
    let src = image::RgbaImage::new(0, 0);
    assert!(Image::try_from(src).is_err());
}
