use super::*;

#[test]
fn solid_svg_fills_every_pixel() {
    let frame = rasterize_svg(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="8">
  <rect x="0" y="0" width="16" height="8" fill="#ff0000"/>
</svg>"##,
    )
    .unwrap();
    assert_eq!((frame.width, frame.height), (16, 8));
    assert_eq!(frame.data.len(), 16 * 8 * 4);
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(3, 5), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(16, 0), None);
}

#[test]
fn straight_alpha_undoes_premultiplication() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 0, 32, 128, 0, 0, 0, 0],
        premultiplied: true,
    };
    let straight = frame.to_straight_rgba8();
    assert_eq!(&straight[..4], &[128, 0, 64, 128]);
    assert_eq!(&straight[4..], &[0, 0, 0, 0]);
}

#[test]
fn garbage_is_a_render_error() {
    let err = rasterize_svg("not svg at all").unwrap_err();
    assert!(matches!(err, SunsetError::Render(_)));
}
