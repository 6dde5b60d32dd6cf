use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;

/// Computes the downscaled dimensions for an image wider than `max_width`.
/// Width snaps to `max_width`; height is scaled by the same ratio and rounded
/// down to a whole pixel. Returns `None` when no resize is needed (the
/// `max_width` boundary itself is inclusive).
pub fn calculate_resize_dimensions(
    original_cols: u32,
    original_rows: u32,
    max_width: u32,
) -> Option<(u32, u32)> {
    if original_cols <= max_width {
        return None;
    }
    let ratio = max_width as f64 / original_cols as f64;
    let new_rows = (original_rows as f64 * ratio) as u32;
    Some((max_width, new_rows))
}

/// Lanczos3 downscale of an RGBA image to the given dimensions.
pub fn resize_rgba_image(
    image: RgbaImage,
    target_cols: u32,
    target_rows: u32,
) -> Result<RgbaImage, Box<dyn std::error::Error>> {
    let (cols, rows) = image.dimensions();

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(cols, rows, image.into_raw(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target_cols, target_rows, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_cols, target_rows, dst_image.into_vec())
        .ok_or_else(|| "resized buffer does not match target dimensions".into())
}

/// Downscales `image` when it is wider than `max_width`, preserving aspect
/// ratio. Returns the (possibly untouched) image and the new dimensions when
/// a resize happened.
pub fn shrink_to_max_width(
    image: RgbaImage,
    max_width: u32,
) -> Result<(RgbaImage, Option<(u32, u32)>), Box<dyn std::error::Error>> {
    let (cols, rows) = image.dimensions();
    match calculate_resize_dimensions(cols, rows, max_width) {
        Some((new_cols, new_rows)) => {
            let resized = resize_rgba_image(image, new_cols, new_rows)?;
            Ok((resized, Some((new_cols, new_rows))))
        }
        None => Ok((image, None)),
    }
}
