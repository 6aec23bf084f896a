use std::path::Path;

use image::{GrayImage, ImageDecoder, ImageFormat, ImageReader, Luma, Rgb, Rgba};
use ndarray::Array2;

use crate::error::{RcasError, Result};
use crate::frame::{ColorFrame, ColorType, Frame, ImageInfo};

fn to_u16(v: f32) -> u16 {
    (v.clamp(0.0, 1.0) * 65535.0).round() as u16
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn buffer_error(w: usize, h: usize) -> RcasError {
    RcasError::InvalidDimensions {
        width: w,
        height: h,
    }
}

/// Read dimensions, channel layout and bit depth without decoding pixels.
pub fn image_info(path: &Path) -> Result<ImageInfo> {
    let decoder = ImageReader::open(path)?
        .with_guessed_format()?
        .into_decoder()?;
    let (width, height) = decoder.dimensions();
    let ct = decoder.color_type();

    let color_type = match (ct.has_color(), ct.has_alpha()) {
        (false, false) => ColorType::Gray,
        (false, true) => ColorType::GrayAlpha,
        (true, false) => ColorType::Rgb,
        (true, true) => ColorType::Rgba,
    };
    let bit_depth = (ct.bits_per_pixel() / ct.channel_count() as u16) as u8;

    Ok(ImageInfo {
        filename: path.to_path_buf(),
        width,
        height,
        bit_depth,
        color_type,
    })
}

/// Save a frame as 16-bit grayscale TIFF.
pub fn save_tiff(frame: &Frame, path: &Path) -> Result<()> {
    let (h, w) = frame.data.dim();
    let pixels: Vec<u16> = frame.data.iter().map(|&v| to_u16(v)).collect();

    let img = image::ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels)
        .ok_or_else(|| buffer_error(w, h))?;
    img.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save a frame as grayscale PNG: 16-bit when the source had more than
/// 8 bits per channel, 8-bit otherwise.
pub fn save_png(frame: &Frame, path: &Path) -> Result<()> {
    let (h, w) = frame.data.dim();

    if frame.original_bit_depth > 8 {
        let pixels: Vec<u16> = frame.data.iter().map(|&v| to_u16(v)).collect();
        let img = image::ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels)
            .ok_or_else(|| buffer_error(w, h))?;
        img.save_with_format(path, ImageFormat::Png)?;
    } else {
        let mut img = GrayImage::new(w as u32, h as u32);
        for row in 0..h {
            for col in 0..w {
                let val = to_u8(frame.data[[row, col]]);
                img.put_pixel(col as u32, row as u32, Luma([val]));
            }
        }
        img.save_with_format(path, ImageFormat::Png)?;
    }
    Ok(())
}

/// Save frame, choosing format from file extension.
pub fn save_image(frame: &Frame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => save_tiff(frame, path),
        Some("png") => save_png(frame, path),
        _ => save_tiff(frame, path),
    }
}

/// Interleave the planes as R, G, B[, A] samples converted by `convert`.
fn interleave<T>(color: &ColorFrame, convert: impl Fn(f32) -> T) -> Vec<T> {
    let (h, w) = (color.height(), color.width());
    let channels = if color.has_alpha() { 4 } else { 3 };

    let mut pixels = Vec::with_capacity(h * w * channels);
    for row in 0..h {
        for col in 0..w {
            pixels.push(convert(color.red.data[[row, col]]));
            pixels.push(convert(color.green.data[[row, col]]));
            pixels.push(convert(color.blue.data[[row, col]]));
            if let Some(ref alpha) = color.alpha {
                pixels.push(convert(alpha.data[[row, col]]));
            }
        }
    }
    pixels
}

/// Save a ColorFrame as 16-bit RGB or RGBA TIFF.
pub fn save_color_tiff(color: &ColorFrame, path: &Path) -> Result<()> {
    color.validate()?;
    let h = color.height();
    let w = color.width();
    let pixels = interleave(color, to_u16);

    if color.has_alpha() {
        let img = image::ImageBuffer::<Rgba<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels)
            .ok_or_else(|| buffer_error(w, h))?;
        img.save_with_format(path, ImageFormat::Tiff)?;
    } else {
        let img = image::ImageBuffer::<Rgb<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels)
            .ok_or_else(|| buffer_error(w, h))?;
        img.save_with_format(path, ImageFormat::Tiff)?;
    }
    Ok(())
}

/// Save a ColorFrame as RGB or RGBA PNG: 16-bit when the source had more
/// than 8 bits per channel, 8-bit otherwise.
pub fn save_color_png(color: &ColorFrame, path: &Path) -> Result<()> {
    color.validate()?;
    let (w, h) = (color.width(), color.height());
    let (wu, hu) = (w as u32, h as u32);

    match (color.red.original_bit_depth > 8, color.has_alpha()) {
        (true, true) => {
            image::ImageBuffer::<Rgba<u16>, Vec<u16>>::from_raw(wu, hu, interleave(color, to_u16))
                .ok_or_else(|| buffer_error(w, h))?
                .save_with_format(path, ImageFormat::Png)?
        }
        (true, false) => {
            image::ImageBuffer::<Rgb<u16>, Vec<u16>>::from_raw(wu, hu, interleave(color, to_u16))
                .ok_or_else(|| buffer_error(w, h))?
                .save_with_format(path, ImageFormat::Png)?
        }
        (false, true) => image::RgbaImage::from_raw(wu, hu, interleave(color, to_u8))
            .ok_or_else(|| buffer_error(w, h))?
            .save_with_format(path, ImageFormat::Png)?,
        (false, false) => image::RgbImage::from_raw(wu, hu, interleave(color, to_u8))
            .ok_or_else(|| buffer_error(w, h))?
            .save_with_format(path, ImageFormat::Png)?,
    }
    Ok(())
}

/// Save a ColorFrame, choosing format from file extension.
pub fn save_color_image(color: &ColorFrame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => save_color_tiff(color, path),
        Some("png") => save_color_png(color, path),
        _ => save_color_tiff(color, path),
    }
}

fn source_bit_depth(img: &image::DynamicImage) -> u8 {
    let ct = img.color();
    (ct.bits_per_pixel() / ct.channel_count() as u16).min(16) as u8
}

/// Load a grayscale image file into a Frame.
pub fn load_image(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    let bit_depth = source_bit_depth(&img);
    let gray = img.to_luma32f();
    let (w, h) = gray.dimensions();

    let data = Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
        gray.get_pixel(col as u32, row as u32).0[0]
    });

    Ok(Frame::new(data, bit_depth))
}

/// Load an image file into a ColorFrame, keeping its alpha channel if it has
/// one. Gray sources are replicated into R, G and B.
pub fn load_color_image(path: &Path) -> Result<ColorFrame> {
    let img = image::open(path)?;
    let bit_depth = source_bit_depth(&img);
    let has_alpha = img.color().has_alpha();
    let rgba = img.to_rgba32f();
    let (w, h) = (rgba.width() as usize, rgba.height() as usize);

    let plane = |c: usize| {
        let data = Array2::from_shape_fn((h, w), |(row, col)| {
            rgba.get_pixel(col as u32, row as u32).0[c]
        });
        Frame::new(data, bit_depth)
    };

    Ok(ColorFrame {
        red: plane(0),
        green: plane(1),
        blue: plane(2),
        alpha: has_alpha.then(|| plane(3)),
    })
}
