//! PNG decoding to and encoding from [`Raster`].
//!
//! Any 8/16-bit grayscale, grayscale+alpha, RGB, RGBA or indexed PNG decodes
//! to RGBA8. Output is always 8-bit RGBA.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tri_pixelate::Raster;

use crate::error::CodecError;

/// Decode a PNG stream into an RGBA raster.
pub fn decode_png<R: Read>(reader: R) -> Result<Raster, CodecError> {
    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let data = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(CodecError::UnsupportedFormat {
            color: info.color_type,
            depth: info.bit_depth,
        });
    }

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => data.to_vec(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        // EXPAND turns palettes into RGB(A)
        png::ColorType::Indexed => {
            return Err(CodecError::UnsupportedFormat {
                color: info.color_type,
                depth: info.bit_depth,
            })
        }
    };

    let raster = Raster::from_rgba8(info.width as usize, info.height as usize, &rgba)?;
    tracing::debug!(
        width = raster.width(),
        height = raster.height(),
        color = ?info.color_type,
        "Decoded PNG"
    );
    Ok(raster)
}

/// Encode a raster as an 8-bit RGBA PNG.
pub fn encode_png<W: Write>(raster: &Raster, writer: W) -> Result<(), CodecError> {
    let too_large = || CodecError::TooLarge {
        width: raster.width(),
        height: raster.height(),
    };
    let width = u32::try_from(raster.width()).map_err(|_| too_large())?;
    let height = u32::try_from(raster.height()).map_err(|_| too_large())?;

    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&raster.to_rgba8())?;
    writer.finish()?;
    Ok(())
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<Raster, CodecError> {
    let file = File::open(path).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_png(BufReader::new(file))
}

/// Encode a raster and write it to a PNG file, replacing any existing file.
pub fn write_png(raster: &Raster, path: &Path) -> Result<(), CodecError> {
    let io_error = |source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut out = BufWriter::new(file);
    encode_png(raster, &mut out)?;
    out.flush().map_err(io_error)
}
