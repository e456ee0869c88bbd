//! PFM (Portable FloatMap) single-channel support.
//!
//! Reads and writes the grayscale `Pf` variant of the PFM format used by
//! depth estimation tools:
//!
//! ```text
//! line 1: "Pf"                (ASCII, newline-terminated magic)
//! line 2: "<width> <height>"  (ASCII decimal integers)
//! line 3: "<scale>"           (ASCII float; sign encodes byte order,
//!                              must be negative = little-endian)
//! then:   width*height raw 32-bit floats, row-major, no padding
//! ```
//!
//! The decoder rescales samples to `[0, 1]` against the global min/max
//! observed while reading, so callers receive a normalized depth grid.
//! Rows are stored in the order they appear in the stream; no vertical
//! flip is applied even though the PFM convention stores scanlines
//! bottom-to-top. Consumers that need display orientation flip
//! themselves.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use depth_types::DepthGrid;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Magic token of the single-channel float-map variant.
const MAGIC: &str = "Pf";

/// Scale token written by [`write_pfm`]; negative = little-endian.
const WRITE_SCALE: &str = "-1.0";

/// Upper bound on either axis of a decoded float-map.
///
/// Hostile headers can claim arbitrarily large dimensions; rejecting
/// them here keeps `width * height` well inside `usize` and fails
/// before any sample buffer is allocated.
const MAX_DIMENSION: usize = 1 << 15;

/// Load a normalized depth grid from a PFM file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content is not a
/// valid single-channel little-endian PFM stream.
///
/// # Example
///
/// ```no_run
/// use depth_io::load_pfm;
///
/// let grid = load_pfm("depth.pfm").unwrap();
/// println!("decoded {}x{} depth field", grid.width(), grid.height());
/// ```
pub fn load_pfm<P: AsRef<Path>>(path: P) -> IoResult<DepthGrid> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;

    read_pfm(BufReader::new(file))
}

/// Decode a normalized depth grid from a PFM byte stream.
///
/// Header tokens are validated before any sample byte is consumed; a bad
/// magic or a non-negative scale aborts immediately. Samples are read
/// row-major into `grid[x, y]`, tracking the global minimum and maximum,
/// then rescaled to `(v - min) / (max - min)`. A uniform stream
/// (`max == min`) decodes to all zeros.
///
/// # Errors
///
/// Returns an error for a malformed header, a truncated payload or a
/// non-finite sample. No partial grid is ever returned.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use depth_io::read_pfm;
///
/// let mut bytes = b"Pf\n2 1\n-1.0\n".to_vec();
/// bytes.extend_from_slice(&1.0_f32.to_le_bytes());
/// bytes.extend_from_slice(&3.0_f32.to_le_bytes());
///
/// let grid = read_pfm(Cursor::new(bytes)).unwrap();
/// assert_eq!(grid.get(0, 0), 0.0);
/// assert_eq!(grid.get(1, 0), 1.0);
/// ```
pub fn read_pfm<R: Read>(mut reader: R) -> IoResult<DepthGrid> {
    let magic = read_header_token(&mut reader)?;
    if magic != MAGIC {
        return Err(IoError::InvalidMagic { found: magic });
    }

    let (width, height) = parse_dimensions(&read_header_token(&mut reader)?)?;

    let scale: f32 = read_header_token(&mut reader)?.trim().parse()?;
    if scale >= 0.0 {
        return Err(IoError::InvalidScale { scale });
    }

    let mut grid = DepthGrid::new(width, height);
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    let mut buf = [0u8; 4];

    for y in 0..height {
        for x in 0..width {
            let position = (y * width + x) as u64;
            reader.read_exact(&mut buf).map_err(|e| {
                if e.kind() == std::io::ErrorKind::UnexpectedEof {
                    IoError::UnexpectedEof { position }
                } else {
                    IoError::Io(e)
                }
            })?;

            let value = f32::from_le_bytes(buf);
            if !value.is_finite() {
                return Err(IoError::NonFiniteSample { position });
            }

            grid.set(x, y, value);
            min = min.min(value);
            max = max.max(value);
        }
    }

    debug!(width, height, min, max, "decoded float-map");

    normalize(&mut grid, min, max);
    Ok(grid)
}

/// Save a depth grid to a PFM file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_pfm<P: AsRef<Path>>(grid: &DepthGrid, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_pfm(grid, BufWriter::new(file))
}

/// Encode a depth grid as a little-endian single-channel PFM stream.
///
/// Samples are written as-is; no normalization or inversion is applied
/// on the way out.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_pfm<W: Write>(grid: &DepthGrid, mut writer: W) -> IoResult<()> {
    write!(
        writer,
        "{MAGIC}\n{} {}\n{WRITE_SCALE}\n",
        grid.width(),
        grid.height()
    )?;

    for &value in grid.as_slice() {
        writer.write_all(&value.to_le_bytes())?;
    }

    Ok(())
}

/// Read one newline-terminated ASCII header token.
fn read_header_token<R: Read>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut byte = [0u8; 1];

    loop {
        reader.read_exact(&mut byte).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                IoError::invalid_header("stream ended inside the header")
            } else {
                IoError::Io(e)
            }
        })?;

        if byte[0] == b'\n' {
            return Ok(token);
        }
        token.push(char::from(byte[0]));
    }
}

/// Parse the `"<width> <height>"` token as two positive integers.
fn parse_dimensions(token: &str) -> IoResult<(usize, usize)> {
    let mut parts = token.split_whitespace();
    let (Some(w), Some(h), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(IoError::invalid_header(format!(
            "expected \"<width> <height>\", found {token:?}"
        )));
    };

    let width: usize = w.parse()?;
    let height: usize = h.parse()?;
    if width == 0 || height == 0 {
        return Err(IoError::invalid_header(format!(
            "dimensions must be positive, found {width}x{height}"
        )));
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(IoError::invalid_header(format!(
            "dimensions {width}x{height} exceed the {MAX_DIMENSION} per-axis limit"
        )));
    }

    Ok((width, height))
}

/// Rescale every cell to `(v - min) / (max - min)`.
///
/// When `max == min` the divisor is treated as zero and every cell
/// becomes 0.
fn normalize(grid: &mut DepthGrid, min: f32, max: f32) {
    let range = max - min;
    let inv_range = if range > 0.0 { 1.0 / range } else { 0.0 };
    grid.map_in_place(|v| (v - min) * inv_range);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::cast_precision_loss)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Cursor;

    fn encode(width: usize, height: usize, samples: &[f32]) -> Vec<u8> {
        let mut bytes = format!("Pf\n{width} {height}\n-1.0\n").into_bytes();
        for v in samples {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn decode_normalizes_against_min_max() {
        let bytes = encode(2, 2, &[2.0, 4.0, 6.0, 10.0]);
        let grid = read_pfm(Cursor::new(bytes)).unwrap();

        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_relative_eq!(grid.get(0, 0), 0.0);
        assert_relative_eq!(grid.get(1, 0), 0.25);
        assert_relative_eq!(grid.get(0, 1), 0.5);
        assert_relative_eq!(grid.get(1, 1), 1.0);
    }

    #[test]
    fn uniform_stream_decodes_to_zero() {
        let bytes = encode(3, 2, &[7.5; 6]);
        let grid = read_pfm(Cursor::new(bytes)).unwrap();
        assert!(grid.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn rows_are_not_flipped() {
        // PFM's display convention stores scanlines bottom-to-top, but the
        // decoder keeps the literal stream order: the first row read lands
        // at y = 0.
        let bytes = encode(1, 3, &[0.0, 1.0, 2.0]);
        let grid = read_pfm(Cursor::new(bytes)).unwrap();
        assert_relative_eq!(grid.get(0, 0), 0.0);
        assert_relative_eq!(grid.get(0, 1), 0.5);
        assert_relative_eq!(grid.get(0, 2), 1.0);
    }

    #[test]
    fn rejects_bad_magic_before_samples() {
        let mut bytes = b"PF\n2 2\n-1.0\n".to_vec();
        bytes.extend_from_slice(&[0u8; 16]);
        let result = read_pfm(Cursor::new(bytes));
        assert!(matches!(result, Err(IoError::InvalidMagic { found }) if found == "PF"));
    }

    #[test]
    fn rejects_non_negative_scale_before_samples() {
        // Header only, no payload: the scale check must fire first.
        let bytes = b"Pf\n2 2\n1.0\n".to_vec();
        let result = read_pfm(Cursor::new(bytes));
        assert!(matches!(result, Err(IoError::InvalidScale { scale }) if scale == 1.0));

        let bytes = b"Pf\n2 2\n0.0\n".to_vec();
        assert!(matches!(
            read_pfm(Cursor::new(bytes)),
            Err(IoError::InvalidScale { .. })
        ));
    }

    #[test]
    fn rejects_malformed_dimensions() {
        let bytes = b"Pf\n2\n-1.0\n".to_vec();
        assert!(matches!(
            read_pfm(Cursor::new(bytes)),
            Err(IoError::InvalidHeader { .. })
        ));

        let bytes = b"Pf\n0 4\n-1.0\n".to_vec();
        assert!(matches!(
            read_pfm(Cursor::new(bytes)),
            Err(IoError::InvalidHeader { .. })
        ));
    }

    #[test]
    fn rejects_oversized_dimensions_before_allocation() {
        // A header claiming usize::MAX-scale dimensions must fail cleanly
        // instead of overflowing the sample-count arithmetic.
        let bytes = b"Pf\n18446744073709551615 2\n-1.0\n".to_vec();
        assert!(matches!(
            read_pfm(Cursor::new(bytes)),
            Err(IoError::InvalidHeader { .. })
        ));

        // Merely-huge dimensions are refused before the buffer is built.
        let bytes = b"Pf\n40000 40000\n-1.0\n".to_vec();
        assert!(matches!(
            read_pfm(Cursor::new(bytes)),
            Err(IoError::InvalidHeader { .. })
        ));

        // The per-axis bound itself is still accepted (truncated payload,
        // but the header parses).
        let bytes = b"Pf\n32768 1\n-1.0\n".to_vec();
        assert!(matches!(
            read_pfm(Cursor::new(bytes)),
            Err(IoError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn truncated_payload_reports_sample_position() {
        let mut bytes = b"Pf\n2 2\n-1.0\n".to_vec();
        bytes.extend_from_slice(&1.0_f32.to_le_bytes());
        bytes.extend_from_slice(&2.0_f32.to_le_bytes());

        let result = read_pfm(Cursor::new(bytes));
        assert!(matches!(result, Err(IoError::UnexpectedEof { position: 2 })));
    }

    #[test]
    fn rejects_nan_samples() {
        let bytes = encode(2, 1, &[1.0, f32::NAN]);
        assert!(matches!(
            read_pfm(Cursor::new(bytes)),
            Err(IoError::NonFiniteSample { position: 1 })
        ));
    }

    #[test]
    fn write_then_read_roundtrip() {
        let samples: Vec<f32> = (0..12).map(|i| i as f32).collect();
        let source = DepthGrid::from_raw(4, 3, samples).unwrap();

        let mut bytes = Vec::new();
        write_pfm(&source, &mut bytes).unwrap();
        let decoded = read_pfm(Cursor::new(bytes)).unwrap();

        // Decoding normalizes: (v - min) / (max - min)
        for y in 0..3 {
            for x in 0..4 {
                let expected = source.get(x, y) / 11.0;
                assert_relative_eq!(decoded.get(x, y), expected, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("depth.pfm");

        let source = DepthGrid::from_raw(2, 2, vec![0.0, 1.0, 2.0, 3.0]).unwrap();
        save_pfm(&source, &path).unwrap();

        let decoded = load_pfm(&path).unwrap();
        assert_eq!(decoded.width(), 2);
        assert_eq!(decoded.height(), 2);
        assert_relative_eq!(decoded.get(1, 1), 1.0);
    }

    #[test]
    fn missing_file_is_distinguished() {
        let result = load_pfm("no_such_depth_map.pfm");
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }
}
