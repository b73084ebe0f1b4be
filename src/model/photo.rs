use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Fixed 4:5 output of the capture pipeline.
pub const CAPTURE_WIDTH: u32 = 800;
pub const CAPTURE_HEIGHT: u32 = 1000;
/// Encode quality used for captured photos.
pub const CAPTURE_QUALITY: f32 = 0.8;

/// Raw RGBA8 frame as handed over by a camera stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);
        Self { width, height, pixels }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }
}

/// Source rectangle `(sx, sy, sw, sh)` for a centered crop of a
/// `src_w` x `src_h` frame to the aspect ratio of `target_w` x `target_h`.
/// A source wider than the target loses width, a taller one loses height.
pub fn crop_region(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> (u32, u32, u32, u32) {
    let source_ratio = src_w as f64 / src_h as f64;
    let target_ratio = target_w as f64 / target_h as f64;

    if source_ratio > target_ratio {
        let s_height = src_h;
        let s_width = (src_h as f64 * target_ratio).round() as u32;
        let sx = (src_w - s_width) / 2;
        (sx, 0, s_width, s_height)
    } else {
        let s_width = src_w;
        let s_height = (src_w as f64 / target_ratio).round() as u32;
        let sy = (src_h - s_height) / 2;
        (0, sy, s_width, s_height)
    }
}

/// Render a live frame into the fixed capture output: centered crop to 4:5,
/// horizontal mirror to match the selfie preview, nearest-neighbour resample
/// to 800x1000.
pub fn render_capture(frame: &Frame) -> Frame {
    let (sx, sy, sw, sh) = crop_region(frame.width, frame.height, CAPTURE_WIDTH, CAPTURE_HEIGHT);

    let mut pixels = Vec::with_capacity((CAPTURE_WIDTH * CAPTURE_HEIGHT * 4) as usize);
    for y in 0..CAPTURE_HEIGHT {
        let src_y = sy + y * sh / CAPTURE_HEIGHT;
        for x in 0..CAPTURE_WIDTH {
            // mirrored: the leftmost output column samples the rightmost
            // source column
            let mx = CAPTURE_WIDTH - 1 - x;
            let src_x = sx + mx * sw / CAPTURE_WIDTH;
            pixels.extend_from_slice(&frame.pixel(src_x, src_y));
        }
    }

    Frame::new(CAPTURE_WIDTH, CAPTURE_HEIGHT, pixels)
}

/// Encoded image payload attached to a record, either a processed camera
/// capture or a picked attachment file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoData {
    pub payload: String,
}

impl PhotoData {
    /// Encode a rendered capture frame. Channel quantization stands in for
    /// the canvas JPEG encode at the given quality; the payload is base64.
    pub fn encode(frame: &Frame, quality: f32) -> Self {
        let step = 1 + ((1.0 - quality.clamp(0.0, 1.0)) * 31.0).round() as u16;
        let quantized: Vec<u8> = frame
            .pixels
            .iter()
            .map(|&p| ((p as u16 / step) * step).min(255) as u8)
            .collect();
        Self {
            payload: STANDARD.encode(&quantized),
        }
    }

    /// Attachment path for leave/sick submissions: the picked file is read
    /// fully into memory and encoded as-is. No size or type validation.
    pub fn from_file_bytes(bytes: &[u8]) -> Self {
        Self {
            payload: STANDARD.encode(bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_frame(width: u32, height: u32, left: [u8; 4], right: [u8; 4]) -> Frame {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _y in 0..height {
            for x in 0..width {
                let c = if x < width / 2 { left } else { right };
                pixels.extend_from_slice(&c);
            }
        }
        Frame::new(width, height, pixels)
    }

    #[test]
    fn wide_source_crops_horizontally_and_centers() {
        // 1280x720 is wider than 4:5: keep full height, crop width
        assert_eq!(crop_region(1280, 720, 800, 1000), (352, 0, 576, 720));
    }

    #[test]
    fn tall_source_crops_vertically_and_centers() {
        // 720x1280 is taller than 4:5: keep full width, crop height
        assert_eq!(crop_region(720, 1280, 800, 1000), (0, 190, 720, 900));
    }

    #[test]
    fn capture_output_is_always_fixed_size() {
        for (w, h) in [(1280, 720), (720, 1280), (800, 1000), (64, 480)] {
            let out = render_capture(&split_frame(w, h, [10, 10, 10, 255], [200, 200, 200, 255]));
            assert_eq!((out.width, out.height), (CAPTURE_WIDTH, CAPTURE_HEIGHT));
            assert_eq!(out.pixels.len(), (CAPTURE_WIDTH * CAPTURE_HEIGHT * 4) as usize);
        }
    }

    #[test]
    fn capture_mirrors_horizontally() {
        let red = [255, 0, 0, 255];
        let blue = [0, 0, 255, 255];
        let out = render_capture(&split_frame(800, 1000, red, blue));
        // source left half is red, so the mirrored output shows red on the right
        assert_eq!(out.pixel(0, 500), blue);
        assert_eq!(out.pixel(CAPTURE_WIDTH - 1, 500), red);
    }

    #[test]
    fn file_attachment_round_trips_unvalidated() {
        use base64::Engine as _;
        use base64::engine::general_purpose::STANDARD;

        let bytes = b"%PDF-1.4 bukan gambar sama sekali";
        let photo = PhotoData::from_file_bytes(bytes);
        assert_eq!(STANDARD.decode(&photo.payload).unwrap(), bytes);
    }

    #[test]
    fn encode_quantizes_channels() {
        let frame = split_frame(8, 10, [13, 77, 201, 255], [13, 77, 201, 255]);
        let photo = PhotoData::encode(&frame, CAPTURE_QUALITY);
        let decoded = STANDARD.decode(&photo.payload).unwrap();
        // quality 0.8 quantizes to steps of 7
        assert_eq!(&decoded[..4], &[7, 77, 196, 252]);
    }
}
