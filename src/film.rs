use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use radiometry::color::Color;

/// Accumulated radiance for every pixel, stored row-major with the top
/// scanline first; pixel y-coordinates used by the camera count from the
/// bottom, so row `r` of the buffer is camera row `height - 1 - r`.
pub struct Film {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Film {
    pub fn new(width: u32, height: u32) -> Film {
        assert!(width > 0 && height > 0);
        Film {
            width,
            height,
            pixels: vec![Color::black(); (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Gamma-encoded 8-bit channels of every pixel, in buffer order.
    fn quantized(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            data.extend_from_slice(&color.gamma_encode().to_u8());
        }
        data
    }

    /// Writes the image as plain-text PPM (P3): a header with the
    /// dimensions and the maximum channel value, then whitespace-separated
    /// RGB triples, top scanline first.
    pub fn write_ppm(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);
        self.encode_ppm(&mut w)?;
        w.flush()
    }

    fn encode_ppm<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "P3\n{} {}\n{}\n", self.width, self.height, 255)?;
        for rgb in self.quantized().chunks(3) {
            write!(w, "{} {} {} ", rgb[0], rgb[1], rgb[2])?;
        }
        writeln!(w)
    }

    /// Writes the image as an 8-bit RGB PNG.
    pub fn write_png(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        let w = &mut BufWriter::new(file);

        let mut encoder = png::Encoder::new(w, self.width, self.height);
        encoder.set_color(png::ColorType::RGB);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        writer
            .write_image_data(&self.quantized())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ppm_header_and_triples() {
        let mut film = Film::new(2, 2);
        film.pixels_mut()[0] = Color::white();
        film.pixels_mut()[3] = Color::gray(0.25);

        let mut encoded = Vec::new();
        film.encode_ppm(&mut encoded).unwrap();
        let text = String::from_utf8(encoded).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("P3"));
        assert_eq!(lines.next(), Some("2 2"));
        assert_eq!(lines.next(), Some("255"));
        let body: Vec<&str> = lines.next().unwrap().split_whitespace().collect();
        assert_eq!(body.len(), 12);
        assert_eq!(&body[..3], &["255", "255", "255"]);
        // 0.25^(1/2.2) = 0.5325; 0.5325 * 255 + 0.5 rounds to 136.
        assert_eq!(&body[9..], &["136", "136", "136"]);
    }

    #[test]
    fn test_new_film_is_black() {
        let film = Film::new(3, 2);
        assert_eq!(film.pixels().len(), 6);
        assert!(film.pixels().iter().all(|c| c.is_black()));
    }
}
