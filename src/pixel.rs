use bytemuck::{Pod, PodCastError, Zeroable};

#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imaginary: f64,
}

impl Complex {
    pub const ZERO: Self = Complex {
        real: 0.0,
        imaginary: 0.0,
    };
}

/// One evaluated pixel, packed for transfer: grid position plus its RGBA
/// colour in 8 bytes. The layout is fixed, so a whole batch can be handed
/// over as a flat byte buffer and read back without copying.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub x: u16,
    pub y: u16,
    pub rgba: [u8; 4],
}

/// The byte view of a packed pixel slice.
pub fn as_bytes(pixels: &[Pixel]) -> &[u8] {
    bytemuck::cast_slice(pixels)
}

/// Reads a byte buffer back as packed pixels. Fails when the buffer length
/// is not a multiple of 8 or its address is not 2-aligned.
pub fn from_bytes(bytes: &[u8]) -> Result<&[Pixel], PodCastError> {
    bytemuck::try_cast_slice(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_eight_bytes() {
        assert_eq!(std::mem::size_of::<Pixel>(), 8);
    }

    #[test]
    fn byte_view_round_trips() {
        let pixels = [
            Pixel {
                x: 7,
                y: 1,
                rgba: [0, 0, 41, 255],
            },
            Pixel {
                x: 0,
                y: 0,
                rgba: [0, 0, 0, 255],
            },
        ];
        let bytes = as_bytes(&pixels);
        assert_eq!(bytes.len(), 16);
        assert_eq!(from_bytes(bytes), Ok(&pixels[..]));
    }

    #[test]
    fn truncated_buffer_is_rejected() {
        let pixels = [Pixel {
            x: 3,
            y: 4,
            rgba: [10, 20, 30, 255],
        }];
        let bytes = as_bytes(&pixels);
        assert!(from_bytes(&bytes[..5]).is_err());
    }

    #[test]
    fn position_precedes_colour_in_the_layout() {
        let pixel = Pixel {
            x: 0x0201,
            y: 0x0403,
            rgba: [9, 8, 7, 255],
        };
        let bytes = as_bytes(std::slice::from_ref(&pixel));
        assert_eq!(&bytes[4..], &[9, 8, 7, 255]);
        assert_eq!(u16::from_ne_bytes([bytes[0], bytes[1]]), 0x0201);
        assert_eq!(u16::from_ne_bytes([bytes[2], bytes[3]]), 0x0403);
    }
}
