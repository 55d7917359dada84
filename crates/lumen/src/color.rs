//! Linear colors and their packed 24-bit representation.
//!
//! Shading works on [Rgb] (through [crate::math::vec::RgbAsVec3Ext]), the output of a render is a
//! buffer of [PackedRgb].
use bytemuck::{Pod, Zeroable};

use crate::math::vec::{RgbAsVec3Ext, Vec3, Vec3AsRgbExt};

/// Linear RGB color, each channel nominally in `[0, 1]`. Values outside of that range are allowed
/// while shading and are clamped when packed.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }

    pub fn r(&self) -> f32 {
        self.0[0]
    }
    pub fn g(&self) -> f32 {
        self.0[1]
    }
    pub fn b(&self) -> f32 {
        self.0[2]
    }

    pub fn clamp(self) -> Self {
        self.vec().clamp(Vec3::ZERO, Vec3::ONE).rgb()
    }

    /// Scale to `[0, 255]` and truncate each channel.
    ///
    /// The color is expected to be clamped already, see [Rgb::clamp].
    pub fn pack(self) -> PackedRgb {
        let [r, g, b] = (self.vec() * 255.).to_array().map(|c| (c as u32).min(255));
        PackedRgb((r << 16) | (g << 8) | b)
    }
}

/// A color packed as `0x00RRGGBB`.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct PackedRgb(pub u32);

impl PackedRgb {
    pub const BLACK: PackedRgb = PackedRgb(0x000000);
    pub const WHITE: PackedRgb = PackedRgb(0xFFFFFF);

    pub fn channels(self) -> [u8; 3] {
        let [_, r, g, b] = self.0.to_be_bytes();
        [r, g, b]
    }

    pub fn from_channels([r, g, b]: [u8; 3]) -> Self {
        PackedRgb(u32::from_be_bytes([0, r, g, b]))
    }

    pub fn unpack(self) -> Rgb {
        let [r, g, b] = self.channels().map(|c| c as f32 / 255.);
        Rgb([r, g, b])
    }
}

impl From<Rgb> for PackedRgb {
    fn from(color: Rgb) -> Self {
        color.clamp().pack()
    }
}

pub mod linear {
    use super::Rgb;

    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::{linear, PackedRgb, Rgb};

    #[test]
    fn pack_puts_red_in_high_byte() {
        assert_eq!(linear::RED.pack(), PackedRgb(0xFF0000));
        assert_eq!(linear::GREEN.pack(), PackedRgb(0x00FF00));
        assert_eq!(linear::BLUE.pack(), PackedRgb(0x0000FF));
        assert_eq!(linear::WHITE.pack(), PackedRgb::WHITE);
    }

    #[test]
    fn pack_truncates() {
        // 0.25 * 255 = 63.75
        assert_eq!(Rgb::new(0.25, 0.25, 1.0).pack(), PackedRgb(0x3F3FFF));
    }

    #[test]
    fn conversion_clamps() {
        let packed: PackedRgb = Rgb::new(2.0, -1.0, 0.5).into();
        assert_eq!(packed.channels(), [255, 0, 127]);
    }

    #[test]
    fn unpack_matches_channel_order() {
        let packed = PackedRgb::from_channels([10, 20, 30]);
        assert_eq!(packed, PackedRgb(0x0A141E));
        let color = packed.unpack();
        assert!((color.r() - 10. / 255.).abs() < 1e-6);
        assert!((color.g() - 20. / 255.).abs() < 1e-6);
        assert!((color.b() - 30. / 255.).abs() < 1e-6);
    }
}
