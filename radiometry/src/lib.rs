/// RGB radiance values and their conversion to displayable 8-bit channels.
pub mod color;
