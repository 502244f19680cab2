pub mod mesh;
pub mod sticker;
