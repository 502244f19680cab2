pub mod anchors;
pub mod passes;
pub mod pipeline;
