pub mod crop;
pub mod pipeline;
pub mod resize;
pub mod sheet;
