pub mod codec;
pub mod darken;
pub mod logo;
pub mod pipeline;
pub mod resize;
pub mod text;
