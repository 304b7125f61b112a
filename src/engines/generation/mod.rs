pub mod sequence;
pub mod enhancement;

pub use sequence::SequenceGenerator;
pub use enhancement::Enhancer;
