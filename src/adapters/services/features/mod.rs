/// Acoustic functionals extractor adapters
pub mod opensmile;

pub use opensmile::OpenSmileExtractor;
