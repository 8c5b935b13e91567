mod normalize;

pub use normalize::ContentNormalizer;
