pub(crate) mod pattern;
pub(crate) mod sequence;
