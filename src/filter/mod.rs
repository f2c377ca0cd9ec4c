pub(crate) mod blend;
pub(crate) mod neighborhood;
pub(crate) mod reproject;
pub(crate) mod sharpen;
