pub(crate) mod space;
