pub(crate) mod config;
pub(crate) mod frame;
pub(crate) mod history;
pub(crate) mod session;
