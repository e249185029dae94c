pub(crate) mod check;
pub(crate) mod install;
pub(crate) mod render;
pub(crate) mod service;
