#[allow(clippy::module_inception)]
pub mod info;
