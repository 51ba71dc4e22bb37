//! Data region, root directory and cluster chains
pub(crate) mod directory;
pub(crate) mod entry;
pub(crate) mod file;
pub(crate) mod meta;
pub(crate) mod root;
