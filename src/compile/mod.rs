pub(crate) mod assets;
pub(crate) mod compiler;
pub(crate) mod project;
