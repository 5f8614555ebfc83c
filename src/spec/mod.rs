pub(crate) mod keywords;
pub(crate) mod model;
pub(crate) mod validate;
