pub(crate) mod measure;
pub(crate) mod parley_text;
pub(crate) mod wrap;
