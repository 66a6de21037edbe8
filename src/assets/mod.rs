pub(crate) mod decode;
#[cfg(feature = "fetch")]
pub(crate) mod http;
pub(crate) mod source;
