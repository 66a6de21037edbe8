pub(crate) mod background;
pub(crate) mod banner;
pub(crate) mod logo;
pub(crate) mod persist;
pub(crate) mod pills;
