pub(crate) mod defaults;
pub(crate) mod model;
pub(crate) mod project;
pub(crate) mod templates;
