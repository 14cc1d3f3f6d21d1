mod naming;

pub use naming::validate_model;
