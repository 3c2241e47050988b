mod vars;

pub use vars::Environment;
