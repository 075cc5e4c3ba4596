//! Content module - the fixed content shown on the home page

mod features;

pub use features::{feature_list, FeatureRecord};
