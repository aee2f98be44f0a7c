mod estimate;

pub use estimate::EstimateScreen;
