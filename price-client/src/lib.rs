mod client;

pub use client::HttpEstimator;
