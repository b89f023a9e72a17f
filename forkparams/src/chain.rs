//! Types describing a chain's network variants and the parameter sets that define them
pub mod network;
pub mod params;
