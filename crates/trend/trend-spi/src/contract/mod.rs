//! Contract definitions for trend characterisation.


pub use stationarity_test::StationarityTest;
