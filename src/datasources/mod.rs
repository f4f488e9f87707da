pub mod mock_forecast;

pub use mock_forecast::MockForecastSource;
