//! Weather Tool
//!
//! Deterministic mock: no network call, always succeeds.

use async_trait::async_trait;

use agent_core::Tool;

pub struct WeatherTool;

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "weather"
    }

    fn description(&self) -> &str {
        "Get weather by city name"
    }

    async fn invoke(&self, city: &str) -> String {
        format!("The weather in {city} is 28°C with clear skies.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_weather_template() {
        let out = WeatherTool.invoke("Paris").await;
        assert_eq!(out, "The weather in Paris is 28°C with clear skies.");
    }
}
