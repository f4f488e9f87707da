use crate::error::Result;
use crate::logic::AdvisoryReport;
use crate::ui::screens::AdvisorScreen;

/// State for the interactive advisory screen
pub struct App {
    pub should_quit: bool,

    // Data
    pub report: Option<AdvisoryReport>,

    // Screen state
    pub selected_day: usize,

    // UI state
    pub status_message: Option<String>,
    pub refreshing: bool,
    pub needs_refresh: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            report: None,
            selected_day: 0,
            status_message: None,
            refreshing: false,
            needs_refresh: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn request_refresh(&mut self) {
        self.needs_refresh = true;
        self.set_status("Refreshing forecast...");
    }

    /// Mark a requested refresh as in flight. Returns false when none was requested.
    ///
    /// The caller draws a frame between this and `finish_refresh` so the
    /// in-progress state is visible while the fetch is awaited.
    pub fn begin_refresh(&mut self) -> bool {
        if !self.needs_refresh {
            return false;
        }
        self.needs_refresh = false;
        self.refreshing = true;
        true
    }

    /// Apply the fetch result; a failed refresh keeps the previous report.
    pub fn finish_refresh(&mut self, result: Result<AdvisoryReport>) {
        self.refreshing = false;
        match result {
            Ok(report) => {
                let label = report.location.label();
                self.update_report(report);
                self.set_status(&format!("Forecast loaded for {}", label));
            }
            Err(e) => {
                tracing::warn!("Forecast refresh failed: {}", e);
                self.set_status(&format!("Refresh failed: {}", e));
            }
        }
    }

    pub fn screen(&self) -> AdvisorScreen<'_> {
        AdvisorScreen::new(self.report.as_ref())
            .with_selection(self.selected_day)
            .with_status(self.status_message.as_deref())
            .refreshing(self.refreshing)
    }

    pub fn update_report(&mut self, report: AdvisoryReport) {
        if self.selected_day >= report.forecast.len() {
            self.selected_day = 0;
        }
        self.report = Some(report);
    }

    pub fn next_day(&mut self) {
        let max = self.report.as_ref().map(|r| r.forecast.len()).unwrap_or(0);
        if max > 0 && self.selected_day < max - 1 {
            self.selected_day += 1;
        }
    }

    pub fn prev_day(&mut self) {
        if self.selected_day > 0 {
            self.selected_day -= 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;
    use crate::logic::compute_advisory;
    use crate::models::{ForecastDay, Location, WeatherCondition};
    use chrono::{NaiveDate, Utc};
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    fn rendered(app: &App) -> String {
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        app.screen().render(area, &mut buf);
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn report(days: u32) -> AdvisoryReport {
        let forecast: Vec<ForecastDay> = (0..days)
            .map(|i| {
                ForecastDay::new(
                    NaiveDate::from_ymd_opt(2024, 6, 1 + i).unwrap(),
                    28.0,
                    60.0,
                    8.0,
                    0.0,
                    WeatherCondition::Sunny,
                )
            })
            .collect();
        AdvisoryReport {
            location: Location::default(),
            fetched_at: Utc::now(),
            advisory: compute_advisory(&forecast[0], &forecast[1]),
            forecast,
        }
    }

    #[test]
    fn day_selection_is_bounded() {
        let mut app = App::new();
        app.next_day();
        assert_eq!(app.selected_day, 0);

        app.update_report(report(3));
        app.next_day();
        app.next_day();
        app.next_day();
        assert_eq!(app.selected_day, 2);

        app.prev_day();
        app.prev_day();
        app.prev_day();
        assert_eq!(app.selected_day, 0);
    }

    #[test]
    fn shorter_forecast_resets_selection() {
        let mut app = App::new();
        app.update_report(report(5));
        app.selected_day = 4;
        app.update_report(report(2));
        assert_eq!(app.selected_day, 0);
    }

    #[test]
    fn refresh_request_sets_status() {
        let mut app = App::new();
        app.request_refresh();
        assert!(app.needs_refresh);
        assert_eq!(app.status_message.as_deref(), Some("Refreshing forecast..."));
    }

    #[test]
    fn in_flight_refresh_is_drawn_before_it_finishes() {
        let mut app = App::new();
        assert!(!app.begin_refresh());

        app.request_refresh();
        assert!(app.begin_refresh());
        assert!(app.refreshing);
        assert!(!app.needs_refresh);

        let frame = rendered(&app);
        assert!(frame.contains("Fetching forecast..."));
        assert!(frame.contains("Refreshing forecast..."));

        app.finish_refresh(Ok(report(3)));
        assert!(!app.refreshing);
        assert!(app.report.is_some());
        assert!(!rendered(&app).contains("Fetching forecast..."));
    }

    #[test]
    fn failed_refresh_keeps_previous_report() {
        let mut app = App::new();
        app.update_report(report(3));

        app.request_refresh();
        app.begin_refresh();
        app.finish_refresh(Err(AdvisorError::DataSourceUnavailable("offline".into())));

        assert!(!app.refreshing);
        assert_eq!(app.report.as_ref().map(|r| r.forecast.len()), Some(3));
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Refresh failed")));
    }
}
