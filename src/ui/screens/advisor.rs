use crate::logic::AdvisoryReport;
use crate::models::ForecastDay;
use crate::ui::components::{Reading, ReadingGauge};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

/// Single-screen weather advisory: today's gauges, forecast strip,
/// risk badges and the recommended actions.
pub struct AdvisorScreen<'a> {
    pub report: Option<&'a AdvisoryReport>,
    pub selected_day: usize,
    pub status_message: Option<&'a str>,
    pub refreshing: bool,
}

impl<'a> AdvisorScreen<'a> {
    pub fn new(report: Option<&'a AdvisoryReport>) -> Self {
        Self {
            report,
            selected_day: 0,
            status_message: None,
            refreshing: false,
        }
    }

    pub fn with_selection(mut self, selected_day: usize) -> Self {
        self.selected_day = selected_day;
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }

    pub fn refreshing(mut self, refreshing: bool) -> Self {
        self.refreshing = refreshing;
        self
    }
}

impl Widget for AdvisorScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // Gauges for the selected day
                Constraint::Length(5), // Forecast strip
                Constraint::Length(5), // Risk badges
                Constraint::Min(5),    // Actions
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        self.render_header(chunks[0], buf);

        match self.report {
            Some(report) => {
                if let Some(day) = report.forecast.get(self.selected_day).or(report.today()) {
                    self.render_gauges(day, chunks[1], buf);
                }
                self.render_forecast_strip(report, chunks[2], buf);
                self.render_risks(report, chunks[3], buf);
                self.render_actions(report, chunks[4], buf);
            }
            None => {
                let msg = if self.refreshing {
                    "Fetching forecast..."
                } else {
                    "No forecast loaded - press [r] to fetch"
                };
                Paragraph::new(Span::styled(msg, Theme::dim())).render(chunks[2], buf);
            }
        }

        self.render_status_message(chunks[5], buf);
        self.render_nav(chunks[6], buf);
    }
}

impl AdvisorScreen<'_> {
    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let title = match self.report {
            Some(r) => format!(
                "Kisan Advisor - {} - {} {}",
                r.location.label(),
                r.advisory.condition_icon.symbol(),
                r.advisory.condition_label
            ),
            None => "Kisan Advisor".to_string(),
        };

        let block = Block::default()
            .title(Span::styled(title, Theme::title()))
            .borders(Borders::BOTTOM)
            .border_style(Theme::border());

        let info = match (self.report, self.refreshing) {
            (_, true) => "Refreshing...".to_string(),
            (Some(r), false) => match r.today() {
                Some(today) => format!(
                    "{} • updated {}",
                    today.date.format("%A, %d %b"),
                    r.fetched_at.format("%H:%M UTC")
                ),
                None => format!("updated {}", r.fetched_at.format("%H:%M UTC")),
            },
            (None, false) => "Never updated".to_string(),
        };
        Paragraph::new(Span::styled(info, Theme::dim()))
            .block(block)
            .render(area, buf);
    }

    fn render_gauges(&self, day: &ForecastDay, area: Rect, buf: &mut Buffer) {
        let gauge_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(Reading::ALL.map(|_| Constraint::Ratio(1, Reading::ALL.len() as u32)))
            .split(area);

        for (reading, chunk) in Reading::ALL.into_iter().zip(gauge_chunks.iter()) {
            ReadingGauge::for_day(reading, day).render(*chunk, buf);
        }
    }

    fn render_forecast_strip(&self, report: &AdvisoryReport, area: Rect, buf: &mut Buffer) {
        let count = report.forecast.len().max(1) as u32;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, count); count as usize])
            .split(area);

        for (i, (day, column)) in report.forecast.iter().zip(columns.iter()).enumerate() {
            let border_style = if i == self.selected_day {
                Theme::border_focused()
            } else {
                Theme::border()
            };
            let title = if i == 0 {
                "Today".to_string()
            } else {
                day.date.format("%a %d").to_string()
            };
            let block = Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style);

            let lines = vec![
                Line::from(vec![
                    Span::raw(format!("{} ", day.condition.symbol())),
                    Span::styled(
                        format!("{:.0}°C", day.temperature_c),
                        Style::default().fg(Theme::temperature(day.temperature_c)),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("{:.0}% {:.0}mm", day.humidity_percent, day.rainfall_mm),
                    Theme::dim(),
                )),
            ];
            Paragraph::new(lines).block(block).render(*column, buf);
        }
    }

    fn render_risks(&self, report: &AdvisoryReport, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Risks", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let lines: Vec<Line> = report
            .advisory
            .risks
            .iter()
            .map(|risk| {
                Line::from(vec![
                    Span::styled(format!("{} ", risk.level.symbol()), Theme::risk(risk.level)),
                    Span::styled(risk.label.as_str(), Theme::risk(risk.level)),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }

    fn render_actions(&self, report: &AdvisoryReport, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Recommended Actions", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if report.advisory.actions.is_empty() {
            Paragraph::new(Span::styled("Nothing to act on today", Theme::dim()))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = report
            .advisory
            .actions
            .iter()
            .map(|action| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", action.icon.symbol()),
                        Style::default().fg(action.icon.color()),
                    ),
                    Span::styled(action.text.as_str(), Theme::normal()),
                ]))
            })
            .collect();

        List::new(items).render(inner, buf);
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            Paragraph::new(Span::styled(msg, Theme::status(msg.contains("failed"))))
                .render(area, buf);
        }
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let nav = Line::from(vec![
            Span::styled("[←/→]", Theme::nav_key()),
            Span::styled("Day ", Theme::dim()),
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Refresh ", Theme::dim()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::dim()),
        ]);

        Paragraph::new(nav).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::compute_advisory;
    use crate::models::{Location, WeatherCondition};
    use chrono::{NaiveDate, Utc};

    fn report() -> AdvisoryReport {
        let today = ForecastDay::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            20.0,
            50.0,
            20.0,
            0.0,
            WeatherCondition::Cloudy,
        );
        let tomorrow = ForecastDay {
            date: NaiveDate::from_ymd_opt(2024, 6, 2).unwrap(),
            ..today.clone()
        };
        AdvisoryReport {
            location: Location::default().with_name("Ludhiana"),
            fetched_at: Utc::now(),
            advisory: compute_advisory(&today, &tomorrow),
            forecast: vec![today, tomorrow],
        }
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn renders_risks_and_actions() {
        let report = report();
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        AdvisorScreen::new(Some(&report)).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Ludhiana"));
        assert!(text.contains("Spray: Bad Window"));
        assert!(text.contains("Avoid spraying today due to high winds."));
        assert!(text.contains("no spraying"));
    }

    #[test]
    fn header_shows_refresh_in_progress() {
        let report = report();
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        AdvisorScreen::new(Some(&report))
            .refreshing(true)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Refreshing..."));
        assert!(!text.contains("updated"));
    }

    #[test]
    fn renders_placeholder_without_report() {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        AdvisorScreen::new(None)
            .with_status(Some("Refresh failed: boom"))
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("No forecast loaded"));
        assert!(text.contains("Refresh failed"));
    }
}
