// Event module
// Scheduled event placed on a resource row of the grid

use chrono::{DateTime, Duration, Local, NaiveDate};

/// Identity of an event inside the collection.
///
/// Derived from the creation time in milliseconds and kept strictly
/// increasing by the event store.
pub type EventId = i64;

/// Time-bounded event assigned to a resource
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: Option<EventId>,
    pub resource_id: String,
    pub title: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub color: Option<String>,       // Hex palette token
    pub hover_color: Option<String>, // Hex palette token used while hovered
    pub created_at: Option<DateTime<Local>>,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `resource_id` - Row the event belongs to
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start time
    /// * `end` - Event end time
    ///
    /// # Returns
    /// Returns `Result<Event, String>` with validation
    ///
    /// # Examples
    /// ```
    /// use resource_scheduler::models::event::Event;
    /// use chrono::Local;
    ///
    /// let start = Local::now();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new("a", "Team Meeting", start, end).unwrap();
    /// assert!(event.id.is_none());
    /// ```
    pub fn new(
        resource_id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, String> {
        let event = Self {
            id: None,
            resource_id: resource_id.into(),
            title: title.into(),
            start,
            end,
            color: None,
            hover_color: None,
            created_at: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.resource_id.trim().is_empty() {
            return Err("Event resource cannot be empty".to_string());
        }

        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }

        for color in [&self.color, &self.hover_color].into_iter().flatten() {
            if !is_hex_color(color) {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
        }

        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when the event starts on the given calendar day (time ignored)
    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.start.date_naive() == date
    }

    /// Copy of this event with new bounds; the original is left untouched
    pub fn with_times(&self, start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self {
            start,
            end,
            ..self.clone()
        }
    }

    /// Whether the event was created within `window` before `now`
    pub fn is_recently_created(&self, now: DateTime<Local>, window: Duration) -> bool {
        self.created_at
            .map(|created| {
                let age = now - created;
                age >= Duration::zero() && age < window
            })
            .unwrap_or(false)
    }
}

fn is_hex_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 6 || digits.len() == 3) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    resource_id: Option<String>,
    title: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    color: Option<String>,
    hover_color: Option<String>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            resource_id: None,
            title: None,
            start: None,
            end: None,
            color: None,
            hover_color: None,
        }
    }

    pub fn resource(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = Some(resource_id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the hover color (hex format)
    pub fn hover_color(mut self, color: impl Into<String>) -> Self {
        self.hover_color = Some(color.into());
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let resource_id = self.resource_id.ok_or("Event resource is required")?;
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = Event {
            id: None,
            resource_id,
            title,
            start,
            end,
            color: self.color,
            hover_color: self.hover_color,
            created_at: None,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_start() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap()
    }

    fn sample_end() -> DateTime<Local> {
        sample_start() + Duration::hours(1)
    }

    #[test]
    fn test_new_event_success() {
        let event = Event::new("a", "Meeting", sample_start(), sample_end()).unwrap();

        assert_eq!(event.resource_id, "a");
        assert_eq!(event.title, "Meeting");
        assert_eq!(event.start, sample_start());
        assert_eq!(event.end, sample_end());
        assert!(event.color.is_none());
        assert!(event.created_at.is_none());
    }

    #[test]
    fn test_new_event_empty_title() {
        let result = Event::new("a", "   ", sample_start(), sample_end());
        assert_eq!(result.unwrap_err(), "Event title cannot be empty");
    }

    #[test]
    fn test_new_event_empty_resource() {
        let result = Event::new("", "Meeting", sample_start(), sample_end());
        assert_eq!(result.unwrap_err(), "Event resource cannot be empty");
    }

    #[test]
    fn test_new_event_invalid_times() {
        let result = Event::new("a", "Meeting", sample_end(), sample_start());
        assert_eq!(
            result.unwrap_err(),
            "Event end time must be after start time"
        );

        let result = Event::new("a", "Meeting", sample_start(), sample_start());
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_with_colors() {
        let event = Event::builder()
            .resource("b")
            .title("Standup")
            .start(sample_start())
            .end(sample_end())
            .color("#DBEAFE")
            .hover_color("#BFDBFE")
            .build()
            .unwrap();

        assert_eq!(event.color.as_deref(), Some("#DBEAFE"));
        assert_eq!(event.hover_color.as_deref(), Some("#BFDBFE"));
    }

    #[test]
    fn test_builder_missing_fields() {
        let missing_resource = Event::builder()
            .title("Meeting")
            .start(sample_start())
            .end(sample_end())
            .build();
        assert_eq!(missing_resource.unwrap_err(), "Event resource is required");

        let missing_end = Event::builder()
            .resource("a")
            .title("Meeting")
            .start(sample_start())
            .build();
        assert_eq!(missing_end.unwrap_err(), "Event end time is required");
    }

    #[test]
    fn test_validate_invalid_color() {
        let mut event = Event::new("a", "Meeting", sample_start(), sample_end()).unwrap();
        event.hover_color = Some("bg-blue-200".to_string());

        let result = event.validate();
        assert!(result.unwrap_err().contains("hex format"));

        event.hover_color = Some("#GGGGGG".to_string());
        assert!(event.validate().is_err());

        event.hover_color = Some("#F57".to_string());
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_duration_and_starts_on() {
        let event = Event::new("a", "Meeting", sample_start(), sample_end()).unwrap();
        assert_eq!(event.duration(), Duration::hours(1));
        assert!(event.starts_on(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()));
        assert!(!event.starts_on(NaiveDate::from_ymd_opt(2025, 1, 11).unwrap()));
    }

    #[test]
    fn test_with_times_leaves_original_untouched() {
        let event = Event::new("a", "Meeting", sample_start(), sample_end()).unwrap();
        let moved = event.with_times(sample_end(), sample_end() + Duration::hours(2));

        assert_eq!(event.start, sample_start());
        assert_eq!(moved.start, sample_end());
        assert_eq!(moved.title, event.title);
    }

    #[test]
    fn test_is_recently_created() {
        let mut event = Event::new("a", "Meeting", sample_start(), sample_end()).unwrap();
        let window = Duration::seconds(5);
        let now = sample_start();
        assert!(!event.is_recently_created(now, window));

        event.created_at = Some(now - Duration::seconds(2));
        assert!(event.is_recently_created(now, window));

        event.created_at = Some(now - Duration::seconds(5));
        assert!(!event.is_recently_created(now, window));
    }
}
