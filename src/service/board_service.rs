use chrono::NaiveDate;

use crate::models::date::MalformedDateError;
use crate::models::session::{Catalog, FixedLink, Session};
use crate::service::finder;

// Display toggles for the upcoming-sessions section.
#[derive(Debug, Clone)]
pub struct BoardOptions {
    pub show_upcoming: bool,
    pub upcoming_count: usize,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            show_upcoming: true,
            upcoming_count: 3,
        }
    }
}

pub struct BoardService;

impl BoardService {
    pub fn render_today(session: Option<&Session>) -> String {
        match session {
            Some(session) => format!(
                "Today's session: {}\nInstructor: {}\nDate: {}\nTime: {}\nJoin: {}",
                session.subject, session.instructor, session.date, session.schedule, session.link
            ),
            None => "No session scheduled today\nInstructor: ---\nTime: ---\nNo join link available"
                .to_string(),
        }
    }

    pub fn render_load_failure() -> String {
        "Unable to load session data\nCheck your connection".to_string()
    }

    pub fn render_upcoming(sessions: &[&Session]) -> String {
        let mut body = String::from("Upcoming sessions:");
        for session in sessions {
            body.push_str(&format!(
                "\n{}  {}  {}  {}  {}",
                session.date, session.subject, session.instructor, session.schedule, session.link
            ));
        }
        body
    }

    pub fn render_fixed_links(links: &[FixedLink]) -> String {
        let mut body = String::from("Links:");
        for link in links {
            body.push_str(&format!("\n{}: {}", link.label, link.link));
        }
        body
    }

    /// Full board for one reference date: today's session (or the
    /// no-session placeholder), then the upcoming list and the fixed
    /// links when there is anything to show.
    pub fn build_board(
        catalog: &Catalog,
        today: NaiveDate,
        options: &BoardOptions,
    ) -> Result<String, MalformedDateError> {
        let today_session = finder::find_session_on_date(&catalog.sessions, today)?;
        let mut board = Self::render_today(today_session);

        if options.show_upcoming && options.upcoming_count > 0 {
            let upcoming =
                finder::upcoming_sessions(&catalog.sessions, today, options.upcoming_count)?;
            if !upcoming.is_empty() {
                board.push_str("\n\n");
                board.push_str(&Self::render_upcoming(&upcoming));
            }
        }

        if !catalog.fixed_links.is_empty() {
            board.push_str("\n\n");
            board.push_str(&Self::render_fixed_links(&catalog.fixed_links));
        }

        Ok(board)
    }
}
