use chrono::NaiveDate;

use crate::models::date::MalformedDateError;
use crate::models::session::Session;

/// Returns the first session in catalog order scheduled on `reference`,
/// or `None` when no session falls on that date.
///
/// Every candidate date is normalized before comparing, so a catalog
/// mixing `DD/MM/YYYY` and `YYYY-MM-DD` entries still matches. A date
/// that cannot be parsed aborts the lookup with the error instead of
/// being skipped over.
pub fn find_session_on_date<'a>(
    sessions: &'a [Session],
    reference: NaiveDate,
) -> Result<Option<&'a Session>, MalformedDateError> {
    for session in sessions {
        if session.parsed_date()? == reference {
            return Ok(Some(session));
        }
    }
    Ok(None)
}

/// Sessions strictly after `reference`, earliest first, truncated to
/// `limit`. Same-day sessions are not upcoming. Equal dates keep their
/// catalog order.
pub fn upcoming_sessions<'a>(
    sessions: &'a [Session],
    reference: NaiveDate,
    limit: usize,
) -> Result<Vec<&'a Session>, MalformedDateError> {
    let mut dated: Vec<(NaiveDate, &Session)> = Vec::new();
    for session in sessions {
        let date = session.parsed_date()?;
        if date > reference {
            dated.push((date, session));
        }
    }
    dated.sort_by_key(|(date, _)| *date);
    Ok(dated
        .into_iter()
        .take(limit)
        .map(|(_, session)| session)
        .collect())
}
