//! Stateless control identifiers.
//!
//! Each control in the strip carries an id such as `pg:campaigns:page:7:20`
//! so a host can route an activation back to the list it belongs to without
//! keeping per-list state.

use super::controls::ControlItem;
use super::navigator::NavAction;

const TOKEN_PREFIX: &str = "pg";

/// Parsed control id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlToken {
    /// Logical list name (e.g. `campaigns`, `bookings`).
    pub list: String,
    pub action: NavAction,
    /// Target page number, 1-based.
    pub page: usize,
    /// Total page count when the control was built.
    pub total_pages: usize,
}

/// Validation outcome for control activations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlIdError {
    Invalid,
    WrongList,
    OutOfRange,
}

fn action_name(action: NavAction) -> &'static str {
    match action {
        NavAction::Previous => "prev",
        NavAction::Next => "next",
        NavAction::Page(_) => "page",
    }
}

/// Build a compact control id carrying the target page.
pub fn build_control_id(
    list: &str,
    action: NavAction,
    target_page: usize,
    total_pages: usize,
) -> String {
    let action = action_name(action);
    format!("{TOKEN_PREFIX}:{list}:{action}:{target_page}:{total_pages}")
}

/// Control id for an activatable item of a strip.
///
/// Ellipses, labels, the current page and disabled arrows are not activatable.
pub fn control_id_for(list: &str, item: &ControlItem, total_pages: usize) -> Option<String> {
    let (action, target) = match *item {
        ControlItem::Previous {
            target,
            disabled: false,
        } => (NavAction::Previous, target),
        ControlItem::Next {
            target,
            disabled: false,
        } => (NavAction::Next, target),
        ControlItem::Page {
            number,
            current: false,
        } => (NavAction::Page(number), number),
        _ => return None,
    };
    Some(build_control_id(list, action, target, total_pages))
}

/// Parse a control id.
pub fn parse_control_id(control_id: &str) -> Option<ControlToken> {
    let mut parts = control_id.split(':');

    let prefix = parts.next()?;
    if prefix != TOKEN_PREFIX {
        return None;
    }

    let list = parts.next()?.to_owned();
    let action_raw = parts.next()?;
    let page = parts.next()?.parse::<usize>().ok()?;
    let total_pages = parts.next()?.parse::<usize>().ok()?;

    if parts.next().is_some() || list.is_empty() {
        return None;
    }

    let action = match action_raw {
        "prev" => NavAction::Previous,
        "next" => NavAction::Next,
        "page" => NavAction::Page(page),
        _ => return None,
    };

    Some(ControlToken {
        list,
        action,
        page,
        total_pages,
    })
}

/// Validate a control id for list and page bounds.
pub fn validate_control_id(
    control_id: &str,
    expected_list: &str,
) -> Result<ControlToken, ControlIdError> {
    let token = parse_control_id(control_id).ok_or(ControlIdError::Invalid)?;

    if token.list != expected_list {
        return Err(ControlIdError::WrongList);
    }

    if token.page == 0 || token.page > token.total_pages {
        return Err(ControlIdError::OutOfRange);
    }

    Ok(token)
}
