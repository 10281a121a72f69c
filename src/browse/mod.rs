use crate::directory::Employee;
use crate::search;

/// Current position inside the active list while a profile is open.
///
/// Prev/Next clamp at the list bounds; the index can never leave
/// `[0, len - 1]`. Nothing persists once the profile is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    index: usize,
    len: usize,
}

impl Pager {
    /// Opens a pager over a non-empty list, clamping `start` into bounds.
    pub fn open(len: usize, start: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            index: start.min(len - 1),
            len,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Moves to the next record; returns false when already at the end.
    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.len {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous record; returns false when already at 0.
    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }
}

/// Explicit browse state: the full fetched list plus the active (possibly
/// filtered) list derived from it. Filtering always re-derives from the
/// full list and never mutates it.
#[derive(Clone, Debug)]
pub struct Session {
    all: Vec<Employee>,
    active: Vec<Employee>,
    query: Option<String>,
}

impl Session {
    pub fn new(all: Vec<Employee>) -> Self {
        let active = all.clone();
        Self {
            all,
            active,
            query: None,
        }
    }

    pub fn all(&self) -> &[Employee] {
        &self.all
    }

    pub fn active(&self) -> &[Employee] {
        &self.active
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Re-derives the active list from the full list and returns its size.
    pub fn apply_filter(&mut self, query: &str) -> usize {
        self.active = search::by_name(&self.all, query);
        self.query = if query.trim().is_empty() {
            None
        } else {
            Some(query.trim().to_string())
        };
        self.active.len()
    }

    pub fn apply_regex_filter(&mut self, pattern: &str) -> Result<usize, String> {
        self.active = search::by_name_regex(&self.all, pattern)?;
        self.query = Some(pattern.to_string());
        Ok(self.active.len())
    }

    pub fn reset(&mut self) {
        self.active = self.all.clone();
        self.query = None;
    }

    /// Opens a pager over the active list at `start`.
    pub fn open(&self, start: usize) -> Option<Pager> {
        Pager::open(self.active.len(), start)
    }
}

/// Commands accepted at the card-gallery prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GalleryCommand {
    Open(usize),
    Search(String),
    Reset,
    List,
    Help,
    Quit,
    Unknown(String),
}

/// Commands accepted while a profile is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileCommand {
    Next,
    Prev,
    Back,
    Quit,
    Unknown(String),
}

pub fn parse_gallery_command(line: &str) -> GalleryCommand {
    let line = line.trim();
    if line.is_empty() {
        return GalleryCommand::List;
    }
    if let Ok(n) = line.parse::<usize>() {
        return GalleryCommand::Open(n);
    }
    if let Some(query) = line.strip_prefix('/') {
        return GalleryCommand::Search(query.trim().to_string());
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };
    match word.to_ascii_lowercase().as_str() {
        "s" | "search" => GalleryCommand::Search(rest.to_string()),
        "r" | "reset" => GalleryCommand::Reset,
        "l" | "list" => GalleryCommand::List,
        "h" | "help" | "?" => GalleryCommand::Help,
        "q" | "quit" | "exit" => GalleryCommand::Quit,
        _ => GalleryCommand::Unknown(line.to_string()),
    }
}

pub fn parse_profile_command(line: &str) -> ProfileCommand {
    match line.trim().to_ascii_lowercase().as_str() {
        "n" | "next" | "" => ProfileCommand::Next,
        "p" | "prev" | "previous" => ProfileCommand::Prev,
        "b" | "back" | "close" => ProfileCommand::Back,
        "q" | "quit" | "exit" => ProfileCommand::Quit,
        other => ProfileCommand::Unknown(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pager_refuses_empty_lists() {
        assert!(Pager::open(0, 0).is_none());
    }

    #[test]
    fn pager_clamps_start_into_bounds() {
        let pager = Pager::open(3, 99).unwrap();
        assert_eq!(pager.index(), 2);
    }

    #[test]
    fn pager_next_and_prev_stop_at_the_bounds() {
        let mut pager = Pager::open(3, 0).unwrap();
        assert!(!pager.prev());
        assert_eq!(pager.index(), 0);

        assert!(pager.next());
        assert!(pager.next());
        assert!(!pager.next());
        assert_eq!(pager.index(), 2);

        assert!(pager.prev());
        assert!(pager.prev());
        assert!(!pager.prev());
        assert_eq!(pager.index(), 0);
    }

    #[test]
    fn gallery_commands_parse_numbers_searches_and_keywords() {
        assert_eq!(parse_gallery_command("4"), GalleryCommand::Open(4));
        assert_eq!(
            parse_gallery_command("s nora"),
            GalleryCommand::Search("nora".to_string())
        );
        assert_eq!(
            parse_gallery_command("/jen sen"),
            GalleryCommand::Search("jen sen".to_string())
        );
        assert_eq!(parse_gallery_command("r"), GalleryCommand::Reset);
        assert_eq!(parse_gallery_command(""), GalleryCommand::List);
        assert_eq!(parse_gallery_command("q"), GalleryCommand::Quit);
        assert_eq!(
            parse_gallery_command("bogus input"),
            GalleryCommand::Unknown("bogus input".to_string())
        );
    }

    #[test]
    fn profile_commands_default_to_next() {
        assert_eq!(parse_profile_command(""), ProfileCommand::Next);
        assert_eq!(parse_profile_command("p"), ProfileCommand::Prev);
        assert_eq!(parse_profile_command("back"), ProfileCommand::Back);
    }
}
