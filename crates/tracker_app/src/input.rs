use tracker_core::{ListingView, Msg};

/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    /// One-based page number, as shown to the user.
    Page(u32),
    Next,
    Prev,
    Refresh,
    Help,
    Quit,
}

pub const HELP: &str =
    "commands: search <term> | page <n> | next | prev | refresh | help | quit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "search" | "s" | "/" => Ok(Command::Search(rest.to_string())),
        "page" | "p" => match rest.parse::<u32>() {
            Ok(page) if page >= 1 => Ok(Command::Page(page)),
            _ => Err(format!("not a page number: {rest:?}")),
        },
        "next" | "n" => Ok(Command::Next),
        "prev" | "previous" => Ok(Command::Prev),
        "refresh" | "r" => Ok(Command::Refresh),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        "" => Err("empty command".to_string()),
        other => Err(format!("unknown command {other:?}")),
    }
}

/// Maps a command to the intent it stands for, given what is on screen.
///
/// `Err` carries a message for the user when the command does not apply.
pub fn to_msg<T>(command: Command, view: &ListingView<T>) -> Result<Msg<T>, String> {
    match command {
        Command::Search(term) => {
            if !view.search_enabled {
                return Err("search is disabled while a fetch is running".to_string());
            }
            Ok(Msg::submit_search(term))
        }
        Command::Page(page) => {
            if page > view.total_pages {
                return Err(format!("there are only {} pages", view.total_pages));
            }
            Ok(Msg::change_page(page - 1))
        }
        Command::Next => {
            if view.page + 1 >= view.total_pages {
                return Err("already on the last page".to_string());
            }
            Ok(Msg::change_page(view.page + 1))
        }
        Command::Prev => {
            if view.page == 0 {
                return Err("already on the first page".to_string());
            }
            Ok(Msg::change_page(view.page - 1))
        }
        Command::Refresh => Ok(Msg::change_page(view.page)),
        Command::Help | Command::Quit => Err(HELP.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::{ListingState, StockInfo};

    fn view_on(page: u32, total_pages: u32) -> ListingView<StockInfo> {
        let mut view = ListingState::<StockInfo>::new().view();
        view.page = page;
        view.total_pages = total_pages;
        view
    }

    #[test]
    fn parses_commands_and_arguments() {
        assert_eq!(
            parse_command("search  Apple Inc "),
            Ok(Command::Search("Apple Inc".to_string()))
        );
        assert_eq!(parse_command("/ aapl"), Ok(Command::Search("aapl".to_string())));
        assert_eq!(parse_command("search"), Ok(Command::Search(String::new())));
        assert_eq!(parse_command("PAGE 3"), Ok(Command::Page(3)));
        assert_eq!(parse_command("n"), Ok(Command::Next));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("page 0").is_err());
        assert!(parse_command("page x").is_err());
        assert!(parse_command("   ").is_err());
        assert!(parse_command("buy AAPL").is_err());
    }

    #[test]
    fn page_numbers_become_zero_based() {
        let view = view_on(0, 5);
        assert_eq!(
            to_msg(Command::Page(3), &view),
            Ok(Msg::PageChanged { page: 2 })
        );
        assert!(to_msg(Command::Page(6), &view).is_err());
    }

    #[test]
    fn next_and_prev_stay_in_bounds() {
        assert_eq!(
            to_msg(Command::Next, &view_on(1, 3)),
            Ok(Msg::PageChanged { page: 2 })
        );
        assert!(to_msg(Command::Next, &view_on(2, 3)).is_err());
        assert!(to_msg(Command::Prev, &view_on(0, 3)).is_err());
        assert_eq!(
            to_msg(Command::Refresh, &view_on(2, 3)),
            Ok(Msg::PageChanged { page: 2 })
        );
    }

    #[test]
    fn search_blocked_while_fetching() {
        let mut view = view_on(0, 1);
        view.search_enabled = false;
        assert!(to_msg(Command::Search("x".to_string()), &view).is_err());
    }
}
