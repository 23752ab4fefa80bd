/// Clean up raw lyrics text for terminal output.
///
/// Strips trailing whitespace from every line, collapses runs of blank
/// lines down to a single blank line, and trims surrounding whitespace.
/// Non-blank line content and ordering are preserved.
pub fn clean_lyrics(text: &str) -> String {
    let mut cleaned: Vec<&str> = Vec::new();
    let mut previous_blank = false;

    for line in text.lines() {
        let line = line.trim_end();
        let is_blank = line.is_empty();

        if is_blank && previous_blank {
            continue;
        }

        cleaned.push(line);
        previous_blank = is_blank;
    }

    cleaned.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_blank_runs() {
        assert_eq!(clean_lyrics("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(clean_lyrics("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_strips_trailing_whitespace_per_line() {
        assert_eq!(clean_lyrics("  a  \n  \nb  "), "a\n\nb");
    }

    #[test]
    fn test_trims_outer_whitespace() {
        assert_eq!(clean_lyrics("\n\nfirst verse\n\n"), "first verse");
        assert_eq!(clean_lyrics("   "), "");
        assert_eq!(clean_lyrics(""), "");
    }

    #[test]
    fn test_preserves_line_order_and_content() {
        let verse = "Imagine there's no heaven\nIt's easy if you try\n\nNo hell below us";
        assert_eq!(clean_lyrics(verse), verse);
    }

    #[test]
    fn test_idempotent() {
        let messy = "  a  \n\n\n\n  b\t\n\nc  \n\n\n";
        let once = clean_lyrics(messy);
        assert_eq!(clean_lyrics(&once), once);
    }

    #[test]
    fn test_handles_crlf_input() {
        assert_eq!(clean_lyrics("a\r\n\r\n\r\nb\r\n"), "a\n\nb");
    }
}
