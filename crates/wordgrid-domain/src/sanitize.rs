//! Grid cells accept a single uppercase Latin letter and nothing else.

/// Normalize raw cell text: uppercase, drop everything outside `A..=Z`, and
/// keep only the most recent surviving letter.
pub fn sanitize_cell_input(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .filter(char::is_ascii_uppercase)
        .last()
        .map(String::from)
        .unwrap_or_default()
}

/// Value of a cell after typing `typed` into a cell currently holding `current`
pub fn apply_keystroke(current: &str, typed: char) -> String {
    let mut raw = String::with_capacity(current.len() + typed.len_utf8());
    raw.push_str(current);
    raw.push(typed);
    sanitize_cell_input(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercases_letters() {
        assert_eq!(sanitize_cell_input("q"), "Q");
        assert_eq!(sanitize_cell_input("Z"), "Z");
    }

    #[test]
    fn test_rejects_non_letters() {
        assert_eq!(sanitize_cell_input("7"), "");
        assert_eq!(sanitize_cell_input("!?"), "");
        assert_eq!(sanitize_cell_input("é"), "");
        assert_eq!(sanitize_cell_input("💡"), "");
        assert_eq!(sanitize_cell_input(""), "");
    }

    #[test]
    fn test_keeps_only_last_letter() {
        assert_eq!(sanitize_cell_input("ab"), "B");
        assert_eq!(sanitize_cell_input("x9-"), "X");
    }

    #[test]
    fn test_keystroke_sequence() {
        let value = "a1B!c"
            .chars()
            .fold(String::new(), |current, c| apply_keystroke(&current, c));
        assert_eq!(value, "C");
    }

    #[test]
    fn test_invalid_keystroke_keeps_current_letter() {
        assert_eq!(apply_keystroke("K", '3'), "K");
        assert_eq!(apply_keystroke("", '#'), "");
    }
}
