/// Greedily packs the whitespace-separated tokens of `text` into lines of at
/// most `width` chars.
///
/// Rules:
/// 1. Runs of whitespace collapse; leading and trailing whitespace is dropped.
/// 2. Text without tokens yields a single empty line, so callers always get
///    at least one line back.
/// 3. Tokens are never split. A token longer than `width` sits alone on its
///    own line and overflows.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut tokens = text.split_whitespace();

    let Some(first) = tokens.next() else {
        return vec![String::new()];
    };

    let mut lines = Vec::new();
    let mut current = first.to_string();
    let mut current_len = first.chars().count();

    for token in tokens {
        let token_len = token.chars().count();
        if current_len + 1 + token_len <= width {
            current.push(' ');
            current.push_str(token);
            current_len += 1 + token_len;
        } else {
            lines.push(std::mem::replace(&mut current, token.to_string()));
            current_len = token_len;
        }
    }
    lines.push(current);

    lines
}
