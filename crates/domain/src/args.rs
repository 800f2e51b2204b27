//! Splitting of a rule's argument string into an argv list.
//!
//! Arguments are separated by whitespace. Double quotes group words into a
//! single argument and are stripped; `\"` yields a literal quote. Any other
//! backslash is kept as-is so Windows-style paths survive untouched.

/// Split `raw` into individual process arguments.
#[must_use]
pub fn split_arguments(raw: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quoted = false;
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
                in_token = true;
            }
            '"' => {
                quoted = !quoted;
                in_token = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_token {
                    args.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        args.push(current);
    }
    args
}
