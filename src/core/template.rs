//! Message template expansion
//!
//! Combines a `%`-directive template with its arguments into the final
//! message text before any formatter runs, so the dynamic-argument
//! convenience is resolved once, early, and testably. A directive is a `%`
//! followed by optional flag characters (`+-# 0`-`9`, `.`) and an alphabetic
//! verb; `%%` is a literal percent. Arguments substitute in order with their
//! default `Display` rendering regardless of the verb letter. When the
//! template contains no directive and arguments are present, each argument is
//! appended space-separated. A directive with no remaining argument is kept
//! literally; surplus arguments are appended space-separated.

use std::fmt::{Display, Write};

/// Argument list for a single logging call
pub type Args<'a> = &'a [&'a dyn Display];

/// Expand `template` with `args` into the fully-resolved message string.
pub fn expand(template: &str, args: Args<'_>) -> String {
    if args.is_empty() {
        return template.to_string();
    }
    if !has_directive(template) {
        let mut out = String::with_capacity(template.len() + args.len() * 8);
        out.push_str(template);
        for arg in args {
            let _ = write!(out, " {}", arg);
        }
        return out;
    }

    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut next = args.iter();
    let mut chars = template.char_indices().peekable();
    while let Some((start, ch)) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some(&(_, '%')) => {
                chars.next();
                out.push('%');
            }
            Some(_) => {
                let mut end = start + 1;
                let mut verb = None;
                while let Some(&(pos, c)) = chars.peek() {
                    if c.is_ascii_alphabetic() {
                        chars.next();
                        end = pos + c.len_utf8();
                        verb = Some(c);
                        break;
                    }
                    if matches!(c, '0'..='9' | '.' | '+' | '-' | '#' | ' ') {
                        chars.next();
                        end = pos + c.len_utf8();
                        continue;
                    }
                    break;
                }
                match (verb, next.next()) {
                    (Some(_), Some(arg)) => {
                        let _ = write!(out, "{}", arg);
                    }
                    // Malformed or unmatched directive: keep the raw text.
                    _ => out.push_str(&template[start..end]),
                }
            }
            None => out.push('%'),
        }
    }

    for arg in next {
        let _ = write!(out, " {}", arg);
    }
    out
}

/// Whether `template` contains at least one substitution directive.
fn has_directive(template: &str) -> bool {
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '%' {
            continue;
        }
        while let Some(&c) = chars.peek() {
            if c == '%' {
                chars.next();
                break;
            }
            if c.is_ascii_alphabetic() {
                return true;
            }
            if matches!(c, '0'..='9' | '.' | '+' | '-' | '#' | ' ') {
                chars.next();
                continue;
            }
            break;
        }
    }
    false
}
