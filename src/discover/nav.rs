//! Navigation config scanning.
//!
//! Reads the site config module as text:
//!
//! ```text
//! export const siteConfig = {
//!   siteUrl: "https://example.com",
//!   navigation: {
//!     main: [
//!       { label: 'Home', href: '/', hasHero: true },
//!       { label: 'About', href: '/about' },
//!     ],
//!     footer: {
//!       categories: [
//!         { label: 'Chanting', href: '/teachings/chanting' },
//!       ]
//!     }
//!   },
//! };
//! ```
//!
//! Blocks are located by key and cut out with bracket matching that skips
//! string literals. A block that opens but never closes makes the whole
//! source malformed; a block that is simply absent contributes nothing.

use super::SourceError;
use regex::Regex;
use std::sync::LazyLock;

/// Links and base URL scanned from the navigation config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavLinks {
    /// `siteUrl` value, if declared.
    pub site_url: Option<String>,
    /// `href`s of `navigation.main`.
    pub main: Vec<String>,
    /// Every `href` under `navigation.footer`.
    pub footer: Vec<String>,
}

pub fn scan_navigation(text: &str) -> Result<NavLinks, SourceError> {
    static RE_SITE_URL: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"\bsiteUrl\s*:\s*["'`]([^"'`]*)["'`]"#).unwrap());
    static RE_NAVIGATION: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\bnavigation\s*:\s*\{").unwrap());
    static RE_MAIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bmain\s*:\s*\[").unwrap());
    static RE_FOOTER: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\bfooter\s*:\s*\{").unwrap());

    let mut links = NavLinks {
        site_url: RE_SITE_URL
            .captures(text)
            .map(|caps| caps[1].trim().to_string())
            .filter(|url| !url.is_empty()),
        ..NavLinks::default()
    };

    // TypeScript files usually declare the shape in an interface before the
    // value; those blocks carry types, not quoted hrefs, and add nothing.
    for navigation in find_blocks(text, &RE_NAVIGATION, "navigation")? {
        for main in find_blocks(navigation, &RE_MAIN, "navigation.main")? {
            links.main.extend(scan_hrefs(main));
        }
        for footer in find_blocks(navigation, &RE_FOOTER, "navigation.footer")? {
            links.footer.extend(scan_hrefs(footer));
        }
    }

    Ok(links)
}

/// All `href` values in a block, in source order.
fn scan_hrefs(block: &str) -> Vec<String> {
    static RE_HREF: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"\bhref\s*:\s*["'`]([^"'`]+)["'`]"#).unwrap());

    RE_HREF
        .captures_iter(block)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Locate every `key: {` / `key: [` opener and return the bracketed
/// blocks, brackets included. Blocks do not overlap.
///
/// `opener` must end with the opening bracket.
fn find_blocks<'a>(
    text: &'a str,
    opener: &Regex,
    block: &'static str,
) -> Result<Vec<&'a str>, SourceError> {
    let mut blocks = Vec::new();
    let mut offset = 0;

    while let Some(m) = opener.find_at(text, offset) {
        let start = m.end() - 1;
        let Some(len) = matching_close(&text[start..]) else {
            return Err(SourceError::Malformed {
                block,
                reason: "unbalanced brackets",
            });
        };
        blocks.push(&text[start..start + len]);
        offset = start + len;
    }

    Ok(blocks)
}

/// Length of the balanced bracket run starting at `text[0]`.
///
/// Brackets inside string literals (`'`, `"`, `` ` ``) and comments are
/// ignored. Returns `None` if the run never closes or a closer does not
/// match.
fn matching_close(text: &str) -> Option<usize> {
    let mut stack: Vec<char> = Vec::new();
    let mut state = Lexer::Code;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match state {
            Lexer::Str { quote, escaped } => {
                state = if escaped {
                    Lexer::Str { quote, escaped: false }
                } else if c == '\\' {
                    Lexer::Str { quote, escaped: true }
                } else if c == quote {
                    Lexer::Code
                } else {
                    state
                };
            }
            Lexer::LineComment => {
                if c == '\n' {
                    state = Lexer::Code;
                }
            }
            Lexer::BlockComment => {
                if c == '*' && chars.next_if(|&(_, n)| n == '/').is_some() {
                    state = Lexer::Code;
                }
            }
            Lexer::Code => match c {
                '\'' | '"' | '`' => {
                    state = Lexer::Str {
                        quote: c,
                        escaped: false,
                    };
                }
                '/' if chars.next_if(|&(_, n)| n == '/').is_some() => state = Lexer::LineComment,
                '/' if chars.next_if(|&(_, n)| n == '*').is_some() => state = Lexer::BlockComment,
                '{' => stack.push('}'),
                '[' => stack.push(']'),
                '(' => stack.push(')'),
                '}' | ']' | ')' => {
                    if stack.pop() != Some(c) {
                        return None;
                    }
                    if stack.is_empty() {
                        return Some(i + c.len_utf8());
                    }
                }
                _ => {}
            },
        }
    }

    None
}

#[derive(Debug, Clone, Copy)]
enum Lexer {
    Code,
    Str { quote: char, escaped: bool },
    LineComment,
    BlockComment,
}

// ============================================================================
// tests
// ============================================================================
