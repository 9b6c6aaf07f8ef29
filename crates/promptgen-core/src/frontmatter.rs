use regex::Regex;
use std::sync::OnceLock;

/// One parsed command document: frontmatter mapping plus the remaining body.
///
/// Constructed fresh per input file and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CommandDoc {
    pub frontmatter: Frontmatter,
    pub body: String,
}

/// Ordered key → value mapping from the frontmatter header.
///
/// Only a single-level `key: value` subset is supported — this is deliberately
/// not a YAML parser. Keys the generator doesn't consume are kept here unused.
#[derive(Debug, Clone, Default)]
pub struct Frontmatter {
    fields: Vec<(String, String)>,
}

impl Frontmatter {
    /// Look up a field value. Duplicate keys: the last occurrence wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

static BLOCK_RE: OnceLock<Regex> = OnceLock::new();
static FIELD_RE: OnceLock<Regex> = OnceLock::new();

fn block_re() -> &'static Regex {
    // Opening delimiter at the very start, closing delimiter on its own line.
    BLOCK_RE.get_or_init(|| Regex::new(r"(?s)^---\r?\n(.*?)\r?\n---\r?\n(.*)$").unwrap())
}

fn field_re() -> &'static Regex {
    FIELD_RE.get_or_init(|| Regex::new(r"^([A-Za-z0-9_-]+)\s*:\s*(.*)$").unwrap())
}

/// Parse a command document into frontmatter and body.
///
/// A document has frontmatter only if it starts with a `---` line and a
/// matching closing `---` line follows. Anything else — no delimiter, or an
/// unterminated block — degrades silently to an empty mapping with the whole
/// document as body. Malformed header lines are skipped, never an error.
pub fn parse(document: &str) -> CommandDoc {
    let Some(caps) = block_re().captures(document) else {
        return CommandDoc {
            frontmatter: Frontmatter::default(),
            body: document.to_string(),
        };
    };

    let header = caps.get(1).map_or("", |m| m.as_str()).trim();
    let body = caps.get(2).map_or("", |m| m.as_str()).trim_start();

    let mut fields = Vec::new();
    for line in header.lines() {
        let Some(m) = field_re().captures(line) else {
            continue;
        };
        let key = m[1].to_string();
        let value = unquote(m[2].trim()).to_string();
        fields.push((key, value));
    }

    CommandDoc {
        frontmatter: Frontmatter { fields },
        body: body.to_string(),
    }
}

/// Strip one pair of surrounding matching quotes. No escape processing.
fn unquote(value: &str) -> &str {
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
