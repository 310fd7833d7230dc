//! Sprint-directive parsing, derivation, and mutation.
//!
//! A project's `SprintNames` field is a free-text block of zero or more
//! lines of the form `Sprint <N>: CustomName`. The name may be empty (a
//! trailing colon with nothing after it keeps the sprint alive without
//! naming it). Non-matching lines are ignored. The directive both names
//! sprints and extends the sprint list beyond the default four: a single
//! `Sprint 7: ...` line implies `Sprint 1..7` exist.

use std::sync::LazyLock;

use regex::Regex;

/// The catch-all sprint, always last, never renamed.
pub const BACKLOG: &str = "Backlog";

/// Number of sprints every project has even without a directive.
pub const DEFAULT_SPRINT_COUNT: u32 = 4;

/// Matches a directive line: `Sprint <N>: <name>` (name may be empty).
static LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Sprint\s+(\d+)\s*:(.*)$").expect("valid regex"));

/// Matches a normalized or loosely-spaced sprint label: `Sprint <N>`.
static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Sprint\s+(\d+)$").expect("valid regex"));

/// Canonical label for sprint `number` (internal whitespace collapsed).
pub fn sprint_label(number: u32) -> String {
    format!("Sprint {number}")
}

/// Extract the sprint number from a label, `None` for `Backlog` or any
/// non-sprint label.
pub fn sprint_number(label: &str) -> Option<u32> {
    LABEL_RE
        .captures(label.trim())
        .and_then(|caps| caps[1].parse().ok())
}

/// Parsed form of the sprint-naming directive.
///
/// Entries are kept sorted by sprint number after any mutation;
/// [`SprintDirective::serialize`] writes them back as `Sprint N: name`
/// lines (or `Sprint N:` for a name-less sprint).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SprintDirective {
    entries: Vec<(u32, String)>,
}

impl SprintDirective {
    /// Parse the free-text directive. Later lines for the same sprint
    /// number overwrite earlier ones; anything that does not match the
    /// line pattern is ignored.
    pub fn parse(text: &str) -> Self {
        let mut entries: Vec<(u32, String)> = Vec::new();
        for line in text.lines() {
            let Some(caps) = LINE_RE.captures(line) else {
                continue;
            };
            let Ok(number) = caps[1].parse::<u32>() else {
                continue;
            };
            let name = caps[2].trim().to_string();
            match entries.iter_mut().find(|(n, _)| *n == number) {
                Some(entry) => entry.1 = name,
                None => entries.push((number, name)),
            }
        }
        Self { entries }
    }

    /// Custom name recorded for `label`, if any (possibly empty).
    pub fn name_for(&self, label: &str) -> Option<&str> {
        let number = sprint_number(label)?;
        self.entries
            .iter()
            .find(|(n, _)| *n == number)
            .map(|(_, name)| name.as_str())
    }

    /// Highest sprint number referenced by the directive (0 when empty).
    pub fn max_number(&self) -> u32 {
        self.entries.iter().map(|(n, _)| *n).max().unwrap_or(0)
    }

    /// Set or delete the custom name for `label`.
    ///
    /// An empty trimmed name deletes the entry. Entries are re-sorted
    /// numerically. Labels that are not `Sprint <N>` are ignored.
    pub fn set_name(&mut self, label: &str, name: &str) {
        let Some(number) = sprint_number(label) else {
            return;
        };
        let name = name.trim();
        if name.is_empty() {
            self.entries.retain(|(n, _)| *n != number);
        } else {
            match self.entries.iter_mut().find(|(n, _)| *n == number) {
                Some(entry) => entry.1 = name.to_string(),
                None => self.entries.push((number, name.to_string())),
            }
        }
        self.entries.sort_by_key(|(n, _)| *n);
    }

    /// Append the next sprint with an empty name and return its label.
    ///
    /// The default list's four sprints count as pre-existing, so on a
    /// project with no custom entries the first appended sprint is
    /// `Sprint 5`. This keeps the appended label unique and contiguous
    /// with the derived list.
    pub fn append_sprint(&mut self) -> String {
        let next = self.max_number().max(DEFAULT_SPRINT_COUNT) + 1;
        self.entries.push((next, String::new()));
        self.entries.sort_by_key(|(n, _)| *n);
        sprint_label(next)
    }

    /// Re-serialize to the free-text directive form.
    pub fn serialize(&self) -> String {
        self.entries
            .iter()
            .map(|(number, name)| {
                if name.is_empty() {
                    format!("Sprint {number}:")
                } else {
                    format!("Sprint {number}: {name}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Derive the full sprint list for a project from its directive text.
///
/// No directive yields the default `Sprint 1..4` plus `Backlog`. Otherwise
/// the list is gap-filled: contiguous `Sprint 1..max(referenced, 4)`, then
/// `Backlog`. One high-numbered custom sprint implicitly creates all
/// intervening slots even if they carry no name.
pub fn sprints_for_directive(directive: &str) -> Vec<String> {
    let max = SprintDirective::parse(directive)
        .max_number()
        .max(DEFAULT_SPRINT_COUNT);
    let mut sprints: Vec<String> = (1..=max).map(sprint_label).collect();
    sprints.push(BACKLOG.to_string());
    sprints
}

/// Display name for a sprint label under the given directive.
///
/// `Backlog` always displays as-is; other labels display as
/// `"<label> : <custom name>"` when a non-empty name exists, else bare.
pub fn display_name(label: &str, directive: &str) -> String {
    if label == BACKLOG {
        return BACKLOG.to_string();
    }
    match SprintDirective::parse(directive).name_for(label) {
        Some(name) if !name.is_empty() => format!("{label} : {name}"),
        _ => label.to_string(),
    }
}
