use crate::error::{DirectoryError, Result};
use std::fmt;

/// Logical column roles the extractor needs from the spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    DisplayName,
    Description,
    Url,
    Owner,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::DisplayName => "display name (Anzeigename)",
            Role::Description => "description (Ergänzung)",
            Role::Url => "url (Webadresse)",
            Role::Owner => "owner (Projektleitung / Zuständigkeit)",
        };
        f.write_str(name)
    }
}

/// Header aliases for one role, written in folded form (see [`fold_header`]).
/// A header matches when it contains any alias and none of the exclusions.
#[derive(Debug)]
pub struct RoleAliases {
    pub role: Role,
    pub aliases: &'static [&'static str],
    pub excludes: &'static [&'static str],
}

pub const ROLE_ALIASES: &[RoleAliases] = &[
    RoleAliases {
        role: Role::DisplayName,
        aliases: &["anzeigename", "display name"],
        // "Ergänzung Anzeigename" is the description column
        excludes: &["ergaenzung", "erganzung"],
    },
    RoleAliases {
        role: Role::Description,
        aliases: &["ergaenzung", "erganzung", "description"],
        excludes: &[],
    },
    RoleAliases {
        role: Role::Url,
        aliases: &["webadresse", "url"],
        excludes: &[],
    },
    RoleAliases {
        role: Role::Owner,
        aliases: &["projekt", "zustaendigkeit", "zustandigkeit", "owner"],
        excludes: &[],
    },
];

/// Column indices for each role, resolved once per spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub display_name: usize,
    pub description: usize,
    pub url: usize,
    pub owner: usize,
}

impl ColumnMap {
    /// Resolves every role against `headers`. The first matching column wins.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        Self::resolve_with(ROLE_ALIASES, headers)
    }

    pub fn resolve_with<S: AsRef<str>>(table: &[RoleAliases], headers: &[S]) -> Result<Self> {
        let folded: Vec<String> = headers.iter().map(|h| fold_header(h.as_ref())).collect();
        let find = |role: Role| -> Result<usize> {
            let entry = table.iter().find(|s| s.role == role).ok_or_else(|| {
                DirectoryError::Configuration(format!("no header aliases defined for {role}"))
            })?;
            folded
                .iter()
                .position(|header| {
                    entry.aliases.iter().any(|alias| header.contains(alias))
                        && !entry.excludes.iter().any(|ex| header.contains(ex))
                })
                .ok_or_else(|| {
                    DirectoryError::Configuration(format!(
                        "no spreadsheet column found for {role}; headers were {:?}",
                        headers.iter().map(|h| h.as_ref()).collect::<Vec<_>>()
                    ))
                })
        };

        Ok(Self {
            display_name: find(Role::DisplayName)?,
            description: find(Role::Description)?,
            url: find(Role::Url)?,
            owner: find(Role::Owner)?,
        })
    }
}

/// Lowercases a header and folds diacritics so spelling variants compare
/// equal: umlauts become `ae`/`oe`/`ue`, `ß` becomes `ss`, other common
/// accents are dropped and runs of whitespace collapse to one space.
pub fn fold_header(header: &str) -> String {
    let mut out = String::with_capacity(header.len());
    for c in header.trim().to_lowercase().chars() {
        match c {
            'ä' => out.push_str("ae"),
            'ö' => out.push_str("oe"),
            'ü' => out.push_str("ue"),
            'ß' => out.push_str("ss"),
            'à' | 'á' | 'â' | 'ã' | 'å' => out.push('a'),
            'è' | 'é' | 'ê' | 'ë' => out.push('e'),
            'ì' | 'í' | 'î' | 'ï' => out.push('i'),
            'ò' | 'ó' | 'ô' | 'õ' => out.push('o'),
            'ù' | 'ú' | 'û' => out.push('u'),
            'ç' => out.push('c'),
            'ñ' => out.push('n'),
            c if c.is_whitespace() => {
                if !out.ends_with(' ') {
                    out.push(' ');
                }
            }
            c => out.push(c),
        }
    }
    out
}
