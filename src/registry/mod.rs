//! Built-in template catalog.
//!
//! Each template is a declarative list of [`FileRule`]s. Adding a template
//! means adding a [`TemplateId`] variant and a table entry, never a branch in
//! the emitter.

mod javascript;
mod python;
pub mod rule;

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScaffoldError};

pub use rule::{Content, FileRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateId {
    React,
    #[default]
    PythonCli,
    Fastapi,
    Nextjs,
    NodeApi,
}

impl TemplateId {
    /// Catalog order.
    pub const ALL: [TemplateId; 5] = [
        TemplateId::React,
        TemplateId::PythonCli,
        TemplateId::Fastapi,
        TemplateId::Nextjs,
        TemplateId::NodeApi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::React => "react",
            TemplateId::PythonCli => "python-cli",
            TemplateId::Fastapi => "fastapi",
            TemplateId::Nextjs => "nextjs",
            TemplateId::NodeApi => "node-api",
        }
    }

    pub fn valid_ids() -> Vec<String> {
        Self::ALL.iter().map(|id| id.as_str().to_string()).collect()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| ScaffoldError::UnknownTemplate {
                id: s.to_string(),
                valid: Self::valid_ids(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ecosystem {
    Python,
    JavaScript,
}

impl Ecosystem {
    pub fn manifest(&self) -> &'static str {
        match self {
            Ecosystem::Python => "requirements.txt",
            Ecosystem::JavaScript => "package.json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TemplateEntry {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    pub ecosystem: Ecosystem,
    /// Shell commands suggested after generation, run from the project root.
    pub next_steps: &'static [&'static str],
    pub rules: Vec<FileRule>,
}

pub fn entry(id: TemplateId) -> TemplateEntry {
    match id {
        TemplateId::React => javascript::react(),
        TemplateId::PythonCli => python::python_cli(),
        TemplateId::Fastapi => python::fastapi(),
        TemplateId::Nextjs => javascript::nextjs(),
        TemplateId::NodeApi => javascript::node_api(),
    }
}

pub fn rules_for(id: TemplateId) -> Vec<FileRule> {
    entry(id).rules
}

/// Resolve a raw identifier (e.g. from `--template`) to its catalog entry.
pub fn lookup(id: &str) -> Result<TemplateEntry> {
    id.parse().map(entry)
}

pub fn all() -> Vec<TemplateEntry> {
    TemplateId::ALL.into_iter().map(entry).collect()
}
