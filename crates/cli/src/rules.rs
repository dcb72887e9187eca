// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled rewrite rules.

use std::path::Path;

use crate::config::RuleConfig;
use crate::error::{Error, Result};
use crate::pattern::{MatchingOptions, Pattern, PatternError, Replacer, Template};

/// A named replacer with its match-time options.
#[derive(Debug)]
pub struct Rule {
    pub name: String,
    pub replacer: Replacer,
    pub options: MatchingOptions,
}

/// Rules applied in order, each to the output of the previous one.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

/// Result of running a rule set over one subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    /// Substitutions per rule name, in rule order.
    pub counts: Vec<(String, usize)>,
}

impl Rewrite {
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

impl Rule {
    /// Compile a configured rule. Patterns here are data, so failures are
    /// reported rather than aborting.
    pub fn compile(config: &RuleConfig) -> std::result::Result<Self, PatternError> {
        let pattern = Pattern::compile(&config.pattern, config.regex_options())?;
        let replacer = Template::parse(&config.replace)?.into_replacer(pattern)?;
        Ok(Self {
            name: config.name.clone(),
            replacer,
            options: config.matching_options(),
        })
    }
}

impl RuleSet {
    /// Compile every configured rule, naming the first one that fails.
    pub fn compile(configs: &[RuleConfig], config_path: Option<&Path>) -> Result<Self> {
        let rules = configs
            .iter()
            .map(|config| {
                Rule::compile(config).map_err(|e| Error::Config {
                    message: format!("rule `{}`: {}", config.name, e),
                    path: config_path.map(Path::to_path_buf),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("compiled {} rewrite rule(s)", rules.len());
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    /// Run every rule in order over `subject`.
    pub fn apply(&self, subject: &str) -> Rewrite {
        let mut text = subject.to_string();
        let mut counts = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let (rewritten, count) = rule.replacer.apply_counted(&text, rule.options);
            if count > 0 {
                text = rewritten;
            }
            tracing::trace!(rule = %rule.name, count, "applied rule");
            counts.push((rule.name.clone(), count));
        }

        Rewrite { text, counts }
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
