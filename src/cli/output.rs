//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SynonymousArgs};
use crate::error::Result;
use crate::synonym::{SearchResult, StoreStats};

/// Result structure for adding a pair.
#[derive(Debug, Serialize, Deserialize)]
pub struct PairAdditionResult {
    pub word: String,
    pub synonym: String,
    /// The merged group containing both words, sorted.
    pub group: Vec<String>,
}

/// Result structure for listing words.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordList {
    pub words: Vec<String>,
}

/// Result structure for listing groups.
#[derive(Debug, Serialize, Deserialize)]
pub struct GroupList {
    pub groups: Vec<Vec<String>>,
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;
}

impl HumanOutput for SearchResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        if self.synonyms.is_empty() {
            writeln!(out, "No synonyms found for \"{}\"", self.word)?;
        } else {
            writeln!(out, "Synonyms for \"{}\":", self.word)?;
            for synonym in &self.synonyms {
                writeln!(out, "  {synonym}")?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for PairAdditionResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Added \"{}\" ⟷ \"{}\"", self.word, self.synonym)?;
        writeln!(out, "Group: {}", self.group.join(", "))?;
        Ok(())
    }
}

impl HumanOutput for WordList {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for word in &self.words {
            writeln!(out, "{word}")?;
        }
        Ok(())
    }
}

impl HumanOutput for GroupList {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for (i, group) in self.groups.iter().enumerate() {
            writeln!(out, "{:>3}. {}", i + 1, group.join(", "))?;
        }
        Ok(())
    }
}

impl HumanOutput for StoreStats {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Backend: {}", self.backend)?;
        writeln!(out, "Words:   {}", self.words)?;
        writeln!(out, "Groups:  {}", self.groups)?;
        writeln!(out, "Links:   {}", self.links)?;
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(
    out: &mut dyn Write,
    message: &str,
    result: &T,
    args: &SynonymousArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(out, message, result, args),
        OutputFormat::Json => output_json(out, result, args.pretty),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(
    out: &mut dyn Write,
    message: &str,
    result: &T,
    args: &SynonymousArgs,
) -> Result<()> {
    if args.verbosity() > 1 {
        writeln!(out, "{message}")?;
        writeln!(out)?;
    }
    result.write_human(out)
}

/// Output in JSON format.
pub fn output_json<T: Serialize>(out: &mut dyn Write, result: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}
