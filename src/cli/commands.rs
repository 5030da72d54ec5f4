//! Command implementations for the Synonymous CLI.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::analysis::normalize;
use crate::api::handle_request_line;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::synonym::RelationStore;

/// Execute a CLI command against stdin and stdout.
pub fn execute_command(args: SynonymousArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_command(&args, &mut stdin.lock(), &mut stdout.lock())
}

/// Execute a CLI command with explicit input and output streams.
///
/// Builds a fresh store from the store options, runs the command, and drops
/// the store when the command returns.
pub fn run_command(
    args: &SynonymousArgs,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    let config = args.store.to_config()?;
    debug!("Store configuration: {config:?}");
    let store = RelationStore::new(&config)?;

    match &args.command {
        Command::Search(search_args) => search_word(&store, search_args, args, out),
        Command::Add(add_args) => add_pair(&store, add_args, args, out),
        Command::Words => list_words(&store, args, out),
        Command::Groups => list_groups(&store, args, out),
        Command::Stats => show_stats(&store, args, out),
        Command::Serve => serve(&store, input, out),
    }
}

/// Search the synonyms of a word.
fn search_word(
    store: &RelationStore,
    search_args: &SearchArgs,
    cli_args: &SynonymousArgs,
    out: &mut dyn Write,
) -> Result<()> {
    for (word, synonym) in &search_args.pairs {
        store.add_pair(word, synonym)?;
    }

    let result = store.search(&search_args.word);
    output_result(out, "Search completed", &result, cli_args)
}

/// Add a pair and show the group it ended up in.
fn add_pair(
    store: &RelationStore,
    add_args: &AddArgs,
    cli_args: &SynonymousArgs,
    out: &mut dyn Write,
) -> Result<()> {
    store.add_pair(&add_args.word, &add_args.synonym)?;

    let result = store.search(&add_args.word);
    let mut group = result.synonyms;
    group.push(result.word.clone());
    group.sort();

    output_result(
        out,
        "Pair added successfully",
        &PairAdditionResult {
            word: result.word,
            synonym: normalize(&add_args.synonym),
            group,
        },
        cli_args,
    )
}

/// List every known word.
fn list_words(store: &RelationStore, cli_args: &SynonymousArgs, out: &mut dyn Write) -> Result<()> {
    output_result(
        out,
        "Known words",
        &WordList {
            words: store.words(),
        },
        cli_args,
    )
}

/// List every synonym group.
fn list_groups(store: &RelationStore, cli_args: &SynonymousArgs, out: &mut dyn Write) -> Result<()> {
    output_result(
        out,
        "Synonym groups",
        &GroupList {
            groups: store.groups(),
        },
        cli_args,
    )
}

/// Show store statistics.
fn show_stats(store: &RelationStore, cli_args: &SynonymousArgs, out: &mut dyn Write) -> Result<()> {
    output_result(out, "Store statistics", &store.stats(), cli_args)
}

/// Answer one JSON request per input line until EOF.
///
/// Blank lines are skipped. Every other line gets exactly one JSON response line.
fn serve(store: &RelationStore, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<()> {
    info!("Serving requests from stdin ({} backend)", store.backend());

    let mut handled = 0usize;
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let request = line.trim();
        if request.is_empty() {
            continue;
        }

        let response = handle_request_line(store, request);
        output_json(out, &response, false)?;
        out.flush()?;
        handled += 1;
    }

    info!("Handled {handled} requests");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn run(argv: &[&str], input: &str) -> Result<String> {
        let args = SynonymousArgs::try_parse_from(argv).unwrap();
        let mut input = input.as_bytes();
        let mut out = Vec::new();
        run_command(&args, &mut input, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_search_command() {
        let text = run(&["synonymous", "-f", "json", "search", "Happy"], "").unwrap();
        assert_eq!(text, "{\"word\":\"happy\",\"synonyms\":[\"glad\",\"joyful\"]}\n");
    }

    #[test]
    fn test_search_command_with_pairs() {
        let text = run(
            &[
                "synonymous",
                "-f",
                "json",
                "search",
                "content",
                "--pair",
                "joyful=content",
            ],
            "",
        )
        .unwrap();
        assert_eq!(
            text,
            "{\"word\":\"content\",\"synonyms\":[\"glad\",\"happy\",\"joyful\"]}\n"
        );
    }

    #[test]
    fn test_search_command_rejects_bad_pair() {
        let err = run(&["synonymous", "search", "x", "--pair", "x=X"], "").unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_add_command() {
        let text = run(&["synonymous", "add", "Big", "huge"], "").unwrap();
        assert_eq!(text, "Added \"big\" ⟷ \"huge\"\nGroup: big, huge, large\n");
    }

    #[test]
    fn test_words_without_seed() {
        let text = run(&["synonymous", "--no-seed", "words"], "").unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_stats_command() {
        let text = run(
            &["synonymous", "-f", "json", "--backend", "disjoint-set", "stats"],
            "",
        )
        .unwrap();
        assert_eq!(
            text,
            "{\"backend\":\"disjoint_set\",\"words\":13,\"groups\":6,\"links\":16}\n"
        );
    }

    #[test]
    fn test_serve_command() {
        let input = concat!(
            "{\"word\": \"joyful\", \"synonym\": \"content\"}\n",
            "\n",
            "{\"word\": \"happy\"}\n",
            "{\"word\": \"x\", \"synonym\": \"X\"}\n",
        );
        let text = run(&["synonymous", "serve"], input).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["success"], true);
        assert_eq!(
            lines[1]["data"]["synonyms"],
            serde_json::json!(["content", "glad", "joyful"])
        );
        assert_eq!(lines[2]["success"], false);
        assert_eq!(lines[2]["message"], "Word and synonym cannot be the same");
    }
}
