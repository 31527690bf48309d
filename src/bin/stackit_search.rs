//! StackIt search demo CLI
//!
//! Exercises the engine the way the front-end does: ranked search on every
//! query, related questions when one is opened, suggestions for
//! autocomplete. Runs against the built-in demo corpus unless a JSON corpus
//! file is supplied.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stackit_core::demo_data::demo_questions;
use stackit_core::similar::{DEFAULT_MAX_SIMILAR, DEFAULT_SIMILARITY_THRESHOLD};
use stackit_core::suggest::DEFAULT_MAX_SUGGESTIONS;
use stackit_core::{
    find_similar_questions, parse_corpus, search_questions, search_suggestions, Question,
    SearchOptions, SearchResults,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON corpus file (defaults to the built-in demo corpus)
    #[arg(short, long, global = true)]
    corpus: Option<PathBuf>,

    /// Emit results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank questions against a query
    Search {
        query: String,
        /// Drop questions that already have answers
        #[arg(long)]
        hide_answered: bool,
        /// Skip the tag-text score component
        #[arg(long)]
        no_tags: bool,
        /// Minimum score for a hit to be kept
        #[arg(long, default_value_t = 0.1)]
        min_score: f64,
        #[arg(long, default_value_t = 20)]
        max_results: usize,
    },
    /// Find questions related to one in the corpus
    Similar {
        /// Id of the question to start from
        id: i64,
        /// Minimum blended similarity
        #[arg(long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
        threshold: f64,
        #[arg(long, default_value_t = DEFAULT_MAX_SIMILAR)]
        max_results: usize,
    },
    /// Autocomplete suggestions for a partial query
    Suggest {
        partial: String,
        #[arg(long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
        max_suggestions: usize,
    },
}

fn load_corpus(path: Option<&PathBuf>) -> Result<Vec<Question>> {
    match path {
        Some(p) => {
            let raw = fs::read_to_string(p)
                .with_context(|| format!("reading corpus file {}", p.display()))?;
            parse_corpus(&raw).context("parsing corpus JSON")
        }
        None => Ok(demo_questions()),
    }
}

fn print_question(question: &Question, score: Option<f64>) {
    let prefix = match score {
        Some(s) => format!("[{:>3.0}%]", s * 100.0),
        None => "      ".to_string(),
    };
    println!(
        "{} #{:<3} {}  ({} votes, {} answers, {})",
        prefix, question.id, question.title, question.votes, question.answers, question.time_ago
    );
}

fn main() -> Result<()> {
    let args = Args::parse();
    let corpus = load_corpus(args.corpus.as_ref())?;

    match args.command {
        Command::Search {
            query,
            hide_answered,
            no_tags,
            min_score,
            max_results,
        } => {
            let options = SearchOptions {
                include_answered: !hide_answered,
                include_tags: !no_tags,
                min_score,
                max_results,
            };
            let results = search_questions(&query, &corpus, &options);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }
            match results {
                SearchResults::Browse(questions) => {
                    for q in &questions {
                        print_question(q, None);
                    }
                }
                SearchResults::Ranked(hits) => {
                    if hits.is_empty() {
                        println!("no matches");
                    }
                    for hit in &hits {
                        print_question(&hit.question, Some(hit.search_score));
                    }
                }
            }
        }
        Command::Similar {
            id,
            threshold,
            max_results,
        } => {
            let target = corpus
                .iter()
                .find(|q| q.id == id)
                .with_context(|| format!("no question with id {id} in corpus"))?
                .clone();
            let similar = find_similar_questions(&target, &corpus, threshold, max_results);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&similar)?);
                return Ok(());
            }
            println!("related to: {}", target.title);
            if similar.is_empty() {
                println!("no related questions above threshold {threshold}");
            }
            for s in &similar {
                print_question(&s.question, Some(s.similarity));
            }
        }
        Command::Suggest {
            partial,
            max_suggestions,
        } => {
            let suggestions = search_suggestions(&partial, &corpus, max_suggestions);
            if args.json {
                println!("{}", serde_json::to_string(&suggestions)?);
                return Ok(());
            }
            for s in &suggestions {
                println!("{s}");
            }
        }
    }

    Ok(())
}
