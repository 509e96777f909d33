use std::process;

use log::{error, warn};
use mimalloc::MiMalloc;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use tweet_normalizer::{TweetNormalizer, load_config};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn print_help() {
    println!("The valid commands are->");
    println!("clean [text]: Strips URLs, emoji, punctuation, stopwords and short tokens");
    println!("lemmatize [text]: Cleans the text and reduces every token to its lemma");
    println!("tags [text]: Shows the tag, category and lemma chosen for every token");
    println!("exit: Quits");
}

fn main() {
    env_logger::init();

    let config_path = "config.json";
    let config = load_config(config_path);

    println!("\nCurrent Configuration:");
    println!(
        "  WordNet Directory:  {}",
        config.wordnet_dir.as_deref().unwrap_or("(built-in lexicon)")
    );
    println!(
        "  Stopwords File:     {}",
        config.stopwords_file.as_deref().unwrap_or("(nltk english)")
    );
    println!("  Extra Stopwords:    {}", config.extra_stopwords.join(", "));

    let normalizer = match TweetNormalizer::from_config(&config) {
        Ok(normalizer) => normalizer,
        Err(e) => {
            error!("failed to load resources: {}", e);
            process::exit(1);
        }
    };

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            error!("failed to start line editor: {}", e);
            process::exit(1);
        }
    };

    println!("\nType 'help' for commands or 'exit' to quit.\n");
    loop {
        let readline = rl.readline("> ");

        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }
                if let Err(e) = rl.add_history_entry(line) {
                    warn!("failed to record history: {}", e);
                }

                let (command, text) = line.split_once(' ').unwrap_or((line, ""));

                match command {
                    "help" => print_help(),
                    "clean" => println!("{}", normalizer.clean(text)),
                    "lemmatize" => println!("{}", normalizer.lemmatize(text)),
                    "tags" => {
                        for token in normalizer.analyze(text) {
                            println!(
                                "{:<20} {:<5} {:<5} {}",
                                token.word, token.tag, token.category, token.lemma
                            );
                        }
                    }
                    "quit" | "exit" => {
                        println!("Goodbye!");
                        break;
                    }
                    _ => {
                        println!("Invalid command. Type help if you want to see the valid commands");
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
}
