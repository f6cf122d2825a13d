use clap::{Arg, ArgAction, Command};
use tstree::Tree;

fn make_options_parser() -> Command {
    Command::new("tstree")
        .about("Stores words in a ternary search tree and lists those matching the given prefixes")
        .version("v0.1.0")
        .arg(
            Arg::new("words")
                .value_name("WORD")
                .help("The words to store")
                .num_args(1..)
                .required(true),
        )
        .arg(
            Arg::new("prefix")
                .short('p')
                .long("prefix")
                .value_name("PREFIX")
                .help("A prefix to match against the stored words, can be repeated")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("dump")
                .long("dump")
                .help("Print the structure of the tree")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    if std::env::var("TSTREE_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("TSTREE_LOG")
            .write_style("TSTREE_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let matches = make_options_parser().get_matches();
    let tree: Tree<String> = matches
        .get_many::<String>("words")
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    log::debug!("stored {} distinct word(s)", tree.len());

    if matches.get_flag("dump") {
        print!("{tree:?}");
    }
    for prefix in matches.get_many::<String>("prefix").into_iter().flatten() {
        let found: Vec<&str> = tree.match_prefix(prefix).into_iter().map(String::as_str).collect();
        println!("{prefix}: {}", found.join(" "));
    }
}
