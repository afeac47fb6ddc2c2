use crate::report::DisplayOptions;
use crate::{Arguments, InputSource};
use clap::{
    arg, builder::RangedU64ValueParser, crate_authors, crate_description, crate_name,
    crate_version, value_parser, Arg, ArgAction, ArgGroup, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_arguments(command);
        let command = Self::register_threads_argument(command);
        let command = Self::register_max_display_argument(command);
        Self::register_show_tree_argument(command)
    }

    fn register_input_arguments(command: Command) -> Command {
        command
            .arg(Self::create_text_argument())
            .arg(Self::create_file_argument())
            .group(Self::create_input_group())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_max_display_argument(command: Command) -> Command {
        command.arg(Self::create_max_display_argument())
    }

    fn register_show_tree_argument(command: Command) -> Command {
        command.arg(Self::create_show_tree_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_text_argument() -> Arg {
        Arg::new("text")
            .help("Text to compress")
            .value_parser(value_parser!(String))
            .required(false)
    }

    fn create_file_argument() -> Arg {
        arg!(file: -f --file <FILE> "Read input from file, may be given multiple times")
            .value_parser(value_parser!(PathBuf))
            .action(ArgAction::Append)
            .required(false)
    }

    fn create_input_group() -> ArgGroup {
        ArgGroup::new("input")
            .args(["text", "file"])
            .required(true)
            .multiple(false)
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of worker threads used for multiple files")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(RangedU64ValueParser::<usize>::new().range(1..))
    }

    fn create_max_display_argument() -> Arg {
        arg!(max_display: -m --max_display <CHARS> "Truncate displayed text and bits after this many characters")
            .default_value("100")
            .value_parser(value_parser!(usize))
    }

    fn create_show_tree_argument() -> Arg {
        arg!(show_tree: -s --show_tree "Print the Huffman tree").action(ArgAction::SetTrue)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input: Self::extract_input_arguments(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            display_options: DisplayOptions {
                max_display: Self::extract_max_display_argument(matches),
                show_tree: Self::extract_show_tree_argument(matches),
            },
        }
    }

    fn extract_input_arguments(matches: &ArgMatches) -> InputSource {
        match matches.get_many::<PathBuf>("file") {
            Some(files) => InputSource::Files(files.cloned().collect()),
            None => InputSource::Text(
                matches
                    .get_one::<String>("text")
                    .expect("Either text or file must be provided")
                    .clone(),
            ),
        }
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_max_display_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("max_display")
            .expect("Max display length must be provided, but was unset.")
            .to_owned()
    }

    fn extract_show_tree_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("show_tree")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}
