use argparse::{ArgumentParser, Store, StoreTrue};

/// Parsed command-line options (`-s/--start`, `--db`, `--config`, `--bind`).
pub struct Options {
    pub start: bool,
    pub db_path: String,
    pub config_path: Option<String>,
    pub bind: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            start: false,
            db_path: "dictionary.sqlite".to_string(),
            config_path: None,
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

pub fn parse() -> Options {
    let mut options = Options::default();
    let mut config_path = String::new();

    {
        let mut parser = ArgumentParser::new();
        parser.set_description("Japanese/Chinese <-> English dictionary search engine");
        parser
            .refer(&mut options.start)
            .add_option(&["-s", "--start"], StoreTrue, "Start the webserver");
        parser
            .refer(&mut options.db_path)
            .add_option(&["--db"], Store, "Path to the dictionary SQLite file");
        parser
            .refer(&mut config_path)
            .add_option(&["--config"], Store, "Path to an overriding configuration bundle");
        parser
            .refer(&mut options.bind)
            .add_option(&["--bind"], Store, "Address to bind the webserver to");
        parser.parse_args_or_exit();
    }

    if !config_path.is_empty() {
        options.config_path = Some(config_path);
    }

    options
}
