use declopt::{
    Error, FromOptions, Kind, Opt, OptionEnum, OptionTable, Options, Parser, Value,
};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Quiet,
    Normal,
    Loud,
}

impl OptionEnum for Level {
    const VALUES: &'static [&'static str] = &["quiet", "normal", "loud"];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "quiet" => Some(Level::Quiet),
            "normal" => Some(Level::Normal),
            "loud" => Some(Level::Loud),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Level::Quiet => "quiet",
            Level::Normal => "normal",
            Level::Loud => "loud",
        }
    }
}

#[derive(Debug)]
#[allow(dead_code)]
pub struct Cmdline {
    pub verbose: bool,
    pub count: u32,
    pub ratio: f64,
    pub name: String,
    pub level: Level,
    pub tags: Vec<String>,
    pub offset: i64,
}

impl FromOptions for Cmdline {
    fn from_options(opts: &Options) -> declopt::Result<Self> {
        let count: u32 = opts.get("count")?;
        if count == 0 {
            return Err(Error::Other("--count must be at least 1".to_string()));
        }
        Ok(Cmdline {
            verbose: opts.get("verbose")?,
            count,
            ratio: opts.get("ratio")?,
            name: opts.get("name")?,
            level: opts.get_enum("level")?,
            tags: opts.get_all("tag")?,
            offset: opts.get("offset")?,
        })
    }
}

fn build_options() -> OptionTable {
    OptionTable::new()
        .option(
            Opt::new("verbose")
                .short('v')
                .description("Report how many options were given"),
        )
        .option(
            Opt::typed::<u32>("count")
                .short('n')
                .default_val(1)
                .description("Repetitions")
                .show_default(),
        )
        .option(
            Opt::typed::<f64>("ratio")
                .short('r')
                .description("Scaling factor"),
        )
        .option(
            Opt::typed::<String>("name")
                .short('N')
                .default_val("world")
                .description("Who to greet")
                .show_default(),
        )
        .option(
            Opt::new("level")
                .short('l')
                .kind(Kind::enumeration::<Level>())
                .default_val(Value::enumeration(&Level::Normal))
                .description("Output level")
                .show_default(),
        )
        .option(
            Opt::typed::<String>("tag")
                .short('t')
                .array()
                .description("Tag to attach, can be repeated"),
        )
        .option(Opt::typed::<i64>("offset").description("Signed offset"))
        .option(Opt::new("help").short('h').description("This help"))
}

pub fn build_parser() -> Result<Parser> {
    let parser = Parser::builder("declopt-demo")
        .options(build_options())
        .build()?;
    Ok(parser)
}

/// What the command line asks for.
#[derive(Debug)]
pub enum Invocation {
    Help,
    Run(Options, Cmdline),
}

/// Parse `args` (program path first) into the raw table and the typed view.
///
/// `--help` wins over any other option, so it is checked before the
/// application's own validation runs.
pub fn parse_args<I, S>(parser: &Parser, args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let opts = parser.parse_from(args).map_err(Error::from)?;
    if opts.get::<bool>("help")? {
        return Ok(Invocation::Help);
    }
    let cmdline = Cmdline::from_options(&opts)?;
    Ok(Invocation::Run(opts, cmdline))
}
