use declopt::{
    Error, FromOptions, Kind, Opt, OptionEnum, OptionRef, OptionTable, Options, ParseError,
    Parser, Value,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Speed {
    Slow,
    Normal,
    Fast,
}

impl OptionEnum for Speed {
    const VALUES: &'static [&'static str] = &["slow", "normal", "fast"];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "slow" => Some(Speed::Slow),
            "normal" => Some(Speed::Normal),
            "fast" => Some(Speed::Fast),
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Normal => "normal",
            Speed::Fast => "fast",
        }
    }
}

fn parser() -> Parser {
    Parser::builder("test")
        .options(
            OptionTable::new()
                .option(Opt::new("help").short('h').description("Show help"))
                .option(Opt::new("color").short('c').default_val(true))
                .option(Opt::typed::<i32>("test_int").short('i'))
                .option(Opt::typed::<u32>("test_uint").short('u').default_val(7))
                .option(Opt::typed::<f64>("test_float").short('f'))
                .option(Opt::typed::<String>("test_str").short('s').default_val("none"))
                .option(
                    Opt::new("speed")
                        .short('S')
                        .kind(Kind::enumeration::<Speed>())
                        .default_val(Value::enumeration(&Speed::Normal)),
                )
                .option(Opt::typed::<String>("name").short('n').array())
                .option(Opt::typed::<i64>("offsets").short('o').array()),
        )
        .build()
        .unwrap()
}

fn parse(args: &[&str]) -> Result<Options, ParseError> {
    let mut argv = vec!["test"];
    argv.extend_from_slice(args);
    parser().parse_from(argv)
}

#[test]
fn empty_arguments_yield_defaults() {
    let p = parser();
    let opts = p.parse_from(["test"]).unwrap();
    assert_eq!(opts, p.defaults());
    assert!(!opts.get::<bool>("help").unwrap());
    assert!(opts.get::<bool>("color").unwrap());
    assert_eq!(opts.get::<i32>("test_int").unwrap(), 0);
    assert_eq!(opts.get::<u32>("test_uint").unwrap(), 7);
    assert_eq!(opts.get::<f64>("test_float").unwrap(), 0.0);
    assert_eq!(opts.get::<String>("test_str").unwrap(), "none");
    assert_eq!(opts.get_enum::<Speed>("speed").unwrap(), Speed::Normal);
    assert!(opts.get_all::<String>("name").unwrap().is_empty());
}

#[test]
fn boolean_without_value_inverts_default() {
    let opts = parse(&["-h"]).unwrap();
    assert!(opts.get::<bool>("help").unwrap());

    let opts = parse(&["--color"]).unwrap();
    assert!(!opts.get::<bool>("color").unwrap());

    let opts = parse(&["-h", "-c"]).unwrap();
    assert!(opts.get::<bool>("help").unwrap());
    assert!(!opts.get::<bool>("color").unwrap());

    let opts = parse(&["--help", "--test_int=3"]).unwrap();
    assert!(opts.get::<bool>("help").unwrap());
    assert_eq!(opts.get::<i32>("test_int").unwrap(), 3);
}

#[test]
fn boolean_with_explicit_literal() {
    let opts = parse(&["--help=false"]).unwrap();
    assert!(!opts.get::<bool>("help").unwrap());
    assert!(opts.is_present("help"));

    let opts = parse(&["--color=TRUE"]).unwrap();
    assert!(opts.get::<bool>("color").unwrap());

    let opts = parse(&["-h", "false"]).unwrap();
    assert!(!opts.get::<bool>("help").unwrap());

    let opts = parse(&["-h=true", "-cfalse"]).unwrap();
    assert!(opts.get::<bool>("help").unwrap());
    assert!(!opts.get::<bool>("color").unwrap());

    let opts = parse(&["--color", "false"]).unwrap();
    assert!(!opts.get::<bool>("color").unwrap());
}

#[test]
fn boolean_with_bad_literal() {
    assert_eq!(
        parse(&["--help=yes"]).unwrap_err(),
        ParseError::InvalidBoolValue {
            option: OptionRef::Long("help".into()),
            value: "yes".into(),
        }
    );
    assert!(matches!(
        parse(&["-h", "maybe"]),
        Err(ParseError::InvalidBoolValue { .. })
    ));
}

#[test]
fn short_value_forms_are_equivalent() {
    let cases: [&[&str]; 4] = [&["-i5"], &["-i=5"], &["-i", "5"], &["--test_int=5"]];
    for args in cases {
        let opts = parse(args).unwrap();
        assert_eq!(opts.get::<i32>("test_int").unwrap(), 5, "{:?}", args);
    }
}

#[test]
fn short_value_may_look_like_an_option() {
    let opts = parse(&["-i", "-5"]).unwrap();
    assert_eq!(opts.get::<i32>("test_int").unwrap(), -5);
    let opts = parse(&["-s", "--weird"]).unwrap();
    assert_eq!(opts.get::<String>("test_str").unwrap(), "--weird");
}

#[test]
fn long_option_needs_separator() {
    assert_eq!(
        parse(&["--test_int", "5"]).unwrap_err(),
        ParseError::ExpectedSeparator("test_int".into())
    );
    assert_eq!(
        parse(&["--test_str", "-h"]).unwrap_err(),
        ParseError::ExpectedSeparator("test_str".into())
    );
}

#[test]
fn long_option_without_value_at_end() {
    assert_eq!(
        parse(&["--test_int"]).unwrap_err(),
        ParseError::MissingValue(OptionRef::Long("test_int".into()))
    );
    assert_eq!(
        parse(&["-h", "--test_str"]).unwrap_err(),
        ParseError::MissingValue(OptionRef::Long("test_str".into()))
    );
}

#[test]
fn short_option_without_value() {
    assert_eq!(
        parse(&["-i"]).unwrap_err(),
        ParseError::MissingValue(OptionRef::Short('i'))
    );
}

#[test]
fn empty_value_after_separator() {
    let opts = parse(&["--test_str="]).unwrap();
    assert_eq!(opts.get::<String>("test_str").unwrap(), "");
    assert!(matches!(
        parse(&["--test_int="]),
        Err(ParseError::InvalidIntValue { .. })
    ));
}

#[test]
fn value_may_contain_separator() {
    let opts = parse(&["--test_str=a=b", "-s=c=d"]).unwrap();
    assert_eq!(opts.get::<String>("test_str").unwrap(), "c=d");
    let opts = parse(&["--test_str=a=b"]).unwrap();
    assert_eq!(opts.get::<String>("test_str").unwrap(), "a=b");
}

#[test]
fn unknown_options() {
    assert_eq!(
        parse(&["--bogus=1"]).unwrap_err(),
        ParseError::InvalidOption("--bogus=1".into())
    );
    assert_eq!(parse(&["-z"]).unwrap_err(), ParseError::InvalidShortOption('z'));
    assert_eq!(
        parse(&["positional"]).unwrap_err(),
        ParseError::InvalidOption("positional".into())
    );
    assert_eq!(parse(&["-"]).unwrap_err(), ParseError::InvalidOption("-".into()));
    assert_eq!(parse(&["--"]).unwrap_err(), ParseError::InvalidOption("--".into()));
    assert_eq!(parse(&[""]).unwrap_err(), ParseError::InvalidOption("".into()));
}

#[test]
fn grouped_short_flags_are_not_supported() {
    assert!(matches!(
        parse(&["-hc"]),
        Err(ParseError::InvalidBoolValue { .. })
    ));
}

#[test]
fn invalid_literals() {
    assert!(matches!(
        parse(&["--test_float=abc"]),
        Err(ParseError::InvalidFloatValue { .. })
    ));
    assert!(matches!(
        parse(&["--test_uint=-1"]),
        Err(ParseError::InvalidIntValue { .. })
    ));
    assert!(matches!(
        parse(&["-i", "99999999999"]),
        Err(ParseError::InvalidIntValue { .. })
    ));
    assert!(matches!(
        parse(&["--speed=warp"]),
        Err(ParseError::InvalidEnumValue { .. })
    ));
}

#[test]
fn last_scalar_occurrence_wins() {
    let opts = parse(&["-i1", "--test_int=2", "-i", "3"]).unwrap();
    assert_eq!(opts.get::<i32>("test_int").unwrap(), 3);
}

#[test]
fn arrays_accumulate_in_order() {
    let opts = parse(&["-n", "a", "-n", "b", "--name=c"]).unwrap();
    assert_eq!(opts.get_all::<String>("name").unwrap(), vec!["a", "b", "c"]);

    let opts = parse(&["-o", "-1", "-o2", "--offsets=3"]).unwrap();
    assert_eq!(opts.get_all::<i64>("offsets").unwrap(), vec![-1, 2, 3]);
}

#[test]
fn round_trip_through_display() {
    let opts = parse(&[
        "--test_int=-42",
        "--test_uint=4000000000",
        "--test_float=6.02e23",
        "--help=true",
        "--speed=fast",
        "--test_str=hello world",
    ])
    .unwrap();

    for name in ["test_int", "test_uint", "test_float", "help", "speed", "test_str"] {
        let original = opts.value(name).unwrap().clone();
        let arg = format!("--{}={}", name, original);
        let again = parse(&[arg.as_str()]).unwrap();
        assert_eq!(again.value(name), Some(&original), "{}", name);
    }
}

#[test]
fn first_error_aborts_the_parse() {
    let err = parse(&["-n", "kept?", "--test_int=x", "--bogus=1"]).unwrap_err();
    assert!(matches!(err, ParseError::InvalidIntValue { .. }));
}

#[derive(Debug)]
struct Settings {
    verbose: bool,
    speed: Speed,
    names: Vec<String>,
}

impl FromOptions for Settings {
    fn from_options(opts: &Options) -> declopt::Result<Self> {
        Ok(Settings {
            verbose: opts.get("help")?,
            speed: opts.get_enum("speed")?,
            names: opts.get_all("name")?,
        })
    }
}

#[test]
fn parse_into_application_struct() {
    let s: Settings = parser()
        .parse_into_from(["test", "-h", "-S", "slow", "-nx"])
        .unwrap();
    assert!(s.verbose);
    assert_eq!(s.speed, Speed::Slow);
    assert_eq!(s.names, vec!["x"]);

    let err = parser()
        .parse_into_from::<Settings, _, _>(["test", "--nope=1"])
        .unwrap_err();
    assert!(matches!(err, Error::Parse(ParseError::InvalidOption(_))));
}
