use canvasdemo::*;

fn cli() -> clap::Command {
    clap::Command::new("canvasdemo")
        .about("moving ball animation and arrow drawing on a cairo surface")
        .subcommand_required(true)
        .arg(
            clap::Arg::new("CONFIG")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("config file to use")
                .global(true),
        )
        .subcommand(
            clap::Command::new("animate")
                .about("run the animation loop")
                .arg(
                    clap::Arg::new("ticks")
                        .long("ticks")
                        .value_name("N")
                        .value_parser(clap::value_parser!(u64))
                        .help("stop after N ticks"),
                )
                .arg(
                    clap::Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("DIR")
                        .help("write frame snapshots into DIR"),
                )
                .arg(
                    clap::Arg::new("no-realtime")
                        .long("no-realtime")
                        .action(clap::ArgAction::SetTrue)
                        .help("don't wait between ticks"),
                ),
        )
        .subcommand(
            clap::Command::new("arrow")
                .about("draw a single arrow into a PNG")
                .arg(
                    clap::Arg::new("x")
                        .long("x")
                        .value_parser(clap::value_parser!(f64))
                        .allow_negative_numbers(true)
                        .default_value("0"),
                )
                .arg(
                    clap::Arg::new("y")
                        .long("y")
                        .value_parser(clap::value_parser!(f64))
                        .allow_negative_numbers(true)
                        .default_value("0"),
                )
                .arg(
                    clap::Arg::new("length")
                        .long("length")
                        .value_parser(clap::value_parser!(f64))
                        .allow_negative_numbers(true)
                        .required(true),
                )
                .arg(
                    clap::Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_name("FILE")
                        .default_value("arrow.png"),
                ),
        )
        .subcommand(
            clap::Command::new("trace")
                .about("print the drawing commands of the first ticks")
                .arg(
                    clap::Arg::new("ticks")
                        .long("ticks")
                        .value_name("N")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("1"),
                ),
        )
}

fn run(matches: &clap::ArgMatches) -> Result<(), Error> {
    let mut cfg = match matches.get_one::<String>("CONFIG") {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };
    logger::init(cfg.log.level);
    log::debug!("config: {:#?}", cfg);

    match matches.subcommand() {
        Some(("animate", sub)) => {
            if let Some(ticks) = sub.get_one::<u64>("ticks") {
                cfg.output.max_ticks = Some(*ticks);
            }
            if let Some(dir) = sub.get_one::<String>("output") {
                cfg.output.directory = Some(dir.into());
            }
            if sub.get_flag("no-realtime") {
                cfg.output.realtime = false;
            }
            cfg.validate()?;

            let summary = app::animate(&cfg)?;
            log::info!(
                "{} ticks, {} frames written, x={}",
                summary.ticks,
                summary.frames_written,
                summary.position_x
            );
        }
        Some(("arrow", sub)) => {
            let x = sub.get_one::<f64>("x").copied().unwrap_or_default();
            let y = sub.get_one::<f64>("y").copied().unwrap_or_default();
            let length = sub.get_one::<f64>("length").copied().unwrap_or_default();
            let output = sub
                .get_one::<String>("output")
                .map(String::as_str)
                .unwrap_or("arrow.png");

            app::arrow(&cfg, x, y, length, std::path::Path::new(output))?;
        }
        Some(("trace", sub)) => {
            let ticks = sub.get_one::<u64>("ticks").copied().unwrap_or(1);
            for cmd in app::trace(&cfg, ticks)? {
                println!("{}", cmd);
            }
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
