mod generate;
mod pattern;

use clap::{App, AppSettings, Arg, SubCommand};
use tile_slider::generation::Difficulty;

fn main() {
    let matches = App::new("Tile Slider")
        .subcommand(
            SubCommand::with_name("generate")
                .about("Generate scrambled, guaranteed-solvable classic boards")
                .arg(
                    Arg::with_name("size")
                        .help("The board width")
                        .short("n")
                        .long("size")
                        .default_value("4")
                        .possible_values(&["3", "4", "5", "6", "7", "8", "9"])
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("difficulty")
                        .help("How thoroughly to scramble")
                        .short("d")
                        .long("difficulty")
                        .default_value("medium")
                        .possible_values(&["easy", "medium", "hard"])
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("seed")
                        .help("Seed for reproducible boards")
                        .long("seed")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("count")
                        .help("How many boards to generate")
                        .short("c")
                        .long("count")
                        .default_value("1")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("uniform")
                        .help("Sample uniformly over solvable arrangements instead of walking")
                        .long("uniform"),
                ),
        )
        .subcommand(
            SubCommand::with_name("pattern")
                .about("Generate a colour puzzle: target pattern plus scrambled start")
                .arg(
                    Arg::with_name("type")
                        .help("The target pattern layout")
                        .short("t")
                        .long("type")
                        .default_value("random")
                        .possible_values(&["rows", "columns", "diagonals", "random"])
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("difficulty")
                        .help("How thoroughly to scramble")
                        .short("d")
                        .long("difficulty")
                        .default_value("medium")
                        .possible_values(&["easy", "medium", "hard"])
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("seed")
                        .help("Seed for reproducible boards")
                        .long("seed")
                        .takes_value(true),
                ),
        )
        .setting(AppSettings::ArgRequiredElseHelp)
        .get_matches();

    match matches.subcommand() {
        ("generate", Some(matches)) => {
            let size = matches.value_of("size").unwrap().parse().unwrap();
            let difficulty = parse_difficulty(matches.value_of("difficulty").unwrap());
            let seed = matches.value_of("seed").map(|seed| seed.parse().unwrap());
            let count = matches.value_of("count").unwrap().parse().unwrap();

            generate::run(size, difficulty, seed, count, matches.is_present("uniform"));
        }
        ("pattern", Some(matches)) => {
            let kind = matches.value_of("type").unwrap().parse().unwrap();
            let difficulty = parse_difficulty(matches.value_of("difficulty").unwrap());
            let seed = matches.value_of("seed").map(|seed| seed.parse().unwrap());

            pattern::run(kind, difficulty, seed);
        }
        _ => {}
    }
}

fn parse_difficulty(name: &str) -> Difficulty {
    match name {
        "easy" => Difficulty::Easy,
        "medium" => Difficulty::Medium,
        "hard" => Difficulty::Hard,
        _ => unreachable!(),
    }
}
