use crate::cmd::Cmd;
use cipher::{DefaultRand, SeedRand};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use num_bigint::BigUint;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use utils::BigUintExt;

#[derive(Default)]
pub struct GenCmd;

impl Cmd for GenCmd {
    const NAME: &'static str = "gen";

    fn cmd() -> Command {
        Command::new(Self::NAME)
            .about("generate a probable prime")
            .arg(
                Arg::new("bits")
                    .value_name("BITS")
                    .action(ArgAction::Set)
                    .required(true)
                    .value_parser(value_parser!(usize))
                    .help("to specify the prime bits length"),
            )
            .arg(
                Arg::new("test")
                    .long("test")
                    .short('t')
                    .action(ArgAction::Set)
                    .default_value("999")
                    .required(false)
                    .value_parser(value_parser!(usize))
                    .help("to specify the probable prime test rounds"),
            )
            .arg(
                Arg::new("seed")
                    .long("seed")
                    .short('s')
                    .action(ArgAction::Set)
                    .required(false)
                    .value_parser(value_parser!(u64))
                    .help("to specify the prng seed for a reproducible prime"),
            )
            .arg(
                Arg::new("prefix")
                    .long("prefix")
                    .required(false)
                    .action(ArgAction::SetTrue)
                    .help("display in hex with the `0x` prefix"),
            )
            .arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .action(ArgAction::Set)
                    .required(false)
                    .value_parser(value_parser!(PathBuf))
                    .help("to specify the output file path to save the prime"),
            )
    }

    fn run(&self, m: &ArgMatches) {
        let (bits, rounds) = (
            m.get_one::<usize>("bits").copied().unwrap(),
            m.get_one::<usize>("test").copied().unwrap(),
        );

        let start = Instant::now();
        let n = match m.get_one::<u64>("seed") {
            Some(&seed) => {
                BigUintExt::<BigUint>::generate_prime(bits, rounds, &mut SeedRand::new(seed))
            }
            None => BigUintExt::<BigUint>::generate_prime(bits, rounds, &mut DefaultRand::default()),
        }
        .unwrap();
        log::info!("generated the {}-bits prime in {:?}", bits, start.elapsed());

        let text = if m.get_flag("prefix") {
            format!("{:#x}", n)
        } else {
            format!("{}", n)
        };
        println!("{}", text);

        if let Some(p) = m.get_one::<PathBuf>("output") {
            let mut f = OpenOptions::new()
                .create_new(true)
                .write(true)
                .open(p)
                .unwrap();
            f.write_all(text.as_bytes()).unwrap();
        }
    }
}
