use crate::cmd::Cmd;
use cipher::rsa::KeyPair;
use cipher::{DefaultRand, SeedRand};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Default)]
pub struct KeygenCmd;

impl Cmd for KeygenCmd {
    const NAME: &'static str = "keygen";

    fn cmd() -> Command {
        Command::new(Self::NAME)
            .about("textbook rsa key pair generate")
            .arg(
                Arg::new("bits")
                    .value_name("BITS")
                    .action(ArgAction::Set)
                    .required(true)
                    .value_parser(value_parser!(usize))
                    .help("to specify the smaller prime factor bits length"),
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
                    .help("to specify the prng seed for a reproducible key"),
            )
            .arg(
                Arg::new("output")
                    .long("output")
                    .short('o')
                    .action(ArgAction::Set)
                    .required(false)
                    .value_parser(value_parser!(PathBuf))
                    .help("to specify the output file path to save the key pair"),
            )
    }

    fn run(&self, m: &ArgMatches) {
        let (bits, rounds) = (
            m.get_one::<usize>("bits").copied().unwrap(),
            m.get_one::<usize>("test").copied().unwrap(),
        );

        let mut out: Box<dyn Write> = match m.get_one::<PathBuf>("output") {
            Some(p) => {
                let f = OpenOptions::new()
                    .create_new(true)
                    .write(true)
                    .open(p)
                    .unwrap();
                Box::new(f)
            }
            None => Box::new(std::io::stdout().lock()),
        };

        let start = Instant::now();
        let key = match m.get_one::<u64>("seed") {
            Some(&seed) => KeyPair::generate(bits, rounds, &mut SeedRand::new(seed)),
            None => KeyPair::generate(bits, rounds, &mut DefaultRand::default()),
        }
        .unwrap();
        log::info!(
            "generated the {}-bits modulus in {:?}",
            key.public_key().modules().bits(),
            start.elapsed()
        );

        let key = serde_json::to_string_pretty(&key).unwrap();
        out.write_all(key.as_bytes()).unwrap();
    }
}
