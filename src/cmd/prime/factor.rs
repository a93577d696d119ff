use crate::cmd::Cmd;
use clap::{Arg, ArgAction, ArgMatches, Command};
use num_bigint::BigUint;
use std::str::FromStr;
use utils::BigUintExt;

#[derive(Default)]
pub struct FactorCmd;

impl Cmd for FactorCmd {
    const NAME: &'static str = "factor";

    fn cmd() -> Command {
        Command::new(Self::NAME)
            .about("split an odd number by the fermat difference-of-squares method")
            .arg(
                Arg::new("num")
                    .value_name("NUM")
                    .action(ArgAction::Set)
                    .required(true)
                    .help("the odd decimal number to factorize"),
            )
    }

    fn run(&self, m: &ArgMatches) {
        let n = m.get_one::<String>("num").unwrap();
        let n = BigUint::from_str(n.as_str()).unwrap();

        match BigUintExt(&n).factorize_fermat() {
            Some((p, q)) => println!("{} = {} * {}", n, p, q),
            None => eprintln!("the fermat method factorizes odd numbers only"),
        }
    }
}
