use crate::cmd::Cmd;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use utils::sieve;

#[derive(Default)]
pub struct CarmichaelCmd;

impl Cmd for CarmichaelCmd {
    const NAME: &'static str = "carmichael";

    fn cmd() -> Command {
        Command::new(Self::NAME)
            .about("list the carmichael numbers up to a limit")
            .arg(
                Arg::new("limit")
                    .value_name("LIMIT")
                    .action(ArgAction::Set)
                    .required(true)
                    .value_parser(value_parser!(u64))
                    .help("the inclusive search bound, large bounds take a while"),
            )
    }

    fn run(&self, m: &ArgMatches) {
        let limit = m.get_one::<u64>("limit").copied().unwrap();

        for n in sieve::carmichael_numbers(limit) {
            println!("{}", n);
        }
    }
}
