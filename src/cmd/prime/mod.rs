use crate::cmd::Cmd;
use clap::{ArgMatches, Command};

mod gen;
pub use gen::GenCmd;

pub use test::TestCmd;

mod factor;
pub use factor::FactorCmd;

mod carmichael;
pub use carmichael::CarmichaelCmd;

#[derive(Default)]
pub struct PrimeCmd;

impl Cmd for PrimeCmd {
    const NAME: &'static str = "prime";

    fn cmd() -> Command {
        Command::new(Self::NAME)
            .about("prime number diagnostics")
            .subcommand(GenCmd::cmd())
            .subcommand(TestCmd::cmd())
            .subcommand(FactorCmd::cmd())
            .subcommand(CarmichaelCmd::cmd())
            .subcommand_required(true)
    }

    fn run(&self, m: &ArgMatches) {
        match m.subcommand() {
            Some((GenCmd::NAME, m)) => GenCmd.run(m),
            Some((TestCmd::NAME, m)) => TestCmd.run(m),
            Some((FactorCmd::NAME, m)) => FactorCmd.run(m),
            Some((CarmichaelCmd::NAME, m)) => CarmichaelCmd.run(m),
            Some((other, _m)) => panic!("not support the {other} prime operation"),
            None => panic!("need to specify the prime operation"),
        }
    }
}
